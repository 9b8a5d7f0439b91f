//! Geometry for selection highlights and the caret.
//!
//! All positions are absolute canvas coordinates: the caller passes the text
//! origin of the box and gets rects it can draw directly.

use std::borrow::Cow;

use ropey::RopeSlice;
use slate_core::line_index::{
  line_and_column,
  line_len,
  line_start,
};
use smallvec::SmallVec;

use crate::{
  measure::{
    TextMeasure,
    TextStyle,
  },
  render::graphics::{
    CaretGeometry,
    Point,
    Rect,
  },
  selection::Selection,
};

/// Rects for a selection. One per covered line, inline for short selections.
pub type SelectionRects = SmallVec<[Rect; 4]>;

/// Caret bar dimensions that do not come from the font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretMetrics {
  pub width:   f32,
  /// Extra height above and below the glyphs.
  pub padding: f32,
}

impl Default for CaretMetrics {
  fn default() -> Self {
    Self {
      width:   1.0,
      padding: 2.0,
    }
  }
}

fn measure_columns(
  text: RopeSlice,
  line: usize,
  from: usize,
  to: usize,
  style: &TextStyle,
  measure: &dyn TextMeasure,
) -> f32 {
  if from >= to {
    return 0.0;
  }
  let start = line_start(text, line);
  let run: Cow<str> = text.slice(start + from..start + to).into();
  measure.measure_width(&run, style)
}

/// Highlight rects covering `selection`, top to bottom.
///
/// The first line runs from the selection start to the end of that line, the
/// last from the start of its line to the selection end, and lines in between
/// are covered entirely. Empty selections produce nothing.
pub fn selection_rects(
  selection: Selection,
  text: RopeSlice,
  origin: Point,
  style: &TextStyle,
  measure: &dyn TextMeasure,
) -> SelectionRects {
  let selection = selection.clamp(text.len_chars());
  let mut rects = SelectionRects::new();
  if selection.is_empty() {
    return rects;
  }

  let line_height = measure.line_height(style);
  let first = line_and_column(text, selection.start());
  let last = line_and_column(text, selection.end());

  for line in first.line..=last.line {
    let from = if line == first.line { first.column } else { 0 };
    let to = if line == last.line {
      last.column
    } else {
      line_len(text, line)
    };

    rects.push(Rect::new(
      origin.x + measure_columns(text, line, 0, from, style, measure),
      origin.y + line as f32 * line_height,
      measure_columns(text, line, from, to, style, measure),
      line_height,
    ));
  }

  rects
}

/// Where to draw the caret for `offset`.
///
/// The bar starts at the measured width of the line before the caret and
/// extends `metrics.padding` above and below the glyphs.
pub fn caret_geometry(
  offset: usize,
  text: RopeSlice,
  origin: Point,
  style: &TextStyle,
  measure: &dyn TextMeasure,
  metrics: CaretMetrics,
) -> CaretGeometry {
  let pos = line_and_column(text, offset);
  let line_height = measure.line_height(style);

  CaretGeometry {
    x:      origin.x + measure_columns(text, pos.line, 0, pos.column, style, measure),
    y:      origin.y + pos.line as f32 * line_height - metrics.padding,
    width:  metrics.width,
    height: style.font_size + metrics.padding * 2.0,
  }
}
