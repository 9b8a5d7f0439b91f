//! Render-facing geometry.
//!
//! Nothing here draws. The host renderer asks for caret and highlight
//! geometry after every change and paints it with its own toolkit.

pub mod graphics;
pub mod highlight;

pub use graphics::{
  CaretGeometry,
  Point,
  Rect,
};
pub use highlight::{
  CaretMetrics,
  SelectionRects,
  caret_geometry,
  selection_rects,
};
