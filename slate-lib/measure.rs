//! Text measurement, supplied by the host.
//!
//! The engine never rasterizes text. Hit testing and highlight geometry ask a
//! [`TextMeasure`] how wide a run of text is and how tall a line is, and the
//! host answers with whatever font stack it draws with. Measurement is
//! stateless from the engine's point of view: the same text and style must
//! always report the same width.

use std::{
  cell::RefCell,
  hash::{
    Hash,
    Hasher,
  },
};

use foldhash::fast::FixedState;
use hashbrown::{
  Equivalent,
  HashMap,
};

/// Font parameters a measurement depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
  pub font_size:          f32,
  pub line_height_factor: f32,
}

impl Default for TextStyle {
  fn default() -> Self {
    Self {
      font_size:          16.0,
      line_height_factor: 1.2,
    }
  }
}

impl TextStyle {
  pub const fn new(font_size: f32, line_height_factor: f32) -> Self {
    Self {
      font_size,
      line_height_factor,
    }
  }

  #[inline]
  pub fn line_height(&self) -> f32 {
    self.font_size * self.line_height_factor
  }
}

pub trait TextMeasure {
  /// Advance width of `text` laid out on a single line.
  fn measure_width(&self, text: &str, style: &TextStyle) -> f32;

  fn line_height(&self, style: &TextStyle) -> f32 {
    style.line_height()
  }
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
  fn measure_width(&self, text: &str, style: &TextStyle) -> f32 {
    (**self).measure_width(text, style)
  }

  fn line_height(&self, style: &TextStyle) -> f32 {
    (**self).line_height(style)
  }
}

impl<T: TextMeasure + ?Sized> TextMeasure for Box<T> {
  fn measure_width(&self, text: &str, style: &TextStyle) -> f32 {
    (**self).measure_width(text, style)
  }

  fn line_height(&self, style: &TextStyle) -> f32 {
    (**self).line_height(style)
  }
}

/// Every char advances by `em_advance × font_size`.
///
/// Good enough for monospace fonts and for hosts that have not wired up a
/// real shaper yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
  pub em_advance: f32,
}

impl Default for MonospaceMeasure {
  fn default() -> Self {
    Self { em_advance: 0.6 }
  }
}

impl MonospaceMeasure {
  pub const fn new(em_advance: f32) -> Self {
    Self { em_advance }
  }
}

impl TextMeasure for MonospaceMeasure {
  fn measure_width(&self, text: &str, style: &TextStyle) -> f32 {
    text.chars().count() as f32 * self.em_advance * style.font_size
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct WidthKey {
  font_size: u32,
  text:      Box<str>,
}

struct WidthLookup<'a> {
  font_size: u32,
  text:      &'a str,
}

// Must hash exactly like `WidthKey`.
impl Hash for WidthLookup<'_> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.font_size.hash(state);
    self.text.hash(state);
  }
}

impl Equivalent<WidthKey> for WidthLookup<'_> {
  fn equivalent(&self, key: &WidthKey) -> bool {
    self.font_size == key.font_size && self.text == &*key.text
  }
}

/// Memoizes widths reported by another [`TextMeasure`].
///
/// Hit testing measures the same line prefixes over and over while a binary
/// search converges, which is expensive against a real shaper. Entries are
/// keyed by text and font size; once `capacity` entries are stored the cache
/// starts over.
pub struct MeasureCache<M> {
  inner:    M,
  capacity: usize,
  widths:   RefCell<HashMap<WidthKey, f32, FixedState>>,
}

impl<M: TextMeasure> MeasureCache<M> {
  pub const DEFAULT_CAPACITY: usize = 4096;

  pub fn new(inner: M) -> Self {
    Self::with_capacity(inner, Self::DEFAULT_CAPACITY)
  }

  pub fn with_capacity(inner: M, capacity: usize) -> Self {
    Self {
      inner,
      capacity: capacity.max(1),
      widths: RefCell::new(HashMap::with_hasher(FixedState::default())),
    }
  }

  pub fn inner(&self) -> &M {
    &self.inner
  }

  pub fn len(&self) -> usize {
    self.widths.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.widths.borrow().is_empty()
  }

  pub fn clear(&self) {
    self.widths.borrow_mut().clear();
  }
}

impl<M: TextMeasure> TextMeasure for MeasureCache<M> {
  fn measure_width(&self, text: &str, style: &TextStyle) -> f32 {
    let font_size = style.font_size.to_bits();
    let lookup = WidthLookup { font_size, text };
    if let Some(width) = self.widths.borrow().get(&lookup) {
      return *width;
    }

    let width = self.inner.measure_width(text, style);
    let mut widths = self.widths.borrow_mut();
    if widths.len() >= self.capacity {
      tracing::trace!(entries = widths.len(), "measure cache full, clearing");
      widths.clear();
    }
    widths.insert(
      WidthKey {
        font_size,
        text: text.into(),
      },
      width,
    );
    width
  }

  fn line_height(&self, style: &TextStyle) -> f32 {
    self.inner.line_height(style)
  }
}

/// Per-char widths for tests, falling back to `default` for unlisted chars.
#[cfg(test)]
pub(crate) struct TableMeasure {
  pub widths:      &'static [(char, f32)],
  pub default:     f32,
  pub line_height: f32,
}

#[cfg(test)]
impl TextMeasure for TableMeasure {
  fn measure_width(&self, text: &str, _style: &TextStyle) -> f32 {
    text
      .chars()
      .map(|ch| {
        self
          .widths
          .iter()
          .find_map(|(c, width)| (*c == ch).then_some(*width))
          .unwrap_or(self.default)
      })
      .sum()
  }

  fn line_height(&self, _style: &TextStyle) -> f32 {
    self.line_height
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  struct Counting {
    calls: Cell<usize>,
  }

  impl TextMeasure for Counting {
    fn measure_width(&self, text: &str, _style: &TextStyle) -> f32 {
      self.calls.set(self.calls.get() + 1);
      text.len() as f32
    }
  }

  #[test]
  fn test_default_style() {
    let style = TextStyle::default();
    assert_eq!(style.font_size, 16.0);
    assert!((style.line_height() - 19.2).abs() < 1e-4);
    assert!((MonospaceMeasure::default().line_height(&style) - 19.2).abs() < 1e-4);
  }

  #[test]
  fn test_monospace_counts_chars() {
    let measure = MonospaceMeasure::new(0.5);
    let style = TextStyle::new(10.0, 1.0);
    assert_eq!(measure.measure_width("", &style), 0.0);
    assert_eq!(measure.measure_width("abc", &style), 15.0);
    // Chars, not bytes.
    assert_eq!(measure.measure_width("äö", &style), 10.0);
  }

  #[test]
  fn test_cache_hits_skip_inner_measure() {
    let cache = MeasureCache::new(Counting { calls: Cell::new(0) });
    let style = TextStyle::default();

    assert_eq!(cache.measure_width("hello", &style), 5.0);
    assert_eq!(cache.measure_width("hello", &style), 5.0);
    assert_eq!(cache.inner().calls.get(), 1);
    assert_eq!(cache.len(), 1);

    // A different size is a different entry.
    cache.measure_width("hello", &TextStyle::new(20.0, 1.2));
    assert_eq!(cache.inner().calls.get(), 2);
    assert_eq!(cache.len(), 2);
  }

  #[test]
  fn test_cache_starts_over_when_full() {
    let cache = MeasureCache::with_capacity(Counting { calls: Cell::new(0) }, 2);
    let style = TextStyle::default();

    cache.measure_width("a", &style);
    cache.measure_width("b", &style);
    assert_eq!(cache.len(), 2);
    cache.measure_width("c", &style);
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
  }

  #[test]
  fn test_table_measure() {
    let measure = TableMeasure {
      widths:      &[('h', 7.0), ('e', 7.0)],
      default:     8.0,
      line_height: 20.0,
    };
    let style = TextStyle::default();
    assert_eq!(measure.measure_width("he", &style), 14.0);
    assert_eq!(measure.measure_width("llo", &style), 24.0);
    assert_eq!(measure.line_height(&style), 20.0);
  }
}
