//! Text boxes and the edit primitives applied to their content.
//!
//! The primitives ([`insert`], [`delete`], [`replace`]) are pure: the input
//! rope is never touched and a new rope is returned for the caller to thread
//! back into the owning [`TextBox`]. Rope clones share structure, so this
//! costs a handful of node copies rather than a copy of the text.
//!
//! Offsets are char indices and must lie in `[0, len_chars]`. Callers clamp
//! before calling in; an out-of-range offset is reported as
//! [`BufferError::OutOfRange`] and indicates a caller bug.
//!
//! # Example
//!
//! ```
//! use ropey::Rope;
//! use slate_lib::buffer;
//!
//! let text = Rope::from("hello");
//! let (text, cursor) = buffer::replace(&text, 1, 5, "ey").unwrap();
//! assert_eq!(text.to_string(), "hey");
//! assert_eq!(cursor, 3);
//! ```

use std::{
  fmt,
  num::NonZeroUsize,
};

use ropey::Rope;
use thiserror::Error;

use crate::render::graphics::{
  Point,
  Rect,
};

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BufferError {
  #[error("offset {offset} out of range for text of length {len}")]
  OutOfRange { offset: usize, len: usize },
  #[error("range start {start} is past its end {end}")]
  InvalidRange { start: usize, end: usize },
}

pub type Result<T> = std::result::Result<T, BufferError>;

fn check_offset(text: &Rope, offset: usize) -> Result<()> {
  let len = text.len_chars();
  if offset > len {
    return Err(BufferError::OutOfRange { offset, len });
  }
  Ok(())
}

fn check_range(text: &Rope, start: usize, end: usize) -> Result<()> {
  if start > end {
    return Err(BufferError::InvalidRange { start, end });
  }
  check_offset(text, end)
}

/// Inserts `s` at `offset`.
pub fn insert(text: &Rope, offset: usize, s: &str) -> Result<Rope> {
  check_offset(text, offset)?;
  let mut next = text.clone();
  next.insert(offset, s);
  Ok(next)
}

/// Deletes the half-open range `start..end`.
pub fn delete(text: &Rope, start: usize, end: usize) -> Result<Rope> {
  check_range(text, start, end)?;
  let mut next = text.clone();
  next.remove(start..end);
  Ok(next)
}

/// Deletes `start..end` and inserts `s` in its place.
///
/// Returns the new text and the offset right after the inserted text, which
/// is where the cursor lands.
pub fn replace(text: &Rope, start: usize, end: usize, s: &str) -> Result<(Rope, usize)> {
  check_range(text, start, end)?;
  let mut next = text.clone();
  next.remove(start..end);
  next.insert(start, s);
  Ok((next, start + s.chars().count()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextBoxId(NonZeroUsize);

impl TextBoxId {
  pub const fn new(id: NonZeroUsize) -> Self {
    Self(id)
  }

  pub const fn get(self) -> NonZeroUsize {
    self.0
  }
}

impl fmt::Display for TextBoxId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<NonZeroUsize> for TextBoxId {
  fn from(value: NonZeroUsize) -> Self {
    Self::new(value)
  }
}

/// A positioned box on the canvas that exclusively owns its text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
  id:         TextBoxId,
  text:       Rope,
  pub bounds: Rect,
}

impl TextBox {
  pub fn new(id: TextBoxId, bounds: Rect) -> Self {
    Self {
      id,
      text: Rope::new(),
      bounds,
    }
  }

  pub fn with_text(mut self, text: impl Into<Rope>) -> Self {
    self.text = text.into();
    self
  }

  #[inline]
  pub fn id(&self) -> TextBoxId {
    self.id
  }

  #[inline]
  pub fn text(&self) -> &Rope {
    &self.text
  }

  #[inline]
  pub fn len_chars(&self) -> usize {
    self.text.len_chars()
  }

  /// Whether `point` lies inside the box. Edges count as inside.
  pub fn contains(&self, point: Point) -> bool {
    self.bounds.contains(point)
  }

  /// Where the first glyph of the text is drawn, `padding` inside the box.
  pub fn text_origin(&self, padding: f32) -> Point {
    Point::new(self.bounds.x + padding, self.bounds.y + padding)
  }
}

/// All text boxes on the canvas, in render order (last is top-most).
#[derive(Debug, Clone)]
pub struct TextBoxes {
  boxes:   Vec<TextBox>,
  next_id: NonZeroUsize,
}

impl Default for TextBoxes {
  fn default() -> Self {
    Self {
      boxes:   Vec::new(),
      next_id: NonZeroUsize::MIN,
    }
  }
}

impl TextBoxes {
  pub fn new() -> Self {
    Self::default()
  }

  fn fresh_id(&mut self) -> TextBoxId {
    let id = TextBoxId::new(self.next_id);
    self.next_id = self.next_id.saturating_add(1);
    id
  }

  /// Creates an empty box on top of all others.
  pub fn create(&mut self, bounds: Rect) -> TextBoxId {
    let id = self.fresh_id();
    self.boxes.push(TextBox::new(id, bounds));
    id
  }

  /// Creates a box with initial content on top of all others.
  pub fn create_with_text(&mut self, bounds: Rect, text: impl Into<Rope>) -> TextBoxId {
    let id = self.fresh_id();
    self.boxes.push(TextBox::new(id, bounds).with_text(text));
    id
  }

  pub fn get(&self, id: TextBoxId) -> Option<&TextBox> {
    self.boxes.iter().find(|text_box| text_box.id == id)
  }

  fn get_mut(&mut self, id: TextBoxId) -> Option<&mut TextBox> {
    self.boxes.iter_mut().find(|text_box| text_box.id == id)
  }

  pub fn contains(&self, id: TextBoxId) -> bool {
    self.get(id).is_some()
  }

  pub fn text(&self, id: TextBoxId) -> Option<&Rope> {
    self.get(id).map(TextBox::text)
  }

  /// Replaces the content of box `id`. Returns `false` if there is no such
  /// box.
  pub fn set_text(&mut self, id: TextBoxId, text: Rope) -> bool {
    match self.get_mut(id) {
      Some(text_box) => {
        text_box.text = text;
        true
      },
      None => false,
    }
  }

  pub fn move_to(&mut self, id: TextBoxId, x: f32, y: f32) -> bool {
    match self.get_mut(id) {
      Some(text_box) => {
        text_box.bounds.x = x;
        text_box.bounds.y = y;
        true
      },
      None => false,
    }
  }

  pub fn resize(&mut self, id: TextBoxId, width: f32, height: f32) -> bool {
    match self.get_mut(id) {
      Some(text_box) => {
        text_box.bounds.width = width;
        text_box.bounds.height = height;
        true
      },
      None => false,
    }
  }

  pub fn remove(&mut self, id: TextBoxId) -> Option<TextBox> {
    let index = self.boxes.iter().position(|text_box| text_box.id == id)?;
    Some(self.boxes.remove(index))
  }

  /// Boxes in render order, bottom-most first.
  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TextBox> {
    self.boxes.iter()
  }

  pub fn len(&self) -> usize {
    self.boxes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.boxes.is_empty()
  }
}
