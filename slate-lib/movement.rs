//! Cursor movement within a single text box.
//!
//! Every movement is a pure transition `(text, offset) -> offset'` with no
//! modes and no remembered state. In particular the column is not sticky
//! across repeated vertical moves: each [`move_up`] / [`move_down`]
//! recomputes the column from the current offset.
//!
//! Input offsets past the end of the text are treated as the end, so every
//! function returns an offset in `[0, len_chars]`.
//!
//! # Usage
//!
//! ```
//! use ropey::Rope;
//! use slate_lib::movement::{
//!   Movement,
//!   WordBoundary,
//! };
//!
//! let text = Rope::from("hello world");
//! let offset = Movement::WordRight.apply(text.slice(..), 0, WordBoundary::Whitespace);
//! assert_eq!(offset, 6);
//! ```

use ropey::RopeSlice;
use serde::{
  Deserialize,
  Serialize,
};
use slate_core::{
  chars::{
    CharCategory,
    categorize_char,
  },
  line_index::{
    line_and_column,
    line_count,
    line_end,
    line_len,
    line_start,
    offset_from_line_column,
  },
};

/// The direction of cursor movement or selection extension.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
  /// Toward the end of the text (increasing offsets).
  Forward,
  /// Toward the start of the text (decreasing offsets).
  Backward,
}

/// How word-wise movement and word selection split text into words.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordBoundary {
  /// A word is any maximal run of non-whitespace; punctuation is part of the
  /// word.
  #[default]
  Whitespace,
  /// Runs of word characters and runs of punctuation are separate words,
  /// e.g. `foo.bar` is three words.
  Punctuation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WordClass {
  Space,
  Word,
  Punctuation,
}

impl WordBoundary {
  pub(crate) fn classify(self, ch: char) -> WordClass {
    match (categorize_char(ch), self) {
      (CharCategory::Whitespace | CharCategory::Eol, _) => WordClass::Space,
      (CharCategory::Punctuation, WordBoundary::Punctuation) => WordClass::Punctuation,
      _ => WordClass::Word,
    }
  }
}

/// A single cursor navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
  Left,
  Right,
  Up,
  Down,
  LineStart,
  LineEnd,
  DocumentStart,
  DocumentEnd,
  WordLeft,
  WordRight,
}

impl Movement {
  pub fn apply(self, text: RopeSlice, offset: usize, boundary: WordBoundary) -> usize {
    match self {
      Movement::Left => move_left(text, offset),
      Movement::Right => move_right(text, offset),
      Movement::Up => move_up(text, offset),
      Movement::Down => move_down(text, offset),
      Movement::LineStart => move_to_line_start(text, offset),
      Movement::LineEnd => move_to_line_end(text, offset),
      Movement::DocumentStart => move_to_start(text, offset),
      Movement::DocumentEnd => move_to_end(text, offset),
      Movement::WordLeft => move_word_left(text, offset, boundary),
      Movement::WordRight => move_word_right(text, offset, boundary),
    }
  }
}

pub fn move_left(text: RopeSlice, offset: usize) -> usize {
  offset.min(text.len_chars()).saturating_sub(1)
}

pub fn move_right(text: RopeSlice, offset: usize) -> usize {
  offset.saturating_add(1).min(text.len_chars())
}

/// Moves to the same column on the previous line, or to the end of that line
/// if it is shorter. On the first line this goes to offset 0.
pub fn move_up(text: RopeSlice, offset: usize) -> usize {
  let pos = line_and_column(text, offset);
  if pos.line == 0 {
    return 0;
  }

  let line = pos.line - 1;
  offset_from_line_column(text, line, pos.column.min(line_len(text, line)))
}

/// Moves to the same column on the next line, or to the end of that line if
/// it is shorter. On the last line this goes to the end of the text.
pub fn move_down(text: RopeSlice, offset: usize) -> usize {
  let pos = line_and_column(text, offset);
  if pos.line + 1 >= line_count(text) {
    return text.len_chars();
  }

  let line = pos.line + 1;
  offset_from_line_column(text, line, pos.column.min(line_len(text, line)))
}

pub fn move_to_line_start(text: RopeSlice, offset: usize) -> usize {
  line_start(text, line_and_column(text, offset).line)
}

pub fn move_to_line_end(text: RopeSlice, offset: usize) -> usize {
  line_end(text, line_and_column(text, offset).line)
}

pub fn move_to_start(_text: RopeSlice, _offset: usize) -> usize {
  0
}

pub fn move_to_end(text: RopeSlice, _offset: usize) -> usize {
  text.len_chars()
}

/// Moves to the start of the word before the cursor.
///
/// Starting at `offset - 1`, skips whitespace backwards and then the word it
/// lands in. No-op at offset 0.
pub fn move_word_left(text: RopeSlice, offset: usize, boundary: WordBoundary) -> usize {
  let offset = offset.min(text.len_chars());
  if offset == 0 {
    return 0;
  }

  let mut pos = offset - 1;
  while pos > 0 && boundary.classify(text.char(pos)) == WordClass::Space {
    pos -= 1;
  }

  let class = boundary.classify(text.char(pos));
  if class != WordClass::Space {
    while pos > 0 && boundary.classify(text.char(pos - 1)) == class {
      pos -= 1;
    }
  }

  pos
}

/// Moves past the word under the cursor and the whitespace after it, landing
/// on the start of the next word. No-op at the end of the text.
pub fn move_word_right(text: RopeSlice, offset: usize, boundary: WordBoundary) -> usize {
  let len = text.len_chars();
  if offset >= len {
    return len;
  }

  let mut pos = offset;
  let class = boundary.classify(text.char(pos));
  if class != WordClass::Space {
    while pos < len && boundary.classify(text.char(pos)) == class {
      pos += 1;
    }
  }

  while pos < len && boundary.classify(text.char(pos)) == WordClass::Space {
    pos += 1;
  }

  pos
}
