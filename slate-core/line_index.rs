//! Translation between flat char offsets and `(line, column)` pairs.
//!
//! Lines are delimited by `\n` only. An empty text has exactly one line, and
//! a trailing `\n` opens a final empty line:
//!
//! ```text
//! "ab\ncd"  -> lines ["ab", "cd"]
//! "ab\n"    -> lines ["ab", ""]
//! ""        -> lines [""]
//! ```
//!
//! Positions are never cached: text boxes mutate on every keystroke, so a
//! [`LineColumn`] is always recomputed from an offset and the current text.

use ropey::RopeSlice;

/// A derived, zero-based line/column address. Columns count chars.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineColumn {
  pub line:   usize,
  pub column: usize,
}

impl LineColumn {
  pub const fn new(line: usize, column: usize) -> Self {
    Self { line, column }
  }
}

impl From<(usize, usize)> for LineColumn {
  fn from(value: (usize, usize)) -> Self {
    LineColumn::new(value.0, value.1)
  }
}

/// Number of lines in `text`. Always at least one.
#[inline]
pub fn line_count(text: RopeSlice) -> usize {
  text.len_lines()
}

/// Offset of the first char of `line`. Lines past the end map to the end of
/// the text.
pub fn line_start(text: RopeSlice, line: usize) -> usize {
  if line >= text.len_lines() {
    text.len_chars()
  } else {
    text.line_to_char(line)
  }
}

/// Length of `line` in chars, excluding its `\n`.
pub fn line_len(text: RopeSlice, line: usize) -> usize {
  if line >= text.len_lines() {
    return 0;
  }

  let slice = text.line(line);
  let len = slice.len_chars();
  if len > 0 && slice.char(len - 1) == '\n' {
    len - 1
  } else {
    len
  }
}

/// Offset just before the `\n` that terminates `line`, or the end of the text
/// for the last line.
#[inline]
pub fn line_end(text: RopeSlice, line: usize) -> usize {
  line_start(text, line) + line_len(text, line)
}

/// Converts a char offset into a [`LineColumn`].
///
/// The line is the number of `\n` before `offset`, the column is the length
/// of the partial line that precedes it. Offsets past the end are treated as
/// the end of the text.
pub fn line_and_column(text: RopeSlice, offset: usize) -> LineColumn {
  let offset = offset.min(text.len_chars());
  let line = text.char_to_line(offset);
  LineColumn::new(line, offset - text.line_to_char(line))
}

/// Inverse of [`line_and_column`].
///
/// Pure arithmetic: `column` is not validated against the length of the line,
/// callers that need a valid offset clamp it with [`line_len`] first.
#[inline]
pub fn offset_from_line_column(text: RopeSlice, line: usize, column: usize) -> usize {
  line_start(text, line) + column
}
