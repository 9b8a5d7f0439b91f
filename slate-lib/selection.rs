//! Selection ranges within a single text box.
//!
//! # Range Model
//!
//! A [`Selection`] has two offsets: `anchor` and `head`. The `head` is the
//! end that moves when a selection is extended (and where the caret sits),
//! the `anchor` stays put. When `anchor == head` the selection is empty,
//! which means "nothing selected", not an error.
//!
//! ```text
//! anchor=2, head=7: "he[llo w]orld"  (forward selection)
//! anchor=7, head=2: "he]llo w[orld"  (backward selection)
//! anchor=5, head=5: "hello|world"    (empty)
//! ```
//!
//! [`Selection::start`] and [`Selection::end`] return the ordered bounds
//! regardless of direction, so the selected range is always `start..end`.
//!
//! # Extending
//!
//! Shift-navigation goes through [`Selection::extend_to`]: when the current
//! selection is empty the pre-move cursor becomes the anchor, otherwise the
//! existing anchor is kept until the selection is collapsed again.
//!
//! ```
//! use slate_lib::selection::Selection;
//!
//! let selection = Selection::empty().extend_to(5, 3);
//! assert_eq!((selection.start(), selection.end()), (3, 5));
//!
//! // Moving back past the anchor flips the selection around it.
//! let selection = selection.extend_to(1, 5);
//! assert_eq!((selection.start(), selection.end()), (1, 3));
//! ```
//!
//! Selections never mutate text; replacing the selected range on input is
//! the edit session's job.

use std::borrow::Cow;

use ropey::RopeSlice;
use slate_core::line_index::{
  line_and_column,
  line_end,
  line_start,
};

use crate::movement::{
  Direction,
  WordBoundary,
  WordClass,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
  pub anchor: usize,
  pub head:   usize,
}

impl Selection {
  #[inline]
  pub const fn new(anchor: usize, head: usize) -> Self {
    Self { anchor, head }
  }

  /// `{ start: 0, end: 0 }`.
  #[inline]
  pub const fn empty() -> Self {
    Self::point(0)
  }

  /// An empty selection at `offset`.
  #[inline]
  pub const fn point(offset: usize) -> Self {
    Self::new(offset, offset)
  }

  /// Start of the selection
  #[inline]
  #[must_use]
  pub fn start(&self) -> usize {
    std::cmp::min(self.anchor, self.head)
  }

  /// End of the selection
  #[inline]
  #[must_use]
  pub fn end(&self) -> usize {
    std::cmp::max(self.anchor, self.head)
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.end() - self.start()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.anchor == self.head
  }

  #[inline]
  pub fn contains(&self, offset: usize) -> bool {
    self.start() <= offset && offset < self.end()
  }

  #[inline]
  #[must_use]
  pub fn direction(&self) -> Direction {
    if self.head < self.anchor {
      Direction::Backward
    } else {
      Direction::Forward
    }
  }

  /// Moves the head to `offset`.
  ///
  /// An empty selection is first re-anchored at `anchor`, the cursor offset
  /// before the move. A non-empty selection keeps its anchor.
  #[must_use]
  pub fn extend_to(self, offset: usize, anchor: usize) -> Self {
    if self.is_empty() {
      Self::new(anchor, offset)
    } else {
      Self::new(self.anchor, offset)
    }
  }

  /// Drops the range, leaving an empty selection at `offset`.
  #[inline]
  #[must_use]
  pub fn collapse_to(self, offset: usize) -> Self {
    Self::point(offset)
  }

  /// Pulls both ends into `[0, len]`.
  #[must_use]
  pub fn clamp(self, len: usize) -> Self {
    Self::new(self.anchor.min(len), self.head.min(len))
  }

  /// The selected text, empty when nothing is selected.
  pub fn selected_text<'a>(&self, text: RopeSlice<'a>) -> Cow<'a, str> {
    let Selection { anchor, head } = self.clamp(text.len_chars());
    if anchor == head {
      return Cow::Borrowed("");
    }
    text.slice(anchor.min(head)..anchor.max(head)).into()
  }
}

/// Selects the word containing `offset`.
///
/// Scans left while the previous char belongs to the same word and right
/// while the current char does. The word is taken from the char at `offset`,
/// falling back to the one before it; between two whitespace chars the
/// result is empty at `offset`.
pub fn select_word_at(text: RopeSlice, offset: usize, boundary: WordBoundary) -> Selection {
  let len = text.len_chars();
  let offset = offset.min(len);

  let class = [offset, offset.wrapping_sub(1)]
    .into_iter()
    .filter(|&pos| pos < len)
    .map(|pos| boundary.classify(text.char(pos)))
    .find(|class| *class != WordClass::Space);
  let Some(class) = class else {
    return Selection::point(offset);
  };

  let mut start = offset;
  while start > 0 && boundary.classify(text.char(start - 1)) == class {
    start -= 1;
  }

  let mut end = offset;
  while end < len && boundary.classify(text.char(end)) == class {
    end += 1;
  }

  Selection::new(start, end)
}

/// Selects the `\n`-delimited line containing `offset`, without the
/// delimiters.
pub fn select_line_at(text: RopeSlice, offset: usize) -> Selection {
  let line = line_and_column(text, offset).line;
  Selection::new(line_start(text, line), line_end(text, line))
}

/// `{ start: 0, end: len }`; empty for empty text.
pub fn select_all(text: RopeSlice) -> Selection {
  Selection::new(0, text.len_chars())
}
