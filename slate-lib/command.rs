//! Edit commands dispatched to an edit session.

use crate::{
  movement::Movement,
  render::graphics::Point,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
  InsertChar(char),
  InsertNewline,
  DeleteBackward,
  /// Moves the cursor; with `extend` the selection grows from its anchor.
  MoveCursor { movement: Movement, extend: bool },
  ClickAt(Point),
  DoubleClickAt(Point),
  TripleClickAt(Point),
  SelectAll,
  Copy,
  Cut,
  /// Clipboard text read by the host.
  Paste(String),
}

impl Command {
  pub const fn move_cursor(movement: Movement) -> Self {
    Self::MoveCursor {
      movement,
      extend: false,
    }
  }

  pub const fn extend_selection(movement: Movement) -> Self {
    Self::MoveCursor {
      movement,
      extend: true,
    }
  }
}
