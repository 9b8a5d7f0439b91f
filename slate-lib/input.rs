//! Input event types and the default mapping from keys and clicks to edit
//! commands.
//!
//! Hosts translate their toolkit's events into [`KeyEvent`] and
//! [`PointerEvent`] and feed the resulting [`Command`]s to the session. Keys
//! the mapping does not know about come back as [`KeyOutcome::Continue`] so
//! the host can handle them.

use std::fmt;

use crate::{
  command::Command,
  movement::Movement,
  render::graphics::Point,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifiers {
  bits: u8,
}

impl Modifiers {
  pub const CTRL: u8 = 0b0000_0001;
  pub const ALT: u8 = 0b0000_0010;
  pub const SHIFT: u8 = 0b0000_0100;
  pub const SUPER: u8 = 0b0000_1000;

  #[must_use]
  pub const fn empty() -> Self {
    Self { bits: 0 }
  }

  #[must_use]
  pub const fn from_bits(bits: u8) -> Self {
    Self { bits }
  }

  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.bits == 0
  }

  #[must_use]
  pub const fn ctrl(self) -> bool {
    (self.bits & Self::CTRL) != 0
  }

  #[must_use]
  pub const fn alt(self) -> bool {
    (self.bits & Self::ALT) != 0
  }

  #[must_use]
  pub const fn shift(self) -> bool {
    (self.bits & Self::SHIFT) != 0
  }

  #[must_use]
  pub const fn super_key(self) -> bool {
    (self.bits & Self::SUPER) != 0
  }

  /// Ctrl or Cmd, whichever the platform uses for shortcuts.
  #[must_use]
  pub const fn primary(self) -> bool {
    self.ctrl() || self.super_key()
  }

  pub fn insert(&mut self, bits: u8) {
    self.bits |= bits;
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
  Char(char),
  Enter,
  NumpadEnter,
  Escape,
  Backspace,
  Tab,
  Delete,
  Home,
  End,
  Left,
  Right,
  Up,
  Down,
  Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
  pub key:       Key,
  pub modifiers: Modifiers,
}

impl KeyEvent {
  pub const fn new(key: Key, modifiers: Modifiers) -> Self {
    Self { key, modifiers }
  }

  pub const fn plain(key: Key) -> Self {
    Self::new(key, Modifiers::empty())
  }
}

/// Shortcut notation, e.g. `mod+shift+left`.
impl fmt::Display for KeyEvent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.modifiers.primary() {
      f.write_str("mod+")?;
    }
    if self.modifiers.shift() {
      f.write_str("shift+")?;
    }
    if self.modifiers.alt() {
      f.write_str("alt+")?;
    }
    match self.key {
      Key::Char(' ') => f.write_str("space"),
      Key::Char(ch) => {
        for lower in ch.to_lowercase() {
          write!(f, "{lower}")?;
        }
        Ok(())
      },
      Key::Enter => f.write_str("enter"),
      Key::NumpadEnter => f.write_str("numpad-enter"),
      Key::Escape => f.write_str("escape"),
      Key::Backspace => f.write_str("backspace"),
      Key::Tab => f.write_str("tab"),
      Key::Delete => f.write_str("delete"),
      Key::Home => f.write_str("home"),
      Key::End => f.write_str("end"),
      Key::Left => f.write_str("left"),
      Key::Right => f.write_str("right"),
      Key::Up => f.write_str("up"),
      Key::Down => f.write_str("down"),
      Key::Other => f.write_str("other"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum KeyOutcome {
  /// Not an editing key; the host may handle it.
  #[default]
  Continue,
  Command(Command),
  /// The host should read the system clipboard and dispatch
  /// [`Command::Paste`] with its contents.
  PasteRequested,
}

/// Maps a key press to an edit command.
pub fn command_for_key(event: KeyEvent) -> KeyOutcome {
  let KeyEvent { key, modifiers } = event;
  let extend = modifiers.shift();
  let by_word = modifiers.ctrl() || modifiers.alt();

  let movement = match key {
    Key::Left if by_word => Some(Movement::WordLeft),
    Key::Right if by_word => Some(Movement::WordRight),
    Key::Left => Some(Movement::Left),
    Key::Right => Some(Movement::Right),
    Key::Up => Some(Movement::Up),
    Key::Down => Some(Movement::Down),
    Key::Home if modifiers.primary() => Some(Movement::DocumentStart),
    Key::End if modifiers.primary() => Some(Movement::DocumentEnd),
    Key::Home => Some(Movement::LineStart),
    Key::End => Some(Movement::LineEnd),
    _ => None,
  };
  if let Some(movement) = movement {
    return KeyOutcome::Command(Command::MoveCursor { movement, extend });
  }

  match key {
    Key::Char(ch) if modifiers.primary() => {
      match ch.to_ascii_lowercase() {
        'c' => KeyOutcome::Command(Command::Copy),
        'x' => KeyOutcome::Command(Command::Cut),
        'a' => KeyOutcome::Command(Command::SelectAll),
        'v' => KeyOutcome::PasteRequested,
        _ => KeyOutcome::Continue,
      }
    },
    Key::Char(ch) if !modifiers.alt() && !ch.is_control() => {
      KeyOutcome::Command(Command::InsertChar(ch))
    },
    Key::Enter | Key::NumpadEnter => KeyOutcome::Command(Command::InsertNewline),
    Key::Backspace => KeyOutcome::Command(Command::DeleteBackward),
    _ => KeyOutcome::Continue,
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
  pub position:    Point,
  pub modifiers:   Modifiers,
  /// 1 for a single click, 2 for a double click and so on, as reported by
  /// the host toolkit.
  pub click_count: u8,
}

impl PointerEvent {
  #[must_use]
  pub const fn new(position: Point) -> Self {
    Self {
      position,
      modifiers: Modifiers::empty(),
      click_count: 1,
    }
  }

  #[must_use]
  pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
    self.modifiers = modifiers;
    self
  }

  #[must_use]
  pub const fn with_click_count(mut self, click_count: u8) -> Self {
    self.click_count = click_count;
    self
  }
}

/// Maps a pointer press to a click command. Clicks past the third cycle back
/// to word and line selection the way most toolkits report them.
pub fn command_for_pointer(event: PointerEvent) -> Option<Command> {
  let position = event.position;
  match event.click_count {
    0 => None,
    1 => Some(Command::ClickAt(position)),
    count if count % 2 == 0 => Some(Command::DoubleClickAt(position)),
    _ => Some(Command::TripleClickAt(position)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn with(key: Key, bits: u8) -> KeyOutcome {
    command_for_key(KeyEvent::new(key, Modifiers::from_bits(bits)))
  }

  #[test]
  fn test_clipboard_shortcuts() {
    assert_eq!(with(Key::Char('c'), Modifiers::CTRL), KeyOutcome::Command(Command::Copy));
    assert_eq!(with(Key::Char('x'), Modifiers::SUPER), KeyOutcome::Command(Command::Cut));
    assert_eq!(
      with(Key::Char('A'), Modifiers::CTRL | Modifiers::SHIFT),
      KeyOutcome::Command(Command::SelectAll)
    );
    assert_eq!(with(Key::Char('v'), Modifiers::CTRL), KeyOutcome::PasteRequested);
    assert_eq!(with(Key::Char('q'), Modifiers::CTRL), KeyOutcome::Continue);
  }

  #[test]
  fn test_arrows() {
    assert_eq!(
      with(Key::Left, 0),
      KeyOutcome::Command(Command::move_cursor(Movement::Left))
    );
    assert_eq!(
      with(Key::Right, Modifiers::SHIFT),
      KeyOutcome::Command(Command::extend_selection(Movement::Right))
    );
    assert_eq!(
      with(Key::Left, Modifiers::ALT | Modifiers::SHIFT),
      KeyOutcome::Command(Command::extend_selection(Movement::WordLeft))
    );
    assert_eq!(
      with(Key::Right, Modifiers::CTRL),
      KeyOutcome::Command(Command::move_cursor(Movement::WordRight))
    );
    assert_eq!(
      with(Key::Down, 0),
      KeyOutcome::Command(Command::move_cursor(Movement::Down))
    );
  }

  #[test]
  fn test_home_end() {
    assert_eq!(
      with(Key::Home, 0),
      KeyOutcome::Command(Command::move_cursor(Movement::LineStart))
    );
    assert_eq!(
      with(Key::End, Modifiers::CTRL | Modifiers::SHIFT),
      KeyOutcome::Command(Command::extend_selection(Movement::DocumentEnd))
    );
  }

  #[test]
  fn test_text_keys() {
    assert_eq!(with(Key::Char('a'), 0), KeyOutcome::Command(Command::InsertChar('a')));
    assert_eq!(
      with(Key::Char('A'), Modifiers::SHIFT),
      KeyOutcome::Command(Command::InsertChar('A'))
    );
    assert_eq!(with(Key::Enter, 0), KeyOutcome::Command(Command::InsertNewline));
    assert_eq!(with(Key::NumpadEnter, 0), KeyOutcome::Command(Command::InsertNewline));
    assert_eq!(with(Key::Backspace, 0), KeyOutcome::Command(Command::DeleteBackward));
    assert_eq!(with(Key::Char('\u{8}'), 0), KeyOutcome::Continue);
    assert_eq!(with(Key::Char('f'), Modifiers::ALT), KeyOutcome::Continue);
    assert_eq!(with(Key::Escape, 0), KeyOutcome::Continue);
  }

  #[test]
  fn test_shortcut_display() {
    let event = KeyEvent::new(Key::Char('C'), Modifiers::from_bits(Modifiers::SUPER | Modifiers::SHIFT));
    assert_eq!(event.to_string(), "mod+shift+c");
    assert_eq!(KeyEvent::plain(Key::Left).to_string(), "left");
  }

  #[test]
  fn test_pointer_clicks() {
    let point = Point::new(3.0, 4.0);
    let event = PointerEvent::new(point);
    assert_eq!(command_for_pointer(event), Some(Command::ClickAt(point)));
    assert_eq!(
      command_for_pointer(event.with_click_count(2)),
      Some(Command::DoubleClickAt(point))
    );
    assert_eq!(
      command_for_pointer(event.with_click_count(3)),
      Some(Command::TripleClickAt(point))
    );
    assert_eq!(
      command_for_pointer(event.with_click_count(4)),
      Some(Command::DoubleClickAt(point))
    );
    assert_eq!(command_for_pointer(event.with_click_count(0)), None);
  }
}
