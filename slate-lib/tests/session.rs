use std::time::Instant;

use slate_lib::{
  clipboard::MemoryClipboard,
  command::Command,
  config::EditorConfig,
  input::{
    Key,
    KeyEvent,
    Modifiers,
    PointerEvent,
  },
  measure::MonospaceMeasure,
  movement::Movement,
  render::{
    Point,
    Rect,
  },
  session::{
    EditSession,
    Outcome,
  },
};

// 10px per char, 20px per line. A box at (0, 0) draws text from (10, 10).
const CONFIG: &str = r#"
font-size = 10.0
line-height-factor = 2.0
"#;

fn session() -> (EditSession, Instant) {
  let now = Instant::now();
  let config = EditorConfig::from_toml(CONFIG).unwrap();
  let session = EditSession::new(config, now)
    .with_measure(MonospaceMeasure::new(1.0))
    .with_clipboard(MemoryClipboard::new());
  (session, now)
}

fn press(session: &mut EditSession, key: Key, bits: u8, now: Instant) -> Outcome {
  session.handle_key(KeyEvent::new(key, Modifiers::from_bits(bits)), now)
}

fn type_text(session: &mut EditSession, text: &str, now: Instant) {
  for ch in text.chars() {
    let key = if ch == '\n' { Key::Enter } else { Key::Char(ch) };
    press(session, key, 0, now);
  }
}

fn text(session: &EditSession) -> String {
  session
    .active_text()
    .map(|text| text.to_string())
    .unwrap_or_default()
}

#[test]
fn test_typing_and_vertical_navigation() {
  let (mut session, now) = session();
  session.create_box(0.0, 0.0, now);
  type_text(&mut session, "ab\ncd\nef", now);
  assert_eq!(text(&session), "ab\ncd\nef");
  assert_eq!(session.cursor(), Some(8));

  // Second line, one char in.
  session.dispatch(Command::ClickAt(Point::new(20.0, 35.0)), now);
  assert_eq!(session.cursor(), Some(4));

  press(&mut session, Key::Up, 0, now);
  assert_eq!(session.cursor(), Some(1));
  press(&mut session, Key::Down, 0, now);
  assert_eq!(session.cursor(), Some(4));
}

#[test]
fn test_empty_box_navigation_stays_at_zero() {
  let (mut session, now) = session();
  session.create_box(0.0, 0.0, now);

  for key in [Key::Left, Key::Right, Key::Up, Key::Down, Key::Home, Key::End] {
    assert_eq!(press(&mut session, key, 0, now), Outcome::Handled);
    assert_eq!(session.cursor(), Some(0));
  }
  press(&mut session, Key::Backspace, 0, now);
  assert_eq!(text(&session), "");
}

#[test]
fn test_keyboard_clipboard_round_trip() {
  let (mut session, now) = session();
  session.create_box(0.0, 0.0, now);
  type_text(&mut session, "hello world", now);

  press(&mut session, Key::Char('a'), Modifiers::CTRL, now);
  press(&mut session, Key::Char('c'), Modifiers::CTRL, now);
  assert_eq!(session.selected_text(), "hello world");

  press(&mut session, Key::End, 0, now);
  assert!(session.selection().unwrap().is_empty());

  assert_eq!(press(&mut session, Key::Char('v'), Modifiers::SUPER, now), Outcome::Handled);
  assert_eq!(text(&session), "hello worldhello world");
  assert_eq!(session.cursor(), Some(22));
}

#[test]
fn test_shift_word_selection_and_cut() {
  let (mut session, now) = session();
  session.create_box(0.0, 0.0, now);
  type_text(&mut session, "hello world", now);

  press(&mut session, Key::Left, Modifiers::CTRL | Modifiers::SHIFT, now);
  assert_eq!(session.selected_text(), "world");

  press(&mut session, Key::Char('x'), Modifiers::CTRL, now);
  assert_eq!(text(&session), "hello ");
  assert_eq!(session.clipboard().get_contents().unwrap(), "world");
}

#[test]
fn test_double_click_selects_word() {
  let (mut session, now) = session();
  let id = session.create_box(0.0, 0.0, now);
  session.set_text(id, "foo bar baz");
  session.end_editing();

  let event = PointerEvent::new(Point::new(55.0, 15.0)).with_click_count(2);
  assert_eq!(session.handle_pointer(event, now), Outcome::Handled);
  assert_eq!(session.active_id(), Some(id));

  let selection = session.selection().unwrap();
  assert_eq!((selection.start(), selection.end()), (4, 7));
  assert_eq!(session.cursor(), Some(7));

  // The highlight starts after "foo " and covers "bar".
  assert_eq!(session.selection_rects().as_slice(), &[Rect::new(
    50.0, 10.0, 30.0, 20.0
  )]);
}

#[test]
fn test_boxes_are_edited_independently() {
  let (mut session, now) = session();
  let left = session.create_box(0.0, 0.0, now);
  type_text(&mut session, "left", now);

  let right = session.create_box(400.0, 0.0, now);
  assert_eq!(session.active_id(), Some(right));
  assert_eq!(session.cursor(), Some(0));
  type_text(&mut session, "right", now);

  assert_eq!(session.boxes().text(left).unwrap().to_string(), "left");
  assert_eq!(session.boxes().text(right).unwrap().to_string(), "right");

  // Clicking past the end of the left box's text resumes editing there.
  session.dispatch(Command::ClickAt(Point::new(200.0, 15.0)), now);
  assert_eq!(session.active_id(), Some(left));
  type_text(&mut session, "!", now);
  assert_eq!(session.boxes().text(left).unwrap().to_string(), "left!");
  assert_eq!(session.boxes().text(right).unwrap().to_string(), "right");
}

#[test]
fn test_click_on_empty_canvas_creates_box_under_pointer() {
  let (mut session, now) = session();
  session.dispatch(Command::ClickAt(Point::new(100.0, 100.0)), now);

  assert_eq!(session.boxes().len(), 1);
  // Lifted by half the font size.
  assert_eq!(
    session.active_box().unwrap().bounds,
    Rect::new(100.0, 95.0, 300.0, 100.0)
  );
  assert!(session.caret_visible());
}

#[test]
fn test_punctuation_word_boundaries() {
  let now = Instant::now();
  let config = EditorConfig::from_toml("word-boundary = \"punctuation\"").unwrap();
  let mut session = EditSession::new(config, now);
  let id = session.create_box(0.0, 0.0, now);
  session.set_text(id, "foo.bar baz");

  let mut stops = Vec::new();
  for _ in 0..4 {
    session.dispatch(Command::move_cursor(Movement::WordRight), now);
    stops.push(session.cursor().unwrap());
  }
  assert_eq!(stops, [3, 4, 8, 11]);

  let (mut session, now) = self::session();
  let id = session.create_box(0.0, 0.0, now);
  session.set_text(id, "foo.bar baz");
  session.dispatch(Command::move_cursor(Movement::WordRight), now);
  assert_eq!(session.cursor(), Some(8));
}
