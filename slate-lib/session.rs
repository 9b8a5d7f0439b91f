//! The edit session: one active text box and everything needed to edit it.
//!
//! [`EditSession`] owns the canvas' [`TextBoxes`], the binding to the box
//! being edited (cursor and selection), the caret blink state and the host
//! services for measurement and the clipboard. It is a plain value; hosts
//! keep it wherever their event loop can reach it and feed it commands:
//!
//! ```
//! use std::time::Instant;
//!
//! use slate_lib::{
//!   command::Command,
//!   config::EditorConfig,
//!   render::Point,
//!   session::EditSession,
//! };
//!
//! let now = Instant::now();
//! let mut session = EditSession::new(EditorConfig::default(), now);
//!
//! // Clicking empty canvas starts a new box.
//! session.dispatch(Command::ClickAt(Point::new(40.0, 40.0)), now);
//! for ch in "hi".chars() {
//!   session.dispatch(Command::InsertChar(ch), now);
//! }
//! assert_eq!(session.cursor(), Some(2));
//! assert_eq!(session.active_text().map(|text| text.to_string()).as_deref(), Some("hi"));
//! ```
//!
//! Every command is applied completely before [`EditSession::dispatch`]
//! returns, so render queries made afterwards always observe a consistent
//! state. The cursor and selection are kept within the active box's text at
//! all times.

use std::time::Instant;

use ropey::{
  Rope,
  RopeSlice,
};
use tracing::{
  debug,
  error,
  trace,
  warn,
};

use crate::{
  buffer::{
    self,
    TextBox,
    TextBoxId,
    TextBoxes,
  },
  caret::CaretBlink,
  clipboard::{
    ClipboardProvider,
    NoClipboard,
  },
  command::Command,
  config::EditorConfig,
  hit_test::{
    box_at_point,
    offset_from_point,
  },
  input::{
    KeyEvent,
    KeyOutcome,
    PointerEvent,
    command_for_key,
    command_for_pointer,
  },
  measure::{
    MonospaceMeasure,
    TextMeasure,
    TextStyle,
  },
  messages::MessageCenter,
  movement::{
    Movement,
    WordBoundary,
  },
  render::{
    graphics::{
      CaretGeometry,
      Point,
      Rect,
    },
    highlight::{
      SelectionRects,
      caret_geometry,
      selection_rects,
    },
  },
  selection::{
    Selection,
    select_all,
    select_line_at,
    select_word_at,
  },
};

const CLIPBOARD_SOURCE: &str = "clipboard";

/// Whether a dispatched command did anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  /// No box is being edited (or the pointer hit nothing it could act on).
  Ignored,
  Handled,
}

impl Outcome {
  #[must_use]
  pub const fn handled(self) -> bool {
    matches!(self, Self::Handled)
  }
}

/// The box being edited together with the caret position inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveBox {
  pub id:        TextBoxId,
  pub cursor:    usize,
  pub selection: Selection,
}

impl ActiveBox {
  fn new(id: TextBoxId) -> Self {
    Self {
      id,
      cursor: 0,
      selection: Selection::empty(),
    }
  }

  /// The range an edit replaces: the selection, or the empty range at the
  /// cursor.
  fn edit_range(&self) -> (usize, usize) {
    if self.selection.is_empty() {
      (self.cursor, self.cursor)
    } else {
      (self.selection.start(), self.selection.end())
    }
  }

  fn collapse_to(&mut self, offset: usize) {
    self.cursor = offset;
    self.selection = Selection::point(offset);
  }

  fn select(&mut self, selection: Selection) {
    self.cursor = selection.end();
    self.selection = selection;
  }

  fn clamp(&mut self, len: usize) {
    self.cursor = self.cursor.min(len);
    self.selection = self.selection.clamp(len);
  }
}

pub struct EditSession {
  boxes:     TextBoxes,
  active:    Option<ActiveBox>,
  caret:     CaretBlink,
  config:    EditorConfig,
  style:     TextStyle,
  measure:   Box<dyn TextMeasure>,
  clipboard: Box<dyn ClipboardProvider>,
  messages:  MessageCenter,
}

impl std::fmt::Debug for EditSession {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("EditSession")
      .field("boxes", &self.boxes)
      .field("active", &self.active)
      .field("caret", &self.caret)
      .field("config", &self.config)
      .field("clipboard", &self.clipboard.name())
      .finish_non_exhaustive()
  }
}

impl EditSession {
  /// A session with monospace measurement and no system clipboard.
  pub fn new(config: EditorConfig, now: Instant) -> Self {
    Self {
      boxes: TextBoxes::new(),
      active: None,
      caret: CaretBlink::new(now, config.blink_interval()),
      style: config.text_style(),
      config,
      measure: Box::new(MonospaceMeasure::default()),
      clipboard: Box::new(NoClipboard),
      messages: MessageCenter::default(),
    }
  }

  #[must_use]
  pub fn with_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
    self.measure = Box::new(measure);
    self
  }

  #[must_use]
  pub fn with_clipboard(mut self, clipboard: impl ClipboardProvider + 'static) -> Self {
    self.clipboard = Box::new(clipboard);
    self
  }

  pub fn config(&self) -> &EditorConfig {
    &self.config
  }

  pub fn text_style(&self) -> &TextStyle {
    &self.style
  }

  pub fn boxes(&self) -> &TextBoxes {
    &self.boxes
  }

  pub fn clipboard(&self) -> &dyn ClipboardProvider {
    self.clipboard.as_ref()
  }

  pub fn messages(&self) -> &MessageCenter {
    &self.messages
  }

  pub fn messages_mut(&mut self) -> &mut MessageCenter {
    &mut self.messages
  }

  pub fn active(&self) -> Option<ActiveBox> {
    self.active
  }

  pub fn active_id(&self) -> Option<TextBoxId> {
    self.active.map(|active| active.id)
  }

  pub fn cursor(&self) -> Option<usize> {
    self.active.map(|active| active.cursor)
  }

  pub fn selection(&self) -> Option<Selection> {
    self.active.map(|active| active.selection)
  }

  pub fn active_box(&self) -> Option<&TextBox> {
    self.boxes.get(self.active_id()?)
  }

  pub fn active_text(&self) -> Option<&Rope> {
    self.active_box().map(TextBox::text)
  }

  /// Where the first glyph of the active box is drawn.
  pub fn text_origin(&self) -> Option<Point> {
    self
      .active_box()
      .map(|text_box| text_box.text_origin(self.config.box_padding))
  }

  /// Binds the session to box `id`. Returns `false` if there is no such box.
  ///
  /// Switching to a different box puts the cursor at the start of its text;
  /// re-binding the current box keeps the cursor where it is.
  pub fn begin_editing(&mut self, id: TextBoxId, now: Instant) -> bool {
    if !self.boxes.contains(id) {
      warn!(%id, "begin_editing: no such text box");
      return false;
    }
    if self.active_id() != Some(id) {
      debug!(%id, "begin editing text box");
      self.active = Some(ActiveBox::new(id));
    }
    self.caret.reset(now);
    true
  }

  /// Unbinds the active box and hides the caret.
  pub fn end_editing(&mut self) {
    if let Some(active) = self.active.take() {
      debug!(id = %active.id, "end editing text box");
    }
    self.caret.stop();
  }

  /// Creates an empty box of the configured default size at `(x, y)` and
  /// starts editing it.
  pub fn create_box(&mut self, x: f32, y: f32, now: Instant) -> TextBoxId {
    let bounds = Rect::new(
      x,
      y,
      self.config.default_box_width,
      self.config.default_box_height,
    );
    let id = self.boxes.create(bounds);
    debug!(%id, x, y, "created text box");
    self.begin_editing(id, now);
    id
  }

  /// Removes box `id`, ending the edit if it was active.
  pub fn delete_box(&mut self, id: TextBoxId) -> Option<TextBox> {
    if self.active_id() == Some(id) {
      self.end_editing();
    }
    let removed = self.boxes.remove(id);
    if removed.is_some() {
      debug!(%id, "deleted text box");
    }
    removed
  }

  pub fn move_box(&mut self, id: TextBoxId, x: f32, y: f32) -> bool {
    self.boxes.move_to(id, x, y)
  }

  pub fn resize_box(&mut self, id: TextBoxId, width: f32, height: f32) -> bool {
    self.boxes.resize(id, width, height)
  }

  /// Replaces the content of box `id` wholesale, e.g. when loading a saved
  /// canvas. The cursor of an active box is pulled back into the new text.
  pub fn set_text(&mut self, id: TextBoxId, text: impl Into<Rope>) -> bool {
    let text = text.into();
    let len = text.len_chars();
    if !self.boxes.set_text(id, text) {
      return false;
    }
    if let Some(active) = self.active.as_mut().filter(|active| active.id == id) {
      active.clamp(len);
    }
    true
  }

  /// Applies `command` to the active box.
  ///
  /// Pointer commands may change which box is active first. Everything else
  /// is ignored while no box is being edited. Handled commands restart the
  /// caret blink.
  pub fn dispatch(&mut self, command: Command, now: Instant) -> Outcome {
    trace!(?command, "dispatch");
    let outcome = match command {
      Command::ClickAt(point) => self.click_at(point, now),
      Command::DoubleClickAt(point) => self.select_at(point, now, select_word_at),
      Command::TripleClickAt(point) => {
        self.select_at(point, now, |text, offset, _| select_line_at(text, offset))
      },
      _ if self.active.is_none() => Outcome::Ignored,
      Command::InsertChar(ch) => self.insert(ch.encode_utf8(&mut [0; 4])),
      Command::InsertNewline => self.insert("\n"),
      Command::DeleteBackward => self.delete_backward(),
      Command::MoveCursor { movement, extend } => self.move_cursor(movement, extend),
      Command::SelectAll => self.select_all(),
      Command::Copy => {
        self.copy();
        Outcome::Handled
      },
      Command::Cut => self.cut(),
      Command::Paste(text) => self.insert(&text),
    };

    if outcome.handled() {
      self.caret.reset(now);
    }
    outcome
  }

  /// Maps a key press through the default bindings and dispatches it. A
  /// paste shortcut reads the clipboard provider.
  pub fn handle_key(&mut self, event: KeyEvent, now: Instant) -> Outcome {
    match command_for_key(event) {
      KeyOutcome::Continue => Outcome::Ignored,
      KeyOutcome::Command(command) => self.dispatch(command, now),
      KeyOutcome::PasteRequested => self.paste_from_clipboard(now),
    }
  }

  pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) -> Outcome {
    match command_for_pointer(event) {
      Some(command) => self.dispatch(command, now),
      None => Outcome::Ignored,
    }
  }

  /// Reads the clipboard provider and pastes its contents. A failed read is
  /// reported and leaves the text untouched.
  pub fn paste_from_clipboard(&mut self, now: Instant) -> Outcome {
    if self.active.is_none() {
      return Outcome::Ignored;
    }
    match self.clipboard.get_contents() {
      Ok(text) => self.dispatch(Command::Paste(text), now),
      Err(err) => {
        warn!(provider = %self.clipboard.name(), %err, "failed to read clipboard");
        self
          .messages
          .warning(CLIPBOARD_SOURCE, format!("Paste failed: {err}"));
        self.caret.reset(now);
        Outcome::Handled
      },
    }
  }

  /// Advances the caret blink. Returns whether its visibility changed.
  pub fn tick(&mut self, now: Instant) -> bool {
    self.active.is_some() && self.caret.tick(now)
  }

  pub fn caret_visible(&self) -> bool {
    self.active.is_some() && self.caret.is_visible()
  }

  pub fn caret_geometry(&self) -> Option<CaretGeometry> {
    let active = self.active?;
    let text_box = self.boxes.get(active.id)?;
    Some(caret_geometry(
      active.cursor,
      text_box.text().slice(..),
      text_box.text_origin(self.config.box_padding),
      &self.style,
      self.measure.as_ref(),
      self.config.caret_metrics(),
    ))
  }

  pub fn selection_rects(&self) -> SelectionRects {
    let Some(active) = self.active else {
      return SelectionRects::new();
    };
    let Some(text_box) = self.boxes.get(active.id) else {
      return SelectionRects::new();
    };
    selection_rects(
      active.selection,
      text_box.text().slice(..),
      text_box.text_origin(self.config.box_padding),
      &self.style,
      self.measure.as_ref(),
    )
  }

  /// The selected text of the active box, empty when nothing is selected.
  pub fn selected_text(&self) -> String {
    match (self.active, self.active_text()) {
      (Some(active), Some(text)) => active.selection.selected_text(text.slice(..)).into_owned(),
      _ => String::new(),
    }
  }

  fn hit_offset(&self, id: TextBoxId, point: Point) -> usize {
    let Some(text_box) = self.boxes.get(id) else {
      return 0;
    };
    offset_from_point(
      point,
      text_box.text_origin(self.config.box_padding),
      text_box.text().slice(..),
      &self.style,
      self.measure.as_ref(),
    )
  }

  fn click_at(&mut self, point: Point, now: Instant) -> Outcome {
    let Some(id) = box_at_point(&self.boxes, point) else {
      // Lift the box so its first line sits around the pointer.
      self.create_box(point.x, point.y - self.style.font_size / 2.0, now);
      return Outcome::Handled;
    };

    self.begin_editing(id, now);
    let offset = self.hit_offset(id, point);
    if let Some(active) = self.active.as_mut() {
      active.collapse_to(offset);
    }
    Outcome::Handled
  }

  fn select_at(
    &mut self,
    point: Point,
    now: Instant,
    select: impl FnOnce(RopeSlice, usize, WordBoundary) -> Selection,
  ) -> Outcome {
    let Some(id) = box_at_point(&self.boxes, point) else {
      return Outcome::Ignored;
    };

    self.begin_editing(id, now);
    let offset = self.hit_offset(id, point);
    let Some(text) = self.boxes.text(id) else {
      return Outcome::Ignored;
    };
    let selection = select(text.slice(..), offset, self.config.word_boundary);
    if let Some(active) = self.active.as_mut() {
      active.select(selection);
    }
    Outcome::Handled
  }

  /// Replaces `start..end` of the active box with `s` and collapses the
  /// selection after the inserted text.
  fn replace(&mut self, start: usize, end: usize, s: &str) -> Outcome {
    let Some(active) = self.active else {
      return Outcome::Ignored;
    };
    let Some(text) = self.boxes.text(active.id) else {
      return Outcome::Ignored;
    };

    match buffer::replace(text, start, end, s) {
      Ok((next, cursor)) => {
        self.boxes.set_text(active.id, next);
        if let Some(active) = self.active.as_mut() {
          active.collapse_to(cursor);
        }
      },
      Err(err) => {
        error!(id = %active.id, %err, "edit outside of text box bounds");
      },
    }
    Outcome::Handled
  }

  fn insert(&mut self, s: &str) -> Outcome {
    let Some(active) = self.active else {
      return Outcome::Ignored;
    };
    let (start, end) = active.edit_range();
    self.replace(start, end, s)
  }

  fn delete_backward(&mut self) -> Outcome {
    let Some(active) = self.active else {
      return Outcome::Ignored;
    };
    if !active.selection.is_empty() {
      let (start, end) = active.edit_range();
      return self.replace(start, end, "");
    }
    match active.cursor.checked_sub(1) {
      Some(start) => self.replace(start, active.cursor, ""),
      None => Outcome::Handled,
    }
  }

  fn move_cursor(&mut self, movement: Movement, extend: bool) -> Outcome {
    let Some(active) = self.active.as_mut() else {
      return Outcome::Ignored;
    };
    let Some(text) = self.boxes.text(active.id) else {
      return Outcome::Ignored;
    };

    let offset = movement.apply(text.slice(..), active.cursor, self.config.word_boundary);
    if extend {
      active.selection = active.selection.extend_to(offset, active.cursor);
      active.cursor = offset;
    } else {
      active.collapse_to(offset);
    }
    Outcome::Handled
  }

  fn select_all(&mut self) -> Outcome {
    let Some(active) = self.active.as_mut() else {
      return Outcome::Ignored;
    };
    let Some(text) = self.boxes.text(active.id) else {
      return Outcome::Ignored;
    };
    active.select(select_all(text.slice(..)));
    Outcome::Handled
  }

  /// Writes the selection to the clipboard provider. Returns whether
  /// anything was copied.
  fn copy(&mut self) -> bool {
    let selected = self.selected_text();
    if selected.is_empty() {
      return false;
    }
    match self.clipboard.set_contents(&selected) {
      Ok(()) => true,
      Err(err) => {
        warn!(provider = %self.clipboard.name(), %err, "failed to write clipboard");
        self
          .messages
          .warning(CLIPBOARD_SOURCE, format!("Copy failed: {err}"));
        false
      },
    }
  }

  fn cut(&mut self) -> Outcome {
    let Some(active) = self.active else {
      return Outcome::Ignored;
    };
    if !self.copy() {
      return Outcome::Handled;
    }
    let (start, end) = active.edit_range();
    self.replace(start, end, "")
  }
}
