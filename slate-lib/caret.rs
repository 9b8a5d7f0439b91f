//! Caret blinking.
//!
//! The host owns the clock. It calls [`CaretBlink::tick`] from its frame or
//! timer callback and asks [`CaretBlink::is_visible`] when drawing. Any edit
//! or navigation resets the blink so the caret stays solid while the user is
//! typing.

use std::time::{
  Duration,
  Instant,
};

pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(530);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretBlink {
  visible:     bool,
  blinking:    bool,
  last_toggle: Instant,
  interval:    Duration,
}

impl CaretBlink {
  /// A visible, blinking caret.
  pub fn new(now: Instant, interval: Duration) -> Self {
    Self {
      visible: true,
      blinking: true,
      last_toggle: now,
      interval,
    }
  }

  #[inline]
  pub fn is_visible(&self) -> bool {
    self.visible
  }

  #[inline]
  pub fn is_blinking(&self) -> bool {
    self.blinking
  }

  #[inline]
  pub fn interval(&self) -> Duration {
    self.interval
  }

  /// Flips visibility once a full interval has passed since the last flip.
  ///
  /// Returns whether visibility changed. A stopped caret stays hidden.
  pub fn tick(&mut self, now: Instant) -> bool {
    if !self.blinking {
      return false;
    }
    if now.saturating_duration_since(self.last_toggle) < self.interval {
      return false;
    }
    self.visible = !self.visible;
    self.last_toggle = now;
    true
  }

  /// Shows the caret and restarts the blink cycle at `now`.
  pub fn reset(&mut self, now: Instant) {
    self.visible = true;
    self.blinking = true;
    self.last_toggle = now;
  }

  /// Hides the caret until the next [`reset`](Self::reset).
  pub fn stop(&mut self) {
    self.visible = false;
    self.blinking = false;
  }

  /// When the next flip is due, if the caret is blinking.
  pub fn next_toggle(&self) -> Option<Instant> {
    self.blinking.then(|| self.last_toggle + self.interval)
  }
}
