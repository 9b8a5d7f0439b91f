//! User-facing notices raised while editing.
//!
//! Failures the user should hear about, such as a clipboard write that did
//! not go through, are published here instead of being returned from
//! dispatch. The host shows [`MessageCenter::active`] in its status line and
//! may drain [`MessageCenter::take_unseen`] into its own notification system.

use std::collections::VecDeque;

use serde::Serialize;

pub const DEFAULT_HISTORY_LIMIT: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLevel {
  Warning,
  Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
  pub level:  MessageLevel,
  /// Subsystem that raised the message, e.g. `clipboard`.
  pub source: &'static str,
  pub text:   String,
}

/// The latest notice plus a bounded backlog of earlier ones.
#[derive(Debug, Clone)]
pub struct MessageCenter {
  active:  Option<Message>,
  history: VecDeque<Message>,
  /// How many of the newest `history` entries the host has not taken yet.
  unseen:  usize,
  limit:   usize,
}

impl Default for MessageCenter {
  fn default() -> Self {
    Self::with_limit(DEFAULT_HISTORY_LIMIT)
  }
}

impl MessageCenter {
  pub fn with_limit(limit: usize) -> Self {
    let limit = limit.max(1);
    Self {
      active: None,
      history: VecDeque::with_capacity(limit),
      unseen: 0,
      limit,
    }
  }

  pub fn active(&self) -> Option<&Message> {
    self.active.as_ref()
  }

  /// Published messages, oldest first.
  pub fn history(&self) -> impl ExactSizeIterator<Item = &Message> {
    self.history.iter()
  }

  pub fn publish(&mut self, level: MessageLevel, source: &'static str, text: impl Into<String>) {
    let message = Message {
      level,
      source,
      text: text.into(),
    };
    if self.history.len() == self.limit {
      self.history.pop_front();
    }
    self.history.push_back(message.clone());
    self.unseen = (self.unseen + 1).min(self.limit);
    self.active = Some(message);
  }

  pub fn warning(&mut self, source: &'static str, text: impl Into<String>) {
    self.publish(MessageLevel::Warning, source, text);
  }

  /// Messages published since the previous call, oldest first. Messages
  /// pushed out of the history before being taken are lost.
  pub fn take_unseen(&mut self) -> Vec<Message> {
    let skip = self.history.len() - self.unseen;
    self.unseen = 0;
    self.history.iter().skip(skip).cloned().collect()
  }

  /// Hides the status-line message. The history keeps it.
  pub fn dismiss_active(&mut self) -> Option<Message> {
    self.active.take()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_latest_message_is_active() {
    let mut center = MessageCenter::default();
    center.publish(MessageLevel::Error, "test", "boom");
    center.warning("test", "careful");

    let active = center.active().unwrap();
    assert_eq!(active.level, MessageLevel::Warning);
    assert_eq!(active.text, "careful");
    assert_eq!(center.history().len(), 2);

    assert!(center.dismiss_active().is_some());
    assert!(center.active().is_none());
    assert_eq!(center.history().len(), 2);
  }

  #[test]
  fn test_history_is_bounded() {
    let mut center = MessageCenter::with_limit(2);
    for text in ["a", "b", "c"] {
      center.warning("test", text);
    }
    let texts: Vec<_> = center.history().map(|message| message.text.as_str()).collect();
    assert_eq!(texts, ["b", "c"]);
  }

  #[test]
  fn test_take_unseen_returns_each_message_once() {
    let mut center = MessageCenter::with_limit(2);
    center.warning("test", "a");
    center.warning("test", "b");
    assert_eq!(center.take_unseen().len(), 2);
    assert!(center.take_unseen().is_empty());

    // Three new messages overflow the history; only the last two survive.
    for text in ["c", "d", "e"] {
      center.publish(MessageLevel::Error, "test", text);
    }
    let unseen: Vec<_> = center.take_unseen().into_iter().map(|message| message.text).collect();
    assert_eq!(unseen, ["d", "e"]);
  }
}
