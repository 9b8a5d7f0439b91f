//! Clipboard abstraction.
//!
//! The lib only defines the interface and error types. Hosts provide the
//! system clipboard; [`MemoryClipboard`] covers tests and hosts without one.

use std::borrow::Cow;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClipboardError {
  #[error("clipboard provider does not support reading")]
  ReadingNotSupported,
  #[error("clipboard provider does not support writing")]
  WritingNotSupported,
  #[error("clipboard error: {0}")]
  Platform(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub trait ClipboardProvider {
  fn name(&self) -> Cow<'_, str>;
  fn get_contents(&self) -> Result<String>;
  fn set_contents(&mut self, content: &str) -> Result<()>;
}

/// Refuses reads and writes, so nothing is lost to a clipboard that does not
/// exist.
#[derive(Debug, Default)]
pub struct NoClipboard;

impl ClipboardProvider for NoClipboard {
  fn name(&self) -> Cow<'_, str> {
    "none".into()
  }

  fn get_contents(&self) -> Result<String> {
    Err(ClipboardError::ReadingNotSupported)
  }

  fn set_contents(&mut self, _content: &str) -> Result<()> {
    Err(ClipboardError::WritingNotSupported)
  }
}

/// A process-local clipboard.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
  contents: String,
}

impl MemoryClipboard {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn contents(&self) -> &str {
    &self.contents
  }
}

impl ClipboardProvider for MemoryClipboard {
  fn name(&self) -> Cow<'_, str> {
    "memory".into()
  }

  fn get_contents(&self) -> Result<String> {
    Ok(self.contents.clone())
  }

  fn set_contents(&mut self, content: &str) -> Result<()> {
    content.clone_into(&mut self.contents);
    Ok(())
  }
}
