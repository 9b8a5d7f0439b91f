//! Plain-text editing for text boxes placed on a canvas.
//!
//! The crate is toolkit agnostic: hosts translate their input events into
//! [`command::Command`]s, supply a [`measure::TextMeasure`] and a
//! [`clipboard::ClipboardProvider`], and draw whatever the render queries on
//! [`session::EditSession`] return.

pub mod buffer;
pub mod caret;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod input;
pub mod measure;
pub mod messages;
pub mod movement;
pub mod render;
pub mod selection;
pub mod session;
