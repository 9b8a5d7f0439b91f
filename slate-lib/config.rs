//! Engine configuration.
//!
//! Every key is optional; missing keys take the defaults below. Hosts usually
//! embed this as a table in their own configuration file:
//!
//! ```toml
//! blink-interval-ms = 530
//! font-size = 16.0
//! line-height-factor = 1.2
//! caret-padding = 2.0
//! caret-width = 1.0
//! box-padding = 10.0
//! default-box-width = 300.0
//! default-box-height = 100.0
//! word-boundary = "whitespace"
//! ```

use std::{
  fs,
  io,
  path::Path,
  time::Duration,
};

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

use crate::{
  measure::TextStyle,
  movement::WordBoundary,
  render::highlight::CaretMetrics,
};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
  #[error("failed to read config: {0}")]
  Io(#[from] io::Error),
  #[error("failed to parse config: {0}")]
  Parse(#[from] toml::de::Error),
  #[error("invalid value for `{key}`: {reason}")]
  Invalid { key: &'static str, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct EditorConfig {
  pub blink_interval_ms:  u64,
  pub font_size:          f32,
  pub line_height_factor: f32,
  /// Extra caret height above and below the glyphs.
  pub caret_padding:      f32,
  pub caret_width:        f32,
  /// Inset from the box edge to the first glyph.
  pub box_padding:        f32,
  pub default_box_width:  f32,
  pub default_box_height: f32,
  pub word_boundary:      WordBoundary,
}

impl Default for EditorConfig {
  fn default() -> Self {
    Self {
      blink_interval_ms:  530,
      font_size:          16.0,
      line_height_factor: 1.2,
      caret_padding:      2.0,
      caret_width:        1.0,
      box_padding:        10.0,
      default_box_width:  300.0,
      default_box_height: 100.0,
      word_boundary:      WordBoundary::default(),
    }
  }
}

impl EditorConfig {
  pub fn from_toml(source: &str) -> Result<Self> {
    let config: Self = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
  }

  pub fn load(path: &Path) -> Result<Self> {
    let source = fs::read_to_string(path)?;
    Self::from_toml(&source)
  }

  pub fn validate(&self) -> Result<()> {
    let positive = [
      ("font-size", self.font_size),
      ("line-height-factor", self.line_height_factor),
      ("caret-width", self.caret_width),
      ("default-box-width", self.default_box_width),
      ("default-box-height", self.default_box_height),
    ];
    for (key, value) in positive {
      if !(value.is_finite() && value > 0.0) {
        return Err(ConfigError::Invalid {
          key,
          reason: "must be a positive number",
        });
      }
    }

    let non_negative = [
      ("caret-padding", self.caret_padding),
      ("box-padding", self.box_padding),
    ];
    for (key, value) in non_negative {
      if !(value.is_finite() && value >= 0.0) {
        return Err(ConfigError::Invalid {
          key,
          reason: "must not be negative",
        });
      }
    }

    if self.blink_interval_ms == 0 {
      return Err(ConfigError::Invalid {
        key:    "blink-interval-ms",
        reason: "must be at least 1",
      });
    }
    Ok(())
  }

  pub fn text_style(&self) -> TextStyle {
    TextStyle::new(self.font_size, self.line_height_factor)
  }

  pub fn caret_metrics(&self) -> CaretMetrics {
    CaretMetrics {
      width:   self.caret_width,
      padding: self.caret_padding,
    }
  }

  pub fn blink_interval(&self) -> Duration {
    Duration::from_millis(self.blink_interval_ms)
  }
}
