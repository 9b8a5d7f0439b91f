//! Plain geometry types exchanged with the rendering collaborator.
//!
//! Coordinates are canvas pixels with the origin at the top-left and `y`
//! growing downwards. Everything here is output-only and recomputed on every
//! render pass.

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
  pub x: f32,
  pub y: f32,
}

impl Point {
  pub const fn new(x: f32, y: f32) -> Self {
    Self { x, y }
  }

  /// `self` relative to `origin`.
  #[must_use]
  pub fn relative_to(self, origin: Point) -> Self {
    Self::new(self.x - origin.x, self.y - origin.y)
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
  pub x:      f32,
  pub y:      f32,
  pub width:  f32,
  pub height: f32,
}

impl Rect {
  pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
    Self {
      x,
      y,
      width,
      height,
    }
  }

  #[inline]
  pub fn right(&self) -> f32 {
    self.x + self.width
  }

  #[inline]
  pub fn bottom(&self) -> f32 {
    self.y + self.height
  }

  /// Edges are inclusive.
  pub fn contains(&self, point: Point) -> bool {
    point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
  }
}

/// Where and how tall to draw the caret bar.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CaretGeometry {
  pub x:      f32,
  pub y:      f32,
  pub width:  f32,
  pub height: f32,
}

impl CaretGeometry {
  pub fn rect(&self) -> Rect {
    Rect::new(self.x, self.y, self.width, self.height)
  }
}
