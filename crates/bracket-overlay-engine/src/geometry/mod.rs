//! # Overlay Geometry
//!
//! Plain value types for positions, sizes and frames in a y-down coordinate
//! space, plus the conversion between the editor's global (screen) space and
//! the overlay window's local space.
//!
//! A frame reported by the bracket locator is global. The overlay window has
//! its own global top-left (`reference_origin`); subtracting it gives the
//! local frame the renderer paints as-is.

use serde::{Deserialize, Serialize};

/// A point in either global or local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_local(&self, global_origin: &Position) -> Position {
        Position {
            x: self.x - global_origin.x,
            y: self.y - global_origin.y,
        }
    }

    pub fn to_global(&self, local_origin: &Position) -> Position {
        Position {
            x: self.x + local_origin.x,
            y: self.y + local_origin.y,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width and height of a frame.
///
/// Sizes produced by the engine are never negative. Use [`Size::clamped`]
/// whenever a dimension is derived from a difference of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Builds a size with both dimensions floored at zero. NaN becomes zero.
    pub fn clamped(width: f64, height: f64) -> Self {
        Self {
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// Axis-aligned rectangle with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub origin: Position,
    pub size: Size,
}

impl Frame {
    pub fn new(origin: Position, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Position::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Bottom edge in a y-down space.
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn to_local(&self, global_origin: &Position) -> Frame {
        Frame {
            origin: self.origin.to_local(global_origin),
            size: self.size,
        }
    }

    pub fn to_global(&self, local_origin: &Position) -> Frame {
        Frame {
            origin: self.origin.to_global(local_origin),
            size: self.size,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }
}

/// Converts a global frame into the local space of the window at `reference_origin`.
pub fn to_local(global_frame: Frame, reference_origin: Position) -> Frame {
    global_frame.to_local(&reference_origin)
}

pub fn to_local_position(position: Position, reference_origin: Position) -> Position {
    position.to_local(&reference_origin)
}

/// Inverse of [`to_local`].
pub fn to_global(local_frame: Frame, reference_origin: Position) -> Frame {
    local_frame.to_global(&reference_origin)
}

/// Floors a dimension at zero. `f64::max` returns the non-NaN operand, so NaN maps to zero.
pub(crate) fn non_negative(value: f64) -> f64 {
    value.max(0.0)
}
