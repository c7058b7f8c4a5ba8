use serde::{Deserialize, Serialize};

use crate::geometry::{Frame, Position};

/// The opening (`first`) and closing (`last`) bracket of a pair.
///
/// Either side is `None` when it has scrolled out of the visible viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BracketPair<T> {
    pub first: Option<T>,
    pub last: Option<T>,
}

impl<T> BracketPair<T> {
    pub fn new(first: Option<T>, last: Option<T>) -> Self {
        Self { first, last }
    }

    pub fn map<U, F>(self, mut f: F) -> BracketPair<U>
    where
        F: FnMut(T) -> U,
    {
        BracketPair {
            first: self.first.map(&mut f),
            last: self.last.map(&mut f),
        }
    }
}

/// Connector anchor redirecting the guide line towards the left margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Elbow {
    pub origin: Position,
    /// Ignore `origin.x` and snap to the style's left margin.
    pub origin_x_left_most: bool,
    /// Anchor the bottom line on the closing bracket's top edge instead of its bottom edge.
    pub bottom_line_top: bool,
}

impl Elbow {
    pub fn new(origin: Position) -> Self {
        Self {
            origin,
            origin_x_left_most: false,
            bottom_line_top: false,
        }
    }

    pub fn left_most(y: f64) -> Self {
        Self {
            origin: Position::new(0.0, y),
            origin_x_left_most: true,
            bottom_line_top: false,
        }
    }

    pub fn with_bottom_line_top(mut self, bottom_line_top: bool) -> Self {
        self.bottom_line_top = bottom_line_top;
        self
    }

    pub fn to_local(&self, global_origin: &Position) -> Elbow {
        Elbow {
            origin: self.origin.to_local(global_origin),
            ..*self
        }
    }

    pub fn to_global(&self, local_origin: &Position) -> Elbow {
        Elbow {
            origin: self.origin.to_global(local_origin),
            ..*self
        }
    }
}

/// Everything the bracket locator reports for one geometry update, in global coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BracketHighlightInput {
    pub brackets: BracketPair<Frame>,
    /// Global top-left of the overlay window.
    pub reference_origin: Position,
    pub viewport_height: f64,
    pub elbow: Option<Elbow>,
}

/// Rectangles to paint, in the overlay's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BracketHighlightResult {
    pub line_rect: Frame,
    pub bottom_line_rect: Option<Frame>,
    pub first_box_rect: Option<Frame>,
    pub last_box_rect: Option<Frame>,
}

impl BracketHighlightResult {
    /// The guide line, then the bottom line when an elbow was applied.
    pub fn guide_lines(&self) -> impl Iterator<Item = Frame> {
        std::iter::once(self.line_rect).chain(self.bottom_line_rect)
    }

    /// Highlight boxes of the visible brackets.
    pub fn boxes(&self) -> impl Iterator<Item = Frame> {
        self.first_box_rect.into_iter().chain(self.last_box_rect)
    }
}
