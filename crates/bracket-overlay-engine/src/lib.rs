pub mod bracket_highlight;
pub mod events;
pub mod geometry;

// Re-export key types for easier usage
pub use bracket_highlight::{
    BORDER_WIDTH, BracketHighlightInput, BracketHighlightResult, BracketPair, BracketVisibility,
    Elbow, HighlightStyle, LEFT_MARGIN_X, compute_bracket_highlight, inset,
    resolve_bracket_highlight,
};
pub use events::{BracketHighlightEvent, ElbowEvent, EventError};
pub use geometry::{Frame, Position, Size, to_global, to_local, to_local_position};
