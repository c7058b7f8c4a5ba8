use crate::geometry::{Frame, Position, Size};

/// Shrinks a bracket's frame by `border_width` on every side.
///
/// The result is the highlight box drawn directly over the glyph. A zero
/// border width returns the frame unchanged.
pub fn inset(frame: Option<Frame>, border_width: f64) -> Option<Frame> {
    frame.map(|frame| {
        Frame::new(
            Position::new(
                frame.origin.x + border_width,
                frame.origin.y + border_width,
            ),
            Size::clamped(
                frame.size.width - 2.0 * border_width,
                frame.size.height - 2.0 * border_width,
            ),
        )
    })
}
