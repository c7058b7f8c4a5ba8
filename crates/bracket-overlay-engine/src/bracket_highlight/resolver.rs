use crate::geometry::{Frame, Position, Size, non_negative};

use super::HighlightStyle;
use super::models::Elbow;
use super::visibility::BracketVisibility;

/// Computes the guide line rectangle for one visibility case.
///
/// All frames are local. Dimensions are floored at zero at every step.
pub fn resolve_line_rect(
    visibility: &BracketVisibility,
    viewport_height: f64,
    style: &HighlightStyle,
) -> Frame {
    match *visibility {
        // Horizontal run along the bottom edge, between the two glyphs.
        BracketVisibility::SameLine { first, last } => Frame::new(
            Position::new(first.max_x(), first.max_y() - style.border_width),
            Size::clamped(last.min_x() - first.max_x(), 0.0),
        ),
        BracketVisibility::OnlyFirst(first) => {
            let y = first.max_y() - style.border_width;
            Frame::new(
                Position::new(first.min_x().min(style.left_margin_x), y),
                Size::clamped(first.min_x() - style.left_margin_x, viewport_height - y),
            )
        }
        BracketVisibility::OnlyLast(last) => Frame::new(
            Position::new(last.min_x(), 0.0),
            Size::clamped(0.0, last.min_y()),
        ),
        BracketVisibility::Neither => Frame::new(
            Position::new(style.left_margin_x, 0.0),
            Size::clamped(0.0, viewport_height),
        ),
        BracketVisibility::BothDifferentLines { first, last } => {
            let left = first.min_x().min(last.min_x());
            let right = first.min_x().max(last.min_x());
            let y = first.max_y() - style.border_width;
            Frame::new(
                Position::new(left, y),
                Size::clamped(right - left, last.min_y() - y),
            )
        }
    }
}

/// Redirects the guide line through the elbow and derives the bottom line.
///
/// Returns `(line_rect, bottom_line_rect)`. The bottom line starts where the
/// corrected line ends and runs to the closing bracket, or down to the
/// viewport bottom when the closing bracket is off screen.
pub fn apply_elbow(
    line_rect: Frame,
    last: Option<Frame>,
    viewport_height: f64,
    elbow: &Elbow,
    style: &HighlightStyle,
) -> (Frame, Frame) {
    let elbow_x = if elbow.origin_x_left_most {
        style.left_margin_x
    } else {
        elbow.origin.x
    };

    let line_rect = Frame::new(
        Position::new(elbow_x, line_rect.origin.y),
        Size::clamped(
            line_rect.size.width + non_negative(line_rect.origin.x - elbow_x),
            elbow.origin.y - line_rect.origin.y,
        ),
    );

    let bottom_y = line_rect.max_y();
    let bottom_size = match last {
        Some(last) => {
            let anchor = if elbow.bottom_line_top {
                style.border_width
            } else {
                last.size.height
            };
            Size::clamped(
                last.min_x() - elbow_x,
                non_negative(last.min_y() - bottom_y) + anchor,
            )
        }
        None => Size::clamped(0.0, viewport_height - bottom_y),
    };
    let bottom_line_rect = Frame::new(Position::new(elbow_x, bottom_y), bottom_size);

    (line_rect, bottom_line_rect)
}
