use crate::geometry::Frame;

use super::models::BracketHighlightResult;

/// Describes the first rectangle with a negative or NaN dimension, if any.
pub fn violation(result: &BracketHighlightResult) -> Option<String> {
    let named = [
        ("line_rect", Some(result.line_rect)),
        ("bottom_line_rect", result.bottom_line_rect),
        ("first_box_rect", result.first_box_rect),
        ("last_box_rect", result.last_box_rect),
    ];

    named.into_iter().find_map(|(name, frame)| {
        frame
            .filter(|frame| !has_valid_size(frame))
            .map(|frame| format!("{name} has a negative or NaN size: {frame:?}"))
    })
}

/// Validates engine output invariants.
///
/// Asserts that every returned width and height is `>= 0` (and not NaN).
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(result: &BracketHighlightResult) {
    if let Some(message) = violation(result) {
        panic!("{message}");
    }
}

fn has_valid_size(frame: &Frame) -> bool {
    frame.size.width >= 0.0 && frame.size.height >= 0.0
}
