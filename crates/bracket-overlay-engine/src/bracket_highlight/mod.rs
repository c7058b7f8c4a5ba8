//! # Bracket Highlight
//!
//! Turns the screen rectangles of a matched bracket pair into the rectangles
//! the overlay paints: a guide line connecting the pair, an optional bottom
//! line when the guide is redirected through an elbow, and a highlight box
//! over each visible bracket.
//!
//! ## Pipeline
//!
//! 1. Convert bracket frames and the elbow origin to overlay-local coordinates
//! 2. Classify the pair into a [`BracketVisibility`] case
//! 3. Resolve the guide line for that case ([`resolve_line_rect`])
//! 4. Apply the elbow correction when an elbow is present ([`apply_elbow`])
//! 5. Inset each visible bracket frame into its highlight box ([`inset`])
//!
//! Every call is an independent pure computation. Dimensions are clamped at
//! zero at each arithmetic step instead of being reported as errors.

pub mod boxes;
pub mod invariants;
pub mod models;
pub mod resolver;
pub mod visibility;

pub use boxes::inset;
pub use models::{BracketHighlightInput, BracketHighlightResult, BracketPair, Elbow};
pub use resolver::{apply_elbow, resolve_line_rect};
pub use visibility::BracketVisibility;

use serde::{Deserialize, Serialize};

use crate::geometry::Frame;

/// Thickness of the highlight box border and the guide line.
pub const BORDER_WIDTH: f64 = 1.0;

/// Local x of the overlay's left gutter, where off-screen guide lines are drawn.
pub const LEFT_MARGIN_X: f64 = 16.0;

/// The pixel constants one invocation uses throughout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightStyle {
    pub border_width: f64,
    pub left_margin_x: f64,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            border_width: BORDER_WIDTH,
            left_margin_x: LEFT_MARGIN_X,
        }
    }
}

/// Resolves all highlight rectangles for brackets already in local coordinates.
pub fn resolve_bracket_highlight(
    brackets: BracketPair<Frame>,
    viewport_height: f64,
    elbow: Option<Elbow>,
    style: &HighlightStyle,
) -> BracketHighlightResult {
    let visibility = BracketVisibility::classify(&brackets);
    log::trace!("bracket highlight case: {}", visibility.name());

    let line_rect = resolve_line_rect(&visibility, viewport_height, style);

    let (line_rect, bottom_line_rect) = match elbow {
        Some(elbow) => {
            log::debug!(
                "applying elbow at {:?} (left_most: {}, bottom_line_top: {})",
                elbow.origin,
                elbow.origin_x_left_most,
                elbow.bottom_line_top
            );
            let (line_rect, bottom_line_rect) =
                apply_elbow(line_rect, brackets.last, viewport_height, &elbow, style);
            (line_rect, Some(bottom_line_rect))
        }
        None => (line_rect, None),
    };

    let result = BracketHighlightResult {
        line_rect,
        bottom_line_rect,
        first_box_rect: inset(brackets.first, style.border_width),
        last_box_rect: inset(brackets.last, style.border_width),
    };

    debug_assert!(
        invariants::violation(&result).is_none(),
        "{:?}",
        invariants::violation(&result)
    );

    result
}

/// Runs the full pipeline on a locator update in global coordinates.
pub fn compute_bracket_highlight(
    input: &BracketHighlightInput,
    style: &HighlightStyle,
) -> BracketHighlightResult {
    let reference_origin = input.reference_origin;
    let brackets = input
        .brackets
        .map(|frame| frame.to_local(&reference_origin));
    let elbow = input.elbow.map(|elbow| elbow.to_local(&reference_origin));

    resolve_bracket_highlight(brackets, input.viewport_height, elbow, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_neither_visible_has_no_boxes() {
        let result =
            resolve_bracket_highlight(BracketPair::default(), 600.0, None, &Default::default());

        assert_eq!(
            result,
            BracketHighlightResult {
                line_rect: Frame::from_xywh(LEFT_MARGIN_X, 0.0, 0.0, 600.0),
                bottom_line_rect: None,
                first_box_rect: None,
                last_box_rect: None,
            }
        );
    }

    #[test]
    fn test_compute_converts_to_local_first() {
        let origin = Position::new(1000.0, 500.0);
        let input = BracketHighlightInput {
            brackets: BracketPair::new(
                Some(Frame::from_xywh(1010.0, 550.0, 8.0, 14.0)),
                Some(Frame::from_xywh(1040.0, 550.0, 8.0, 14.0)),
            ),
            reference_origin: origin,
            viewport_height: 600.0,
            elbow: None,
        };

        let result = compute_bracket_highlight(&input, &HighlightStyle::default());

        assert_eq!(result.line_rect, Frame::from_xywh(18.0, 63.0, 22.0, 0.0));
        assert_eq!(
            result.first_box_rect,
            Some(Frame::from_xywh(11.0, 51.0, 6.0, 12.0))
        );
        assert_eq!(
            result.last_box_rect,
            Some(Frame::from_xywh(41.0, 51.0, 6.0, 12.0))
        );
    }

    #[test]
    fn test_compute_converts_elbow_origin() {
        let origin = Position::new(1000.0, 500.0);
        let input = BracketHighlightInput {
            brackets: BracketPair::new(
                Some(Frame::from_xywh(1064.0, 520.0, 8.0, 14.0)),
                Some(Frame::from_xywh(1064.0, 700.0, 8.0, 14.0)),
            ),
            reference_origin: origin,
            viewport_height: 600.0,
            elbow: Some(Elbow::new(Position::new(1024.0, 700.0))),
        };

        let result = compute_bracket_highlight(&input, &HighlightStyle::default());

        assert_eq!(result.line_rect, Frame::from_xywh(24.0, 33.0, 40.0, 167.0));
        assert_eq!(
            result.bottom_line_rect,
            Some(Frame::from_xywh(24.0, 200.0, 40.0, 14.0))
        );
    }

    #[test]
    fn test_custom_style_is_used_consistently() {
        let style = HighlightStyle {
            border_width: 2.0,
            left_margin_x: 5.0,
        };
        let first = Frame::from_xywh(80.0, 100.0, 8.0, 14.0);

        let result = resolve_bracket_highlight(
            BracketPair::new(Some(first), None),
            600.0,
            Some(Elbow::left_most(400.0)),
            &style,
        );

        assert_eq!(result.line_rect.origin, Position::new(5.0, 112.0));
        assert_eq!(result.line_rect.size.width, 75.0);
        assert_eq!(result.bottom_line_rect.unwrap().origin.x, 5.0);
        assert_eq!(
            result.first_box_rect,
            Some(Frame::from_xywh(82.0, 102.0, 4.0, 10.0))
        );
    }
}
