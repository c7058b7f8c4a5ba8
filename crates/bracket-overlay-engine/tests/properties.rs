use bracket_overlay_engine::bracket_highlight::invariants;
use bracket_overlay_engine::{
    BracketHighlightInput, BracketPair, Elbow, Frame, HighlightStyle, Position,
    compute_bracket_highlight, inset, to_global, to_local,
};
use proptest::prelude::*;

/// Coordinates on a quarter-pixel grid, so offsets add and subtract exactly.
fn arb_coord(range: std::ops::Range<i32>) -> impl Strategy<Value = f64> {
    range.prop_map(|quarters| f64::from(quarters) / 4.0)
}

fn arb_position() -> impl Strategy<Value = Position> {
    (arb_coord(-4_000..8_000), arb_coord(-4_000..8_000)).prop_map(|(x, y)| Position::new(x, y))
}

fn arb_frame() -> impl Strategy<Value = Frame> {
    (arb_position(), arb_coord(0..200), arb_coord(0..200))
        .prop_map(|(origin, width, height)| Frame::from_xywh(origin.x, origin.y, width, height))
}

fn arb_elbow() -> impl Strategy<Value = Elbow> {
    (arb_position(), any::<bool>(), any::<bool>()).prop_map(
        |(origin, origin_x_left_most, bottom_line_top)| Elbow {
            origin,
            origin_x_left_most,
            bottom_line_top,
        },
    )
}

fn arb_style() -> impl Strategy<Value = HighlightStyle> {
    (arb_coord(0..16), arb_coord(0..320)).prop_map(|(border_width, left_margin_x)| {
        HighlightStyle {
            border_width,
            left_margin_x,
        }
    })
}

fn arb_input() -> impl Strategy<Value = BracketHighlightInput> {
    (
        prop::option::of(arb_frame()),
        prop::option::of(arb_frame()),
        arb_position(),
        arb_coord(0..8_000),
        prop::option::of(arb_elbow()),
    )
        .prop_map(
            |(first, last, reference_origin, viewport_height, elbow)| BracketHighlightInput {
                brackets: BracketPair::new(first, last),
                reference_origin,
                viewport_height,
                elbow,
            },
        )
}

proptest! {
    /// No returned rectangle ever has a negative width or height.
    #[test]
    fn prop_sizes_are_non_negative(input in arb_input(), style in arb_style()) {
        let result = compute_bracket_highlight(&input, &style);
        prop_assert_eq!(invariants::violation(&result), None);
    }

    /// Same-line pairs stay non-negative even when the glyphs overlap.
    #[test]
    fn prop_same_line_pairs_are_non_negative(
        first in arb_frame(),
        last_x in arb_coord(-4_000..8_000),
        viewport_height in arb_coord(0..8_000),
    ) {
        let last = Frame::from_xywh(last_x, first.origin.y, first.size.width, first.size.height);
        let input = BracketHighlightInput {
            brackets: BracketPair::new(Some(first), Some(last)),
            reference_origin: Position::ORIGIN,
            viewport_height,
            elbow: None,
        };
        let result = compute_bracket_highlight(&input, &HighlightStyle::default());

        invariants::check(&result);
        prop_assert_eq!(result.line_rect.size.height, 0.0);
    }

    /// Converting to global and back restores the frame exactly.
    #[test]
    fn prop_transform_round_trip(frame in arb_frame(), origin in arb_position()) {
        prop_assert_eq!(to_local(to_global(frame, origin), origin), frame);
    }

    /// A left-most elbow always lands on the style's margin.
    #[test]
    fn prop_left_most_elbow_snaps_to_margin(
        input in arb_input(),
        elbow in arb_elbow(),
        style in arb_style(),
    ) {
        let input = BracketHighlightInput {
            elbow: Some(Elbow { origin_x_left_most: true, ..elbow }),
            ..input
        };
        let result = compute_bracket_highlight(&input, &style);

        prop_assert_eq!(result.line_rect.origin.x, style.left_margin_x);
        prop_assert!(result.bottom_line_rect.is_some());
    }

    /// A zero border width leaves a frame untouched.
    #[test]
    fn prop_zero_inset_is_identity(frame in arb_frame()) {
        prop_assert_eq!(inset(Some(frame), 0.0), Some(frame));
    }

    /// Boxes are produced exactly for the brackets that are visible.
    #[test]
    fn prop_boxes_follow_visibility(input in arb_input()) {
        let result = compute_bracket_highlight(&input, &HighlightStyle::default());

        prop_assert_eq!(result.first_box_rect.is_some(), input.brackets.first.is_some());
        prop_assert_eq!(result.last_box_rect.is_some(), input.brackets.last.is_some());
        prop_assert_eq!(result.bottom_line_rect.is_some(), input.elbow.is_some());
    }
}
