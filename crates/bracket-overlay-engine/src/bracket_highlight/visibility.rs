use crate::geometry::Frame;

use super::models::BracketPair;

/// Which brackets of a pair are on screen, and how they relate.
///
/// Computed once per invocation. Every case carries the frames it needs, so
/// the resolver never re-checks an `Option`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BracketVisibility {
    /// Both visible with the same top edge.
    SameLine { first: Frame, last: Frame },
    OnlyFirst(Frame),
    OnlyLast(Frame),
    /// Both scrolled out of view.
    Neither,
    BothDifferentLines { first: Frame, last: Frame },
}

impl BracketVisibility {
    pub fn classify(brackets: &BracketPair<Frame>) -> Self {
        match (brackets.first, brackets.last) {
            // Frames come from pixel-aligned glyph rects, so exact equality is intended.
            (Some(first), Some(last)) if first.origin.y == last.origin.y => {
                BracketVisibility::SameLine { first, last }
            }
            (Some(first), Some(last)) => BracketVisibility::BothDifferentLines { first, last },
            (Some(first), None) => BracketVisibility::OnlyFirst(first),
            (None, Some(last)) => BracketVisibility::OnlyLast(last),
            (None, None) => BracketVisibility::Neither,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BracketVisibility::SameLine { .. } => "same_line",
            BracketVisibility::OnlyFirst(_) => "only_first",
            BracketVisibility::OnlyLast(_) => "only_last",
            BracketVisibility::Neither => "neither",
            BracketVisibility::BothDifferentLines { .. } => "both_different_lines",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at_y(y: f64) -> Frame {
        Frame::from_xywh(10.0, y, 8.0, 14.0)
    }

    #[rstest]
    #[case(Some(at_y(50.0)), Some(at_y(50.0)), "same_line")]
    #[case(Some(at_y(50.0)), Some(at_y(90.0)), "both_different_lines")]
    #[case(Some(at_y(50.0)), None, "only_first")]
    #[case(None, Some(at_y(50.0)), "only_last")]
    #[case(None, None, "neither")]
    fn test_classify(
        #[case] first: Option<Frame>,
        #[case] last: Option<Frame>,
        #[case] expected: &str,
    ) {
        let visibility = BracketVisibility::classify(&BracketPair::new(first, last));
        assert_eq!(visibility.name(), expected);
    }

    #[test]
    fn test_same_line_ignores_x_and_height() {
        let first = Frame::from_xywh(10.0, 50.0, 8.0, 14.0);
        let last = Frame::from_xywh(400.0, 50.0, 9.0, 20.0);
        let visibility = BracketVisibility::classify(&BracketPair::new(Some(first), Some(last)));

        assert_eq!(visibility, BracketVisibility::SameLine { first, last });
    }
}
