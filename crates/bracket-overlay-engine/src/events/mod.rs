//! Wire shape of a bracket locator update, as delivered over the IPC channel.
//!
//! The channel itself lives elsewhere. This module only owns the JSON shape and
//! its validation into a [`BracketHighlightInput`].

use serde::{Deserialize, Serialize};

use crate::bracket_highlight::{BracketHighlightInput, BracketPair, Elbow};
use crate::geometry::{Frame, Position};

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Malformed bracket highlight event: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Elbow has no origin but is not snapped to the left margin")]
    MissingElbowOrigin,
    #[error("Invalid viewport height: {0}")]
    InvalidViewportHeight(f64),
    #[error("Non-finite geometry in {0}")]
    NonFiniteGeometry(&'static str),
}

/// Elbow as the locator sends it. `origin` may be omitted when snapping to the left margin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElbowEvent {
    #[serde(default)]
    pub origin: Option<Position>,
    #[serde(default)]
    pub origin_x_left_most: bool,
    #[serde(default)]
    pub bottom_line_top: bool,
}

/// One geometry update from the bracket locator, in global coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BracketHighlightEvent {
    #[serde(default)]
    pub first: Option<Frame>,
    #[serde(default)]
    pub last: Option<Frame>,
    #[serde(default)]
    pub reference_origin: Position,
    pub viewport_height: f64,
    #[serde(default)]
    pub elbow: Option<ElbowEvent>,
}

impl BracketHighlightEvent {
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_input(self) -> Result<BracketHighlightInput, EventError> {
        BracketHighlightInput::try_from(self)
    }
}

impl TryFrom<BracketHighlightEvent> for BracketHighlightInput {
    type Error = EventError;

    fn try_from(event: BracketHighlightEvent) -> Result<Self, Self::Error> {
        if !event.viewport_height.is_finite() || event.viewport_height < 0.0 {
            return Err(EventError::InvalidViewportHeight(event.viewport_height));
        }
        if !event.reference_origin.is_finite() {
            return Err(EventError::NonFiniteGeometry("reference_origin"));
        }
        if event.first.is_some_and(|frame| !frame.is_finite()) {
            return Err(EventError::NonFiniteGeometry("first"));
        }
        if event.last.is_some_and(|frame| !frame.is_finite()) {
            return Err(EventError::NonFiniteGeometry("last"));
        }

        let elbow = event
            .elbow
            .map(|elbow| elbow_from_event(elbow, &event.reference_origin))
            .transpose()?;

        Ok(BracketHighlightInput {
            brackets: BracketPair::new(event.first, event.last),
            reference_origin: event.reference_origin,
            viewport_height: event.viewport_height,
            elbow,
        })
    }
}

fn elbow_from_event(elbow: ElbowEvent, reference_origin: &Position) -> Result<Elbow, EventError> {
    let origin = match (elbow.origin, elbow.origin_x_left_most) {
        (Some(origin), _) => origin,
        // Snapped elbows carry no position; pin y to the top of the overlay.
        (None, true) => *reference_origin,
        (None, false) => return Err(EventError::MissingElbowOrigin),
    };
    if !origin.is_finite() {
        return Err(EventError::NonFiniteGeometry("elbow"));
    }

    Ok(Elbow {
        origin,
        origin_x_left_most: elbow.origin_x_left_most,
        bottom_line_top: elbow.bottom_line_top,
    })
}
