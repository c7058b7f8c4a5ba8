//! UniFFI bindings for native bracket-overlay windows
//!
//! Lets the overlay window (Swift on macOS, Kotlin elsewhere) hand the bracket
//! locator's frames straight to the Rust engine and paint the returned
//! rectangles without any coordinate math of its own.

use bracket_overlay_engine::{
    BracketHighlightInput, BracketHighlightResult, BracketPair, EventError, Frame,
    HighlightStyle, Position, Size,
    events::{BracketHighlightEvent, ElbowEvent},
};
use std::sync::Mutex;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl From<EventError> for FfiError {
    fn from(e: EventError) -> Self {
        FfiError::InvalidInput {
            reason: e.to_string(),
        }
    }
}

// ============ DTOs ============

#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct PositionDto {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct SizeDto {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct FrameDto {
    pub origin: PositionDto,
    pub size: SizeDto,
}

/// Elbow anchor. `origin` may be omitted only when `origin_x_left_most` is set.
#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct ElbowDto {
    pub origin: Option<PositionDto>,
    pub origin_x_left_most: bool,
    pub bottom_line_top: bool,
}

/// One bracket locator update, in global (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct BracketHighlightInputDto {
    /// Opening bracket frame, absent when scrolled out of view
    pub first: Option<FrameDto>,
    /// Closing bracket frame, absent when scrolled out of view
    pub last: Option<FrameDto>,
    /// Global top-left of the overlay window
    pub reference_origin: PositionDto,
    pub viewport_height: f64,
    pub elbow: Option<ElbowDto>,
}

/// Rectangles to paint, already in the overlay window's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct BracketHighlightResultDto {
    pub line_rect: FrameDto,
    pub bottom_line_rect: Option<FrameDto>,
    pub first_box_rect: Option<FrameDto>,
    pub last_box_rect: Option<FrameDto>,
}

impl From<PositionDto> for Position {
    fn from(dto: PositionDto) -> Self {
        Position::new(dto.x, dto.y)
    }
}

impl From<FrameDto> for Frame {
    fn from(dto: FrameDto) -> Self {
        Frame::new(dto.origin.into(), Size::new(dto.size.width, dto.size.height))
    }
}

impl FrameDto {
    fn from_engine(frame: Frame) -> Self {
        Self {
            origin: PositionDto {
                x: frame.origin.x,
                y: frame.origin.y,
            },
            size: SizeDto {
                width: frame.size.width,
                height: frame.size.height,
            },
        }
    }
}

impl BracketHighlightInputDto {
    /// Validates through the same path as JSON events from the locator.
    fn to_engine(self) -> Result<BracketHighlightInput, FfiError> {
        let event = BracketHighlightEvent {
            first: self.first.map(Frame::from),
            last: self.last.map(Frame::from),
            reference_origin: self.reference_origin.into(),
            viewport_height: self.viewport_height,
            elbow: self.elbow.map(|elbow| ElbowEvent {
                origin: elbow.origin.map(Position::from),
                origin_x_left_most: elbow.origin_x_left_most,
                bottom_line_top: elbow.bottom_line_top,
            }),
        };
        Ok(event.into_input()?)
    }
}

impl BracketHighlightResultDto {
    fn from_engine(result: BracketHighlightResult) -> Self {
        Self {
            line_rect: FrameDto::from_engine(result.line_rect),
            bottom_line_rect: result.bottom_line_rect.map(FrameDto::from_engine),
            first_box_rect: result.first_box_rect.map(FrameDto::from_engine),
            last_box_rect: result.last_box_rect.map(FrameDto::from_engine),
        }
    }
}

// ============ Overlay Handle ============

struct HandleState {
    style: HighlightStyle,
    last_input: Option<BracketHighlightInput>,
}

/// A handle owned by one overlay window.
///
/// Remembers the last update so the window only repaints when the geometry
/// actually changed.
#[derive(uniffi::Object)]
pub struct OverlayHandle {
    inner: Mutex<HandleState>,
}

#[uniffi::export]
impl OverlayHandle {
    /// Create a handle with the given pixel constants.
    #[uniffi::constructor]
    pub fn new(border_width: f64, left_margin_x: f64) -> Result<Self, FfiError> {
        if !border_width.is_finite() || border_width < 0.0 || !left_margin_x.is_finite() {
            return Err(FfiError::InvalidInput {
                reason: format!(
                    "border width {border_width} / left margin {left_margin_x} out of range"
                ),
            });
        }

        Ok(Self {
            inner: Mutex::new(HandleState {
                style: HighlightStyle {
                    border_width,
                    left_margin_x,
                },
                last_input: None,
            }),
        })
    }

    /// Recompute for a new update. Returns `None` when nothing changed since the last call.
    pub fn update(
        &self,
        input: BracketHighlightInputDto,
    ) -> Result<Option<BracketHighlightResultDto>, FfiError> {
        let input = input.to_engine()?;

        // Recover from poisoned mutex (another thread panicked while holding lock)
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if state.last_input == Some(input) {
            return Ok(None);
        }
        state.last_input = Some(input);

        let result = bracket_overlay_engine::compute_bracket_highlight(&input, &state.style);
        Ok(Some(BracketHighlightResultDto::from_engine(result)))
    }

    /// Forget the last update, so the next one always produces a result.
    pub fn reset(&self) {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.last_input = None;
    }
}

// ============ Standalone Functions ============

/// Compute highlight rectangles for one update with the default style.
#[uniffi::export]
pub fn compute_bracket_highlight(
    input: BracketHighlightInputDto,
) -> Result<BracketHighlightResultDto, FfiError> {
    let input = input.to_engine()?;
    log::debug!("ffi compute for {:?}", input.brackets);
    let result =
        bracket_overlay_engine::compute_bracket_highlight(&input, &HighlightStyle::default());
    Ok(BracketHighlightResultDto::from_engine(result))
}

/// Both sides of a pair as DTOs, for callers that only need the boxes.
#[uniffi::export]
pub fn highlight_boxes(
    first: Option<FrameDto>,
    last: Option<FrameDto>,
    border_width: f64,
) -> Vec<FrameDto> {
    let pair = BracketPair::new(first.map(Frame::from), last.map(Frame::from));
    [pair.first, pair.last]
        .into_iter()
        .filter_map(|frame| bracket_overlay_engine::inset(frame, border_width))
        .map(FrameDto::from_engine)
        .collect()
}
