//! Dialect transcoders
//!
//! Six pure `&SourceDocument -> TargetDocument` functions, one per
//! directed pair of dialects. None of them perform I/O or validation;
//! detection and output validation live in [`crate::dispatch`]. The
//! defaulting and clamping rules intentionally differ per direction and
//! are not shared across converters.

mod he_to_oh;
mod he_versions;
mod oh_to_he;

pub use he_to_oh::{he_v1_to_oh, he_v2_to_oh};
pub use he_versions::{he_v1_to_v2, he_v2_to_v1};
pub use oh_to_he::{oh_to_he_v1, oh_to_he_v2};

use crate::grouping::TRANSIENT_FOOTPRINT_MS;
use crate::types::{CurvePoint, EventType};
use serde_json::Number;

/// Number of points in the synthesized default curve.
const DEFAULT_CURVE_POINTS: i64 = 4;

/// The curve emitted for a continuous OH event that carries none:
/// four points at times 0..4, intensity 100, frequency 0, satisfying
/// the HE minimum-curve-point requirement.
pub(crate) fn default_curve() -> Vec<CurvePoint> {
    (0..DEFAULT_CURVE_POINTS)
        .map(|time| CurvePoint {
            time,
            intensity: Some(Number::from(100)),
            frequency: Some(Number::from(0)),
        })
        .collect()
}

/// End of an event on the timeline, for grouping gap computation only.
/// Transients use the fixed nominal footprint.
pub(crate) fn event_end(event_type: EventType, start: i64, duration: Option<i64>) -> i64 {
    match event_type {
        EventType::Continuous => start + duration.unwrap_or(0),
        EventType::Transient => start + TRANSIENT_FOOTPRINT_MS,
    }
}
