//! HE to OH conversions
//!
//! OH carries the strict numeric contract, so values are clamped on the
//! way in. The two paths are deliberately asymmetric: v1 input is
//! treated as already sanitized (intensity/frequency clamps only, absent
//! curve becomes an empty sequence), while v2 input defensively clamps
//! every numeric field including duration and curve times.

use crate::normalizer::{clamp_int, clamp_number};
use crate::types::{
    CurvePoint, EventType, HeV1Document, HeV2Document, OhChannel, OhChannelParameters,
    OhDocument, OhEvent, OhEventParameters, OhMetadata, OhPatternEntry,
};
use serde_json::Number;

/// Maximum events per generated OH channel.
const CHANNEL_EVENT_MAX: usize = 128;

/// Maximum channels in a generated OH document.
const CHANNEL_MAX: usize = 3;

fn oh_metadata() -> OhMetadata {
    OhMetadata {
        version: 1.0,
        channel_number: 1,
    }
}

fn clamped_or(value: Option<&Number>, default: i64, min: i64, max: i64) -> Number {
    match value {
        Some(v) => clamp_number(v, min, max),
        None => Number::from(default),
    }
}

/// Wrap a flat HE v1 pattern into a single OH channel at index 0.
/// Relative times are copied verbatim as start times.
pub fn he_v1_to_oh(doc: &HeV1Document) -> OhDocument {
    let mut pattern = Vec::new();

    for event in &doc.pattern {
        let mut parameters = OhEventParameters {
            intensity: event
                .parameters
                .intensity
                .as_ref()
                .map(|v| clamp_number(v, 0, 100)),
            frequency: Some(clamped_or(
                event.parameters.frequency.as_ref(),
                50,
                -100,
                100,
            )),
            curve: None,
        };
        let mut duration = None;

        if event.event_type == EventType::Continuous {
            duration = event.duration;
            // Absent curves become an empty sequence; no default-curve
            // synthesis on this path.
            parameters.curve = Some(
                event
                    .parameters
                    .curve
                    .as_deref()
                    .unwrap_or(&[])
                    .iter()
                    .map(|point| CurvePoint {
                        time: point.time,
                        intensity: Some(clamped_or(point.intensity.as_ref(), 100, 0, 100)),
                        frequency: Some(clamped_or(point.frequency.as_ref(), 0, -100, 100)),
                    })
                    .collect(),
            );
        }

        pattern.push(OhPatternEntry {
            event: OhEvent {
                event_type: event.event_type,
                start_time: event.relative_time,
                duration,
                parameters,
            },
        });
    }

    OhDocument {
        metadata: oh_metadata(),
        channels: vec![OhChannel {
            parameters: OhChannelParameters { index: 0 },
            pattern,
        }],
    }
}

/// Flatten HE v2 groups to absolute time, sort, and distribute across up
/// to three OH channels.
pub fn he_v2_to_oh(doc: &HeV2Document) -> OhDocument {
    let mut entries: Vec<OhPatternEntry> = Vec::new();

    for group in &doc.pattern_list {
        for event in &group.pattern {
            let start_time = group.absolute_time + event.relative_time;
            let parameters = OhEventParameters {
                intensity: Some(clamped_or(event.parameters.intensity.as_ref(), 100, 0, 100)),
                frequency: Some(clamped_or(
                    event.parameters.frequency.as_ref(),
                    50,
                    -100,
                    100,
                )),
                curve: match event.event_type {
                    EventType::Continuous => Some(
                        event
                            .parameters
                            .curve
                            .as_deref()
                            .unwrap_or(&[])
                            .iter()
                            .map(|point| CurvePoint {
                                time: clamp_int(point.time, 0, 10_000),
                                intensity: Some(clamped_or(point.intensity.as_ref(), 100, 0, 100)),
                                frequency: Some(clamped_or(point.frequency.as_ref(), 0, -100, 100)),
                            })
                            .collect(),
                    ),
                    EventType::Transient => None,
                },
            };

            entries.push(OhPatternEntry {
                event: OhEvent {
                    event_type: event.event_type,
                    start_time,
                    duration: match event.event_type {
                        EventType::Continuous => {
                            Some(clamp_int(event.duration.unwrap_or(1000), 1, 5000))
                        }
                        EventType::Transient => None,
                    },
                    parameters,
                },
            });
        }
    }

    // Stable, so simultaneous events keep their flattening order.
    entries.sort_by_key(|entry| entry.event.start_time);

    let mut channels = vec![OhChannel {
        parameters: OhChannelParameters { index: 0 },
        pattern: Vec::new(),
    }];

    for entry in entries {
        // HE v2 defines no per-event channel index; everything lands on
        // channel 0 today, but the bounded search stays in place for a
        // future index field.
        let index = 0;
        if let Some(channel) = channels
            .iter_mut()
            .find(|channel| channel.parameters.index == index)
        {
            if channel.pattern.len() < CHANNEL_EVENT_MAX {
                channel.pattern.push(entry);
            }
        } else if channels.len() < CHANNEL_MAX {
            channels.push(OhChannel {
                parameters: OhChannelParameters { index },
                pattern: vec![entry],
            });
        }
    }

    OhDocument {
        metadata: oh_metadata(),
        channels,
    }
}
