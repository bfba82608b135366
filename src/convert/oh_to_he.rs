//! OH to HE conversions
//!
//! Both directions flatten the OH channels channel-major, preserving
//! per-channel event order. No clamping happens on this side; the HE
//! dialects accept unrestricted values. The two paths default absent
//! curve-point fields differently (v1: intensity 0, v2: intensity 100)
//! and only the v2 path defaults an absent event frequency to 50.

use crate::grouping::{group_events, TimedEvent};
use crate::types::{
    CurvePoint, EventType, HeEvent, HeMetadata, HeParameters, HePatternGroup, HeV1Document,
    HeV2Document, OhDocument, OhEvent,
};
use serde_json::Number;

use super::{default_curve, event_end};

/// Flatten an OH document into a flat HE v1 pattern. Start times are
/// copied verbatim as relative times; no re-basing happens.
pub fn oh_to_he_v1(doc: &OhDocument) -> HeV1Document {
    let mut pattern = Vec::new();

    for channel in &doc.channels {
        for entry in &channel.pattern {
            let event = &entry.event;
            let mut parameters = HeParameters {
                intensity: event.parameters.intensity.clone(),
                frequency: event.parameters.frequency.clone(),
                curve: None,
            };
            let mut duration = None;

            if event.event_type == EventType::Continuous {
                duration = event.duration;
                parameters.curve = Some(match &event.parameters.curve {
                    Some(points) => points
                        .iter()
                        .map(|point| CurvePoint {
                            time: point.time,
                            intensity: Some(
                                point.intensity.clone().unwrap_or_else(|| Number::from(0)),
                            ),
                            frequency: Some(
                                point.frequency.clone().unwrap_or_else(|| Number::from(0)),
                            ),
                        })
                        .collect(),
                    None => default_curve(),
                });
            }

            pattern.push(HeEvent {
                event_type: event.event_type,
                relative_time: event.start_time,
                duration,
                parameters,
            });
        }
    }

    HeV1Document {
        metadata: HeMetadata { version: 1 },
        pattern,
    }
}

/// Flatten an OH document channel-major and bucket it into HE v2 groups.
pub fn oh_to_he_v2(doc: &OhDocument) -> HeV2Document {
    let timed = doc
        .channels
        .iter()
        .flat_map(|channel| channel.pattern.iter())
        .map(|entry| {
            let event = &entry.event;
            TimedEvent {
                start: event.start_time,
                end: event_end(event.event_type, event.start_time, event.duration),
                payload: event,
            }
        });

    let pattern_list = group_events(timed)
        .into_iter()
        .map(|group| HePatternGroup {
            absolute_time: group.absolute_time,
            pattern: group
                .events
                .into_iter()
                .map(|member| he_v2_event(member.payload, member.relative_time))
                .collect(),
        })
        .collect();

    HeV2Document {
        metadata: HeMetadata { version: 2 },
        pattern_list,
    }
}

fn he_v2_event(event: &OhEvent, relative_time: i64) -> HeEvent {
    let mut parameters = HeParameters {
        intensity: event.parameters.intensity.clone(),
        frequency: Some(
            event
                .parameters
                .frequency
                .clone()
                .unwrap_or_else(|| Number::from(50)),
        ),
        curve: None,
    };
    let mut duration = None;

    if event.event_type == EventType::Continuous {
        duration = event.duration;
        parameters.curve = Some(match &event.parameters.curve {
            // Points carrying neither intensity nor frequency are dropped.
            Some(points) => points
                .iter()
                .filter(|point| point.intensity.is_some() || point.frequency.is_some())
                .map(|point| CurvePoint {
                    time: point.time,
                    intensity: Some(point.intensity.clone().unwrap_or_else(|| Number::from(100))),
                    frequency: Some(point.frequency.clone().unwrap_or_else(|| Number::from(0))),
                })
                .collect(),
            None => default_curve(),
        });
    }

    HeEvent {
        event_type: event.event_type,
        relative_time,
        duration,
        parameters,
    }
}
