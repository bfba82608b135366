//! HE v1 ↔ HE v2 conversions
//!
//! Same-capability pair: no defaults and no clamps, so compliant
//! documents round-trip exactly. v1→v2 buckets the flat list with the
//! grouping engine, treating the document-relative times as the absolute
//! timeline; v2→v1 re-bases every event onto a single global timeline.

use crate::grouping::{group_events, TimedEvent};
use crate::types::{
    EventType, HeEvent, HeMetadata, HePatternGroup, HeV1Document, HeV2Document,
};

use super::event_end;

/// Bucket a flat HE v1 pattern into HE v2 groups. Parameters are passed
/// through untouched.
pub fn he_v1_to_v2(doc: &HeV1Document) -> HeV2Document {
    let timed = doc.pattern.iter().map(|event| TimedEvent {
        start: event.relative_time,
        end: event_end(event.event_type, event.relative_time, event.duration),
        payload: event,
    });

    let pattern_list = group_events(timed)
        .into_iter()
        .map(|group| HePatternGroup {
            absolute_time: group.absolute_time,
            pattern: group
                .events
                .into_iter()
                .map(|member| {
                    let event = member.payload;
                    HeEvent {
                        event_type: event.event_type,
                        relative_time: member.relative_time,
                        duration: match event.event_type {
                            EventType::Continuous => event.duration,
                            EventType::Transient => None,
                        },
                        parameters: event.parameters.clone(),
                    }
                })
                .collect(),
        })
        .collect();

    HeV2Document {
        metadata: HeMetadata { version: 2 },
        pattern_list,
    }
}

/// Flatten HE v2 groups into a single relative-time list. Pure
/// re-basing; everything else is copied through unchanged.
pub fn he_v2_to_v1(doc: &HeV2Document) -> HeV1Document {
    let mut pattern = Vec::new();

    for group in &doc.pattern_list {
        for event in &group.pattern {
            let mut flattened = event.clone();
            flattened.relative_time = event.relative_time + group.absolute_time;
            pattern.push(flattened);
        }
    }

    HeV1Document {
        metadata: HeMetadata { version: 1 },
        pattern,
    }
}
