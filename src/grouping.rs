//! Time-bucketing of absolute-time event sequences
//!
//! Partitions a time-ordered event sequence into the bounded groups that
//! back HE v2's `PatternList`. A single left-to-right pass, no
//! backtracking: a new group opens when the current one is full, when the
//! incoming event's start is more than [`GROUP_GAP_MAX_MS`] past the
//! running end of the previous event, or when no group is open yet. The
//! running last-end is carried across group boundaries, not reset.

/// Maximum number of events per group.
pub const GROUP_EVENT_MAX: usize = 16;

/// Largest start-to-previous-end gap kept inside one group. The
/// comparison is strict, so a gap of exactly 1000 ms does not split.
pub const GROUP_GAP_MAX_MS: i64 = 1000;

/// Nominal footprint of a transient event, used only for gap
/// computation and never emitted.
pub const TRANSIENT_FOOTPRINT_MS: i64 = 48;

/// One input event on the absolute timeline.
#[derive(Debug, Clone)]
pub struct TimedEvent<T> {
    pub start: i64,
    pub end: i64,
    pub payload: T,
}

/// A group member with its start re-based to the group's absolute time.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedEvent<T> {
    pub relative_time: i64,
    pub payload: T,
}

/// One output bucket: `absolute_time` is the start of its first event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventGroup<T> {
    pub absolute_time: i64,
    pub events: Vec<GroupedEvent<T>>,
}

/// Partition `events` (ordered by start time) into bounded groups.
pub fn group_events<T>(events: impl IntoIterator<Item = TimedEvent<T>>) -> Vec<EventGroup<T>> {
    let mut groups = Vec::new();
    let mut current: Option<EventGroup<T>> = None;
    let mut last_end: Option<i64> = None;

    for event in events {
        let needs_new_group = match &current {
            None => true,
            Some(group) => {
                group.events.len() >= GROUP_EVENT_MAX
                    || last_end.is_some_and(|end| event.start - end > GROUP_GAP_MAX_MS)
            }
        };

        if needs_new_group {
            if let Some(finished) = current.take() {
                groups.push(finished);
            }
            current = Some(EventGroup {
                absolute_time: event.start,
                events: Vec::new(),
            });
        }

        if let Some(group) = current.as_mut() {
            group.events.push(GroupedEvent {
                relative_time: event.start - group.absolute_time,
                payload: event.payload,
            });
        }
        last_end = Some(event.end);
    }

    if let Some(open) = current {
        groups.push(open);
    }
    groups
}
