//! Document models for the three haptic JSON dialects
//!
//! Wire field names are part of the format contract and are bound exactly,
//! including the casing split between the OH root (`MetaData`) and the HE
//! roots (`Metadata`). Optional wire fields are modeled as `Option` and
//! skipped on serialization, so a field absent on read stays absent on
//! write unless a converter's defaulting rules say otherwise.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Dialect tag used by detection, dispatch, and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Oh,
    HeV1,
    HeV2,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Oh => "oh",
            Format::HeV1 => "he_v1",
            Format::HeV2 => "he_v2",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Haptic event kind, shared by all three dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Transient,
    Continuous,
}

/// One sample of a continuous event's intensity/frequency envelope.
///
/// `Intensity` and `Frequency` may be absent in source documents; each
/// converter applies its own absence defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    #[serde(rename = "Time")]
    pub time: i64,
    #[serde(rename = "Intensity", skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Number>,
    #[serde(rename = "Frequency", skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Number>,
}

/// Event parameters as carried by the HE dialects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeParameters {
    #[serde(rename = "Intensity", skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Number>,
    #[serde(rename = "Frequency", skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Number>,
    #[serde(rename = "Curve", skip_serializing_if = "Option::is_none")]
    pub curve: Option<Vec<CurvePoint>>,
}

/// One HE event. In v1 documents `RelativeTime` is relative to the start
/// of the whole pattern; in v2 documents it is relative to the enclosing
/// group's `AbsoluteTime`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeEvent {
    #[serde(rename = "Type")]
    pub event_type: EventType,
    #[serde(rename = "RelativeTime")]
    pub relative_time: i64,
    #[serde(rename = "Duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(rename = "Parameters")]
    pub parameters: HeParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeMetadata {
    #[serde(rename = "Version")]
    pub version: i64,
}

/// HE v1 root: a flat, relative-time event list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeV1Document {
    #[serde(rename = "Metadata")]
    pub metadata: HeMetadata,
    #[serde(rename = "Pattern")]
    pub pattern: Vec<HeEvent>,
}

/// One HE v2 time bucket: at most 16 events, times relative to
/// `AbsoluteTime`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HePatternGroup {
    #[serde(rename = "AbsoluteTime")]
    pub absolute_time: i64,
    #[serde(rename = "Pattern")]
    pub pattern: Vec<HeEvent>,
}

/// HE v2 root: an ordered list of time-bucketed groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeV2Document {
    #[serde(rename = "Metadata")]
    pub metadata: HeMetadata,
    #[serde(rename = "PatternList")]
    pub pattern_list: Vec<HePatternGroup>,
}

/// OH root metadata. Generated documents always carry `Version: 1.0` and
/// `ChannelNumber: 1`, even when events are distributed into more than
/// one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhMetadata {
    #[serde(rename = "Version")]
    pub version: f64,
    #[serde(rename = "ChannelNumber")]
    pub channel_number: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhChannelParameters {
    #[serde(rename = "Index")]
    pub index: i64,
}

/// Event parameters as carried by OH documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhEventParameters {
    #[serde(rename = "Intensity", skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Number>,
    #[serde(rename = "Frequency", skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Number>,
    #[serde(rename = "Curve", skip_serializing_if = "Option::is_none")]
    pub curve: Option<Vec<CurvePoint>>,
}

/// One OH event with an absolute start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhEvent {
    #[serde(rename = "Type")]
    pub event_type: EventType,
    #[serde(rename = "StartTime")]
    pub start_time: i64,
    #[serde(rename = "Duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(rename = "Parameters")]
    pub parameters: OhEventParameters,
}

/// OH wraps each event in a single-key `Event` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhPatternEntry {
    #[serde(rename = "Event")]
    pub event: OhEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhChannel {
    #[serde(rename = "Parameters")]
    pub parameters: OhChannelParameters,
    #[serde(rename = "Pattern")]
    pub pattern: Vec<OhPatternEntry>,
}

/// OH root: multi-channel, absolute-time document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhDocument {
    #[serde(rename = "MetaData")]
    pub metadata: OhMetadata,
    #[serde(rename = "Channels")]
    pub channels: Vec<OhChannel>,
}
