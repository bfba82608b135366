//! Format detection and conversion dispatch
//!
//! The dispatcher ties the pieces together for one document: detect the
//! source dialect by schema, look up the transcoder for the
//! (source, target) pair, run it, and re-validate the result against the
//! target schema. A matching source and target is an identity
//! pass-through with no transcoder involved. Output that fails
//! post-validation is a conversion failure, never silently emitted.

use crate::convert::{
    he_v1_to_oh, he_v1_to_v2, he_v2_to_oh, he_v2_to_v1, oh_to_he_v1, oh_to_he_v2,
};
use crate::error::ConvertError;
use crate::schema::SchemaSet;
use crate::types::{Format, HeV1Document, HeV2Document, OhDocument};
use serde_json::Value;

type Transcoder = fn(&Value) -> Result<Value, ConvertError>;

/// The (source, target) transcoder table. All six directed pairs are
/// populated today; a miss maps to `UnsupportedConversion`.
fn transcoder_for(source: Format, target: Format) -> Option<Transcoder> {
    match (source, target) {
        (Format::Oh, Format::HeV1) => Some(oh_to_he_v1_value),
        (Format::Oh, Format::HeV2) => Some(oh_to_he_v2_value),
        (Format::HeV1, Format::Oh) => Some(he_v1_to_oh_value),
        (Format::HeV1, Format::HeV2) => Some(he_v1_to_v2_value),
        (Format::HeV2, Format::Oh) => Some(he_v2_to_oh_value),
        (Format::HeV2, Format::HeV1) => Some(he_v2_to_v1_value),
        _ => None,
    }
}

fn oh_to_he_v1_value(doc: &Value) -> Result<Value, ConvertError> {
    let parsed: OhDocument = serde_json::from_value(doc.clone())?;
    Ok(serde_json::to_value(oh_to_he_v1(&parsed))?)
}

fn oh_to_he_v2_value(doc: &Value) -> Result<Value, ConvertError> {
    let parsed: OhDocument = serde_json::from_value(doc.clone())?;
    Ok(serde_json::to_value(oh_to_he_v2(&parsed))?)
}

fn he_v1_to_oh_value(doc: &Value) -> Result<Value, ConvertError> {
    let parsed: HeV1Document = serde_json::from_value(doc.clone())?;
    Ok(serde_json::to_value(he_v1_to_oh(&parsed))?)
}

fn he_v1_to_v2_value(doc: &Value) -> Result<Value, ConvertError> {
    let parsed: HeV1Document = serde_json::from_value(doc.clone())?;
    Ok(serde_json::to_value(he_v1_to_v2(&parsed))?)
}

fn he_v2_to_oh_value(doc: &Value) -> Result<Value, ConvertError> {
    let parsed: HeV2Document = serde_json::from_value(doc.clone())?;
    Ok(serde_json::to_value(he_v2_to_oh(&parsed))?)
}

fn he_v2_to_v1_value(doc: &Value) -> Result<Value, ConvertError> {
    let parsed: HeV2Document = serde_json::from_value(doc.clone())?;
    Ok(serde_json::to_value(he_v2_to_v1(&parsed))?)
}

/// Determine a document's source dialect by schema match.
pub fn detect_format(doc: &Value, schemas: &SchemaSet) -> Result<Format, ConvertError> {
    schemas.detect(doc).ok_or(ConvertError::UnrecognizedFormat)
}

/// Convert one document to `target`, validating the output before
/// returning it.
pub fn convert_document(
    doc: &Value,
    target: Format,
    schemas: &SchemaSet,
) -> Result<Value, ConvertError> {
    let source = detect_format(doc, schemas)?;

    let output = if source == target {
        doc.clone()
    } else {
        let transcode = transcoder_for(source, target)
            .ok_or(ConvertError::UnsupportedConversion { from: source, target })?;
        transcode(doc)?
    };

    schemas
        .validate(target, &output)
        .map_err(|reason| ConvertError::OutputValidation { target, reason })?;

    Ok(output)
}
