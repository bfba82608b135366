//! Error types for hapticonv

use crate::types::Format;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading schemas or converting documents.
///
/// `SchemaLoad` is fatal for a whole run; every other variant is scoped
/// to a single input file, and batch processing continues past it.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to load schema {}: {reason}", path.display())]
    SchemaLoad { path: PathBuf, reason: String },

    #[error("input is not a valid JSON document: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("document matches none of the known haptic formats")]
    UnrecognizedFormat,

    #[error("no conversion path from {from} to {target}")]
    UnsupportedConversion { from: Format, target: Format },

    #[error("converted document failed {target} schema validation: {reason}")]
    OutputValidation { target: Format, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
