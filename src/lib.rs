//! hapticonv - bidirectional transcoding between haptic effect JSON dialects
//!
//! Converts between the multi-channel, absolute-time OH haptic format and
//! the two single-stream HE formats: v1 (flat relative-time event list)
//! and v2 (time-bucketed event groups). Each conversion runs through a
//! deterministic pipeline: format detection by schema → dialect
//! transcoding → output schema validation.
//!
//! ## Modules
//!
//! - **types**: serde document models for the three dialects
//! - **convert**: the six directed dialect transcoders
//! - **grouping**: the time-bucketing engine behind HE v2
//! - **normalizer**: boundary clamps for the OH numeric contract
//! - **schema**/**dispatch**: schema set, detection, and dispatch
//! - **pipeline**: file and directory batch driver

pub mod convert;
pub mod dispatch;
pub mod error;
pub mod grouping;
pub mod normalizer;
pub mod pipeline;
pub mod schema;
pub mod types;

pub use dispatch::{convert_document, detect_format};
pub use error::ConvertError;
pub use schema::SchemaSet;
pub use types::Format;

/// Converter version embedded in CLI `--version` output
pub const HAPTICONV_VERSION: &str = env!("CARGO_PKG_VERSION");
