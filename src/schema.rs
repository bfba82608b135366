//! JSON Schema collaborators for the three dialects
//!
//! A [`SchemaSet`] holds one compiled validator per dialect. Sets are
//! built once per run — either from the schemas bundled into the binary
//! or from an external directory — and shared immutably across all
//! conversions. Detection tries the dialects in the fixed order OH,
//! HE v1, HE v2 and picks the first schema that accepts the document.

use crate::error::ConvertError;
use crate::types::Format;
use jsonschema::Validator;
use serde_json::Value;
use std::fs;
use std::path::Path;

pub const OH_SCHEMA: &str = include_str!("../schemas/oh_schema.json");
pub const HE_V1_SCHEMA: &str = include_str!("../schemas/he_v1_schema.json");
pub const HE_V2_SCHEMA: &str = include_str!("../schemas/he_v2_schema.json");

const DETECTION_ORDER: [Format; 3] = [Format::Oh, Format::HeV1, Format::HeV2];

/// Schema file name for a dialect, as expected by [`SchemaSet::load`].
pub fn schema_file_name(format: Format) -> &'static str {
    match format {
        Format::Oh => "oh_schema.json",
        Format::HeV1 => "he_v1_schema.json",
        Format::HeV2 => "he_v2_schema.json",
    }
}

/// Compiled validators for all three dialect schemas.
#[derive(Debug)]
pub struct SchemaSet {
    oh: Validator,
    he_v1: Validator,
    he_v2: Validator,
}

impl SchemaSet {
    /// Compile the schemas shipped with the crate.
    pub fn bundled() -> Result<Self, ConvertError> {
        Ok(Self {
            oh: compile(OH_SCHEMA, Path::new("oh_schema.json"))?,
            he_v1: compile(HE_V1_SCHEMA, Path::new("he_v1_schema.json"))?,
            he_v2: compile(HE_V2_SCHEMA, Path::new("he_v2_schema.json"))?,
        })
    }

    /// Load and compile all three schemas from a directory. Any missing,
    /// unparsable, or uncompilable file fails the whole load.
    pub fn load(dir: &Path) -> Result<Self, ConvertError> {
        Ok(Self {
            oh: load_one(dir, Format::Oh)?,
            he_v1: load_one(dir, Format::HeV1)?,
            he_v2: load_one(dir, Format::HeV2)?,
        })
    }

    fn validator(&self, format: Format) -> &Validator {
        match format {
            Format::Oh => &self.oh,
            Format::HeV1 => &self.he_v1,
            Format::HeV2 => &self.he_v2,
        }
    }

    /// Pure predicate: does `doc` satisfy the schema of `format`?
    pub fn is_valid(&self, format: Format, doc: &Value) -> bool {
        self.validator(format).is_valid(doc)
    }

    /// Validate `doc` against the schema of `format`, returning the
    /// first violation as a diagnostic string.
    pub fn validate(&self, format: Format, doc: &Value) -> Result<(), String> {
        match self.validator(format).iter_errors(doc).next() {
            None => Ok(()),
            Some(error) => Err(error.to_string()),
        }
    }

    /// Determine a document's dialect: first schema that validates, in
    /// fixed detection order.
    pub fn detect(&self, doc: &Value) -> Option<Format> {
        DETECTION_ORDER
            .into_iter()
            .find(|format| self.is_valid(*format, doc))
    }
}

fn load_one(dir: &Path, format: Format) -> Result<Validator, ConvertError> {
    let path = dir.join(schema_file_name(format));
    let raw = fs::read_to_string(&path).map_err(|err| ConvertError::SchemaLoad {
        path: path.clone(),
        reason: err.to_string(),
    })?;
    compile(&raw, &path)
}

fn compile(raw: &str, path: &Path) -> Result<Validator, ConvertError> {
    let schema: Value = serde_json::from_str(raw).map_err(|err| ConvertError::SchemaLoad {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    jsonschema::validator_for(&schema).map_err(|err| ConvertError::SchemaLoad {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn oh_sample() -> Value {
        json!({
            "MetaData": { "Version": 1.0, "ChannelNumber": 1 },
            "Channels": [{
                "Parameters": { "Index": 0 },
                "Pattern": [{
                    "Event": {
                        "Type": "transient",
                        "StartTime": 0,
                        "Parameters": { "Intensity": 100, "Frequency": 31 }
                    }
                }]
            }]
        })
    }

    fn he_v1_sample() -> Value {
        json!({
            "Metadata": { "Version": 1 },
            "Pattern": [{
                "Type": "transient",
                "RelativeTime": 0,
                "Parameters": { "Intensity": 100, "Frequency": 31 }
            }]
        })
    }

    fn he_v2_sample() -> Value {
        json!({
            "Metadata": { "Version": 2 },
            "PatternList": [{
                "AbsoluteTime": 0,
                "Pattern": [{
                    "Type": "transient",
                    "RelativeTime": 0,
                    "Parameters": { "Intensity": 100, "Frequency": 31 }
                }]
            }]
        })
    }

    #[test]
    fn bundled_schemas_compile() {
        assert!(SchemaSet::bundled().is_ok());
    }

    #[test]
    fn detects_each_dialect() {
        let schemas = SchemaSet::bundled().unwrap();
        assert_eq!(schemas.detect(&oh_sample()), Some(Format::Oh));
        assert_eq!(schemas.detect(&he_v1_sample()), Some(Format::HeV1));
        assert_eq!(schemas.detect(&he_v2_sample()), Some(Format::HeV2));
        assert_eq!(schemas.detect(&json!({ "foo": 1 })), None);
    }

    #[test]
    fn metadata_version_disambiguates_the_he_dialects() {
        let schemas = SchemaSet::bundled().unwrap();
        let mut wrong_version = he_v1_sample();
        wrong_version["Metadata"]["Version"] = json!(2);
        assert_eq!(schemas.detect(&wrong_version), None);
    }

    #[test]
    fn out_of_range_oh_values_are_rejected() {
        let schemas = SchemaSet::bundled().unwrap();
        let mut doc = oh_sample();
        doc["Channels"][0]["Pattern"][0]["Event"]["Parameters"]["Intensity"] = json!(150);
        assert!(!schemas.is_valid(Format::Oh, &doc));
        assert!(schemas.validate(Format::Oh, &doc).is_err());
    }

    #[test]
    fn continuous_he_event_requires_duration() {
        let schemas = SchemaSet::bundled().unwrap();
        let doc = json!({
            "Metadata": { "Version": 1 },
            "Pattern": [{
                "Type": "continuous",
                "RelativeTime": 0,
                "Parameters": { "Intensity": 80, "Frequency": 30 }
            }]
        });
        assert!(!schemas.is_valid(Format::HeV1, &doc));
    }

    #[test]
    fn he_curves_need_at_least_four_points() {
        let schemas = SchemaSet::bundled().unwrap();
        let doc = json!({
            "Metadata": { "Version": 1 },
            "Pattern": [{
                "Type": "continuous",
                "RelativeTime": 0,
                "Duration": 100,
                "Parameters": {
                    "Intensity": 80,
                    "Frequency": 30,
                    "Curve": [
                        { "Time": 0, "Intensity": 0, "Frequency": 0 },
                        { "Time": 100, "Intensity": 0, "Frequency": 0 }
                    ]
                }
            }]
        });
        assert!(!schemas.is_valid(Format::HeV1, &doc));
    }

    #[test]
    fn load_reports_missing_schema_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = SchemaSet::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConvertError::SchemaLoad { .. }));
    }

    #[test]
    fn load_accepts_a_directory_with_all_three_schemas() {
        let dir = tempfile::tempdir().unwrap();
        for (format, raw) in [
            (Format::Oh, OH_SCHEMA),
            (Format::HeV1, HE_V1_SCHEMA),
            (Format::HeV2, HE_V2_SCHEMA),
        ] {
            std::fs::write(dir.path().join(schema_file_name(format)), raw).unwrap();
        }
        assert!(SchemaSet::load(dir.path()).is_ok());
    }
}
