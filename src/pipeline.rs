//! Batch conversion driver
//!
//! The file/directory layer around the dispatcher: reads one JSON
//! document per file, converts it, and writes the pretty-printed result
//! into the output directory. Directory inputs are walked recursively
//! for `.json`/`.he` files; every file is converted independently and a
//! failure never stops the rest of the batch.

use crate::dispatch::convert_document;
use crate::error::ConvertError;
use crate::schema::SchemaSet;
use crate::types::Format;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use walkdir::WalkDir;

/// Outcome of a directory run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Convert a single file into `output_dir`, returning the written path.
pub fn process_file(
    input: &Path,
    output_dir: &Path,
    target: Format,
    schemas: &SchemaSet,
    version_suffix: bool,
) -> Result<PathBuf, ConvertError> {
    let raw = fs::read_to_string(input)?;
    let doc: Value = serde_json::from_str(&raw)?;

    let output = convert_document(&doc, target, schemas)?;

    let output_path = output_dir.join(output_file_name(input, target, version_suffix));
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, serde_json::to_string_pretty(&output)?)?;
    Ok(output_path)
}

/// Convert every `.json`/`.he` file under `input_dir`. Per-file errors
/// are reported and counted, not propagated.
pub fn process_directory(
    input_dir: &Path,
    output_dir: &Path,
    target: Format,
    schemas: &SchemaSet,
    version_suffix: bool,
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for entry in WalkDir::new(input_dir).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() || !has_convertible_extension(entry.path()) {
            continue;
        }
        match process_file(entry.path(), output_dir, target, schemas, version_suffix) {
            Ok(written) => {
                info!(
                    input = %entry.path().display(),
                    output = %written.display(),
                    "converted"
                );
                summary.converted += 1;
            }
            Err(err) => {
                error!(input = %entry.path().display(), %err, "conversion failed");
                summary.failed += 1;
            }
        }
    }

    summary
}

fn has_convertible_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("json") | Some("he")
    )
}

/// Output name: input stem plus an extension chosen by target format and
/// the version-suffix flag.
fn output_file_name(input: &Path, target: Format, version_suffix: bool) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = match (target, version_suffix) {
        (Format::Oh, _) => ".json",
        (Format::HeV1, true) => "_v1.he",
        (Format::HeV2, true) => "_v2.he",
        (Format::HeV1, false) | (Format::HeV2, false) => ".he",
    };
    format!("{stem}{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn schemas() -> SchemaSet {
        SchemaSet::bundled().unwrap()
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

    #[test]
    fn output_names_follow_target_and_suffix() {
        let input = Path::new("dir/effect.json");
        assert_eq!(output_file_name(input, Format::Oh, true), "effect.json");
        assert_eq!(output_file_name(input, Format::HeV1, false), "effect.he");
        assert_eq!(output_file_name(input, Format::HeV1, true), "effect_v1.he");
        assert_eq!(output_file_name(input, Format::HeV2, true), "effect_v2.he");
    }

    #[test]
    fn process_file_writes_a_validated_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("effect.he");
        fs::write(&input, serde_json::to_string(&he_v1_sample()).unwrap()).unwrap();

        let out_dir = dir.path().join("out");
        let written =
            process_file(&input, &out_dir, Format::HeV2, &schemas(), true).unwrap();
        assert_eq!(written, out_dir.join("effect_v2.he"));

        let output: Value = serde_json::from_str(&fs::read_to_string(&written).unwrap()).unwrap();
        assert!(schemas().is_valid(Format::HeV2, &output));
        assert_eq!(output["PatternList"][0]["AbsoluteTime"], json!(0));
    }

    #[test]
    fn directory_runs_isolate_per_file_failures() {
        let dir = tempfile::tempdir().unwrap();
        let input_dir = dir.path().join("in");
        fs::create_dir_all(input_dir.join("nested")).unwrap();

        fs::write(
            input_dir.join("good.he"),
            serde_json::to_string(&he_v1_sample()).unwrap(),
        )
        .unwrap();
        fs::write(
            input_dir.join("nested/also_good.json"),
            serde_json::to_string(&he_v1_sample()).unwrap(),
        )
        .unwrap();
        fs::write(input_dir.join("broken.json"), "{ not json").unwrap();
        fs::write(input_dir.join("unknown.json"), r#"{"foo": 1}"#).unwrap();
        fs::write(input_dir.join("notes.txt"), "ignored").unwrap();

        let out_dir = dir.path().join("out");
        let summary =
            process_directory(&input_dir, &out_dir, Format::HeV2, &schemas(), true);

        assert_eq!(
            summary,
            BatchSummary {
                converted: 2,
                failed: 2
            }
        );
        assert!(out_dir.join("good_v2.he").exists());
        assert!(out_dir.join("also_good_v2.he").exists());
        assert!(!out_dir.join("broken_v2.he").exists());
    }

    #[test]
    fn identity_target_still_passes_through_the_validator() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("effect.he");
        fs::write(&input, serde_json::to_string(&he_v1_sample()).unwrap()).unwrap();

        let out_dir = dir.path().join("out");
        let written =
            process_file(&input, &out_dir, Format::HeV1, &schemas(), false).unwrap();
        assert_eq!(written, out_dir.join("effect.he"));
        let output: Value = serde_json::from_str(&fs::read_to_string(&written).unwrap()).unwrap();
        assert_eq!(output, he_v1_sample());
    }
}
