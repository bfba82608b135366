//! hapticonv CLI - convert haptic JSON files between OH and HE dialects
//!
//! Accepts a single file or a directory tree. Directory inputs are
//! walked recursively for `.json`/`.he` files; each file converts
//! independently and failures do not stop the batch.

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hapticonv::pipeline::{process_directory, process_file};
use hapticonv::{ConvertError, Format, SchemaSet, HAPTICONV_VERSION};

/// Convert between OH haptic JSON and HE haptic JSON formats
#[derive(Parser)]
#[command(name = "hapticonv")]
#[command(version = HAPTICONV_VERSION)]
#[command(about = "Convert between OH haptic JSON and HE haptic JSON formats", long_about = None)]
struct Cli {
    /// Path to the input JSON file or directory
    input: PathBuf,

    /// Output directory (default: the input file's directory, or
    /// '<input>_out' for a directory input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Target format
    #[arg(short = 'f', long = "format", value_enum)]
    format: TargetFormat,

    /// Directory containing the three dialect schema files
    /// (default: the schemas bundled into the binary)
    #[arg(short = 's', long = "schema-dir")]
    schema_dir: Option<PathBuf>,

    /// Include a version suffix ('_v1'/'_v2') in HE output file names
    #[arg(short = 'v', long)]
    version_suffix: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetFormat {
    /// Multi-channel, absolute-time OH format
    Oh,
    /// Flat relative-time HE v1 format
    HeV1,
    /// Time-bucketed HE v2 format
    HeV2,
}

impl From<TargetFormat> for Format {
    fn from(target: TargetFormat) -> Self {
        match target {
            TargetFormat::Oh => Format::Oh,
            TargetFormat::HeV1 => Format::HeV1,
            TargetFormat::HeV2 => Format::HeV2,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!(%err, "conversion run failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<bool, ConvertError> {
    let schemas = match &cli.schema_dir {
        Some(dir) => SchemaSet::load(dir)?,
        None => SchemaSet::bundled()?,
    };
    let target = Format::from(cli.format);

    if cli.input.is_file() {
        let output_dir = cli
            .output
            .clone()
            .unwrap_or_else(|| parent_or_current(&cli.input));
        let written = process_file(&cli.input, &output_dir, target, &schemas, cli.version_suffix)?;
        info!(
            input = %cli.input.display(),
            output = %written.display(),
            "converted"
        );
        Ok(true)
    } else if cli.input.is_dir() {
        let output_dir = cli
            .output
            .clone()
            .unwrap_or_else(|| sibling_out_dir(&cli.input));
        let summary =
            process_directory(&cli.input, &output_dir, target, &schemas, cli.version_suffix);
        info!(
            converted = summary.converted,
            failed = summary.failed,
            "batch finished"
        );
        Ok(summary.failed == 0)
    } else {
        error!(input = %cli.input.display(), "input path does not exist");
        Ok(false)
    }
}

fn parent_or_current(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => PathBuf::from("."),
    }
}

fn sibling_out_dir(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{name}_out"))
}
