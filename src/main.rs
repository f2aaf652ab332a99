//! exif-dump - Print the EXIF metadata of JPEG files.
//!
//! Decoded tags go to stdout; logs and per-file errors go to stderr.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jpeg_exif::{
    config::{Config, OutputFormat},
    read_exif_with_options, DecodeOptions, DecodedTag, Error, JpegError, SegmentScanner,
};

fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let options = config.decode_options();
    let mut failed = 0usize;

    for path in &config.files {
        let result = if config.segments {
            list_segments(path)
        } else {
            dump_tags(path, &options, config.format)
        };

        if let Err(e) = result {
            error!(file = %path.display(), "{}", e);
            failed += 1;
        }
    }

    if failed > 0 {
        debug!(failed, total = config.files.len(), "Some files failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem on stderr.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "jpeg_exif=debug,exif_dump=debug"
    } else {
        "jpeg_exif=info,exif_dump=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open(path: &Path) -> Result<BufReader<File>, Error> {
    let file = File::open(path).map_err(JpegError::from)?;
    Ok(BufReader::new(file))
}

// =============================================================================
// Tag Output
// =============================================================================

#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    tags: &'a [DecodedTag],
}

fn dump_tags(path: &Path, options: &DecodeOptions, format: OutputFormat) -> Result<(), Error> {
    let tags = read_exif_with_options(open(path)?, options)?;

    match format {
        OutputFormat::Text => print_text(path, &tags),
        OutputFormat::Json => {
            let report = FileReport {
                file: path.display().to_string(),
                tags: &tags,
            };
            println!("{}", to_json(&report)?);
        }
    }

    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Output(e.to_string()))
}

fn print_text(path: &Path, tags: &[DecodedTag]) {
    println!("{}", path.display());

    let width = tags.iter().map(|t| t.label.len()).max().unwrap_or(0);
    for tag in tags {
        println!(
            "  {:<7} {:>6}  {:<9}  {:<width$}  {}",
            tag.ifd.name(),
            format!("0x{:04X}", tag.tag),
            tag.field_type.name(),
            tag.label,
            tag.value,
            width = width
        );
    }
}

// =============================================================================
// Segment Listing
// =============================================================================

fn list_segments(path: &Path) -> Result<(), Error> {
    println!("{}", path.display());

    for segment in SegmentScanner::new(open(path)?) {
        let segment = segment?;
        let kind = if segment.is_exif() { "  (EXIF)" } else { "" };
        println!(
            "  {:<6} 0x{:02X}  {:>6} bytes{}",
            segment.marker.name(),
            segment.marker.as_u8(),
            segment.payload.len(),
            kind
        );
    }

    Ok(())
}
