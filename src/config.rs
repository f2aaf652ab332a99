//! Configuration for the `exif-dump` binary.
//!
//! Options come from command-line arguments via clap, with environment
//! variable fallbacks using the `EXIF_` prefix:
//!
//! - `EXIF_FORMAT` - Output format, `text` or `json` (default: text)
//! - `EXIF_NO_THUMBNAIL` - Skip the thumbnail IFD
//! - `EXIF_NO_GPS` - Do not follow the GPS IFD pointer
//! - `EXIF_NO_INTEROP` - Do not follow the Interoperability IFD pointer
//!
//! Log verbosity is controlled by `--verbose` or, taking precedence,
//! `RUST_LOG`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::format::tiff::DecodeOptions;

// =============================================================================
// CLI Arguments
// =============================================================================

/// How decoded tags are written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One aligned line per tag
    #[default]
    Text,

    /// A JSON document per file
    Json,
}

/// exif-dump - Print the EXIF metadata of JPEG files.
#[derive(Parser, Debug, Clone)]
#[command(name = "exif-dump")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// JPEG files to read.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    // =========================================================================
    // Output
    // =========================================================================
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "EXIF_FORMAT")]
    pub format: OutputFormat,

    /// List the JPEG marker segments instead of decoding tags.
    ///
    /// The decoding options below have no effect in this mode.
    #[arg(long, default_value_t = false)]
    pub segments: bool,

    // =========================================================================
    // Decoding
    // =========================================================================
    /// Skip the thumbnail IFD (IFD1).
    #[arg(long, default_value_t = false, env = "EXIF_NO_THUMBNAIL")]
    pub no_thumbnail: bool,

    /// Do not decode the GPS IFD.
    #[arg(long, default_value_t = false, env = "EXIF_NO_GPS")]
    pub no_gps: bool,

    /// Do not decode the Interoperability IFD.
    #[arg(long, default_value_t = false, env = "EXIF_NO_INTEROP")]
    pub no_interop: bool,

    // =========================================================================
    // Logging
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.files.is_empty() {
            return Err("At least one input file is required".to_string());
        }

        if self.files.iter().any(|f| f.as_os_str().is_empty()) {
            return Err("Input file paths must not be empty".to_string());
        }

        Ok(())
    }

    /// Decoder options selected by the flags.
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            thumbnail: !self.no_thumbnail,
            gps: !self.no_gps,
            interop: !self.no_interop,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
