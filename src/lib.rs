//! # JPEG EXIF
//!
//! A reader for the EXIF metadata embedded in JPEG files.
//!
//! The library locates the EXIF APP1 segment in a JPEG stream, validates the
//! TIFF structure inside it, and decodes its IFDs into a flat, ordered list
//! of typed tags: camera make and model, exposure settings, timestamps, GPS
//! position and thumbnail attributes.
//!
//! ## Features
//!
//! - **Lazy scanning**: reads marker segments only up to the EXIF segment
//! - **Both byte orders**: II and MM payloads decode to identical tags
//! - **Sub-IFDs**: Exif, GPS and Interoperability directories decoded in place
//! - **Bounds-checked**: malformed offsets fail with typed errors, never panic
//!
//! ## Architecture
//!
//! - [`io`] - Endian helpers and exact reads over `std::io::Read`
//! - [`mod@format`] - JPEG segment scanner, EXIF payload and TIFF/IFD decoder
//! - [`config`] - CLI configuration for the `exif-dump` binary
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = BufReader::new(File::open("photo.jpg")?);
//! for tag in jpeg_exif::read_exif(file)? {
//!     println!("{}: {}", tag.label, tag.value);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::Read;

use tracing::debug;

pub mod config;
pub mod error;
pub mod format;
pub mod io;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use error::{Error, ExifError, JpegError};
pub use format::tiff::{
    ByteOrder, DecodeOptions, DecodedTag, FieldType, IfdKind, Rational, SRational, TagValue,
};
pub use format::{
    decode, decode_with_options, find_app1, find_exif_segment, scan_segments, Marker, Segment,
    SegmentScanner, EXIF_PREFIX,
};

/// Read the EXIF tags of a JPEG stream with the default options.
///
/// See [`read_exif_with_options`].
pub fn read_exif<R: Read>(reader: R) -> Result<Vec<DecodedTag>, Error> {
    read_exif_with_options(reader, &DecodeOptions::default())
}

/// Read the EXIF tags of a JPEG stream.
///
/// Scans for the first APP1 segment carrying an `Exif\0\0` payload and
/// decodes it. The stream is not read past that segment.
///
/// # Errors
/// - `Error::Jpeg` if the container is malformed before the EXIF segment
/// - `Error::MissingExif` if no EXIF segment exists
/// - `Error::Exif` if the EXIF payload is malformed
pub fn read_exif_with_options<R: Read>(
    reader: R,
    options: &DecodeOptions,
) -> Result<Vec<DecodedTag>, Error> {
    let segment = find_exif_segment(reader)?.ok_or(Error::MissingExif)?;
    debug!(len = segment.payload.len(), "Found EXIF segment");

    Ok(decode_with_options(&segment.payload, options)?)
}
