//! Format decoders for JPEG files and their embedded EXIF metadata.
//!
//! - [`jpeg`] walks the marker segments of a JPEG stream
//! - [`exif`] validates an APP1 payload and decodes its tags
//! - [`tiff`] holds the TIFF structures the EXIF payload is built from

pub mod exif;
pub mod jpeg;
pub mod tiff;

pub use exif::{decode, decode_with_options, EXIF_PREFIX};
pub use jpeg::{find_app1, find_exif_segment, scan_segments, Marker, Segment, SegmentScanner};
