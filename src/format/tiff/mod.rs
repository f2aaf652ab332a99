//! TIFF structure decoding for EXIF payloads.
//!
//! EXIF stores its metadata as a small classic TIFF file embedded in the
//! APP1 segment. This module decodes that structure into typed tags.
//!
//! # Key Concepts
//!
//! - **Byte order**: the header declares II (little-endian) or MM
//!   (big-endian). Every multi-byte value in the payload uses that order.
//!
//! - **IFD chain**: IFD0 describes the main image and may link to IFD1,
//!   which describes the thumbnail. Nothing may follow IFD1.
//!
//! - **Pointer tags**: entries in IFD0 lead to the Exif and GPS sub-IFDs,
//!   and the Exif IFD may lead to the Interoperability IFD. These are decoded
//!   where the pointer appears and never show up as tags themselves.
//!
//! - **Inline vs offset values**: values of up to 4 bytes live in the entry,
//!   larger ones at an offset relative to the start of the TIFF header.

mod ifd;
mod parser;
mod registry;
mod tags;
mod values;

pub use ifd::{DecodeOptions, DecodedTag, IfdDecoder, IfdKind};
pub use parser::{ByteOrder, IfdEntry, TiffBuffer, TiffHeader, TIFF_MAGIC};
pub use registry::{fallback_label, lookup, TagInfo, GPS_TAGS, INTEROP_TAGS, TIFF_TAGS};
pub use tags::{
    pointer_target, FieldType, EXIF_IFD_POINTER, GPS_IFD_POINTER, INTEROP_IFD_POINTER,
};
pub use values::{decode_ascii, decode_value, Rational, SRational, TagValue};
