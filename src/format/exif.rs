//! EXIF payload decoding.
//!
//! An EXIF APP1 payload is the 6-byte identifier `Exif\0\0` followed by a
//! TIFF structure. All IFD offsets are relative to the start of that TIFF
//! structure, so the identifier is stripped before anything else is read.

use tracing::debug;

use crate::error::ExifError;

use super::tiff::{DecodeOptions, DecodedTag, IfdDecoder, TiffBuffer, TiffHeader};

/// Identifier at the start of every EXIF APP1 payload
pub const EXIF_PREFIX: &[u8; 6] = b"Exif\0\0";

/// Decode an APP1 payload with the default options.
///
/// See [`decode_with_options`].
pub fn decode(payload: &[u8]) -> Result<Vec<DecodedTag>, ExifError> {
    decode_with_options(payload, &DecodeOptions::default())
}

/// Decode an APP1 payload into its tags, in file order.
///
/// Tags from sub-IFDs appear where their pointer entry sits in the parent
/// IFD. The result is all-or-nothing: no tags are returned on error.
///
/// # Arguments
/// * `payload` - APP1 segment payload, starting with `Exif\0\0`
/// * `options` - Which optional directories to decode
///
/// # Errors
/// - `InvalidExifHeader` if the identifier is missing
/// - `InvalidByteOrder` / `InvalidTiffMagic` for a bad TIFF header
/// - `Truncated` for any read past the end of the payload
/// - `TooManyIfds`, `CircularIfd`, `TooDeep` for malformed IFD layouts
pub fn decode_with_options(
    payload: &[u8],
    options: &DecodeOptions,
) -> Result<Vec<DecodedTag>, ExifError> {
    let tiff = payload
        .strip_prefix(EXIF_PREFIX.as_slice())
        .ok_or(ExifError::InvalidExifHeader)?;

    let header = TiffHeader::parse(tiff)?;
    debug!(
        byte_order = ?header.byte_order,
        first_ifd = header.first_ifd_offset,
        size = tiff.len(),
        "Parsed TIFF header"
    );

    let buffer = TiffBuffer::new(tiff, header.byte_order);
    IfdDecoder::new(buffer, *options).decode(header.first_ifd_offset)
}
