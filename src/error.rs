use thiserror::Error;

/// Errors raised while scanning the JPEG container for marker segments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JpegError {
    /// The stream does not start with the Start-Of-Image marker
    #[error("Not a JPEG stream: expected SOI marker 0xFFD8, got 0x{0:04X}")]
    InvalidContainer(u16),

    /// A segment declares a length smaller than its own length field
    #[error("Invalid segment length {length} for marker 0x{marker:02X}")]
    InvalidSegmentLength { marker: u8, length: u16 },

    /// The stream ended in the middle of a fixed-size read
    #[error("Truncated JPEG stream: needed {needed} more bytes")]
    Truncated { needed: usize },

    /// Underlying reader failure (not a format problem)
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors that can occur when decoding the EXIF payload and its TIFF structure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExifError {
    /// Payload does not start with "Exif\0\0"
    #[error("Invalid EXIF header: payload does not start with \"Exif\\0\\0\"")]
    InvalidExifHeader,

    /// TIFF byte order marker is neither II nor MM
    #[error("Invalid TIFF byte order: expected 0x4949 (II) or 0x4D4D (MM), got 0x{0:04X}")]
    InvalidByteOrder(u16),

    /// TIFF magic number is not 42
    #[error("Invalid TIFF magic: expected 0x002A, got 0x{0:04X}")]
    InvalidTiffMagic(u16),

    /// The top-level IFD chain holds more than the primary and thumbnail IFDs
    #[error("Too many IFDs: an EXIF payload holds at most two chained IFDs")]
    TooManyIfds,

    /// A read would cross the end of the TIFF buffer
    #[error("Truncated TIFF data: requested {requested} bytes at offset {offset}, size is {size}")]
    Truncated {
        offset: u64,
        requested: u64,
        size: u64,
    },

    /// Entry uses a field type code outside the TIFF 6.0 set
    #[error("Unknown field type {field_type} in entry for tag 0x{tag:04x}")]
    UnknownFieldType { tag: u16, field_type: u16 },

    /// An IFD offset was reached twice
    #[error("Circular IFD reference at offset {0}")]
    CircularIfd(u32),

    /// Nested IFD pointers go deeper than any valid EXIF layout
    #[error("IFD nesting too deep: depth {0}")]
    TooDeep(usize),
}

/// Top-level error for reading EXIF metadata out of a JPEG file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Container scanning failed
    #[error("JPEG error: {0}")]
    Jpeg(#[from] JpegError),

    /// EXIF payload decoding failed
    #[error("EXIF error: {0}")]
    Exif(#[from] ExifError),

    /// The file has no APP1 segment carrying EXIF data
    #[error("No EXIF data found")]
    MissingExif,

    /// Decoded tags could not be rendered
    #[error("Output error: {0}")]
    Output(String),
}

impl From<std::io::Error> for JpegError {
    fn from(err: std::io::Error) -> Self {
        JpegError::Io(err.to_string())
    }
}
