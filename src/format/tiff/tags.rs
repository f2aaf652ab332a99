//! TIFF field types and IFD pointer tags.
//!
//! Field types determine how an entry's value bytes are laid out. Pointer
//! tags are entries whose value is the offset of another IFD rather than
//! metadata.

use serde::Serialize;

use super::ifd::IfdKind;

// =============================================================================
// TIFF Field Types
// =============================================================================

/// TIFF 6.0 field types.
///
/// EXIF writers use Byte, Ascii, Short, Long, Rational, Undefined, SLong and
/// SRational. The remaining signed and floating point types are rare but
/// legal, so they are decoded too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u16)]
pub enum FieldType {
    /// Unsigned 8-bit integer (1 byte)
    Byte = 1,

    /// 8-bit ASCII character (1 byte)
    Ascii = 2,

    /// Unsigned 16-bit integer (2 bytes)
    Short = 3,

    /// Unsigned 32-bit integer (4 bytes)
    Long = 4,

    /// Two unsigned 32-bit integers: numerator, denominator (8 bytes)
    Rational = 5,

    /// Signed 8-bit integer (1 byte)
    SByte = 6,

    /// Undefined byte data (1 byte per element)
    Undefined = 7,

    /// Signed 16-bit integer (2 bytes)
    SShort = 8,

    /// Signed 32-bit integer (4 bytes)
    SLong = 9,

    /// Two signed 32-bit integers: numerator, denominator (8 bytes)
    SRational = 10,

    /// IEEE single precision float (4 bytes)
    Float = 11,

    /// IEEE double precision float (8 bytes)
    Double = 12,
}

impl FieldType {
    /// Maximum bytes stored inline in an IFD entry's value field.
    pub const INLINE_THRESHOLD: usize = 4;

    /// Size of a single value of this type in bytes.
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            FieldType::Byte | FieldType::Ascii | FieldType::SByte | FieldType::Undefined => 1,
            FieldType::Short | FieldType::SShort => 2,
            FieldType::Long | FieldType::SLong | FieldType::Float => 4,
            FieldType::Rational | FieldType::SRational | FieldType::Double => 8,
        }
    }

    /// Create a FieldType from its numeric value.
    ///
    /// Returns `None` for codes outside the TIFF 6.0 set.
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(FieldType::Byte),
            2 => Some(FieldType::Ascii),
            3 => Some(FieldType::Short),
            4 => Some(FieldType::Long),
            5 => Some(FieldType::Rational),
            6 => Some(FieldType::SByte),
            7 => Some(FieldType::Undefined),
            8 => Some(FieldType::SShort),
            9 => Some(FieldType::SLong),
            10 => Some(FieldType::SRational),
            11 => Some(FieldType::Float),
            12 => Some(FieldType::Double),
            _ => None,
        }
    }

    /// Lowercase type name as used in the TIFF specification.
    pub const fn name(self) -> &'static str {
        match self {
            FieldType::Byte => "byte",
            FieldType::Ascii => "ascii",
            FieldType::Short => "short",
            FieldType::Long => "long",
            FieldType::Rational => "rational",
            FieldType::SByte => "sbyte",
            FieldType::Undefined => "undefined",
            FieldType::SShort => "sshort",
            FieldType::SLong => "slong",
            FieldType::SRational => "srational",
            FieldType::Float => "float",
            FieldType::Double => "double",
        }
    }

    /// Check if `count` values of this type fit in the 4-byte value field.
    #[inline]
    pub fn fits_inline(self, count: u32) -> bool {
        self.size_in_bytes() as u64 * count as u64 <= Self::INLINE_THRESHOLD as u64
    }
}

// =============================================================================
// Pointer Tags
// =============================================================================

/// Offset of the Exif sub-IFD
pub const EXIF_IFD_POINTER: u16 = 0x8769;

/// Offset of the GPS IFD
pub const GPS_IFD_POINTER: u16 = 0x8825;

/// Offset of the Interoperability IFD
pub const INTEROP_IFD_POINTER: u16 = 0xA005;

/// Which nested IFD a pointer tag leads to, if `tag` is a pointer tag.
pub const fn pointer_target(tag: u16) -> Option<IfdKind> {
    match tag {
        EXIF_IFD_POINTER => Some(IfdKind::Exif),
        GPS_IFD_POINTER => Some(IfdKind::Gps),
        INTEROP_IFD_POINTER => Some(IfdKind::Interop),
        _ => None,
    }
}
