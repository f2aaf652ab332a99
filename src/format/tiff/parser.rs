//! TIFF header and raw structure parsing.
//!
//! An EXIF payload embeds a classic TIFF structure directly after the
//! `Exif\0\0` identifier. Every offset inside it is relative to the first
//! byte of the TIFF header, not to the JPEG file.
//!
//! # TIFF Header Structure (8 bytes)
//! ```text
//! Bytes 0-1: Byte order (0x4949 = little-endian "II", 0x4D4D = big-endian "MM")
//! Bytes 2-3: Magic (42 = 0x002A)
//! Bytes 4-7: Offset to first IFD (4 bytes)
//! ```
//!
//! # IFD Entry Structure (12 bytes)
//! ```text
//! Bytes 0-1:  Tag
//! Bytes 2-3:  Field type
//! Bytes 4-7:  Count (number of values, not bytes)
//! Bytes 8-11: Value if it fits in 4 bytes, otherwise offset to the value
//! ```

use crate::error::ExifError;

use super::tags::FieldType;

// =============================================================================
// Constants
// =============================================================================

/// Magic bytes indicating little-endian byte order ("II" for Intel)
const BYTE_ORDER_LITTLE_ENDIAN: u16 = 0x4949;

/// Magic bytes indicating big-endian byte order ("MM" for Motorola)
const BYTE_ORDER_BIG_ENDIAN: u16 = 0x4D4D;

/// Magic number following the byte order marker
pub const TIFF_MAGIC: u16 = 0x002A;

/// Size of one IFD entry in bytes
pub const IFD_ENTRY_SIZE: usize = 12;

/// Size of the entry count field at the start of an IFD
pub const IFD_COUNT_SIZE: usize = 2;

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) of the TIFF structure.
///
/// Declared by the first two bytes of the TIFF header. All multi-byte values
/// in the same payload must be read respecting this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    // The slices come from `TiffBuffer::read_exact_at` or the fixed fields
    // of an `IfdEntry`, so they always hold at least `N` bytes.
    #[inline]
    fn take<const N: usize>(bytes: &[u8]) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&bytes[..N]);
        out
    }

    /// Read a u16 from the start of `bytes`.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        let raw = Self::take::<2>(bytes);
        match self {
            ByteOrder::LittleEndian => u16::from_le_bytes(raw),
            ByteOrder::BigEndian => u16::from_be_bytes(raw),
        }
    }

    /// Read a u32 from the start of `bytes`.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        let raw = Self::take::<4>(bytes);
        match self {
            ByteOrder::LittleEndian => u32::from_le_bytes(raw),
            ByteOrder::BigEndian => u32::from_be_bytes(raw),
        }
    }

    /// Read a u64 from the start of `bytes`. Used for DOUBLE values.
    #[inline]
    pub fn read_u64(self, bytes: &[u8]) -> u64 {
        let raw = Self::take::<8>(bytes);
        match self {
            ByteOrder::LittleEndian => u64::from_le_bytes(raw),
            ByteOrder::BigEndian => u64::from_be_bytes(raw),
        }
    }
}

// =============================================================================
// TiffBuffer
// =============================================================================

/// Bounds-checked view over the TIFF region of an EXIF payload.
///
/// Offsets stored in IFDs are untrusted, so every access goes through
/// [`TiffBuffer::read_exact_at`], which fails with `Truncated` instead of
/// slicing past the end.
#[derive(Debug, Clone, Copy)]
pub struct TiffBuffer<'a> {
    data: &'a [u8],
    byte_order: ByteOrder,
}

impl<'a> TiffBuffer<'a> {
    pub fn new(data: &'a [u8], byte_order: ByteOrder) -> Self {
        Self { data, byte_order }
    }

    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Borrow exactly `len` bytes starting at `offset`.
    ///
    /// # Errors
    /// `Truncated` if any part of the range lies outside the buffer.
    pub fn read_exact_at(&self, offset: u64, len: u64) -> Result<&'a [u8], ExifError> {
        let size = self.data.len() as u64;
        let out_of_bounds = ExifError::Truncated {
            offset,
            requested: len,
            size,
        };

        let end = offset.checked_add(len).ok_or(out_of_bounds.clone())?;
        if end > size {
            return Err(out_of_bounds);
        }

        Ok(&self.data[offset as usize..end as usize])
    }

    /// Read a u16 at `offset` in the buffer's byte order.
    pub fn read_u16(&self, offset: u64) -> Result<u16, ExifError> {
        let bytes = self.read_exact_at(offset, 2)?;
        Ok(self.byte_order.read_u16(bytes))
    }

    /// Read a u32 at `offset` in the buffer's byte order.
    pub fn read_u32(&self, offset: u64) -> Result<u32, ExifError> {
        let bytes = self.read_exact_at(offset, 4)?;
        Ok(self.byte_order.read_u32(bytes))
    }
}

// =============================================================================
// TiffHeader
// =============================================================================

/// Parsed TIFF header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order for all multi-byte values in the payload
    pub byte_order: ByteOrder,

    /// Offset of the first (primary image) IFD
    pub first_ifd_offset: u32,
}

impl TiffHeader {
    /// Parse the header at the start of a TIFF buffer.
    ///
    /// Fields are checked in order, so a buffer with a bad byte order marker
    /// reports `InvalidByteOrder` even if it is also too short.
    ///
    /// # Errors
    /// - `InvalidByteOrder` if bytes 0-1 are not II or MM
    /// - `InvalidTiffMagic` if the magic number is not 42
    /// - `Truncated` if the buffer ends inside the header
    pub fn parse(data: &[u8]) -> Result<Self, ExifError> {
        // The marker is a pair of identical ASCII letters, so it reads the
        // same in either order
        let marker = TiffBuffer::new(data, ByteOrder::BigEndian).read_u16(0)?;
        let byte_order = match marker {
            BYTE_ORDER_LITTLE_ENDIAN => ByteOrder::LittleEndian,
            BYTE_ORDER_BIG_ENDIAN => ByteOrder::BigEndian,
            _ => return Err(ExifError::InvalidByteOrder(marker)),
        };

        let buffer = TiffBuffer::new(data, byte_order);

        let magic = buffer.read_u16(2)?;
        if magic != TIFF_MAGIC {
            return Err(ExifError::InvalidTiffMagic(magic));
        }

        let first_ifd_offset = buffer.read_u32(4)?;

        Ok(TiffHeader {
            byte_order,
            first_ifd_offset,
        })
    }
}

// =============================================================================
// IfdEntry
// =============================================================================

/// One raw 12-byte IFD entry, read in place and never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfdEntry {
    /// Tag identifier
    pub tag: u16,

    /// Field type, or `None` if the code is not a TIFF 6.0 type
    pub field_type: Option<FieldType>,

    /// Field type code as stored
    pub field_type_raw: u16,

    /// Number of values (not bytes)
    pub count: u32,

    /// The raw value/offset field, still in file byte order
    pub value_offset_bytes: [u8; 4],
}

impl IfdEntry {
    /// Read the entry starting at `offset`.
    pub fn parse(buffer: &TiffBuffer<'_>, offset: u64) -> Result<Self, ExifError> {
        let bytes = buffer.read_exact_at(offset, IFD_ENTRY_SIZE as u64)?;
        let byte_order = buffer.byte_order();

        let field_type_raw = byte_order.read_u16(&bytes[2..4]);

        Ok(IfdEntry {
            tag: byte_order.read_u16(&bytes[0..2]),
            field_type: FieldType::from_u16(field_type_raw),
            field_type_raw,
            count: byte_order.read_u32(&bytes[4..8]),
            value_offset_bytes: [bytes[8], bytes[9], bytes[10], bytes[11]],
        })
    }

    /// Interpret the value/offset field as an unsigned offset.
    #[inline]
    pub fn value_offset(&self, byte_order: ByteOrder) -> u32 {
        byte_order.read_u32(&self.value_offset_bytes)
    }

    /// Total size of the value in bytes, or `None` for unknown field types.
    ///
    /// Computed in u64 so that `count * 8` cannot overflow.
    pub fn value_byte_size(&self) -> Option<u64> {
        self.field_type
            .map(|ft| ft.size_in_bytes() as u64 * self.count as u64)
    }

    /// Whether the value is stored in the entry itself.
    pub fn is_inline(&self) -> Option<bool> {
        self.field_type.map(|ft| ft.fits_inline(self.count))
    }
}

// =============================================================================
// Tests
// =============================================================================
