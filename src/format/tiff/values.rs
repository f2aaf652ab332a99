//! Typed decoding of IFD entry values.
//!
//! By the time bytes reach this module the inline-vs-offset question has been
//! settled and the slice holds exactly `count * size_in_bytes` bytes. What is
//! left is turning them into typed values in the payload's byte order.

use std::fmt;

use serde::Serialize;

use super::parser::ByteOrder;
use super::tags::FieldType;

/// Longest byte value printed in full by `Display`.
const MAX_DISPLAY_BYTES: usize = 16;

// =============================================================================
// Rationals
// =============================================================================

/// Unsigned fraction, kept exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rational {
    pub num: u32,
    pub denom: u32,
}

impl Rational {
    pub const fn new(num: u32, denom: u32) -> Self {
        Self { num, denom }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.denom)
    }
}

/// Signed fraction, kept exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SRational {
    pub num: i32,
    pub denom: i32,
}

impl SRational {
    pub const fn new(num: i32, denom: i32) -> Self {
        Self { num, denom }
    }
}

impl fmt::Display for SRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.denom)
    }
}

// =============================================================================
// TagValue
// =============================================================================

/// Decoded value of one IFD entry.
///
/// Numeric variants always hold `count` elements. A single element is the
/// scalar case, which the `as_*` accessors return directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagValue {
    /// Byte and Undefined entries
    Bytes(Vec<u8>),

    /// Ascii entries, always ending in a NUL
    Ascii(String),

    /// Short and Long entries
    Unsigned(Vec<u32>),

    /// SByte, SShort and SLong entries
    Signed(Vec<i32>),

    /// Rational entries
    Rational(Vec<Rational>),

    /// SRational entries
    SRational(Vec<SRational>),

    /// Float and Double entries
    Float(Vec<f64>),
}

impl TagValue {
    /// Number of elements (bytes for byte data, characters for text).
    pub fn len(&self) -> usize {
        match self {
            TagValue::Bytes(v) => v.len(),
            TagValue::Ascii(s) => s.len(),
            TagValue::Unsigned(v) => v.len(),
            TagValue::Signed(v) => v.len(),
            TagValue::Rational(v) => v.len(),
            TagValue::SRational(v) => v.len(),
            TagValue::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value as text, without the trailing NUL padding.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Ascii(s) => Some(s.trim_end_matches('\0')),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            TagValue::Bytes(v) => Some(v),
            _ => None,
        }
    }

    /// The scalar unsigned value, if this is a single Short or Long.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            TagValue::Unsigned(v) if v.len() == 1 => Some(v[0]),
            _ => None,
        }
    }

    /// The scalar signed value, if this is a single signed integer.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            TagValue::Signed(v) if v.len() == 1 => Some(v[0]),
            _ => None,
        }
    }

    /// The scalar rational, if this is a single Rational.
    pub fn as_rational(&self) -> Option<Rational> {
        match self {
            TagValue::Rational(v) if v.len() == 1 => Some(v[0]),
            _ => None,
        }
    }

    /// The scalar signed rational, if this is a single SRational.
    pub fn as_srational(&self) -> Option<SRational> {
        match self {
            TagValue::SRational(v) if v.len() == 1 => Some(v[0]),
            _ => None,
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Bytes(v) => {
                let shown = &v[..v.len().min(MAX_DISPLAY_BYTES)];
                for (i, b) in shown.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{:02x}", b)?;
                }
                if v.len() > MAX_DISPLAY_BYTES {
                    write!(f, " ... ({} bytes)", v.len())?;
                }
                Ok(())
            }
            TagValue::Ascii(s) => f.write_str(s.trim_end_matches('\0')),
            TagValue::Unsigned(v) => write_list(f, v),
            TagValue::Signed(v) => write_list(f, v),
            TagValue::Rational(v) => write_list(f, v),
            TagValue::SRational(v) => write_list(f, v),
            TagValue::Float(v) => write_list(f, v),
        }
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a value region into a typed value.
///
/// `bytes` must be exactly `count * field_type.size_in_bytes()` long; the
/// element count is derived from its length.
pub fn decode_value(field_type: FieldType, bytes: &[u8], byte_order: ByteOrder) -> TagValue {
    match field_type {
        FieldType::Byte | FieldType::Undefined => TagValue::Bytes(bytes.to_vec()),
        FieldType::Ascii => TagValue::Ascii(decode_ascii(bytes)),
        FieldType::Short => TagValue::Unsigned(
            bytes
                .chunks_exact(2)
                .map(|c| byte_order.read_u16(c) as u32)
                .collect(),
        ),
        FieldType::Long => TagValue::Unsigned(
            bytes
                .chunks_exact(4)
                .map(|c| byte_order.read_u32(c))
                .collect(),
        ),
        FieldType::SByte => TagValue::Signed(bytes.iter().map(|&b| b as i8 as i32).collect()),
        FieldType::SShort => TagValue::Signed(
            bytes
                .chunks_exact(2)
                .map(|c| byte_order.read_u16(c) as i16 as i32)
                .collect(),
        ),
        FieldType::SLong => TagValue::Signed(
            bytes
                .chunks_exact(4)
                .map(|c| byte_order.read_u32(c) as i32)
                .collect(),
        ),
        FieldType::Rational => TagValue::Rational(
            bytes
                .chunks_exact(8)
                .map(|c| Rational::new(byte_order.read_u32(&c[..4]), byte_order.read_u32(&c[4..])))
                .collect(),
        ),
        FieldType::SRational => TagValue::SRational(
            bytes
                .chunks_exact(8)
                .map(|c| {
                    SRational::new(
                        byte_order.read_u32(&c[..4]) as i32,
                        byte_order.read_u32(&c[4..]) as i32,
                    )
                })
                .collect(),
        ),
        FieldType::Float => TagValue::Float(
            bytes
                .chunks_exact(4)
                .map(|c| f32::from_bits(byte_order.read_u32(c)) as f64)
                .collect(),
        ),
        FieldType::Double => TagValue::Float(
            bytes
                .chunks_exact(8)
                .map(|c| f64::from_bits(byte_order.read_u64(c)))
                .collect(),
        ),
    }
}

/// Decode ASCII bytes, appending a NUL terminator when the source lacks one.
///
/// Writers disagree on whether `count` includes the terminator, so the value
/// is normalized to always end in exactly the bytes stored plus a NUL if the
/// last stored byte was not one. Invalid UTF-8 is replaced, not rejected.
pub fn decode_ascii(bytes: &[u8]) -> String {
    let mut text = String::from_utf8_lossy(bytes).into_owned();
    if bytes.last() != Some(&0) {
        text.push('\0');
    }
    text
}

// =============================================================================
// Tests
// =============================================================================
