//! IFD chain walking and entry decoding.
//!
//! An EXIF payload holds at most two chained top-level IFDs: the primary
//! image IFD and an optional thumbnail IFD. Pointer tags inside them lead to
//! the Exif, GPS and Interoperability sub-IFDs, which are decoded in place so
//! that the output reads depth-first in file order.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::error::ExifError;

use super::parser::{IfdEntry, TiffBuffer, IFD_COUNT_SIZE, IFD_ENTRY_SIZE};
use super::registry;
use super::tags::{pointer_target, FieldType};
use super::values::{decode_value, TagValue};

/// Deepest pointer nesting accepted. Valid files reach depth 2
/// (primary → Exif → Interop).
const MAX_DEPTH: usize = 4;

// =============================================================================
// IfdKind
// =============================================================================

/// Which directory a tag was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IfdKind {
    /// IFD0, attributes of the main image
    Primary,
    /// IFD1, attributes of the embedded thumbnail
    Thumbnail,
    Exif,
    Gps,
    Interop,
}

impl IfdKind {
    pub const fn name(self) -> &'static str {
        match self {
            IfdKind::Primary => "IFD0",
            IfdKind::Thumbnail => "IFD1",
            IfdKind::Exif => "Exif",
            IfdKind::Gps => "GPS",
            IfdKind::Interop => "Interop",
        }
    }
}

// =============================================================================
// DecodeOptions
// =============================================================================

/// Controls which optional directories are decoded.
///
/// The primary and Exif IFDs are always decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Decode the thumbnail IFD (IFD1)
    pub thumbnail: bool,

    /// Follow the GPS IFD pointer
    pub gps: bool,

    /// Follow the Interoperability IFD pointer
    pub interop: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            thumbnail: true,
            gps: true,
            interop: true,
        }
    }
}

impl DecodeOptions {
    /// Whether a pointer to an IFD of this kind should be followed.
    pub fn follows(&self, kind: IfdKind) -> bool {
        match kind {
            IfdKind::Exif => true,
            IfdKind::Gps => self.gps,
            IfdKind::Interop => self.interop,
            IfdKind::Primary | IfdKind::Thumbnail => false,
        }
    }
}

// =============================================================================
// DecodedTag
// =============================================================================

/// One decoded metadata entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedTag {
    pub tag: u16,

    /// Directory the entry was read from
    pub ifd: IfdKind,

    pub field_type: FieldType,

    /// Registry label, or the hex tag id for unknown tags
    pub label: String,

    /// Symbolic name, if the tag is in the registry
    pub name: Option<&'static str>,

    pub value: TagValue,
}

// =============================================================================
// IfdDecoder
// =============================================================================

/// What an entry turns into once classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryTarget {
    /// A metadata value, emitted as a [`DecodedTag`]
    Leaf,
    /// An offset to another IFD, decoded in place of the entry
    NestedIfd(IfdKind),
}

impl EntryTarget {
    fn classify(entry: &IfdEntry) -> Self {
        match pointer_target(entry.tag) {
            Some(kind) => EntryTarget::NestedIfd(kind),
            None => EntryTarget::Leaf,
        }
    }
}

/// Decodes the IFD structure of one TIFF buffer.
///
/// A decoder is single-use: it remembers every IFD offset it has entered so
/// that self-referencing files fail instead of looping.
pub struct IfdDecoder<'a> {
    buffer: TiffBuffer<'a>,
    options: DecodeOptions,
    visited: HashSet<u32>,
}

impl<'a> IfdDecoder<'a> {
    pub fn new(buffer: TiffBuffer<'a>, options: DecodeOptions) -> Self {
        Self {
            buffer,
            options,
            visited: HashSet::new(),
        }
    }

    /// Walk the top-level IFD chain starting at `first_offset`.
    ///
    /// # Errors
    /// Any failure in the primary IFD or its sub-IFDs is returned as is.
    /// Failures inside the thumbnail IFD, including revisited offsets, are
    /// logged and its tags dropped. A third chained IFD is `TooManyIfds`.
    pub fn decode(mut self, first_offset: u32) -> Result<Vec<DecodedTag>, ExifError> {
        let mut tags = Vec::new();
        let mut offset = first_offset;
        let mut counter = 0usize;

        while offset != 0 {
            counter += 1;
            match counter {
                1 => {
                    self.decode_ifd(offset, IfdKind::Primary, 0, &mut tags)?;
                    offset = self.read_next_offset(offset)?;
                }
                2 => match self.decode_thumbnail(offset) {
                    Ok((thumbnail_tags, next)) => {
                        tags.extend(thumbnail_tags);
                        offset = next;
                    }
                    Err(err) => {
                        warn!(offset, "Ignoring malformed thumbnail IFD: {}", err);
                        break;
                    }
                },
                _ => return Err(ExifError::TooManyIfds),
            }
        }

        debug!(count = tags.len(), ifds = counter, "Decoded IFD chain");
        Ok(tags)
    }

    /// Decode IFD1 into its own list so a failure can discard it whole.
    fn decode_thumbnail(&mut self, offset: u32) -> Result<(Vec<DecodedTag>, u32), ExifError> {
        let mut tags = Vec::new();
        if self.options.thumbnail {
            self.decode_ifd(offset, IfdKind::Thumbnail, 0, &mut tags)?;
        } else {
            self.enter(offset)?;
            trace!(offset, "Skipping thumbnail IFD");
        }
        let next = self.read_next_offset(offset)?;
        Ok((tags, next))
    }

    /// Record `offset` as visited.
    fn enter(&mut self, offset: u32) -> Result<(), ExifError> {
        if !self.visited.insert(offset) {
            return Err(ExifError::CircularIfd(offset));
        }
        Ok(())
    }

    /// Decode the entries of the IFD at `offset`, appending leaves to `out`.
    fn decode_ifd(
        &mut self,
        offset: u32,
        kind: IfdKind,
        depth: usize,
        out: &mut Vec<DecodedTag>,
    ) -> Result<(), ExifError> {
        if depth > MAX_DEPTH {
            return Err(ExifError::TooDeep(depth));
        }
        self.enter(offset)?;

        let offset = offset as u64;
        let entry_count = self.buffer.read_u16(offset)? as u64;
        let entries_start = offset + IFD_COUNT_SIZE as u64;

        // Check the whole table up front so a bad count fails before any output
        self.buffer
            .read_exact_at(entries_start, entry_count * IFD_ENTRY_SIZE as u64)?;

        debug!(
            offset,
            ifd = kind.name(),
            entries = entry_count,
            "Decoding IFD"
        );

        for i in 0..entry_count {
            let entry = IfdEntry::parse(&self.buffer, entries_start + i * IFD_ENTRY_SIZE as u64)?;

            match EntryTarget::classify(&entry) {
                EntryTarget::NestedIfd(target) => {
                    if !self.options.follows(target) {
                        trace!(tag = entry.tag, ifd = target.name(), "Not following pointer");
                        continue;
                    }
                    let target_offset = entry.value_offset(self.buffer.byte_order());
                    self.decode_ifd(target_offset, target, depth + 1, out)?;
                }
                EntryTarget::Leaf => {
                    let tag = self.decode_leaf(&entry, kind)?;
                    trace!(tag = entry.tag, label = %tag.label, "Decoded tag");
                    out.push(tag);
                }
            }
        }

        Ok(())
    }

    fn decode_leaf(&self, entry: &IfdEntry, kind: IfdKind) -> Result<DecodedTag, ExifError> {
        let (Some(field_type), Some(byte_size), Some(inline)) =
            (entry.field_type, entry.value_byte_size(), entry.is_inline())
        else {
            return Err(ExifError::UnknownFieldType {
                tag: entry.tag,
                field_type: entry.field_type_raw,
            });
        };

        let byte_order = self.buffer.byte_order();
        let value = if inline {
            decode_value(
                field_type,
                &entry.value_offset_bytes[..byte_size as usize],
                byte_order,
            )
        } else {
            let bytes = self
                .buffer
                .read_exact_at(entry.value_offset(byte_order) as u64, byte_size)?;
            decode_value(field_type, bytes, byte_order)
        };

        let info = registry::lookup(kind, entry.tag);

        Ok(DecodedTag {
            tag: entry.tag,
            ifd: kind,
            field_type,
            label: info
                .map(|i| i.label.to_string())
                .unwrap_or_else(|| registry::fallback_label(entry.tag)),
            name: info.map(|i| i.name),
            value,
        })
    }

    /// Read the next-IFD offset stored after the entries of the IFD at `offset`.
    fn read_next_offset(&self, offset: u32) -> Result<u32, ExifError> {
        let offset = offset as u64;
        let entry_count = self.buffer.read_u16(offset)? as u64;
        let next_pos = offset + IFD_COUNT_SIZE as u64 + entry_count * IFD_ENTRY_SIZE as u64;
        self.buffer.read_u32(next_pos)
    }
}

// =============================================================================
// Tests
// =============================================================================
