//! JPEG container scanning.
//!
//! A JPEG file is a sequence of marker segments. Each segment starts with a
//! `0xFF` delimiter and a marker byte, followed (for everything except the
//! standalone SOI/EOI markers) by a big-endian length that counts itself:
//!
//! ```text
//! FF D8                       SOI
//! FF E1 LL LL <LL-2 bytes>    APP1 (EXIF)
//! FF DB LL LL <LL-2 bytes>    DQT
//! ...
//! FF DA LL LL <LL-2 bytes>    SOS, then entropy-coded scan data
//! FF D9                       EOI
//! ```
//!
//! The scanner only reads segment headers and payloads. It never decodes
//! image data, and it stops after the SOS header because what follows is
//! entropy-coded data rather than marker segments.

use std::fmt;
use std::io::Read;

use bytes::Bytes;
use tracing::{debug, trace};

use crate::error::JpegError;
use crate::io::{read_array, read_vec, skip};

use super::exif::EXIF_PREFIX;

// =============================================================================
// JPEG Markers
// =============================================================================

/// Start Of Image marker
pub const SOI: [u8; 2] = [0xFF, 0xD8];

/// End Of Image marker
pub const EOI: [u8; 2] = [0xFF, 0xD9];

/// First byte of every marker
pub const MARKER_DELIMITER: u8 = 0xFF;

const APP_NAMES: [&str; 16] = [
    "APP0", "APP1", "APP2", "APP3", "APP4", "APP5", "APP6", "APP7", "APP8", "APP9", "APP10",
    "APP11", "APP12", "APP13", "APP14", "APP15",
];

/// Marker segments the scanner recognizes.
///
/// Segments with any other marker byte are skipped without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Start Of Frame, baseline DCT (0xC0)
    Sof0,

    /// Start Of Frame, progressive DCT (0xC2)
    Sof2,

    /// Define Huffman Table (0xC4)
    Dht,

    /// Start Of Scan (0xDA)
    Sos,

    /// Define Quantization Table (0xDB)
    Dqt,

    /// Define Restart Interval (0xDD)
    Dri,

    /// Application segment APPn, n in 0..=15 (0xE0-0xEF)
    App(u8),

    /// Comment (0xFE)
    Com,
}

impl Marker {
    /// The APP1 marker, which carries EXIF (and sometimes XMP) data.
    pub const APP1: Marker = Marker::App(1);

    /// Look up a marker byte in the segment table.
    pub const fn from_u8(code: u8) -> Option<Self> {
        match code {
            0xC0 => Some(Marker::Sof0),
            0xC2 => Some(Marker::Sof2),
            0xC4 => Some(Marker::Dht),
            0xDA => Some(Marker::Sos),
            0xDB => Some(Marker::Dqt),
            0xDD => Some(Marker::Dri),
            0xE0..=0xEF => Some(Marker::App(code - 0xE0)),
            0xFE => Some(Marker::Com),
            _ => None,
        }
    }

    /// The marker byte that follows the `0xFF` delimiter.
    pub const fn as_u8(self) -> u8 {
        match self {
            Marker::Sof0 => 0xC0,
            Marker::Sof2 => 0xC2,
            Marker::Dht => 0xC4,
            Marker::Sos => 0xDA,
            Marker::Dqt => 0xDB,
            Marker::Dri => 0xDD,
            Marker::App(n) => 0xE0 | (n & 0x0F),
            Marker::Com => 0xFE,
        }
    }

    /// Conventional segment name, e.g. `"APP1"` or `"DQT"`.
    pub const fn name(self) -> &'static str {
        match self {
            Marker::Sof0 => "SOF0",
            Marker::Sof2 => "SOF2",
            Marker::Dht => "DHT",
            Marker::Sos => "SOS",
            Marker::Dqt => "DQT",
            Marker::Dri => "DRI",
            Marker::App(n) => APP_NAMES[(n & 0x0F) as usize],
            Marker::Com => "COM",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Segment
// =============================================================================

/// One marker segment and its payload (length field excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub marker: Marker,
    pub payload: Bytes,
}

impl Segment {
    /// Whether this APP1 segment carries EXIF data rather than, say, XMP.
    pub fn is_exif(&self) -> bool {
        self.marker == Marker::APP1 && self.payload.starts_with(EXIF_PREFIX)
    }
}

// =============================================================================
// SegmentScanner
// =============================================================================

/// Walks a JPEG stream one marker segment at a time.
///
/// The scanner reads lazily, so callers that only need the first APP1
/// segment never touch the rest of the file. Once the scan ends (EOI,
/// a non-delimiter byte, the SOS header, or an error) every further call
/// yields `None`.
pub struct SegmentScanner<R> {
    reader: R,
    started: bool,
    finished: bool,
}

impl<R: Read> SegmentScanner<R> {
    /// Create a scanner over a stream positioned at the start of the file.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            started: false,
            finished: false,
        }
    }

    /// Read the next recognized segment.
    ///
    /// # Errors
    /// - `InvalidContainer` if the stream does not begin with SOI
    /// - `InvalidSegmentLength` if a length field is below 2
    /// - `Truncated` if the stream ends inside a header or payload
    /// - `Io` for reader failures
    pub fn next_segment(&mut self) -> Result<Option<Segment>, JpegError> {
        if self.finished {
            return Ok(None);
        }

        let result = self.read_next();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    /// Give back the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Consume the SOI marker.
    ///
    /// A first byte other than `0xFF` is already conclusive, so a one-byte
    /// stream like that is `InvalidContainer` rather than `Truncated`.
    fn read_soi(&mut self) -> Result<(), JpegError> {
        let [first]: [u8; 1] = read_array(&mut self.reader)?;
        let second = match read_array::<_, 1>(&mut self.reader) {
            Ok([second]) => Some(second),
            Err(JpegError::Truncated { .. }) if first != SOI[0] => None,
            Err(err) => return Err(err),
        };

        match second {
            Some(second) if [first, second] == SOI => Ok(()),
            Some(second) => Err(JpegError::InvalidContainer(u16::from_be_bytes([
                first, second,
            ]))),
            None => Err(JpegError::InvalidContainer(u16::from(first) << 8)),
        }
    }

    fn read_next(&mut self) -> Result<Option<Segment>, JpegError> {
        if !self.started {
            self.read_soi()?;
            self.started = true;
        }

        loop {
            let [delimiter, code]: [u8; 2] = read_array(&mut self.reader)?;

            // Anything but a delimiter here is trailing data, not a segment
            if delimiter != MARKER_DELIMITER {
                debug!(byte = delimiter, "End of marker segments");
                return Ok(None);
            }
            if code == EOI[1] {
                trace!("Reached EOI");
                return Ok(None);
            }

            let length_bytes: [u8; 2] = read_array(&mut self.reader)?;
            let length = u16::from_be_bytes(length_bytes);
            if length < 2 {
                return Err(JpegError::InvalidSegmentLength {
                    marker: code,
                    length,
                });
            }
            let payload_len = (length - 2) as usize;

            let Some(marker) = Marker::from_u8(code) else {
                trace!(marker = code, length, "Skipping unrecognized segment");
                skip(&mut self.reader, payload_len)?;
                continue;
            };

            let payload = read_vec(&mut self.reader, payload_len)?;
            debug!(marker = marker.name(), length, "Read segment");

            // Entropy-coded data follows the scan header
            if marker == Marker::Sos {
                self.finished = true;
            }

            return Ok(Some(Segment {
                marker,
                payload: Bytes::from(payload),
            }));
        }
    }
}

impl<R: Read> Iterator for SegmentScanner<R> {
    type Item = Result<Segment, JpegError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_segment().transpose()
    }
}

// =============================================================================
// Convenience Functions
// =============================================================================

/// Collect every recognized segment in the stream.
pub fn scan_segments<R: Read>(reader: R) -> Result<Vec<Segment>, JpegError> {
    SegmentScanner::new(reader).collect()
}

/// Return the first APP1 segment, stopping the scan as soon as it is found.
pub fn find_app1<R: Read>(reader: R) -> Result<Option<Segment>, JpegError> {
    let mut scanner = SegmentScanner::new(reader);
    while let Some(segment) = scanner.next_segment()? {
        if segment.marker == Marker::APP1 {
            return Ok(Some(segment));
        }
    }
    Ok(None)
}

/// Return the first APP1 segment whose payload starts with `"Exif\0\0"`.
///
/// APP1 is shared with XMP packets, which some writers place first.
pub fn find_exif_segment<R: Read>(reader: R) -> Result<Option<Segment>, JpegError> {
    let mut scanner = SegmentScanner::new(reader);
    while let Some(segment) = scanner.next_segment()? {
        if segment.is_exif() {
            return Ok(Some(segment));
        }
        if segment.marker == Marker::APP1 {
            debug!(len = segment.payload.len(), "Skipping non-EXIF APP1 segment");
        }
    }
    Ok(None)
}

// =============================================================================
// Tests
// =============================================================================
