//! Segment scanner tests against encoder-produced JPEG streams.
//!
//! Tests verify:
//! - Real JPEG streams are walked up to the scan header
//! - EXIF segments are found whether or not XMP precedes them
//! - Malformed containers fail with container errors

use std::io::Cursor;

use jpeg_exif::{
    find_app1, find_exif_segment, read_exif, scan_segments, Error, JpegError, Marker,
    SegmentScanner,
};

use super::test_utils::{
    camera_exif, create_jpeg_with_exif, create_test_jpeg, insert_after_soi, segment,
    xmp_payload, ByteOrderType, APP1,
};

// =============================================================================
// Encoded JPEG Tests
// =============================================================================

#[test]
fn test_scan_encoded_jpeg() {
    let jpeg = create_test_jpeg(32, 24);

    let segments = scan_segments(Cursor::new(&jpeg)).unwrap();
    let markers: Vec<Marker> = segments.iter().map(|s| s.marker).collect();

    assert!(markers.contains(&Marker::Dqt));
    assert!(markers.contains(&Marker::Sof0));
    assert!(markers.contains(&Marker::Dht));
    assert_eq!(markers.last(), Some(&Marker::Sos), "scan should end at SOS");
    assert!(!markers.contains(&Marker::APP1));
}

#[test]
fn test_sof0_payload_has_dimensions() {
    let jpeg = create_test_jpeg(32, 24);

    let segments = scan_segments(Cursor::new(&jpeg)).unwrap();
    let sof = segments.iter().find(|s| s.marker == Marker::Sof0).unwrap();

    // precision, height, width
    assert_eq!(sof.payload[0], 8);
    assert_eq!(u16::from_be_bytes([sof.payload[1], sof.payload[2]]), 24);
    assert_eq!(u16::from_be_bytes([sof.payload[3], sof.payload[4]]), 32);
}

#[test]
fn test_encoded_jpeg_without_exif() {
    let jpeg = create_test_jpeg(16, 16);

    assert_eq!(find_app1(Cursor::new(&jpeg)).unwrap(), None);
    assert_eq!(read_exif(Cursor::new(&jpeg)), Err(Error::MissingExif));
}

// =============================================================================
// APP1 Discovery Tests
// =============================================================================

#[test]
fn test_find_inserted_exif_segment() {
    let payload = camera_exif(ByteOrderType::LittleEndian);
    let jpeg = create_jpeg_with_exif(&payload);

    let app1 = find_app1(Cursor::new(&jpeg)).unwrap().unwrap();
    assert_eq!(app1.marker, Marker::APP1);
    assert_eq!(&app1.payload[..], &payload[..]);
    assert!(app1.is_exif());
}

#[test]
fn test_xmp_before_exif() {
    let exif = camera_exif(ByteOrderType::BigEndian);
    let jpeg = insert_after_soi(
        &create_test_jpeg(16, 16),
        &[segment(APP1, &xmp_payload()), segment(APP1, &exif)],
    );

    // The first APP1 is the XMP packet
    let first = find_app1(Cursor::new(&jpeg)).unwrap().unwrap();
    assert!(!first.is_exif());

    let found = find_exif_segment(Cursor::new(&jpeg)).unwrap().unwrap();
    assert_eq!(&found.payload[..], &exif[..]);

    assert!(!read_exif(Cursor::new(&jpeg)).unwrap().is_empty());
}

#[test]
fn test_scan_stops_after_exif_segment() {
    let payload = camera_exif(ByteOrderType::LittleEndian);
    let jpeg = create_jpeg_with_exif(&payload);

    let mut scanner = SegmentScanner::new(Cursor::new(&jpeg));
    let segment = scanner.next_segment().unwrap().unwrap();
    assert!(segment.is_exif());

    // SOI + marker + length + payload, nothing more
    let cursor = scanner.into_inner();
    assert_eq!(cursor.position() as usize, 2 + 4 + payload.len());
}

#[test]
fn test_unknown_marker_is_skipped() {
    let exif = camera_exif(ByteOrderType::LittleEndian);
    // 0xF0 (JPG0) is outside the recognized marker table
    let jpeg = insert_after_soi(
        &create_test_jpeg(16, 16),
        &[segment(0xF0, b"vendor data"), segment(APP1, &exif)],
    );

    let segments = scan_segments(Cursor::new(&jpeg)).unwrap();
    assert!(segments[0].is_exif());
    assert!(read_exif(Cursor::new(&jpeg)).is_ok());
}

// =============================================================================
// Container Error Tests
// =============================================================================

#[test]
fn test_png_is_not_a_jpeg() {
    let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    assert_eq!(
        scan_segments(Cursor::new(&png)),
        Err(JpegError::InvalidContainer(0x8950))
    );
    assert_eq!(
        read_exif(Cursor::new(&png)),
        Err(Error::Jpeg(JpegError::InvalidContainer(0x8950)))
    );
}

#[test]
fn test_one_byte_text_file() {
    assert_eq!(
        read_exif(Cursor::new(b"G")),
        Err(Error::Jpeg(JpegError::InvalidContainer(0x4700)))
    );
}

#[test]
fn test_empty_input() {
    let result = scan_segments(Cursor::new(Vec::<u8>::new()));
    assert!(matches!(result, Err(JpegError::Truncated { .. })));
}

#[test]
fn test_truncated_inside_exif_segment() {
    let jpeg = create_jpeg_with_exif(&camera_exif(ByteOrderType::BigEndian));
    let cut = &jpeg[..40];

    assert!(matches!(
        read_exif(Cursor::new(cut)),
        Err(Error::Jpeg(JpegError::Truncated { .. }))
    ));
}

#[test]
fn test_invalid_segment_length() {
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x01];
    jpeg.extend_from_slice(&create_test_jpeg(8, 8)[2..]);

    assert_eq!(
        find_app1(Cursor::new(&jpeg)),
        Err(JpegError::InvalidSegmentLength {
            marker: 0xE1,
            length: 1
        })
    );
}
