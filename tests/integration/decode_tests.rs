//! End-to-end EXIF decoding tests.
//!
//! Tests verify:
//! - Camera-shaped payloads decode in file order across all sub-IFDs
//! - Little-endian and big-endian files produce identical tags
//! - Decode options select which optional directories are read
//! - Structural errors abort the whole decode

use std::io::Cursor;

use jpeg_exif::{
    decode, read_exif, read_exif_with_options, DecodeOptions, Error, ExifError, FieldType,
    IfdKind, Rational, SRational, TagValue,
};

use super::test_utils::{
    camera_exif, create_jpeg_with_exif, ByteOrderType, ExifBuilder, IfdBuilder, Value,
};

fn read_camera_jpeg(byte_order: ByteOrderType) -> Vec<jpeg_exif::DecodedTag> {
    let jpeg = create_jpeg_with_exif(&camera_exif(byte_order));
    read_exif(Cursor::new(jpeg)).unwrap()
}

// =============================================================================
// Full Payload Tests
// =============================================================================

#[test]
fn test_camera_tags_in_file_order() {
    let tags = read_camera_jpeg(ByteOrderType::LittleEndian);

    let ids: Vec<(IfdKind, u16)> = tags.iter().map(|t| (t.ifd, t.tag)).collect();
    assert_eq!(
        ids,
        vec![
            (IfdKind::Primary, 0x010F),
            (IfdKind::Primary, 0x0110),
            (IfdKind::Primary, 0x0112),
            (IfdKind::Primary, 0x011A),
            (IfdKind::Primary, 0x0128),
            (IfdKind::Exif, 0x829A),
            (IfdKind::Exif, 0x829D),
            (IfdKind::Exif, 0x8827),
            (IfdKind::Exif, 0x9000),
            (IfdKind::Exif, 0x9003),
            (IfdKind::Exif, 0x9204),
            (IfdKind::Interop, 0x0001),
            (IfdKind::Interop, 0x0002),
            (IfdKind::Exif, 0xC4A5),
            (IfdKind::Gps, 0x0000),
            (IfdKind::Gps, 0x0001),
            (IfdKind::Gps, 0x0002),
            (IfdKind::Thumbnail, 0x0103),
            (IfdKind::Thumbnail, 0x0201),
            (IfdKind::Thumbnail, 0x0202),
        ]
    );
}

#[test]
fn test_pointer_tags_not_emitted() {
    let tags = read_camera_jpeg(ByteOrderType::BigEndian);

    for pointer in [0x8769, 0x8825, 0xA005] {
        assert!(
            tags.iter().all(|t| t.tag != pointer),
            "pointer 0x{:04X} leaked into output",
            pointer
        );
    }
}

#[test]
fn test_camera_tag_values() {
    let tags = read_camera_jpeg(ByteOrderType::BigEndian);
    let find = |ifd: IfdKind, id: u16| {
        tags.iter()
            .find(|t| t.ifd == ifd && t.tag == id)
            .unwrap_or_else(|| panic!("tag 0x{:04X} missing", id))
    };

    let make = find(IfdKind::Primary, 0x010F);
    assert_eq!(make.label, "Camera Make");
    assert_eq!(make.field_type, FieldType::Ascii);
    assert_eq!(
        make.value,
        TagValue::Ascii("PENTAX Corporation \0".to_string())
    );

    let model = find(IfdKind::Primary, 0x0110);
    assert_eq!(model.value, TagValue::Ascii("PENTAX K-3\0".to_string()));

    let exposure = find(IfdKind::Exif, 0x829A);
    assert_eq!(exposure.label, "Exposure Time");
    assert_eq!(exposure.value.as_rational(), Some(Rational::new(1, 8)));

    let bias = find(IfdKind::Exif, 0x9204);
    assert_eq!(bias.value.as_srational(), Some(SRational::new(-1, 3)));

    let version = find(IfdKind::Exif, 0x9000);
    assert_eq!(version.value.as_bytes(), Some(&b"0230"[..]));

    let latitude = find(IfdKind::Gps, 0x0002);
    assert_eq!(latitude.name, Some("GPSLatitude"));
    assert_eq!(
        latitude.value,
        TagValue::Rational(vec![
            Rational::new(47, 1),
            Rational::new(12, 1),
            Rational::new(3400, 100),
        ])
    );

    let interop_index = find(IfdKind::Interop, 0x0001);
    assert_eq!(interop_index.value.as_str(), Some("R98"));

    let thumb_offset = find(IfdKind::Thumbnail, 0x0201);
    assert_eq!(thumb_offset.value.as_u32(), Some(4096));
}

#[test]
fn test_unknown_tag_uses_hex_label() {
    let tags = read_camera_jpeg(ByteOrderType::LittleEndian);

    let unknown = tags.iter().find(|t| t.tag == 0xC4A5).unwrap();
    assert_eq!(unknown.label, "0xc4a5");
    assert_eq!(unknown.name, None);
    assert_eq!(unknown.value.as_u32(), Some(7));
}

#[test]
fn test_byte_orders_agree() {
    assert_eq!(
        read_camera_jpeg(ByteOrderType::LittleEndian),
        read_camera_jpeg(ByteOrderType::BigEndian)
    );
}

#[test]
fn test_decode_is_idempotent() {
    let payload = camera_exif(ByteOrderType::BigEndian);
    let first = decode(&payload).unwrap();
    let second = decode(&payload).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Decode Options Tests
// =============================================================================

#[test]
fn test_options_skip_optional_directories() {
    let jpeg = create_jpeg_with_exif(&camera_exif(ByteOrderType::LittleEndian));
    let options = DecodeOptions {
        thumbnail: false,
        gps: false,
        interop: false,
    };

    let tags = read_exif_with_options(Cursor::new(jpeg), &options).unwrap();
    assert!(!tags.is_empty());
    assert!(tags
        .iter()
        .all(|t| matches!(t.ifd, IfdKind::Primary | IfdKind::Exif)));
    assert!(tags.iter().all(|t| t.tag != 0x8825 && t.tag != 0xA005));
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_invalid_magic() {
    let payload = ExifBuilder::new(ByteOrderType::LittleEndian)
        .with_magic(43)
        .add_ifd(IfdBuilder::new().entry(0x0112, Value::Short(vec![1])))
        .build();
    let jpeg = create_jpeg_with_exif(&payload);

    assert_eq!(
        read_exif(Cursor::new(jpeg)),
        Err(Error::Exif(ExifError::InvalidTiffMagic(43)))
    );
}

#[test]
fn test_three_chained_ifds() {
    let ifd = || IfdBuilder::new().entry(0x0112, Value::Short(vec![1]));
    let payload = ExifBuilder::new(ByteOrderType::BigEndian)
        .add_ifd(ifd())
        .add_ifd(ifd())
        .add_ifd(ifd())
        .build();

    assert_eq!(decode(&payload), Err(ExifError::TooManyIfds));
}

#[test]
fn test_unknown_field_type() {
    let payload = ExifBuilder::new(ByteOrderType::LittleEndian)
        .add_ifd(IfdBuilder::new().entry(
            0x010F,
            Value::Raw {
                field_type: 13,
                count: 1,
                bytes: vec![0, 0, 0, 0],
            },
        ))
        .build();

    assert_eq!(
        decode(&payload),
        Err(ExifError::UnknownFieldType {
            tag: 0x010F,
            field_type: 13
        })
    );
}

#[test]
fn test_value_offset_past_end() {
    // 16 rationals claimed, stored at an offset far past the payload
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x1000u32.to_le_bytes());
    let payload = ExifBuilder::new(ByteOrderType::LittleEndian)
        .add_ifd(IfdBuilder::new().entry(
            0x829A,
            Value::Raw {
                field_type: 5,
                count: 16,
                bytes,
            },
        ))
        .build();

    assert!(matches!(
        decode(&payload),
        Err(ExifError::Truncated {
            offset: 0x1000,
            requested: 128,
            ..
        })
    ));
}

#[test]
fn test_broken_thumbnail_keeps_primary_tags() {
    let payload = ExifBuilder::new(ByteOrderType::BigEndian)
        .add_ifd(IfdBuilder::new().entry(0x0112, Value::Short(vec![8])))
        .add_ifd(IfdBuilder::new().entry(
            0x0201,
            Value::Raw {
                field_type: 99,
                count: 1,
                bytes: vec![0, 0, 0, 0],
            },
        ))
        .build();

    let tags = decode(&payload).unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].value.as_u32(), Some(8));
}

fn pointer(offset: u32) -> Value {
    Value::Raw {
        field_type: 4,
        count: 1,
        bytes: offset.to_be_bytes().to_vec(),
    }
}

#[test]
fn test_thumbnail_pointer_to_primary_keeps_primary_tags() {
    // The primary IFD always sits at offset 8
    let payload = ExifBuilder::new(ByteOrderType::BigEndian)
        .add_ifd(
            IfdBuilder::new()
                .entry(0x0112, Value::Short(vec![8]))
                .entry(
                    0x8769,
                    Value::SubIfd(IfdBuilder::new().entry(0x8827, Value::Short(vec![400]))),
                ),
        )
        .add_ifd(
            IfdBuilder::new()
                .entry(0x0103, Value::Short(vec![6]))
                .entry(0x8769, pointer(8)),
        )
        .build();

    let tags = decode(&payload).unwrap();
    let ids: Vec<(IfdKind, u16)> = tags.iter().map(|t| (t.ifd, t.tag)).collect();
    assert_eq!(ids, vec![(IfdKind::Primary, 0x0112), (IfdKind::Exif, 0x8827)]);
}

#[test]
fn test_thumbnail_gps_pointer_past_end() {
    let payload = ExifBuilder::new(ByteOrderType::BigEndian)
        .add_ifd(IfdBuilder::new().entry(0x0112, Value::Short(vec![1])))
        .add_ifd(
            IfdBuilder::new()
                .entry(0x0103, Value::Short(vec![6]))
                .entry(0x8825, pointer(0x00FF_0000)),
        )
        .build();
    let jpeg = create_jpeg_with_exif(&payload);

    let tags = read_exif(Cursor::new(&jpeg)).unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].ifd, IfdKind::Primary);

    let options = DecodeOptions {
        gps: false,
        ..Default::default()
    };
    let tags = read_exif_with_options(Cursor::new(&jpeg), &options).unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[1].ifd, IfdKind::Thumbnail);
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_json_output() {
    let tags = read_camera_jpeg(ByteOrderType::LittleEndian);
    let json = serde_json::to_value(&tags).unwrap();

    let make = &json[0];
    assert_eq!(make["tag"], 0x010F);
    assert_eq!(make["ifd"], "primary");
    assert_eq!(make["field_type"], "ascii");
    assert_eq!(make["name"], "Make");
    assert_eq!(make["value"]["ascii"], "PENTAX Corporation \u{0}");

    let exposure = json
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["tag"] == 0x829A)
        .unwrap();
    assert_eq!(exposure["value"]["rational"][0]["num"], 1);
    assert_eq!(exposure["value"]["rational"][0]["denom"], 8);
}

#[test]
fn test_display_values() {
    let tags = read_camera_jpeg(ByteOrderType::BigEndian);
    let shown = |id: u16| {
        tags.iter()
            .find(|t| t.tag == id && t.ifd != IfdKind::Interop)
            .unwrap()
            .value
            .to_string()
    };

    assert_eq!(shown(0x010F), "PENTAX Corporation ");
    assert_eq!(shown(0x829A), "1/8");
    assert_eq!(shown(0x9204), "-1/3");
    assert_eq!(shown(0x9000), "30 32 33 30");
}
