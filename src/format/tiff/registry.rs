//! Static tag name tables.
//!
//! TIFF and Exif tags share a single id space. GPS and Interoperability IFDs
//! reuse small ids with unrelated meanings, so each gets its own table and
//! lookups are keyed by the IFD a tag was found in.

use super::ifd::IfdKind;

/// Registry entry for a known tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub id: u16,

    /// Symbolic name as written in the EXIF standard
    pub name: &'static str,

    /// Human-readable description
    pub label: &'static str,
}

const fn tag(id: u16, name: &'static str, label: &'static str) -> TagInfo {
    TagInfo { id, name, label }
}

// =============================================================================
// TIFF / Exif
// =============================================================================

/// Tags of the primary, thumbnail and Exif IFDs.
pub static TIFF_TAGS: &[TagInfo] = &[
    // Image data structure
    tag(0x0100, "ImageWidth", "Image width"),
    tag(0x0101, "ImageLength", "Image height"),
    tag(0x0102, "BitsPerSample", "Number of bits per component"),
    tag(0x0103, "Compression", "Compression scheme"),
    tag(0x0106, "PhotometricInterpretation", "Pixel composition"),
    tag(0x0112, "Orientation", "Orientation of image"),
    tag(0x0115, "SamplesPerPixel", "Number of components"),
    tag(0x011C, "PlanarConfiguration", "Image data arrangement"),
    tag(0x0212, "YCbCrSubSampling", "Subsampling ratio of Y to C"),
    tag(0x0213, "YCbCrPositioning", "Y and C positioning"),
    tag(0x011A, "XResolution", "X Resolution"),
    tag(0x011B, "YResolution", "Y Resolution"),
    tag(0x0128, "ResolutionUnit", "Unit of X and Y resolution"),
    // Recording offsets
    tag(0x0111, "StripOffsets", "Image data location"),
    tag(0x0116, "RowsPerStrip", "Number of rows per strip"),
    tag(0x0117, "StripByteCounts", "Bytes per compressed strip"),
    tag(0x0201, "JPEGInterchangeFormat", "Offset to JPEG SOI"),
    tag(0x0202, "JPEGInterchangeFormatLength", "Bytes of JPEG data"),
    // Image data characteristics
    tag(0x012D, "TransferFunction", "Transfer function"),
    tag(0x013E, "WhitePoint", "White point chromaticity"),
    tag(0x013F, "PrimaryChromaticities", "Chromaticities of primaries"),
    tag(0x0211, "YCbCrCoefficients", "Color space transformation matrix coefficients"),
    tag(0x0214, "ReferenceBlackWhite", "Pair of black and white reference values"),
    // Other TIFF tags
    tag(0x0132, "DateTime", "File change date and time"),
    tag(0x010E, "ImageDescription", "Image title"),
    tag(0x010F, "Make", "Camera Make"),
    tag(0x0110, "Model", "Camera Model"),
    tag(0x0131, "Software", "Camera Software"),
    tag(0x013B, "Artist", "Artist"),
    tag(0x8298, "Copyright", "Copyright holder"),
    // IFD pointers
    tag(0x8769, "ExifIFDPointer", "Exif IFD Pointer"),
    tag(0x8825, "GPSInfoIFDPointer", "GPS Info IFD Pointer"),
    tag(0xA005, "InteroperabilityIFDPointer", "Interoperability IFD Pointer"),
    // Exif version
    tag(0x9000, "ExifVersion", "Exif Version"),
    tag(0xA000, "FlashpixVersion", "Supported Flashpix version"),
    tag(0xA001, "ColorSpace", "Color Space Information"),
    // Image configuration
    tag(0x9101, "ComponentsConfiguration", "Meaning of each component"),
    tag(0x9102, "CompressedBitsPerPixel", "Image compression mode"),
    tag(0xA002, "PixelXDimension", "Valid image width"),
    tag(0xA003, "PixelYDimension", "Valid image height"),
    // User information
    tag(0x927C, "MakerNote", "Manufacturer notes"),
    tag(0x9286, "UserComment", "User comments"),
    tag(0xA004, "RelatedSoundFile", "Related audio file"),
    // Date and time
    tag(0x9003, "DateTimeOriginal", "Date of original data generation"),
    tag(0x9004, "DateTimeDigitized", "Date of digital data generation"),
    tag(0x9010, "OffsetTime", "Offset of file change date and time"),
    tag(0x9011, "OffsetTimeOriginal", "Offset of original date and time"),
    tag(0x9012, "OffsetTimeDigitized", "Offset of digitized date and time"),
    tag(0x9290, "SubSecTime", "DateTime subseconds"),
    tag(0x9291, "SubSecTimeOriginal", "DateTime original subseconds"),
    tag(0x9292, "SubSecTimeDigitized", "DateTime digitized subseconds"),
    // Picture-taking conditions
    tag(0x829A, "ExposureTime", "Exposure Time"),
    tag(0x829D, "FNumber", "F Number"),
    tag(0x8822, "ExposureProgram", "Exposure Program"),
    tag(0x8824, "SpectralSensitivity", "Spectral Sensitivity"),
    tag(0x8827, "PhotographicSensitivity", "ISO Speed Rating"),
    tag(0x8828, "OECF", "Optoelectric conversion factor"),
    tag(0x8830, "SensitivityType", "Sensitivity type"),
    tag(0x9201, "ShutterSpeedValue", "Shutter speed"),
    tag(0x9202, "ApertureValue", "Aperture"),
    tag(0x9203, "BrightnessValue", "Brightness"),
    tag(0x9204, "ExposureBiasValue", "Exposure bias"),
    tag(0x9205, "MaxApertureValue", "Maximum lens aperture"),
    tag(0x9206, "SubjectDistance", "Subject distance"),
    tag(0x9207, "MeteringMode", "Metering mode"),
    tag(0x9208, "LightSource", "Light source"),
    tag(0x9209, "Flash", "Flash"),
    tag(0x920A, "FocalLength", "Lens focal length"),
    tag(0x9214, "SubjectArea", "Subject area"),
    tag(0xA20B, "FlashEnergy", "Flash energy"),
    tag(0xA20C, "SpatialFrequencyResponse", "Spatial frequency response"),
    tag(0xA20E, "FocalPlaneXResolution", "Focal plane X resolution"),
    tag(0xA20F, "FocalPlaneYResolution", "Focal plane Y resolution"),
    tag(0xA210, "FocalPlaneResolutionUnit", "Focal plane resolution unit"),
    tag(0xA214, "SubjectLocation", "Subject location"),
    tag(0xA215, "ExposureIndex", "Exposure index"),
    tag(0xA217, "SensingMethod", "Sensing method"),
    tag(0xA300, "FileSource", "File source"),
    tag(0xA301, "SceneType", "Scene type"),
    tag(0xA302, "CFAPattern", "CFA pattern"),
    tag(0xA401, "CustomRendered", "Custom image processing"),
    tag(0xA402, "ExposureMode", "Exposure mode"),
    tag(0xA403, "WhiteBalance", "White balance"),
    tag(0xA404, "DigitalZoomRatio", "Digital zoom ratio"),
    tag(0xA405, "FocalLengthIn35mmFilm", "Focal length in 35mm film"),
    tag(0xA406, "SceneCaptureType", "Scene capture type"),
    tag(0xA407, "GainControl", "Gain control"),
    tag(0xA408, "Contrast", "Contrast"),
    tag(0xA409, "Saturation", "Saturation"),
    tag(0xA40A, "Sharpness", "Sharpness"),
    tag(0xA40B, "DeviceSettingDescription", "Device settings description"),
    tag(0xA40C, "SubjectDistanceRange", "Subject distance range"),
    // Other Exif tags
    tag(0xA420, "ImageUniqueID", "Unique image ID"),
    tag(0xA430, "CameraOwnerName", "Camera owner name"),
    tag(0xA431, "BodySerialNumber", "Body serial number"),
    tag(0xA432, "LensSpecification", "Lens specification"),
    tag(0xA433, "LensMake", "Lens make"),
    tag(0xA434, "LensModel", "Lens model"),
    tag(0xA435, "LensSerialNumber", "Lens serial number"),
];

// =============================================================================
// GPS
// =============================================================================

/// Tags of the GPS IFD.
pub static GPS_TAGS: &[TagInfo] = &[
    tag(0x0000, "GPSVersionID", "GPS tag version"),
    tag(0x0001, "GPSLatitudeRef", "North or South latitude"),
    tag(0x0002, "GPSLatitude", "Latitude"),
    tag(0x0003, "GPSLongitudeRef", "East or West longitude"),
    tag(0x0004, "GPSLongitude", "Longitude"),
    tag(0x0005, "GPSAltitudeRef", "Altitude reference"),
    tag(0x0006, "GPSAltitude", "Altitude"),
    tag(0x0007, "GPSTimeStamp", "GPS time (atomic clock)"),
    tag(0x0008, "GPSSatellites", "GPS satellites used for measurement"),
    tag(0x0009, "GPSStatus", "GPS receiver status"),
    tag(0x000A, "GPSMeasureMode", "GPS measurement mode"),
    tag(0x000B, "GPSDOP", "Measurement precision"),
    tag(0x000C, "GPSSpeedRef", "Speed unit"),
    tag(0x000D, "GPSSpeed", "Speed of GPS receiver"),
    tag(0x000E, "GPSTrackRef", "Reference for direction of movement"),
    tag(0x000F, "GPSTrack", "Direction of movement"),
    tag(0x0010, "GPSImgDirectionRef", "Reference for direction of image"),
    tag(0x0011, "GPSImgDirection", "Direction of image"),
    tag(0x0012, "GPSMapDatum", "Geodetic survey data used"),
    tag(0x0013, "GPSDestLatitudeRef", "Reference for latitude of destination"),
    tag(0x0014, "GPSDestLatitude", "Latitude of destination"),
    tag(0x0015, "GPSDestLongitudeRef", "Reference for longitude of destination"),
    tag(0x0016, "GPSDestLongitude", "Longitude of destination"),
    tag(0x0017, "GPSDestBearingRef", "Reference for bearing of destination"),
    tag(0x0018, "GPSDestBearing", "Bearing of destination"),
    tag(0x0019, "GPSDestDistanceRef", "Reference for distance to destination"),
    tag(0x001A, "GPSDestDistance", "Distance to destination"),
    tag(0x001B, "GPSProcessingMethod", "Name of GPS processing method"),
    tag(0x001C, "GPSAreaInformation", "Name of GPS area"),
    tag(0x001D, "GPSDateStamp", "GPS date"),
    tag(0x001E, "GPSDifferential", "GPS differential correction"),
    tag(0x001F, "GPSHPositioningError", "Horizontal positioning error"),
];

// =============================================================================
// Interoperability
// =============================================================================

/// Tags of the Interoperability IFD.
pub static INTEROP_TAGS: &[TagInfo] = &[
    tag(0x0001, "InteroperabilityIndex", "Interoperability identification"),
    tag(0x0002, "InteroperabilityVersion", "Interoperability version"),
    tag(0x1000, "RelatedImageFileFormat", "Related image file format"),
    tag(0x1001, "RelatedImageWidth", "Related image width"),
    tag(0x1002, "RelatedImageLength", "Related image height"),
];

fn table(kind: IfdKind) -> &'static [TagInfo] {
    match kind {
        IfdKind::Primary | IfdKind::Thumbnail | IfdKind::Exif => TIFF_TAGS,
        IfdKind::Gps => GPS_TAGS,
        IfdKind::Interop => INTEROP_TAGS,
    }
}

/// Look up a tag found in an IFD of the given kind.
pub fn lookup(kind: IfdKind, id: u16) -> Option<&'static TagInfo> {
    table(kind).iter().find(|info| info.id == id)
}

/// Label used for tags missing from the registry, e.g. `0x9214`.
pub fn fallback_label(id: u16) -> String {
    format!("0x{:x}", id)
}
