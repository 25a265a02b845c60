use crate::accessor::ValueAccessor;
use crate::describe::{f_number, fallback, indexed, lookup, simple_rational, version_bytes};
use crate::tags::samsung_type2;

const DEVICE_TYPES: [(i64, &str); 5] = [
    (0x1000, "Compact Digital Camera"),
    (0x2000, "High-end NX Camera"),
    (0x3000, "HXM Video Camera"),
    (0x12000, "Cell Phone"),
    (0x300000, "SMX Video Camera"),
];

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        samsung_type2::MakerNoteVersion => version_bytes(values, tag, 2),
        samsung_type2::DeviceType => lookup(values, tag, &DEVICE_TYPES),
        samsung_type2::RawDataByteOrder => indexed(
            values,
            tag,
            0,
            &["Little-endian (Intel)", "Big-endian (Motorola)"],
        ),
        samsung_type2::CameraTemperature => {
            Some(format!("{} C", simple_rational(values, tag, true)?))
        }
        samsung_type2::FaceDetect
        | samsung_type2::FaceRecognition
        | samsung_type2::SmartRange => indexed(values, tag, 0, &["Off", "On"]),
        samsung_type2::ColorSpace => indexed(values, tag, 0, &["sRGB", "Adobe RGB"]),
        samsung_type2::FNumber => Some(f_number(values.float64(tag)?)),
        samsung_type2::FirmwareName
        | samsung_type2::SerialNumber
        | samsung_type2::LensFirmware
        | samsung_type2::InternalLensSerialNumber
        | samsung_type2::FaceName => values.string(tag),
        _ => fallback(values, tag),
    }
}
