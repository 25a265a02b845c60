use crate::accessor::ValueAccessor;
use crate::describe::{byte_length, fallback, indexed, lookup, trimmed_decimal, unknown};
use crate::tags::casio_type2;

const MINUS_NORMAL_PLUS: [&str; 3] = ["-1", "Normal", "+1"];

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        casio_type2::ThumbnailDimensions => match values.int_array(tag)?.as_slice() {
            [width, height] => Some(format!("{width} x {height} pixels")),
            _ => fallback(values, tag),
        },
        casio_type2::ThumbnailSize => Some(format!("{} bytes", values.integer(tag)?)),
        casio_type2::QualityMode => indexed(values, tag, 1, &["Fine", "Super Fine"]),
        casio_type2::ImageSize => lookup(
            values,
            tag,
            &[
                (0, "640 x 480 pixels"),
                (4, "1600 x 1200 pixels"),
                (5, "2048 x 1536 pixels"),
                (20, "2288 x 1712 pixels"),
                (21, "2592 x 1944 pixels"),
                (22, "2304 x 1728 pixels"),
                (36, "3008 x 2008 pixels"),
            ],
        ),
        casio_type2::FocusMode1 => lookup(values, tag, &[(0, "Normal"), (1, "Macro")]),
        casio_type2::IsoSensitivity => {
            lookup(values, tag, &[(3, "50"), (4, "64"), (6, "100"), (9, "200")])
        }
        casio_type2::WhiteBalance1 => indexed(
            values,
            tag,
            0,
            &["Auto", "Daylight", "Shade", "Tungsten", "Florescent", "Manual"],
        ),
        // stored in 1/10 mm
        casio_type2::FocalLength => Some(format!(
            "{} mm",
            trimmed_decimal(values.float64(tag)? / 10.0, 3)
        )),
        casio_type2::Saturation | casio_type2::Contrast | casio_type2::Sharpness => {
            indexed(values, tag, 0, &MINUS_NORMAL_PLUS)
        }
        casio_type2::PrintImageMatchingInfo => byte_length(values, tag),
        casio_type2::PreviewThumbnail => Some(format!(
            "<{} bytes of image data>",
            values.byte_array(tag)?.len()
        )),
        casio_type2::WhiteBalance2 => lookup(
            values,
            tag,
            &[(0, "Manual"), (1, "Auto"), (4, "Flash"), (12, "Flash")],
        ),
        casio_type2::ObjectDistance => Some(format!("{} mm", values.integer(tag)?)),
        casio_type2::FlashDistance => only(values, tag, 0, "Off"),
        casio_type2::RecordMode => only(values, tag, 2, "Normal"),
        casio_type2::SelfTimer => only(values, tag, 1, "Off"),
        casio_type2::Quality => only(values, tag, 3, "Fine"),
        casio_type2::FocusMode2 => {
            lookup(values, tag, &[(1, "Fixation"), (6, "Multi-Area Focus")])
        }
        casio_type2::BestShotMode => indexed(values, tag, 0, &["Off", "On"]),
        casio_type2::CcdIsoSensitivity => lookup(values, tag, &[(0, "Off"), (1, "On")]),
        casio_type2::ColourMode | casio_type2::Enhancement | casio_type2::Filter => {
            only(values, tag, 0, "Off")
        }
        _ => fallback(values, tag),
    }
}

/// Tags where a single value is documented; anything else is unknown.
fn only(values: &dyn ValueAccessor, tag: u16, known: i64, label: &str) -> Option<String> {
    let value = values.integer(tag)?;
    Some(if value == known {
        label.to_string()
    } else {
        unknown(value)
    })
}
