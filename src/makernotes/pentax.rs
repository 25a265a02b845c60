use crate::accessor::ValueAccessor;
use crate::describe::{byte_length, decimal, fallback, lookup};
use crate::tags::pentax;

const NORMAL_LOW_HIGH: [(i64, &str); 3] = [(0, "Normal"), (1, "Low"), (2, "High")];

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        pentax::CaptureMode => lookup(
            values,
            tag,
            &[
                (1, "Auto"),
                (2, "Night-scene"),
                (3, "Manual"),
                (4, "Multiple"),
            ],
        ),
        pentax::QualityLevel => lookup(values, tag, &[(0, "Good"), (1, "Better"), (2, "Best")]),
        pentax::FocusMode => lookup(values, tag, &[(2, "Custom"), (3, "Auto")]),
        pentax::FlashMode => lookup(
            values,
            tag,
            &[
                (1, "Auto"),
                (2, "Flash On"),
                (4, "Flash Off"),
                (6, "Red-eye Reduction"),
            ],
        ),
        pentax::WhiteBalance => lookup(
            values,
            tag,
            &[
                (0, "Auto"),
                (1, "Daylight"),
                (2, "Shade"),
                (3, "Tungsten"),
                (4, "Fluorescent"),
                (5, "Manual"),
            ],
        ),
        pentax::DigitalZoom => {
            let zoom = values.float32(tag)?;
            if zoom == 0.0 {
                Some("Off".to_string())
            } else {
                Some(decimal(zoom as f64))
            }
        }
        pentax::Sharpness => lookup(values, tag, &[(0, "Normal"), (1, "Soft"), (2, "Hard")]),
        pentax::Contrast | pentax::Saturation => lookup(values, tag, &NORMAL_LOW_HIGH),
        pentax::IsoSpeed => lookup(
            values,
            tag,
            &[
                (10, "ISO 100"),
                (16, "ISO 200"),
                (100, "ISO 100"),
                (200, "ISO 200"),
            ],
        ),
        pentax::Colour => lookup(
            values,
            tag,
            &[(1, "Normal"), (2, "Black & White"), (3, "Sepia")],
        ),
        pentax::PrintImageMatchingInfo => byte_length(values, tag),
        _ => fallback(values, tag),
    }
}
