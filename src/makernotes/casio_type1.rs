use crate::accessor::ValueAccessor;
use crate::describe::{fallback, lookup};
use crate::tags::casio_type1;

const NORMAL_LOW_HIGH: [(i64, &str); 3] = [(0, "Normal"), (1, "Low"), (2, "High")];

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        casio_type1::RecordingMode => lookup(
            values,
            tag,
            &[
                (1, "Single shutter"),
                (2, "Panorama"),
                (3, "Night scene"),
                (4, "Portrait"),
                (5, "Landscape"),
            ],
        ),
        casio_type1::Quality => lookup(values, tag, &[(1, "Economy"), (2, "Normal"), (3, "Fine")]),
        casio_type1::FocusingMode => lookup(
            values,
            tag,
            &[
                (2, "Macro"),
                (3, "Auto focus"),
                (4, "Manual focus"),
                (5, "Infinity"),
            ],
        ),
        casio_type1::FlashMode => lookup(
            values,
            tag,
            &[
                (1, "Auto"),
                (2, "On"),
                (3, "Off"),
                (4, "Red eye reduction"),
            ],
        ),
        casio_type1::FlashIntensity => {
            lookup(values, tag, &[(11, "Weak"), (13, "Normal"), (15, "Strong")])
        }
        casio_type1::ObjectDistance => Some(format!("{} mm", values.integer(tag)?)),
        casio_type1::WhiteBalance => lookup(
            values,
            tag,
            &[
                (1, "Auto"),
                (2, "Tungsten"),
                (3, "Daylight"),
                (4, "Fluorescent"),
                (5, "Shade"),
                (129, "Manual"),
            ],
        ),
        casio_type1::DigitalZoom => lookup(
            values,
            tag,
            &[
                (0x10000, "No digital zoom"),
                (0x10001, "2x digital zoom"),
                (0x20000, "2x digital zoom"),
                (0x40000, "4x digital zoom"),
            ],
        ),
        casio_type1::Sharpness => lookup(values, tag, &[(0, "Normal"), (1, "Soft"), (2, "Hard")]),
        casio_type1::Contrast | casio_type1::Saturation => lookup(values, tag, &NORMAL_LOW_HIGH),
        casio_type1::CcdSensitivity => lookup(
            values,
            tag,
            &[
                (64, "Normal"),
                (125, "+1.0"),
                (250, "+2.0"),
                (244, "+3.0"),
                (80, "Normal (ISO 80 equivalent)"),
                (100, "High"),
            ],
        ),
        _ => fallback(values, tag),
    }
}
