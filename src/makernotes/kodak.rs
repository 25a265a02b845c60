use crate::accessor::ValueAccessor;
use crate::describe::{fallback, indexed, lookup};
use crate::tags::kodak;

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        kodak::Quality => indexed(values, tag, 1, &["Fine", "Normal"]),
        kodak::BurstMode => indexed(values, tag, 0, &["Off", "On"]),
        kodak::ShutterMode => lookup(
            values,
            tag,
            &[(0, "Auto"), (8, "Aperture Priority"), (32, "Manual")],
        ),
        kodak::FocusMode => lookup(values, tag, &[(0, "Normal"), (2, "Macro")]),
        kodak::WhiteBalance => {
            indexed(values, tag, 0, &["Auto", "Flash", "Tungsten", "Daylight"])
        }
        // older firmware used the small codes, newer ones the bit positions
        kodak::FlashMode => lookup(
            values,
            tag,
            &[
                (0x00, "Auto"),
                (0x01, "Fill Flash"),
                (0x10, "Fill Flash"),
                (0x02, "Off"),
                (0x20, "Off"),
                (0x03, "Red Eye"),
                (0x40, "Red Eye"),
            ],
        ),
        kodak::FlashFired => indexed(values, tag, 0, &["No", "Yes"]),
        kodak::ColorMode => lookup(
            values,
            tag,
            &[
                (0x001, "B&W"),
                (0x002, "Sepia"),
                (0x003, "B&W Yellow Filter"),
                (0x004, "B&W Red Filter"),
                (0x020, "Saturated Color"),
                (0x040, "Neutral Color"),
                (0x100, "Saturated Color"),
                (0x200, "Neutral Color"),
                (0x2000, "B&W"),
                (0x4000, "Sepia"),
            ],
        ),
        _ => fallback(values, tag),
    }
}
