use crate::accessor::ValueAccessor;
use crate::describe::{fallback, lookup};
use crate::tags::nikon_type1;

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        nikon_type1::Quality => lookup(
            values,
            tag,
            &[
                (1, "VGA Basic"),
                (2, "VGA Normal"),
                (3, "VGA Fine"),
                (4, "SXGA Basic"),
                (5, "SXGA Normal"),
                (6, "SXGA Fine"),
            ],
        ),
        nikon_type1::ColorMode => lookup(values, tag, &[(1, "Color"), (2, "Monochrome")]),
        nikon_type1::ImageAdjustment => lookup(
            values,
            tag,
            &[
                (0, "Normal"),
                (1, "Bright +"),
                (2, "Bright -"),
                (3, "Contrast +"),
                (4, "Contrast -"),
            ],
        ),
        nikon_type1::CcdSensitivity => lookup(
            values,
            tag,
            &[(0, "ISO80"), (2, "ISO160"), (4, "ISO320"), (5, "ISO100")],
        ),
        nikon_type1::WhiteBalance => lookup(
            values,
            tag,
            &[
                (0, "Auto"),
                (1, "Preset"),
                (2, "Daylight"),
                (3, "Incandescence"),
                (4, "Florescence"),
                (5, "Cloudy"),
                (6, "SpeedLight"),
            ],
        ),
        nikon_type1::Focus => {
            let focus = values.rational(tag)?;
            if focus.numerator == 1 && focus.denominator == 0 {
                Some("Infinite".to_string())
            } else {
                Some(focus.to_simple_string(true))
            }
        }
        nikon_type1::DigitalZoom => {
            let zoom = values.rational(tag)?;
            if zoom.is_zero() {
                Some("No digital zoom".to_string())
            } else {
                Some(format!("{}x digital zoom", zoom.to_simple_string(true)))
            }
        }
        nikon_type1::Converter => {
            lookup(values, tag, &[(0, "None"), (1, "Fisheye converter")])
        }
        _ => fallback(values, tag),
    }
}
