use crate::accessor::ValueAccessor;
use crate::describe::{fallback, indexed, lookup, simple_rational};
use crate::tags::leica;

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        leica::Quality => indexed(values, tag, 1, &["Fine", "Basic"]),
        leica::UserProfile => indexed(
            values,
            tag,
            1,
            &[
                "User Profile 1",
                "User Profile 2",
                "User Profile 3",
                "User Profile 4",
            ],
        ),
        leica::WhiteBalance => lookup(
            values,
            tag,
            &[
                (0, "Auto or Manual"),
                (1, "Daylight"),
                (2, "Fluorescent"),
                (3, "Tungsten"),
                (4, "Flash"),
                (10, "Cloudy"),
                (11, "Shade"),
            ],
        ),
        leica::ExternalSensorBrightnessValue | leica::MeasuredLv | leica::ApproximateFNumber => {
            simple_rational(values, tag, true)
        }
        leica::CameraTemperature => Some(format!("{} C", values.integer(tag)?)),
        _ => fallback(values, tag),
    }
}
