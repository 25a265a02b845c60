use super::MOON_PHASES;
use crate::accessor::ValueAccessor;
use crate::describe::{fallback, indexed, unknown};
use crate::tags::reconyx_hyperfire;
use crate::value::DATE_TIME_FORMAT;
use itertools::Itertools;

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        reconyx_hyperfire::FirmwareVersion => match values.int_array(tag) {
            Some(components) if components.len() > 1 => Some(components.iter().join(".")),
            _ => fallback(values, tag),
        },
        reconyx_hyperfire::TriggerMode => {
            let mode = values.string(tag)?;
            Some(match mode.as_str() {
                "C" => "Codeloc Not Entered".to_string(),
                "E" => "External Sensor".to_string(),
                "M" => "Motion Detection".to_string(),
                "T" => "Time Lapse".to_string(),
                other => unknown(other),
            })
        }
        reconyx_hyperfire::Sequence => sequence(values, tag),
        reconyx_hyperfire::DateTimeOriginal => {
            Some(values.date_time(tag)?.format(DATE_TIME_FORMAT).to_string())
        }
        reconyx_hyperfire::MoonPhase => indexed(values, tag, 0, &MOON_PHASES),
        reconyx_hyperfire::AmbientTemperatureFahrenheit => {
            Some(format!("{}°F", values.integer(tag)?))
        }
        reconyx_hyperfire::AmbientTemperature => Some(format!("{}°C", values.integer(tag)?)),
        reconyx_hyperfire::SerialNumber | reconyx_hyperfire::UserLabel => values.string(tag),
        reconyx_hyperfire::InfraredIlluminator => indexed(values, tag, 0, &["Off", "On"]),
        reconyx_hyperfire::BatteryVoltage => battery_voltage(values, tag),
        _ => fallback(values, tag),
    }
}

/// `image/total` of a burst, e.g. `1/3`.
pub(crate) fn sequence(values: &dyn ValueAccessor, tag: u16) -> Option<String> {
    match values.int_array(tag)?.as_slice() {
        [image, total] => Some(format!("{image}/{total}")),
        _ => fallback(values, tag),
    }
}

pub(crate) fn battery_voltage(values: &dyn ValueAccessor, tag: u16) -> Option<String> {
    Some(format!("{:.3} V", values.float64(tag)?))
}
