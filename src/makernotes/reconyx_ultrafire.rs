use super::reconyx_hyperfire::{battery_voltage, sequence};
use super::MOON_PHASES;
use crate::accessor::ValueAccessor;
use crate::describe::{fallback, indexed, unknown};
use crate::tags::reconyx_ultrafire;
use crate::value::DATE_TIME_FORMAT;

const DAYS_OF_WEEK: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        reconyx_ultrafire::MakernoteId | reconyx_ultrafire::MakernotePublicId => {
            Some(format!("0x{:08X}", values.integer(tag)?))
        }
        reconyx_ultrafire::EventType => {
            let event = values.string(tag)?;
            Some(match event.as_str() {
                "M" => "Motion Detection".to_string(),
                "T" => "Time Lapse".to_string(),
                "P" => "Point and Shoot".to_string(),
                other => unknown(other),
            })
        }
        reconyx_ultrafire::Sequence => sequence(values, tag),
        reconyx_ultrafire::DateTimeOriginal => {
            Some(values.date_time(tag)?.format(DATE_TIME_FORMAT).to_string())
        }
        reconyx_ultrafire::DayOfWeek => indexed(values, tag, 0, &DAYS_OF_WEEK),
        reconyx_ultrafire::MoonPhase => indexed(values, tag, 0, &MOON_PHASES),
        reconyx_ultrafire::AmbientTemperatureFahrenheit => {
            Some(format!("{}°F", values.integer(tag)?))
        }
        reconyx_ultrafire::AmbientTemperature => Some(format!("{}°C", values.integer(tag)?)),
        reconyx_ultrafire::Flash => indexed(values, tag, 0, &["Off", "On"]),
        reconyx_ultrafire::BatteryVoltage => battery_voltage(values, tag),
        reconyx_ultrafire::Label
        | reconyx_ultrafire::CameraVersion
        | reconyx_ultrafire::UibVersion
        | reconyx_ultrafire::BtlVersion
        | reconyx_ultrafire::PexVersion
        | reconyx_ultrafire::SerialNumber
        | reconyx_ultrafire::UserLabel => values.string(tag),
        _ => fallback(values, tag),
    }
}

#[cfg(test)]
mod tests {
    use crate::makernotes::test_util::{describe, shorts};
    use crate::tags::{reconyx_ultrafire, Vendor};
    use crate::value::TagValue;

    fn ultrafire(tag: u16, value: TagValue) -> Option<String> {
        describe(Vendor::ReconyxUltraFire, tag, value)
    }

    #[test]
    fn calendar() {
        assert_eq!(
            ultrafire(reconyx_ultrafire::DayOfWeek, TagValue::Byte(0)),
            Some("Sunday".to_string())
        );
        assert_eq!(
            ultrafire(reconyx_ultrafire::DayOfWeek, TagValue::Byte(6)),
            Some("Saturday".to_string())
        );
        assert_eq!(ultrafire(reconyx_ultrafire::DayOfWeek, TagValue::Byte(7)), None);
        assert_eq!(
            ultrafire(reconyx_ultrafire::MoonPhase, TagValue::Byte(7)),
            Some("Waning Crescent".to_string())
        );
    }

    #[test]
    fn identifiers() {
        assert_eq!(
            ultrafire(reconyx_ultrafire::MakernoteId, TagValue::Long(0x0001_0000)),
            Some("0x00010000".to_string())
        );
        assert_eq!(
            ultrafire(reconyx_ultrafire::Sequence, shorts(&[2, 3])),
            Some("2/3".to_string())
        );
        assert_eq!(
            ultrafire(reconyx_ultrafire::EventType, TagValue::Ascii("T".to_string())),
            Some("Time Lapse".to_string())
        );
        assert_eq!(
            ultrafire(
                reconyx_ultrafire::UserLabel,
                TagValue::Ascii("TRAIL 7\0\0".to_string())
            ),
            Some("TRAIL 7".to_string())
        );
    }
}
