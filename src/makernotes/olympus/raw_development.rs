use super::{noise_reduction, COLOR_SPACES, ENGINES};
use crate::accessor::ValueAccessor;
use crate::describe::{bit_flags, fallback, indexed, lookup, version_bytes};
use crate::tags::olympus_raw_development;

const SETTINGS: [&str; 8] = [
    "WB Color Temp",
    "WB Gray Point",
    "Saturation",
    "Contrast",
    "Sharpness",
    "Color Space",
    "High Function",
    "Noise Reduction",
];

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        olympus_raw_development::RawDevVersion => version_bytes(values, tag, 4),
        olympus_raw_development::RawDevColorSpace => indexed(values, tag, 0, &COLOR_SPACES),
        olympus_raw_development::RawDevEngine => indexed(values, tag, 0, &ENGINES),
        olympus_raw_development::RawDevNoiseReduction => noise_reduction(values, tag),
        olympus_raw_development::RawDevEditStatus => lookup(
            values,
            tag,
            &[
                (0, "Original"),
                (1, "Edited (Landscape)"),
                (6, "Edited (Portrait)"),
                (8, "Edited (Portrait)"),
            ],
        ),
        olympus_raw_development::RawDevSettings => bit_flags(values, tag, &SETTINGS),
        _ => fallback(values, tag),
    }
}

#[cfg(test)]
mod tests {
    use crate::makernotes::test_util::describe;
    use crate::tags::{olympus_raw_development, Vendor};
    use crate::value::TagValue;

    fn raw_development(tag: u16, value: u16) -> Option<String> {
        describe(Vendor::OlympusRawDevelopment, tag, TagValue::Short(value))
    }

    #[test]
    fn settings_bits() {
        assert_eq!(
            raw_development(olympus_raw_development::RawDevSettings, 0),
            Some("(none)".to_string())
        );
        assert_eq!(
            raw_development(olympus_raw_development::RawDevSettings, 0b1001_0000),
            Some("Sharpness, Noise Reduction".to_string())
        );
    }

    #[test]
    fn indexed_values() {
        assert_eq!(
            raw_development(olympus_raw_development::RawDevColorSpace, 2),
            Some("Pro Photo RGB".to_string())
        );
        assert_eq!(
            raw_development(olympus_raw_development::RawDevEngine, 4),
            None
        );
        assert_eq!(
            raw_development(olympus_raw_development::RawDevEditStatus, 6),
            Some("Edited (Portrait)".to_string())
        );
    }
}
