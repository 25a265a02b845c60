use crate::accessor::ValueAccessor;
use crate::describe::{fallback, lookup, version_bytes};
use crate::tags::olympus_raw_info;
use crate::value::Rational;
use itertools::Itertools;

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        olympus_raw_info::RawInfoVersion => version_bytes(values, tag, 4),
        // numerator, denominator pairs
        olympus_raw_info::YCbCrCoefficients => {
            let pairs = values.int_array(tag)?;
            Some(
                pairs
                    .chunks_exact(2)
                    .map(|pair| Rational::new(pair[0], pair[1]))
                    .join(" "),
            )
        }
        olympus_raw_info::LightSource => lookup(
            values,
            tag,
            &[
                (0, "Unknown"),
                (16, "Shade"),
                (17, "Cloudy"),
                (18, "Fine Weather"),
                (20, "Tungsten (Incandescent)"),
                (22, "Evening Sunlight"),
                (33, "Daylight Fluorescent"),
                (34, "Day White Fluorescent"),
                (35, "Cool White Fluorescent"),
                (36, "White Fluorescent"),
                (256, "One Touch White Balance"),
                (512, "Custom 1-4"),
            ],
        ),
        _ => fallback(values, tag),
    }
}

#[cfg(test)]
mod tests {
    use crate::makernotes::test_util::{describe, shorts};
    use crate::tags::{olympus_raw_info, Vendor};
    use crate::value::TagValue;

    #[test]
    fn raw_info() {
        assert_eq!(
            describe(
                Vendor::OlympusRawInfo,
                olympus_raw_info::YCbCrCoefficients,
                shorts(&[299, 1000, 587, 1000, 114, 1000])
            ),
            Some("299/1000 587/1000 114/1000".to_string())
        );
        assert_eq!(
            describe(
                Vendor::OlympusRawInfo,
                olympus_raw_info::LightSource,
                TagValue::Short(256)
            ),
            Some("One Touch White Balance".to_string())
        );
        assert_eq!(
            describe(
                Vendor::OlympusRawInfo,
                olympus_raw_info::LightSource,
                TagValue::Short(1)
            ),
            Some("Unknown (1)".to_string())
        );
    }
}
