use super::{art_filter, noise_reduction, COLOR_SPACES, ENGINES};
use crate::accessor::ValueAccessor;
use crate::describe::{fallback, indexed, lookup, unknown, version_bytes};
use crate::tags::olympus_raw_development2;

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        olympus_raw_development2::RawDevVersion => version_bytes(values, tag, 4),
        olympus_raw_development2::RawDevWhiteBalance => lookup(
            values,
            tag,
            &[(1, "Color Temperature"), (2, "Gray Point")],
        ),
        olympus_raw_development2::RawDevColorSpace => indexed(values, tag, 0, &COLOR_SPACES),
        olympus_raw_development2::RawDevNoiseReduction => noise_reduction(values, tag),
        olympus_raw_development2::RawDevEngine => indexed(values, tag, 0, &ENGINES),
        olympus_raw_development2::RawDevPictureMode => lookup(
            values,
            tag,
            &[
                (1, "Vivid"),
                (2, "Natural"),
                (3, "Muted"),
                (256, "Monotone"),
                (512, "Sepia"),
            ],
        ),
        olympus_raw_development2::RawDevPmBwFilter => lookup(
            values,
            tag,
            &[
                (1, "Neutral"),
                (2, "Yellow"),
                (3, "Orange"),
                (4, "Red"),
                (5, "Green"),
            ],
        ),
        olympus_raw_development2::RawDevPmPictureTone => lookup(
            values,
            tag,
            &[
                (1, "Neutral"),
                (2, "Sepia"),
                (3, "Blue"),
                (4, "Purple"),
                (5, "Green"),
            ],
        ),
        olympus_raw_development2::RawDevGradation => {
            let gradation = values.int_array(tag)?;
            let [a, b, c, rest @ ..] = gradation.as_slice() else {
                return fallback(values, tag);
            };
            let key = format!("{a} {b} {c}");
            let mut description = match key.as_str() {
                "-1 -1 1" => "Low Key".to_string(),
                "0 -1 1" => "Normal".to_string(),
                "1 -1 1" => "High Key".to_string(),
                _ => unknown(&key),
            };
            match rest.first() {
                Some(0) => description += " User-Selected",
                Some(1) => description += " Auto-Override",
                _ => {}
            }
            Some(description)
        }
        olympus_raw_development2::RawDevAutoGradation => indexed(values, tag, 0, &["Off", "On"]),
        olympus_raw_development2::RawDevPmNoiseFilter => {
            indexed(values, tag, 0, &["n/a", "Low", "Standard", "High"])
        }
        olympus_raw_development2::RawDevArtFilter => art_filter(values, tag),
        _ => fallback(values, tag),
    }
}

#[cfg(test)]
mod tests {
    use crate::makernotes::test_util::{describe, shorts};
    use crate::tags::{olympus_raw_development2, Vendor};
    use crate::value::TagValue;

    fn raw_development2(tag: u16, value: TagValue) -> Option<String> {
        describe(Vendor::OlympusRawDevelopment2, tag, value)
    }

    #[test]
    fn gradation() {
        let gradation = TagValue::List(vec![
            TagValue::SShort(-1),
            TagValue::SShort(-1),
            TagValue::SShort(1),
            TagValue::SShort(1),
        ]);
        assert_eq!(
            raw_development2(olympus_raw_development2::RawDevGradation, gradation),
            Some("Low Key Auto-Override".to_string())
        );
        assert_eq!(
            raw_development2(olympus_raw_development2::RawDevGradation, shorts(&[0, 2, 2])),
            Some("Unknown (0 2 2)".to_string())
        );
    }

    #[test]
    fn art_filter_and_modes() {
        assert_eq!(
            raw_development2(olympus_raw_development2::RawDevArtFilter, shorts(&[9, 0, 0, 0])),
            Some("Diorama; 0; 0; 0".to_string())
        );
        assert_eq!(
            raw_development2(olympus_raw_development2::RawDevPictureMode, TagValue::Short(256)),
            Some("Monotone".to_string())
        );
        assert_eq!(
            raw_development2(olympus_raw_development2::RawDevNoiseReduction, TagValue::Short(2)),
            Some("Noise Filter".to_string())
        );
    }
}
