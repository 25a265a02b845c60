use super::noise_reduction;
use crate::accessor::ValueAccessor;
use crate::describe::{fallback, indexed, unknown, version_bytes};
use crate::tags::olympus_image_processing;

const OFF_ON: [&str; 2] = ["Off", "On"];

const ASPECT_RATIOS: [(&str, &str); 14] = [
    ("1 1", "4:3"),
    ("1 4", "1:1"),
    ("2 1", "3:2 (RAW)"),
    ("2 2", "3:2"),
    ("3 1", "16:9 (RAW)"),
    ("3 3", "16:9"),
    ("4 1", "1:1 (RAW)"),
    ("4 4", "6:6"),
    ("5 5", "5:4"),
    ("6 6", "7:6"),
    ("7 7", "6:5"),
    ("8 8", "7:5"),
    ("9 1", "3:4 (RAW)"),
    ("9 9", "3:4"),
];

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        olympus_image_processing::ImageProcessingVersion => version_bytes(values, tag, 4),
        olympus_image_processing::NoiseReduction2 => noise_reduction(values, tag),
        olympus_image_processing::DistortionCorrection2
        | olympus_image_processing::ShadingCompensation2 => indexed(values, tag, 0, &OFF_ON),
        olympus_image_processing::MultipleExposureMode => {
            let mode = values.int_array(tag)?;
            let (first, rest) = mode.split_first()?;
            let mut description = match first {
                0 => "Off".to_string(),
                2 => "On (2 frames)".to_string(),
                3 => "On (3 frames)".to_string(),
                other => unknown(other),
            };
            if let Some(frames) = rest.first() {
                description += &format!("; {frames}");
            }
            Some(description)
        }
        olympus_image_processing::AspectRatio => {
            let ratio = values.int_array(tag)?;
            let [first, second, ..] = ratio.as_slice() else {
                return fallback(values, tag);
            };
            let key = format!("{first} {second}");
            Some(
                ASPECT_RATIOS
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map_or_else(|| unknown(&key), |(_, ratio)| ratio.to_string()),
            )
        }
        olympus_image_processing::KeystoneCompensation => {
            let state = values.int_array(tag)?;
            Some(match state.as_slice() {
                [0, 0, ..] => "Off".to_string(),
                [0, 1, ..] => "On".to_string(),
                [first, second, ..] => unknown(format!("{first} {second}")),
                _ => return fallback(values, tag),
            })
        }
        olympus_image_processing::KeystoneDirection => {
            indexed(values, tag, 0, &["Vertical", "Horizontal"])
        }
        _ => fallback(values, tag),
    }
}

#[cfg(test)]
mod tests {
    use crate::makernotes::test_util::{bytes, describe, shorts};
    use crate::tags::{olympus_image_processing, Vendor};
    use crate::value::TagValue;

    fn image_processing(tag: u16, value: TagValue) -> Option<String> {
        describe(Vendor::OlympusImageProcessing, tag, value)
    }

    #[test]
    fn noise_reduction() {
        let nr = |value| {
            image_processing(
                olympus_image_processing::NoiseReduction2,
                TagValue::Short(value),
            )
        };
        assert_eq!(nr(0), Some("(none)".to_string()));
        assert_eq!(nr(1), Some("Noise Reduction".to_string()));
        assert_eq!(nr(3), Some("Noise Reduction, Noise Filter".to_string()));
        assert_eq!(
            nr(7),
            Some("Noise Reduction, Noise Filter, Noise Filter (ISO Boost)".to_string())
        );
    }

    #[test]
    fn aspect_ratio() {
        assert_eq!(
            image_processing(olympus_image_processing::AspectRatio, bytes(&[1, 1])),
            Some("4:3".to_string())
        );
        assert_eq!(
            image_processing(olympus_image_processing::AspectRatio, bytes(&[3, 1])),
            Some("16:9 (RAW)".to_string())
        );
        assert_eq!(
            image_processing(olympus_image_processing::AspectRatio, bytes(&[2, 5])),
            Some("Unknown (2 5)".to_string())
        );
    }

    #[test]
    fn exposure_and_keystone() {
        assert_eq!(
            image_processing(
                olympus_image_processing::MultipleExposureMode,
                shorts(&[2, 1])
            ),
            Some("On (2 frames); 1".to_string())
        );
        assert_eq!(
            image_processing(olympus_image_processing::MultipleExposureMode, shorts(&[5])),
            Some("Unknown (5)".to_string())
        );
        assert_eq!(
            image_processing(olympus_image_processing::KeystoneCompensation, bytes(&[0, 1])),
            Some("On".to_string())
        );
        assert_eq!(
            image_processing(olympus_image_processing::ImageProcessingVersion, bytes(b"0112")),
            Some("112".to_string())
        );
    }
}
