use crate::accessor::ValueAccessor;
use crate::describe::{byte_length, fallback, indexed, indexed_label, lookup, unknown};
use crate::tags::sanyo;

const QUALITY_LEVELS: [&str; 3] = ["Normal", "Fine", "Super Fine"];
const RESOLUTIONS: [&str; 8] = [
    "Very Low",
    "Low",
    "Medium Low",
    "Medium",
    "Medium High",
    "High",
    "Very High",
    "Super High",
];
const OFF_ON: [&str; 2] = ["Off", "On"];

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        sanyo::SanyoQuality => {
            let value = values.integer(tag)?;
            match (
                indexed_label((value >> 8) & 0xFF, 0, &QUALITY_LEVELS),
                indexed_label(value & 0xFF, 0, &RESOLUTIONS),
            ) {
                (Some(quality), Some(resolution)) => Some(format!("{quality}/{resolution}")),
                _ => Some(unknown(value)),
            }
        }
        sanyo::Macro => indexed(values, tag, 0, &["Normal", "Macro", "View", "Manual"]),
        sanyo::DigitalZoom => Some(format!("{:.3}", values.float64(tag)?)),
        sanyo::SequentialShot => indexed(
            values,
            tag,
            0,
            &["None", "Standard", "Best", "Adjust Exposure"],
        ),
        sanyo::WideRange
        | sanyo::ColorAdjustmentMode
        | sanyo::QuickShot
        | sanyo::SelfTimer
        | sanyo::VoiceMemo
        | sanyo::Flicker
        | sanyo::OpticalZoomOn
        | sanyo::DigitalZoomOn
        | sanyo::LightSourceSpecial => indexed(values, tag, 0, &OFF_ON),
        sanyo::RecordShutterRelease => indexed(
            values,
            tag,
            0,
            &["Record while down", "Press start, press stop"],
        ),
        sanyo::Resaved => indexed(values, tag, 0, &["No", "Yes"]),
        sanyo::SceneSelect => indexed(
            values,
            tag,
            0,
            &["Off", "Sport", "TV", "Night", "User 1", "User 2", "Lamp"],
        ),
        sanyo::SequenceShotInterval => indexed(
            values,
            tag,
            0,
            &[
                "5 frames/sec",
                "10 frames/sec",
                "15 frames/sec",
                "20 frames/sec",
            ],
        ),
        sanyo::FlashMode => lookup(
            values,
            tag,
            &[(0, "Auto"), (1, "Force"), (2, "Disabled"), (3, "Red eye")],
        ),
        sanyo::SanyoThumbnail | sanyo::PrintIm | sanyo::DataDump => byte_length(values, tag),
        _ => fallback(values, tag),
    }
}

#[cfg(test)]
mod tests {
    use crate::makernotes::test_util::{bytes, describe};
    use crate::tags::{sanyo, Vendor};
    use crate::value::TagValue;

    fn describe_sanyo(tag: u16, value: TagValue) -> Option<String> {
        describe(Vendor::Sanyo, tag, value)
    }

    #[test]
    fn quality_combines_both_bytes() {
        assert_eq!(
            describe_sanyo(sanyo::SanyoQuality, TagValue::Short(0x0105)),
            Some("Fine/High".to_string())
        );
        assert_eq!(
            describe_sanyo(sanyo::SanyoQuality, TagValue::Short(0x0000)),
            Some("Normal/Very Low".to_string())
        );
        assert_eq!(
            describe_sanyo(sanyo::SanyoQuality, TagValue::Short(0x0309)),
            Some("Unknown (777)".to_string())
        );
    }

    #[test]
    fn shooting_settings() {
        assert_eq!(
            describe_sanyo(sanyo::DigitalZoom, TagValue::Rational(3, 2)),
            Some("1.500".to_string())
        );
        assert_eq!(
            describe_sanyo(sanyo::SceneSelect, TagValue::Short(6)),
            Some("Lamp".to_string())
        );
        assert_eq!(
            describe_sanyo(sanyo::FlashMode, TagValue::Short(9)),
            Some("Unknown (9)".to_string())
        );
        assert_eq!(
            describe_sanyo(sanyo::Flicker, TagValue::Short(1)),
            Some("On".to_string())
        );
        assert_eq!(
            describe_sanyo(sanyo::DataDump, bytes(&[0; 20])),
            Some("(20 bytes)".to_string())
        );
    }
}
