use crate::accessor::ValueAccessor;
use crate::describe::{decimal, fallback, indexed, unknown, version_bytes};
use crate::tags::olympus_focus_info;

const OFF_ON: [&str; 2] = ["Off", "On"];

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        olympus_focus_info::FocusInfoVersion => version_bytes(values, tag, 4),
        olympus_focus_info::AutoFocus | olympus_focus_info::MacroLed => {
            indexed(values, tag, 0, &OFF_ON)
        }
        olympus_focus_info::FocusDistance => {
            let distance = values.rational(tag)?;
            // both sentinels mean the lens was focused at infinity
            if distance.numerator == 0 || distance.numerator == 0xFFFF_FFFF {
                Some("inf".to_string())
            } else {
                Some(format!("{} m", decimal(distance.numerator as f64 / 1000.0)))
            }
        }
        olympus_focus_info::ExternalFlash
        | olympus_focus_info::ExternalFlashZoom
        | olympus_focus_info::InternalFlash => flash_state(values, tag),
        olympus_focus_info::ExternalFlashBounce => {
            indexed(values, tag, 0, &["Bounce or Off", "Direct"])
        }
        olympus_focus_info::ManualFlash => {
            let state = values.int_array(tag)?;
            match state.as_slice() {
                [] => None,
                [0, ..] => Some("Off".to_string()),
                [_, strength, ..] => Some(format!("On (1/{strength} strength)")),
                [_] => Some("On".to_string()),
            }
        }
        olympus_focus_info::ImageStabilization => {
            let data = values.byte_array(tag)?;
            if data.len() < 4 {
                return fallback(values, tag);
            }
            if data[..4].iter().all(|&b| b == 0) {
                return Some("Off".to_string());
            }
            Some(match data.get(43) {
                Some(mode) if mode & 1 == 1 => "On, Mode 1".to_string(),
                Some(_) => "On, Mode 2".to_string(),
                None => "On".to_string(),
            })
        }
        _ => fallback(values, tag),
    }
}

/// Flash state pairs: `0 0` is off, `1 0` is on.
fn flash_state(values: &dyn ValueAccessor, tag: u16) -> Option<String> {
    let state = values.int_array(tag)?;
    match state.as_slice() {
        [0, 0, ..] | [0] => Some("Off".to_string()),
        [1, 0, ..] | [1] => Some("On".to_string()),
        [first, second, ..] => Some(unknown(format!("{first} {second}"))),
        [first] => Some(unknown(first)),
        [] => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::makernotes::test_util::{bytes, describe, shorts};
    use crate::tags::{olympus_focus_info, Vendor};
    use crate::value::TagValue;

    fn focus_info(tag: u16, value: TagValue) -> Option<String> {
        describe(Vendor::OlympusFocusInfo, tag, value)
    }

    #[test]
    fn focus_distance() {
        assert_eq!(
            focus_info(olympus_focus_info::FocusDistance, TagValue::Rational(1500, 1)),
            Some("1.5 m".to_string())
        );
        assert_eq!(
            focus_info(olympus_focus_info::FocusDistance, TagValue::Rational(2000, 1)),
            Some("2.0 m".to_string())
        );
        assert_eq!(
            focus_info(
                olympus_focus_info::FocusDistance,
                TagValue::Rational(0xFFFF_FFFF, 1)
            ),
            Some("inf".to_string())
        );
    }

    #[test]
    fn flash() {
        assert_eq!(
            focus_info(olympus_focus_info::ExternalFlash, shorts(&[1, 0])),
            Some("On".to_string())
        );
        assert_eq!(
            focus_info(olympus_focus_info::InternalFlash, shorts(&[2, 1])),
            Some("Unknown (2 1)".to_string())
        );
        assert_eq!(
            focus_info(olympus_focus_info::ManualFlash, shorts(&[1, 4])),
            Some("On (1/4 strength)".to_string())
        );
        assert_eq!(
            focus_info(olympus_focus_info::ManualFlash, shorts(&[0, 4])),
            Some("Off".to_string())
        );
    }

    #[test]
    fn image_stabilization() {
        let mut data = vec![0u8; 44];
        assert_eq!(
            focus_info(olympus_focus_info::ImageStabilization, bytes(&data)),
            Some("Off".to_string())
        );
        data[0] = 1;
        data[43] = 1;
        assert_eq!(
            focus_info(olympus_focus_info::ImageStabilization, bytes(&data)),
            Some("On, Mode 1".to_string())
        );
    }
}
