use crate::accessor::ValueAccessor;
use crate::describe::{fallback, indexed_label};
use crate::tags::panasonic_raw_distortion;
use crate::value::Rational;

/// Distortion parameters are fixed point numbers with 15 fractional bits.
const FIXED_POINT_ONE: i64 = 32768;

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        panasonic_raw_distortion::DistortionParam02
        | panasonic_raw_distortion::DistortionParam04
        | panasonic_raw_distortion::DistortionParam08
        | panasonic_raw_distortion::DistortionParam09
        | panasonic_raw_distortion::DistortionParam11 => Some(
            Rational::new(values.integer(tag)?, FIXED_POINT_ONE).to_simple_string(true),
        ),
        panasonic_raw_distortion::DistortionScale => {
            let scale = values.integer(tag)? as f64 / FIXED_POINT_ONE as f64;
            Some((1.0 / (1.0 + scale)).to_string())
        }
        // only the low nibble carries the switch
        panasonic_raw_distortion::DistortionCorrection => {
            indexed_label(values.integer(tag)? & 0x0F, 0, &["Off", "On"]).map(str::to_string)
        }
        _ => fallback(values, tag),
    }
}

#[cfg(test)]
mod tests {
    use crate::makernotes::test_util::describe;
    use crate::tags::{panasonic_raw_distortion, Vendor};
    use crate::value::TagValue;

    fn distortion(tag: u16, value: i16) -> Option<String> {
        describe(Vendor::PanasonicRawDistortion, tag, TagValue::SShort(value))
    }

    #[test]
    fn fixed_point_parameters() {
        assert_eq!(
            distortion(panasonic_raw_distortion::DistortionParam02, 16384),
            Some("0.5".to_string())
        );
        assert_eq!(
            distortion(panasonic_raw_distortion::DistortionParam04, -8192),
            Some("-1/4".to_string())
        );
        assert_eq!(
            distortion(panasonic_raw_distortion::DistortionParam08, 0),
            Some("0".to_string())
        );
        assert_eq!(
            distortion(panasonic_raw_distortion::DistortionScale, 0),
            Some("1".to_string())
        );
    }

    #[test]
    fn correction_switch() {
        assert_eq!(
            distortion(panasonic_raw_distortion::DistortionCorrection, 0x11),
            Some("On".to_string())
        );
        assert_eq!(
            distortion(panasonic_raw_distortion::DistortionCorrection, 0x10),
            Some("Off".to_string())
        );
        assert_eq!(
            distortion(panasonic_raw_distortion::DistortionCorrection, 2),
            None
        );
    }
}
