use crate::accessor::ValueAccessor;
use crate::describe::{fallback, version_bytes};
use crate::tags::sony_type6;

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        sony_type6::MakernoteThumbVersion => version_bytes(values, tag, 2),
        _ => fallback(values, tag),
    }
}

#[cfg(test)]
mod tests {
    use crate::makernotes::test_util::{bytes, describe};
    use crate::tags::{sony_type6, Vendor};
    use crate::value::TagValue;

    #[test]
    fn thumbnail_values() {
        assert_eq!(
            describe(
                Vendor::SonyType6,
                sony_type6::MakernoteThumbVersion,
                bytes(&[0, 1, 0, 0])
            ),
            Some("1.00".to_string())
        );
        assert_eq!(
            describe(
                Vendor::SonyType6,
                sony_type6::MakernoteThumbLength,
                TagValue::Long(2860)
            ),
            Some("2860".to_string())
        );
    }
}
