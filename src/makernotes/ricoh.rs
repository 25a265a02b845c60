use crate::accessor::ValueAccessor;
use crate::describe::{byte_length, fallback};
use crate::tags::ricoh;

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        ricoh::PrintImageMatchingInfo => byte_length(values, tag),
        _ => fallback(values, tag),
    }
}

#[cfg(test)]
mod tests {
    use crate::makernotes::test_util::{bytes, describe};
    use crate::tags::{ricoh, Vendor};
    use crate::value::TagValue;

    #[test]
    fn ricoh_values() {
        assert_eq!(
            describe(Vendor::Ricoh, ricoh::PrintImageMatchingInfo, bytes(&[1, 2])),
            Some("(2 bytes)".to_string())
        );
        assert_eq!(
            describe(Vendor::Ricoh, ricoh::Version, TagValue::Ascii("Rv2.1".to_string())),
            Some("Rv2.1".to_string())
        );
    }
}
