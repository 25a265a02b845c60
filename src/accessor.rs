use crate::value::{Rational, TagValue};
use chrono::NaiveDateTime;

/// Typed read access to the decoded values of one makernote directory.
///
/// Implementors only provide [ValueAccessor::value]; every typed getter returns `None` both when
/// the tag is absent and when its value cannot be converted.
pub trait ValueAccessor {
    fn value(&self, tag: u16) -> Option<&TagValue>;

    fn contains(&self, tag: u16) -> bool {
        self.value(tag).is_some()
    }
    /// 32 bit integer codes, widened so that unsigned values like `0xFFFFFFFF` survive.
    fn integer(&self, tag: u16) -> Option<i64> {
        self.value(tag)?.as_i64()
    }
    fn uint16(&self, tag: u16) -> Option<u16> {
        u16::try_from(self.integer(tag)?).ok()
    }
    fn float32(&self, tag: u16) -> Option<f32> {
        self.float64(tag).map(|x| x as f32)
    }
    fn float64(&self, tag: u16) -> Option<f64> {
        self.value(tag)?.as_f64()
    }
    fn rational(&self, tag: u16) -> Option<Rational> {
        self.value(tag)?.as_rational()
    }
    fn rational_array(&self, tag: u16) -> Option<Vec<Rational>> {
        self.value(tag)?.as_rational_vec()
    }
    fn string(&self, tag: u16) -> Option<String> {
        match self.value(tag)? {
            TagValue::Ascii(x) => Some(x.trim_end_matches('\0').to_string()),
            TagValue::List(_) => {
                let bytes = self.byte_array(tag)?;
                let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
                Some(String::from_utf8_lossy(&bytes[..end]).into_owned())
            }
            other => Some(other.to_string()),
        }
    }
    fn byte_array(&self, tag: u16) -> Option<Vec<u8>> {
        self.value(tag)?.as_bytes()
    }
    fn int_array(&self, tag: u16) -> Option<Vec<i64>> {
        self.value(tag)?.as_i64_vec()
    }
    fn date_time(&self, tag: u16) -> Option<NaiveDateTime> {
        self.value(tag)?.as_date_time()
    }
}
