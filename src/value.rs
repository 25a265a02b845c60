use chrono::NaiveDateTime;
use derivative::Derivative;
use fraction::Ratio;
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The textual form of date/time values, both for parsing ascii values and for rendering.
pub const DATE_TIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// A signed fraction. Unsigned TIFF rationals fit into the `i64` halves without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}
impl Rational {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }
    pub fn is_integer(&self) -> bool {
        if self.denominator == 0 {
            self.numerator == 0
        } else {
            self.numerator % self.denominator == 0
        }
    }
    /// Reduces the fraction to lowest terms. `x/0` is returned unchanged.
    pub fn simplified(&self) -> Self {
        if self.denominator == 0 {
            return *self;
        }
        let ratio = Ratio::new(self.numerator, self.denominator);
        Self::new(*ratio.numer(), *ratio.denom())
    }
    /// Renders the rational in its shortest readable form:
    /// `4/2` becomes `2`, `2/10` becomes `1/5`, and with `allow_decimal` a short decimal like
    /// `0.5` is preferred over `1/2`.
    pub fn to_simple_string(&self, allow_decimal: bool) -> String {
        if self.denominator == 0 {
            return if self.numerator == 0 {
                "0".to_string()
            } else {
                self.to_string()
            };
        }
        if self.is_integer() {
            return (self.numerator / self.denominator).to_string();
        }
        if self.numerator != 1 && self.numerator != 0 && self.denominator % self.numerator == 0 {
            return Self::new(1, self.denominator / self.numerator).to_simple_string(allow_decimal);
        }
        let simplified = self.simplified();
        if allow_decimal {
            let decimal = simplified.to_f64().to_string();
            if decimal.len() < 5 {
                return decimal;
            }
        }
        simplified.to_string()
    }
}
impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// The storage type of a value, named after the TIFF field types. `DateTime` is an addition for
/// values the decoder already turned into a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagValueType {
    Byte,
    Ascii,
    Short,
    Long,
    Rational,
    SByte,
    Undefined,
    SShort,
    SLong,
    SRational,
    Float,
    Double,
    DateTime,
}
impl TagValueType {
    pub fn name(&self) -> &'static str {
        match self {
            TagValueType::Byte => "BYTE",
            TagValueType::Ascii => "ASCII",
            TagValueType::Short => "SHORT",
            TagValueType::Long => "LONG",
            TagValueType::Rational => "RATIONAL",
            TagValueType::SByte => "SBYTE",
            TagValueType::Undefined => "UNDEFINED",
            TagValueType::SShort => "SSHORT",
            TagValueType::SLong => "SLONG",
            TagValueType::SRational => "SRATIONAL",
            TagValueType::Float => "FLOAT",
            TagValueType::Double => "DOUBLE",
            TagValueType::DateTime => "DATETIME",
        }
    }
}
impl FromStr for TagValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_uppercase().as_str() {
            "BYTE" => TagValueType::Byte,
            "ASCII" => TagValueType::Ascii,
            "SHORT" => TagValueType::Short,
            "LONG" => TagValueType::Long,
            "RATIONAL" => TagValueType::Rational,
            "SBYTE" => TagValueType::SByte,
            "UNDEFINED" => TagValueType::Undefined,
            "SSHORT" => TagValueType::SShort,
            "SLONG" => TagValueType::SLong,
            "SRATIONAL" => TagValueType::SRational,
            "FLOAT" => TagValueType::Float,
            "DOUBLE" => TagValueType::Double,
            "DATETIME" => TagValueType::DateTime,
            _ => return Err(format!("'{s}' is not a value type")),
        })
    }
}

/// A decoded makernote value
#[derive(Clone, Derivative, PartialEq)]
#[derivative(Debug)]
pub enum TagValue {
    Byte(u8),
    Ascii(String),
    Short(u16),
    Long(u32),
    Rational(u32, u32),
    SByte(i8),
    Undefined(u8),
    SShort(i16),
    SLong(i32),
    SRational(i32, i32),
    Float(f32),
    Double(f64),
    DateTime(#[derivative(Debug(format_with = "fmt_date_time"))] NaiveDateTime),

    List(Vec<TagValue>),
}
fn fmt_date_time(value: &NaiveDateTime, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", value.format(DATE_TIME_FORMAT))
}

impl TagValue {
    pub fn value_type(&self) -> Option<TagValueType> {
        Some(match self {
            TagValue::Byte(_) => TagValueType::Byte,
            TagValue::Ascii(_) => TagValueType::Ascii,
            TagValue::Short(_) => TagValueType::Short,
            TagValue::Long(_) => TagValueType::Long,
            TagValue::Rational(_, _) => TagValueType::Rational,
            TagValue::SByte(_) => TagValueType::SByte,
            TagValue::Undefined(_) => TagValueType::Undefined,
            TagValue::SShort(_) => TagValueType::SShort,
            TagValue::SLong(_) => TagValueType::SLong,
            TagValue::SRational(_, _) => TagValueType::SRational,
            TagValue::Float(_) => TagValueType::Float,
            TagValue::Double(_) => TagValueType::Double,
            TagValue::DateTime(_) => TagValueType::DateTime,
            TagValue::List(list) => return list.first().and_then(|x| x.value_type()),
        })
    }
    pub fn as_list(&self) -> impl Iterator<Item = &TagValue> {
        match self {
            TagValue::List(list) => list.iter(),
            _ => std::slice::from_ref(self).iter(),
        }
    }
    fn single(&self) -> Option<&TagValue> {
        match self {
            TagValue::List(list) if list.len() == 1 => Some(&list[0]),
            TagValue::List(_) => None,
            _ => Some(self),
        }
    }

    /// Integer view of the value. Single element lists and numeric strings are accepted.
    pub fn as_i64(&self) -> Option<i64> {
        Some(match self.single()? {
            TagValue::Byte(x) => *x as i64,
            TagValue::Short(x) => *x as i64,
            TagValue::Long(x) => *x as i64,
            TagValue::SByte(x) => *x as i64,
            TagValue::Undefined(x) => *x as i64,
            TagValue::SShort(x) => *x as i64,
            TagValue::SLong(x) => *x as i64,
            TagValue::Ascii(x) => return x.trim().parse().ok(),
            TagValue::Rational(_, _) | TagValue::SRational(_, _) => {
                let rational = self.as_rational()?;
                if rational.denominator == 0 {
                    return None;
                }
                rational.numerator / rational.denominator
            }
            _ => return None,
        })
    }
    pub fn as_f64(&self) -> Option<f64> {
        Some(match self.single()? {
            TagValue::Float(x) => *x as f64,
            TagValue::Double(x) => *x,
            TagValue::Rational(_, _) | TagValue::SRational(_, _) => self.as_rational()?.to_f64(),
            TagValue::Ascii(x) => return x.trim().parse().ok(),
            other => other.as_i64()? as f64,
        })
    }
    pub fn as_rational(&self) -> Option<Rational> {
        Some(match self.single()? {
            TagValue::Rational(n, d) => Rational::new(*n as i64, *d as i64),
            TagValue::SRational(n, d) => Rational::new(*n as i64, *d as i64),
            TagValue::Float(_) | TagValue::Double(_) => {
                let ratio = Ratio::<i64>::approximate_float(self.as_f64()?)?;
                Rational::new(*ratio.numer(), *ratio.denom())
            }
            other => Rational::new(other.as_i64()?, 1),
        })
    }
    /// Every element as integer. Fails if any element is not integer-like.
    pub fn as_i64_vec(&self) -> Option<Vec<i64>> {
        match self {
            TagValue::Ascii(x) => Some(x.bytes().map(|b| b as i64).collect()),
            _ => self.as_list().map(|x| x.as_i64()).collect(),
        }
    }
    pub fn as_rational_vec(&self) -> Option<Vec<Rational>> {
        self.as_list().map(|x| x.as_rational()).collect()
    }
    /// The raw bytes of the value. Integer elements are truncated to their low byte.
    pub fn as_bytes(&self) -> Option<Vec<u8>> {
        match self {
            TagValue::Ascii(x) => Some(x.as_bytes().to_vec()),
            _ => self
                .as_list()
                .map(|x| match x {
                    TagValue::Byte(b) | TagValue::Undefined(b) => Some(*b),
                    TagValue::SByte(b) => Some(*b as u8),
                    other => other.as_i64().map(|i| i as u8),
                })
                .collect(),
        }
    }
    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self.single()? {
            TagValue::DateTime(x) => Some(*x),
            TagValue::Ascii(x) => {
                NaiveDateTime::parse_from_str(x.trim_end_matches('\0').trim(), DATE_TIME_FORMAT)
                    .ok()
            }
            _ => None,
        }
    }
}

/// The natural string form of a value: lists are space separated, rationals `n/d`.
impl Display for TagValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValue::Byte(x) | TagValue::Undefined(x) => write!(f, "{x}"),
            TagValue::Ascii(x) => f.write_str(x.trim_end_matches('\0')),
            TagValue::Short(x) => write!(f, "{x}"),
            TagValue::Long(x) => write!(f, "{x}"),
            TagValue::Rational(n, d) => write!(f, "{n}/{d}"),
            TagValue::SByte(x) => write!(f, "{x}"),
            TagValue::SShort(x) => write!(f, "{x}"),
            TagValue::SLong(x) => write!(f, "{x}"),
            TagValue::SRational(n, d) => write!(f, "{n}/{d}"),
            TagValue::Float(x) => write!(f, "{x}"),
            TagValue::Double(x) => write!(f, "{x}"),
            TagValue::DateTime(x) => write!(f, "{}", x.format(DATE_TIME_FORMAT)),
            TagValue::List(list) => write!(f, "{}", list.iter().join(" ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn simple_rational_strings() {
        assert_eq!(Rational::new(4, 2).to_simple_string(true), "2");
        assert_eq!(Rational::new(0, 7).to_simple_string(true), "0");
        assert_eq!(Rational::new(2, 10).to_simple_string(false), "1/5");
        assert_eq!(Rational::new(1, 2).to_simple_string(true), "0.5");
        assert_eq!(Rational::new(1, 2).to_simple_string(false), "1/2");
        assert_eq!(Rational::new(6, 4).to_simple_string(false), "3/2");
        assert_eq!(Rational::new(6, 4).to_simple_string(true), "1.5");
        assert_eq!(Rational::new(1, 3).to_simple_string(true), "1/3");
        assert_eq!(Rational::new(1, 0).to_simple_string(true), "1/0");
    }

    #[test]
    fn rational_properties() {
        assert!(Rational::new(10, 5).is_integer());
        assert!(!Rational::new(10, 4).is_integer());
        assert_eq!(Rational::new(10, 4).simplified(), Rational::new(5, 2));
        assert_eq!(Rational::new(10, 4).to_f64(), 2.5);
        assert_eq!(Rational::new(3, 4).to_string(), "3/4");
    }

    #[test]
    fn integer_conversions() {
        assert_eq!(TagValue::Long(0xFFFF_FFFF).as_i64(), Some(0xFFFF_FFFF));
        assert_eq!(TagValue::SShort(-3).as_i64(), Some(-3));
        assert_eq!(TagValue::List(vec![TagValue::Short(7)]).as_i64(), Some(7));
        assert_eq!(
            TagValue::List(vec![TagValue::Short(7), TagValue::Short(8)]).as_i64(),
            None
        );
        assert_eq!(TagValue::Ascii(" 42 ".to_string()).as_i64(), Some(42));
        assert_eq!(TagValue::Float(1.0).as_i64(), None);
    }

    #[test]
    fn array_conversions() {
        let value = TagValue::List(vec![TagValue::Byte(1), TagValue::Byte(0), TagValue::Byte(3)]);
        assert_eq!(value.as_i64_vec(), Some(vec![1, 0, 3]));
        assert_eq!(value.as_bytes(), Some(vec![1, 0, 3]));
        assert_eq!(TagValue::Short(5).as_i64_vec(), Some(vec![5]));
        assert_eq!(
            TagValue::Ascii("0100".to_string()).as_bytes(),
            Some(b"0100".to_vec())
        );
        assert_eq!(TagValue::Double(0.5).as_i64_vec(), None);
    }

    #[test]
    fn float_and_rational_conversions() {
        assert_eq!(TagValue::Rational(5, 2).as_f64(), Some(2.5));
        assert_eq!(TagValue::Short(3).as_f64(), Some(3.0));
        assert_eq!(TagValue::Double(0.5).as_rational(), Some(Rational::new(1, 2)));
        assert_eq!(TagValue::Long(3).as_rational(), Some(Rational::new(3, 1)));
        assert_eq!(TagValue::Rational(1, 0).as_i64(), None);
    }

    #[test]
    fn date_time_values() {
        let expected = NaiveDate::from_ymd_opt(2021, 3, 4)
            .and_then(|d| d.and_hms_opt(5, 6, 7))
            .unwrap();
        assert_eq!(
            TagValue::Ascii("2021:03:04 05:06:07\0".to_string()).as_date_time(),
            Some(expected)
        );
        assert_eq!(TagValue::DateTime(expected).to_string(), "2021:03:04 05:06:07");
        assert_eq!(TagValue::Long(3).as_date_time(), None);
    }

    #[test]
    fn natural_string_form() {
        let list = TagValue::List(vec![TagValue::Short(1), TagValue::Short(2)]);
        assert_eq!(list.to_string(), "1 2");
        assert_eq!(TagValue::SRational(-1, 3).to_string(), "-1/3");
        assert_eq!(TagValue::Ascii("abc\0".to_string()).to_string(), "abc");
        assert_eq!(list.value_type(), Some(TagValueType::Short));
        assert_eq!("srational".parse::<TagValueType>(), Ok(TagValueType::SRational));
    }
}
