use crate::directory::Directory;
use crate::tags::{MaybeKnownTag, Vendor};
use crate::value::{TagValue, TagValueType, DATE_TIME_FORMAT};
use chrono::NaiveDateTime;
use fraction::Ratio;
use lazy_regex::regex_captures;
use thiserror::Error;
use tracing::debug;
use yaml_peg::parser::parse;
use yaml_peg::parser::PError;
use yaml_peg::repr::RcRepr;
use yaml_peg::Node;

#[derive(Debug, Error)]
pub enum DirectoryYamlError {
    #[error("Error '{name}' at:\n{msg}")]
    Syntax { name: String, msg: String },
    #[error("YAML document did not match the grammar")]
    Mismatch,
    #[error("{message} (at {position})")]
    Other { position: u64, message: String },
}
impl From<PError> for DirectoryYamlError {
    fn from(e: PError) -> Self {
        match e {
            PError::Terminate { name, msg } => Self::Syntax {
                name: name.to_string(),
                msg: msg.to_string(),
            },
            PError::Mismatch => Self::Mismatch,
        }
    }
}

macro_rules! err {
    ($pos:expr, $($format_args:tt)*) => {
        DirectoryYamlError::Other { position: $pos, message: format!($($format_args)*) }
    };
}

/// Reads the representation written by [crate::yaml::DirectoryYamlDumper] back into a
/// [Directory].
///
/// Keys are tag names of the given vendor, `0x` prefixed hex numbers or plain integers. Values may
/// carry their type as a YAML tag (`!SHORT 3`); untagged values get a type inferred from their
/// content.
pub struct DirectoryYamlParser {}
impl DirectoryYamlParser {
    pub fn parse_from_str(source: &str, vendor: Vendor) -> Result<Directory, DirectoryYamlError> {
        let parsed_yaml = parse(source)?;
        let mut directory = Directory::new(vendor);
        let Some(document) = parsed_yaml.first() else {
            return Ok(directory);
        };
        Self::parse_entries(document, &mut directory)?;
        Ok(directory)
    }

    fn parse_entries(
        source: &Node<RcRepr>,
        directory: &mut Directory,
    ) -> Result<(), DirectoryYamlError> {
        for (key, value) in source
            .as_map()
            .map_err(|pos| err!(pos, "cant read {source:?} as map (required for a directory)"))?
            .iter()
        {
            let tag = Self::parse_tag(key, directory.vendor)?;
            let explicit_type = Self::yaml_tag_type(value);
            let parsed = Self::parse_value(value, explicit_type)?;
            if explicit_type.is_none() {
                debug!(%tag, value_type = ?parsed.value_type(), "inferred value type");
            }
            directory.insert(tag.into(), parsed);
        }
        Ok(())
    }

    fn parse_tag(
        source: &Node<RcRepr>,
        vendor: Vendor,
    ) -> Result<MaybeKnownTag, DirectoryYamlError> {
        if let Ok(i) = source.as_int() {
            let tag = u16::try_from(i).map_err(|_| err!(source.pos(), "tag {i} is out of range"))?;
            Ok(MaybeKnownTag::from_number(tag, vendor))
        } else if let Ok(str) = source.as_str() {
            if let Some(hex) = str.strip_prefix("0x").or_else(|| str.strip_prefix("0X")) {
                u16::from_str_radix(hex, 16)
                    .map(|tag| MaybeKnownTag::from_number(tag, vendor))
                    .map_err(|_| err!(source.pos(), "couldnt parse hex string '{str}'"))
            } else {
                MaybeKnownTag::from_name(str, vendor).map_err(|message| {
                    DirectoryYamlError::Other {
                        position: source.pos(),
                        message,
                    }
                })
            }
        } else {
            Err(err!(source.pos(), "couldnt parse tag '{source:?}'"))
        }
    }

    fn yaml_tag_type(value: &Node<RcRepr>) -> Option<TagValueType> {
        value.tag().trim_start_matches('!').parse().ok()
    }

    fn parse_value(
        value: &Node<RcRepr>,
        parent_type: Option<TagValueType>,
    ) -> Result<TagValue, DirectoryYamlError> {
        // a tag on a list element wins over the one on the list
        let value_type = Self::yaml_tag_type(value).or(parent_type);
        if let Ok(seq) = value.as_seq() {
            // strings the dumper could not quote arrive as their bytes
            if value_type == Some(TagValueType::Ascii)
                && !seq.is_empty()
                && seq.iter().all(|node| node.as_int().is_ok())
            {
                return Self::parse_ascii_bytes(value, &seq);
            }
            let list: Result<Vec<_>, _> = seq
                .iter()
                .map(|node| Self::parse_value(node, value_type))
                .collect();
            return Ok(TagValue::List(list?));
        }
        match value_type {
            Some(value_type) => Self::parse_typed_scalar(value, value_type),
            None => Self::infer_scalar(value),
        }
    }

    fn parse_ascii_bytes(
        value: &Node<RcRepr>,
        seq: &[Node<RcRepr>],
    ) -> Result<TagValue, DirectoryYamlError> {
        let bytes = seq
            .iter()
            .map(|node| {
                let int = node.as_int().map_err(|pos| err!(pos, "{node:?} is not a byte"))?;
                u8::try_from(int).map_err(|_| err!(node.pos(), "{int} is out of range for a byte"))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        String::from_utf8(bytes)
            .map(TagValue::Ascii)
            .map_err(|e| err!(value.pos(), "ASCII bytes are not valid utf-8: {e}"))
    }

    fn parse_typed_scalar(
        value: &Node<RcRepr>,
        value_type: TagValueType,
    ) -> Result<TagValue, DirectoryYamlError> {
        let str = value
            .as_value()
            .map_err(|pos| err!(pos, "{value:?} is not a scalar value"))?;

        macro_rules! parse_int_like {
            ($name:literal) => {{
                let int: i64 = str
                    .trim()
                    .parse()
                    .map_err(|_| err!(value.pos(), "couldn't parse {str} as {}", $name))?;
                int.try_into()
                    .map_err(|_| err!(value.pos(), "{int} is out of range for {}", $name))?
            }};
        }

        Ok(match value_type {
            TagValueType::Byte => TagValue::Byte(parse_int_like!("BYTE")),
            TagValueType::Ascii => TagValue::Ascii(str.to_string()),
            TagValueType::Short => TagValue::Short(parse_int_like!("SHORT")),
            TagValueType::Long => TagValue::Long(parse_int_like!("LONG")),
            TagValueType::SByte => TagValue::SByte(parse_int_like!("SBYTE")),
            TagValueType::Undefined => TagValue::Undefined(parse_int_like!("UNDEFINED")),
            TagValueType::SShort => TagValue::SShort(parse_int_like!("SSHORT")),
            TagValueType::SLong => TagValue::SLong(parse_int_like!("SLONG")),
            TagValueType::Rational => {
                let (numerator, denominator) = Self::parse_fraction(value, str, "RATIONAL")?;
                match (u32::try_from(numerator), u32::try_from(denominator)) {
                    (Ok(numerator), Ok(denominator)) => TagValue::Rational(numerator, denominator),
                    _ => Err(err!(value.pos(), "{str} is out of range for RATIONAL"))?,
                }
            }
            TagValueType::SRational => {
                let (numerator, denominator) = Self::parse_fraction(value, str, "SRATIONAL")?;
                match (i32::try_from(numerator), i32::try_from(denominator)) {
                    (Ok(numerator), Ok(denominator)) => TagValue::SRational(numerator, denominator),
                    _ => Err(err!(value.pos(), "{str} is out of range for SRATIONAL"))?,
                }
            }
            TagValueType::Float => TagValue::Float(
                str.trim()
                    .parse()
                    .map_err(|_| err!(value.pos(), "couldn't parse {str} as FLOAT"))?,
            ),
            TagValueType::Double => TagValue::Double(
                str.trim()
                    .parse()
                    .map_err(|_| err!(value.pos(), "couldn't parse {str} as DOUBLE"))?,
            ),
            TagValueType::DateTime => TagValue::DateTime(
                NaiveDateTime::parse_from_str(str.trim(), DATE_TIME_FORMAT)
                    .map_err(|e| err!(value.pos(), "couldn't parse {str} as DATETIME: {e}"))?,
            ),
        })
    }

    /// `n/d`, or a float that gets approximated by a fraction.
    fn parse_fraction(
        value: &Node<RcRepr>,
        str: &str,
        name: &str,
    ) -> Result<(i64, i64), DirectoryYamlError> {
        if let Some((_whole, numerator, denominator)) =
            regex_captures!("^\\s*([\\-0-9]+)\\s*/\\s*([\\-0-9]+)\\s*$", str)
        {
            if let (Ok(numerator), Ok(denominator)) = (numerator.parse(), denominator.parse()) {
                return Ok((numerator, denominator));
            }
        } else if let Ok(float) = str.trim().parse::<f32>() {
            let fraction = Ratio::<i32>::approximate_float(float)
                .ok_or_else(|| err!(value.pos(), "couldnt find a fraction for float {float}"))?;
            return Ok((*fraction.numer() as i64, *fraction.denom() as i64));
        }
        Err(err!(value.pos(), "couldn't parse {str} as {name}"))
    }

    /// Integers become LONG or SLONG, floats DOUBLE, `n/d` a rational, timestamps DATETIME and
    /// everything else ASCII.
    fn infer_scalar(value: &Node<RcRepr>) -> Result<TagValue, DirectoryYamlError> {
        if let Ok(int) = value.as_int() {
            return if let Ok(unsigned) = u32::try_from(int) {
                Ok(TagValue::Long(unsigned))
            } else if let Ok(signed) = i32::try_from(int) {
                Ok(TagValue::SLong(signed))
            } else {
                Err(err!(value.pos(), "{int} does not fit into 32 bits"))
            };
        }
        if let Ok(float) = value.as_float() {
            return Ok(TagValue::Double(float));
        }
        let str = value
            .as_value()
            .map_err(|pos| err!(pos, "{value:?} is not a scalar value"))?;
        if regex_captures!("^\\s*([\\-0-9]+)\\s*/\\s*([\\-0-9]+)\\s*$", str).is_some() {
            let (numerator, denominator) = Self::parse_fraction(value, str, "RATIONAL")?;
            if let (Ok(numerator), Ok(denominator)) =
                (u32::try_from(numerator), u32::try_from(denominator))
            {
                return Ok(TagValue::Rational(numerator, denominator));
            }
            if let (Ok(numerator), Ok(denominator)) =
                (i32::try_from(numerator), i32::try_from(denominator))
            {
                return Ok(TagValue::SRational(numerator, denominator));
            }
        }
        if let Ok(date_time) = NaiveDateTime::parse_from_str(str.trim(), DATE_TIME_FORMAT) {
            return Ok(TagValue::DateTime(date_time));
        }
        Ok(TagValue::Ascii(str.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::ValueAccessor;
    use crate::tags::{casio_type1, reconyx_hyperfire};

    #[test]
    fn keys_by_name_hex_and_number() {
        let directory = DirectoryYamlParser::parse_from_str(
            "CcdSensitivity: !SHORT 64\n0x7777: !LONG 5\n2: !SHORT 3\n",
            Vendor::CasioType1,
        )
        .unwrap();
        assert_eq!(directory.len(), 3);
        assert_eq!(
            directory.value(casio_type1::CcdSensitivity),
            Some(&TagValue::Short(64))
        );
        assert_eq!(directory.value(0x7777), Some(&TagValue::Long(5)));
        assert_eq!(
            directory.value(casio_type1::Quality),
            Some(&TagValue::Short(3))
        );
    }

    #[test]
    fn typed_lists_and_rationals() {
        let directory = DirectoryYamlParser::parse_from_str(
            "Sequence: !SHORT [1, 3]\nBatteryVoltage: !RATIONAL 17/2\nAmbientTemperature: !SRATIONAL -4/1\n",
            Vendor::ReconyxHyperFire,
        )
        .unwrap();
        assert_eq!(
            directory.value(reconyx_hyperfire::Sequence),
            Some(&TagValue::List(vec![TagValue::Short(1), TagValue::Short(3)]))
        );
        assert_eq!(
            directory.value(reconyx_hyperfire::BatteryVoltage),
            Some(&TagValue::Rational(17, 2))
        );
        assert_eq!(
            directory.value(reconyx_hyperfire::AmbientTemperature),
            Some(&TagValue::SRational(-4, 1))
        );
    }

    #[test]
    fn untagged_values_are_inferred() {
        let directory = DirectoryYamlParser::parse_from_str(
            "EventNumber: 142\nSerialNumber: \"H500-1234\"\nDateTimeOriginal: \"2015:06:01 22:15:03\"\n",
            Vendor::ReconyxHyperFire,
        )
        .unwrap();
        assert_eq!(
            directory.value(reconyx_hyperfire::EventNumber),
            Some(&TagValue::Long(142))
        );
        assert_eq!(
            directory.string(reconyx_hyperfire::SerialNumber),
            Some("H500-1234".to_string())
        );
        assert!(matches!(
            directory.value(reconyx_hyperfire::DateTimeOriginal),
            Some(TagValue::DateTime(_))
        ));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(DirectoryYamlParser::parse_from_str("NoSuchTag: 1\n", Vendor::Sigma).is_err());
        assert!(
            DirectoryYamlParser::parse_from_str("Quality: !SHORT 70000\n", Vendor::CasioType1)
                .is_err()
        );
        assert!(
            DirectoryYamlParser::parse_from_str("Quality: !BYTE abc\n", Vendor::CasioType1)
                .is_err()
        );
    }
}
