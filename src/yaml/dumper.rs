use crate::directory::{Directory, DirectoryEntry};
use crate::value::{TagValue, DATE_TIME_FORMAT};
use derivative::Derivative;
use itertools::Itertools;
use std::sync::Arc;

/// Lists longer than this are wrapped onto several lines.
const VALUES_PER_LINE: usize = 8;

/// Dumps a [Directory] into a friendly human readable text-representation
#[derive(Default, Derivative, Clone)]
#[derivative(Debug)]
pub struct DirectoryYamlDumper {
    pub dump_rational_as_float: bool,
    /// Called for every entry first; returning `Some` replaces the rendered value.
    #[derivative(Debug = "ignore")]
    pub visitor: Option<Arc<dyn Fn(&DirectoryEntry) -> Option<String>>>,
}
impl DirectoryYamlDumper {
    pub fn dump_directory(&self, directory: &Directory) -> String {
        directory
            .entries
            .iter()
            .map(|entry| format!("{}: {}\n", entry.tag, self.dump_entry(entry)))
            .collect()
    }
    pub fn dump_entry(&self, entry: &DirectoryEntry) -> String {
        if let Some(s) = self.visitor.as_ref().and_then(|visitor| visitor(entry)) {
            return s;
        }
        self.dump_value_with_type(&entry.value)
    }

    /// The human readable report: one `[Vendor] Name - description` line per entry.
    pub fn describe_directory(&self, directory: &Directory) -> String {
        directory
            .describe_all()
            .into_iter()
            .map(|(name, description)| format!("[{}] {name} - {description}\n", directory.vendor))
            .collect()
    }

    fn dump_value_with_type(&self, value: &TagValue) -> String {
        match value {
            TagValue::List(list) => {
                let types: Vec<_> = list.iter().map(|x| x.value_type()).dedup().collect();
                match types.as_slice() {
                    // homogeneous lists carry the type once, on the sequence
                    [Some(ty)] if !list.iter().any(|x| matches!(x, TagValue::List(_))) => {
                        format!(
                            "!{} {}",
                            ty.name(),
                            Self::wrap_list(list.iter().map(|x| self.dump_value_plain(x)))
                        )
                    }
                    _ => Self::wrap_list(list.iter().map(|x| self.dump_value_with_type(x))),
                }
            }
            value => match value.value_type() {
                Some(ty) => format!("!{} {}", ty.name(), self.dump_value_plain(value)),
                None => self.dump_value_plain(value),
            },
        }
    }
    fn dump_value_plain(&self, value: &TagValue) -> String {
        match value {
            TagValue::Byte(x) | TagValue::Undefined(x) => format!("{x}"),
            TagValue::Ascii(x) => Self::dump_ascii(x.trim_end_matches('\0')),
            TagValue::Short(x) => format!("{x}"),
            TagValue::Long(x) => format!("{x}"),
            TagValue::Rational(x, y) => {
                if self.dump_rational_as_float {
                    format!("{}", *x as f64 / *y as f64)
                } else {
                    format!("{x}/{y}")
                }
            }
            TagValue::SByte(x) => format!("{x}"),
            TagValue::SShort(x) => format!("{x}"),
            TagValue::SLong(x) => format!("{x}"),
            TagValue::SRational(x, y) => {
                if self.dump_rational_as_float {
                    format!("{}", *x as f64 / *y as f64)
                } else {
                    format!("{x}/{y}")
                }
            }
            TagValue::Float(x) => format!("{x:?}"),
            TagValue::Double(x) => format!("{x:?}"),
            TagValue::DateTime(x) => format!("\"{}\"", x.format(DATE_TIME_FORMAT)),
            TagValue::List(list) => Self::wrap_list(list.iter().map(|x| self.dump_value_plain(x))),
        }
    }
    /// Double quoted, with `\"` as the only escape. Strings holding backslashes or control
    /// characters are written as their utf-8 bytes instead, e.g. `[65, 1, 66]`.
    fn dump_ascii(x: &str) -> String {
        if x.chars().any(|c| c == '\\' || c.is_control()) {
            return Self::wrap_list(x.bytes().map(|b| b.to_string()));
        }
        format!("\"{}\"", x.replace('"', "\\\""))
    }
    fn wrap_list(items: impl Iterator<Item = String>) -> String {
        let items: Vec<String> = items.collect();
        if items.len() <= VALUES_PER_LINE {
            return format!("[{}]", items.join(", "));
        }
        let wrapped = items
            .chunks(VALUES_PER_LINE)
            .map(|chunk| chunk.iter().map(|x| format!("{x},")).join(" "))
            .join("\n");
        format!("[\n{}\n]", textwrap::indent(&wrapped, "  "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{casio_type1, reconyx_hyperfire, Vendor};
    use chrono::NaiveDate;

    #[test]
    fn dumps_typed_lines() {
        let mut directory = Directory::new(Vendor::CasioType1);
        directory.insert(casio_type1::CcdSensitivity, TagValue::Short(64));
        directory.insert(0x7777, TagValue::Long(5));
        directory.insert(
            casio_type1::ObjectDistance,
            TagValue::List(vec![TagValue::Short(1), TagValue::Short(2)]),
        );
        assert_eq!(
            DirectoryYamlDumper::default().dump_directory(&directory),
            "CcdSensitivity: !SHORT 64\n0x7777: !LONG 5\nObjectDistance: !SHORT [1, 2]\n"
        );
    }

    #[test]
    fn strings_rationals_and_dates() {
        let date_time = NaiveDate::from_ymd_opt(2015, 6, 1)
            .and_then(|d| d.and_hms_opt(22, 15, 3))
            .unwrap();
        let mut directory = Directory::new(Vendor::ReconyxHyperFire);
        directory.insert(
            reconyx_hyperfire::UserLabel,
            TagValue::Ascii("say \"hi\"\0".to_string()),
        );
        directory.insert(reconyx_hyperfire::DateTimeOriginal, TagValue::DateTime(date_time));
        directory.insert(reconyx_hyperfire::BatteryVoltage, TagValue::Rational(17, 2));
        let dumper = DirectoryYamlDumper {
            dump_rational_as_float: true,
            visitor: None,
        };
        assert_eq!(
            dumper.dump_directory(&directory),
            "UserLabel: !ASCII \"say \\\"hi\\\"\"\n\
             DateTimeOriginal: !DATETIME \"2015:06:01 22:15:03\"\n\
             BatteryVoltage: !RATIONAL 8.5\n"
        );
    }

    #[test]
    fn control_characters_are_dumped_as_bytes() {
        let mut directory = Directory::new(Vendor::ReconyxHyperFire);
        directory.insert(
            reconyx_hyperfire::UserLabel,
            TagValue::Ascii("A\u{1}B\u{7f}\0".to_string()),
        );
        directory.insert(
            reconyx_hyperfire::SerialNumber,
            TagValue::Ascii("C:\\H500".to_string()),
        );
        assert_eq!(
            DirectoryYamlDumper::default().dump_directory(&directory),
            "UserLabel: !ASCII [65, 1, 66, 127]\n\
             SerialNumber: !ASCII [67, 58, 92, 72, 53, 48, 48]\n"
        );
    }

    #[test]
    fn visitor_overrides_rendering() {
        let mut directory = Directory::new(Vendor::CasioType1);
        directory.insert(casio_type1::Quality, TagValue::Short(2));
        let dumper = DirectoryYamlDumper {
            dump_rational_as_float: false,
            visitor: Some(Arc::new(|entry: &DirectoryEntry| {
                Some(format!("# {}", entry.value))
            })),
        };
        assert_eq!(dumper.dump_directory(&directory), "Quality: # 2\n");
    }

    #[test]
    fn long_lists_are_wrapped() {
        let mut directory = Directory::new(Vendor::CasioType1);
        directory.insert(
            0x7000,
            TagValue::List((0..10).map(TagValue::Byte).collect()),
        );
        assert_eq!(
            DirectoryYamlDumper::default().dump_directory(&directory),
            "0x7000: !BYTE [\n  0, 1, 2, 3, 4, 5, 6, 7,\n  8, 9,\n]\n"
        );
    }

    #[test]
    fn report_lines() {
        let mut directory = Directory::new(Vendor::CasioType1);
        directory.insert(casio_type1::CcdSensitivity, TagValue::Short(64));
        assert_eq!(
            DirectoryYamlDumper::default().describe_directory(&directory),
            "[Casio Makernote] CCD Sensitivity - Normal\n"
        );
    }
}
