//! Building blocks shared by the vendor description rules.
//!
//! All helpers take the tag to read and return `None` when the value is absent or has the wrong
//! shape, so vendor code can simply forward their result.

use crate::accessor::ValueAccessor;
use crate::value::TagValue;
use itertools::Itertools;
use std::fmt::Display;

/// Arrays longer than this are summarized instead of printed element by element.
const MAX_LISTED_VALUES: usize = 16;

pub(crate) fn unknown(value: impl Display) -> String {
    format!("Unknown ({value})")
}

/// `labels[value - base]`; empty labels mark gaps in the table.
pub(crate) fn indexed_label(
    value: i64,
    base: i64,
    labels: &[&'static str],
) -> Option<&'static str> {
    let index = usize::try_from(value.checked_sub(base)?).ok()?;
    labels.get(index).copied().filter(|label| !label.is_empty())
}

pub(crate) fn indexed(
    values: &dyn ValueAccessor,
    tag: u16,
    base: i64,
    labels: &[&'static str],
) -> Option<String> {
    indexed_label(values.integer(tag)?, base, labels).map(str::to_string)
}

pub(crate) fn lookup_label(value: i64, table: &[(i64, &'static str)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, label)| *label)
}

/// Exact match against `table`; anything else renders as `Unknown (N)`.
pub(crate) fn lookup(
    values: &dyn ValueAccessor,
    tag: u16,
    table: &[(i64, &'static str)],
) -> Option<String> {
    let value = values.integer(tag)?;
    Some(lookup_label(value, table).map_or_else(|| unknown(value), str::to_string))
}

/// Bit `n` of the value selects `labels[n]`.
pub(crate) fn bit_flags_label(value: i64, labels: &[&str]) -> String {
    if value == 0 {
        return "(none)".to_string();
    }
    let set = labels
        .iter()
        .enumerate()
        .filter(|(bit, label)| !label.is_empty() && (value >> bit) & 1 == 1)
        .map(|(_, label)| *label)
        .join(", ");
    if set.is_empty() {
        unknown(value)
    } else {
        set
    }
}

pub(crate) fn bit_flags(values: &dyn ValueAccessor, tag: u16, labels: &[&str]) -> Option<String> {
    Some(bit_flags_label(values.integer(tag)?, labels))
}

/// The integer elements joined by spaces, e.g. `1 0 0 0`.
pub(crate) fn joined(values: &dyn ValueAccessor, tag: u16) -> Option<String> {
    Some(values.int_array(tag)?.iter().join(" "))
}

/// Matches the space-joined elements against string keys.
pub(crate) fn joined_lookup(
    values: &dyn ValueAccessor,
    tag: u16,
    table: &[(&str, &'static str)],
) -> Option<String> {
    let joined = joined(values, tag)?;
    Some(
        table
            .iter()
            .find(|(key, _)| *key == joined)
            .map_or_else(|| unknown(&joined), |(_, label)| label.to_string()),
    )
}

/// Renders version bytes like `[0, 1, 0, 0]` or the ascii `"0100"` as `1.00`.
///
/// At most four components are used; the dot is placed after `major_digits` of them and a
/// leading zero is dropped.
pub(crate) fn version_string(components: &[i64], major_digits: usize) -> Option<String> {
    let mut version = String::new();
    for (i, component) in components.iter().take(4).enumerate() {
        if i == major_digits {
            version.push('.');
        }
        let mut c = u8::try_from(*component).ok()?;
        if c < b'0' {
            c += b'0';
        }
        if i == 0 && c == b'0' {
            continue;
        }
        version.push(c as char);
    }
    Some(version)
}

pub(crate) fn version_bytes(
    values: &dyn ValueAccessor,
    tag: u16,
    major_digits: usize,
) -> Option<String> {
    version_string(&values.int_array(tag)?, major_digits)
}

pub(crate) fn simple_rational(
    values: &dyn ValueAccessor,
    tag: u16,
    allow_decimal: bool,
) -> Option<String> {
    Some(values.rational(tag)?.to_simple_string(allow_decimal))
}

/// Binary blobs are only described by their size.
pub(crate) fn byte_length(values: &dyn ValueAccessor, tag: u16) -> Option<String> {
    let length = values.byte_array(tag)?.len();
    Some(format!(
        "({length} byte{})",
        if length == 1 { "" } else { "s" }
    ))
}

/// Like `Display` for floats, but whole numbers keep one decimal (`2.0` instead of `2`).
pub(crate) fn decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// At most `max_fraction_digits` decimals, trailing zeros dropped down to one.
pub(crate) fn trimmed_decimal(value: f64, max_fraction_digits: usize) -> String {
    let formatted = format!("{value:.max_fraction_digits$}");
    if !formatted.contains('.') {
        return format!("{formatted}.0");
    }
    let trimmed = formatted.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

pub(crate) fn f_number(value: f64) -> String {
    format!("f/{value:.1}")
}

/// The natural string form of whatever is stored under `tag`.
pub(crate) fn fallback(values: &dyn ValueAccessor, tag: u16) -> Option<String> {
    match values.value(tag)? {
        TagValue::List(list) if list.len() > MAX_LISTED_VALUES => {
            Some(format!("[{} values]", list.len()))
        }
        TagValue::Ascii(x) => Some(x.trim_end_matches('\0').trim().to_string()),
        value => Some(value.to_string()),
    }
}
