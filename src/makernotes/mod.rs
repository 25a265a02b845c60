//! Per vendor description rules. Every module exposes `describe(tag, values)` and falls back to
//! the generic formatter for tags it has no special rule for.

use crate::accessor::ValueAccessor;
use crate::tags::Vendor;

pub mod apple;
pub mod casio_type1;
pub mod casio_type2;
pub mod kodak;
pub mod kyocera;
pub mod leica;
pub mod leica_type5;
pub mod nikon_type1;
pub mod olympus;
pub mod panasonic_raw_distortion;
pub mod panasonic_raw_wb_info;
pub mod panasonic_raw_wb_info2;
pub mod pentax;
pub mod reconyx_hyperfire;
pub mod reconyx_ultrafire;
pub mod ricoh;
pub mod samsung_type2;
pub mod sanyo;
pub mod sigma;
pub mod sony_type1;
pub mod sony_type6;

impl Vendor {
    /// Human readable description of the value stored under `tag`.
    ///
    /// `None` means there is nothing to describe, usually because the value is absent.
    pub fn describe(&self, tag: u16, values: &dyn ValueAccessor) -> Option<String> {
        match self {
            Vendor::Apple => apple::describe(tag, values),
            Vendor::CasioType1 => casio_type1::describe(tag, values),
            Vendor::CasioType2 => casio_type2::describe(tag, values),
            Vendor::Kodak => kodak::describe(tag, values),
            Vendor::Kyocera => kyocera::describe(tag, values),
            Vendor::Leica => leica::describe(tag, values),
            Vendor::LeicaType5 => leica_type5::describe(tag, values),
            Vendor::NikonType1 => nikon_type1::describe(tag, values),
            Vendor::OlympusEquipment => olympus::equipment::describe(tag, values),
            Vendor::OlympusFocusInfo => olympus::focus_info::describe(tag, values),
            Vendor::OlympusImageProcessing => olympus::image_processing::describe(tag, values),
            Vendor::OlympusRawDevelopment => olympus::raw_development::describe(tag, values),
            Vendor::OlympusRawDevelopment2 => olympus::raw_development2::describe(tag, values),
            Vendor::OlympusRawInfo => olympus::raw_info::describe(tag, values),
            Vendor::PanasonicRawDistortion => panasonic_raw_distortion::describe(tag, values),
            Vendor::PanasonicRawWbInfo => panasonic_raw_wb_info::describe(tag, values),
            Vendor::PanasonicRawWbInfo2 => panasonic_raw_wb_info2::describe(tag, values),
            Vendor::Pentax => pentax::describe(tag, values),
            Vendor::ReconyxHyperFire => reconyx_hyperfire::describe(tag, values),
            Vendor::ReconyxUltraFire => reconyx_ultrafire::describe(tag, values),
            Vendor::Ricoh => ricoh::describe(tag, values),
            Vendor::SamsungType2 => samsung_type2::describe(tag, values),
            Vendor::Sanyo => sanyo::describe(tag, values),
            Vendor::Sigma => sigma::describe(tag, values),
            Vendor::SonyType1 => sony_type1::describe(tag, values),
            Vendor::SonyType6 => sony_type6::describe(tag, values),
        }
    }
}

/// EXIF light source codes, reused by vendors that store white balance presets.
pub(crate) const LIGHT_SOURCES: [(i64, &str); 22] = [
    (0, "Unknown"),
    (1, "Daylight"),
    (2, "Fluorescent"),
    (3, "Tungsten (Incandescent)"),
    (4, "Flash"),
    (9, "Fine Weather"),
    (10, "Cloudy"),
    (11, "Shade"),
    (12, "Daylight Fluorescent"),
    (13, "Day White Fluorescent"),
    (14, "Cool White Fluorescent"),
    (15, "White Fluorescent"),
    (16, "Warm White Fluorescent"),
    (17, "Standard Light A"),
    (18, "Standard Light B"),
    (19, "Standard Light C"),
    (20, "D55"),
    (21, "D65"),
    (22, "D75"),
    (23, "D50"),
    (24, "ISO Studio Tungsten"),
    (255, "Other"),
];

/// Moon phases as counted by trail cameras, starting at new moon.
pub(crate) const MOON_PHASES: [&str; 8] = [
    "New",
    "Waxing Crescent",
    "First Quarter",
    "Waxing Gibbous",
    "Full",
    "Waning Gibbous",
    "Last Quarter",
    "Waning Crescent",
];

#[cfg(test)]
pub(crate) mod test_util {
    use crate::directory::Directory;
    use crate::tags::Vendor;
    use crate::value::TagValue;

    pub(crate) fn directory(
        vendor: Vendor,
        entries: impl IntoIterator<Item = (u16, TagValue)>,
    ) -> Directory {
        let mut directory = Directory::new(vendor);
        for (tag, value) in entries {
            directory.insert(tag, value);
        }
        directory
    }

    pub(crate) fn describe(vendor: Vendor, tag: u16, value: TagValue) -> Option<String> {
        directory(vendor, [(tag, value)]).description(tag)
    }

    pub(crate) fn bytes(values: &[u8]) -> TagValue {
        TagValue::List(values.iter().copied().map(TagValue::Byte).collect())
    }

    pub(crate) fn shorts(values: &[u16]) -> TagValue {
        TagValue::List(values.iter().copied().map(TagValue::Short).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::test_util::directory;
    use super::*;
    use crate::value::TagValue;

    #[test]
    fn absent_values_have_no_description() {
        for vendor in Vendor::ALL {
            let empty = directory(vendor, []);
            for descriptor in vendor.namespace() {
                assert_eq!(
                    vendor.describe(descriptor.tag, &empty),
                    None,
                    "{vendor:?} {}",
                    descriptor.name
                );
            }
        }
    }

    #[test]
    fn describing_is_idempotent() {
        for vendor in Vendor::ALL {
            for descriptor in vendor.namespace() {
                let values = directory(vendor, [(descriptor.tag, TagValue::Short(1))]);
                assert_eq!(
                    vendor.describe(descriptor.tag, &values),
                    vendor.describe(descriptor.tag, &values)
                );
            }
        }
    }

    #[test]
    fn unregistered_tags_use_the_generic_form() {
        for vendor in Vendor::ALL {
            let values = directory(vendor, [(0x7FFE, TagValue::Short(3))]);
            assert_eq!(vendor.describe(0x7FFE, &values), Some("3".to_string()));
        }
    }
}
