use super::{EXTENDER_TYPES, LENS_TYPES};
use crate::accessor::ValueAccessor;
use crate::describe::{f_number, fallback, lookup, version_bytes};
use crate::tags::olympus_equipment;

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        olympus_equipment::EquipmentVersion => version_bytes(values, tag, 2),
        olympus_equipment::FocalPlaneDiagonal => Some(format!(
            "{} mm",
            values.rational(tag)?.to_simple_string(true)
        )),
        olympus_equipment::BodyFirmwareVersion => {
            let hex = format!("{:04X}", values.integer(tag)?);
            let (major, minor) = hex.split_at(hex.len() - 3);
            Some(format!("{major}.{minor}"))
        }
        olympus_equipment::LensType => {
            let id = values.int_array(tag)?;
            let [make, _, model, sub_model, ..] = id.as_slice() else {
                return None;
            };
            find(&LENS_TYPES, &format!("{make} {model} {sub_model}"))
        }
        olympus_equipment::Extender => {
            let id = values.int_array(tag)?;
            let [make, _, model, ..] = id.as_slice() else {
                return None;
            };
            find(&EXTENDER_TYPES, &format!("{make} {model}"))
        }
        olympus_equipment::MaxApertureAtMinFocal
        | olympus_equipment::MaxApertureAtMaxFocal
        | olympus_equipment::MaxAperture => {
            // stored as APEX value scaled by 256
            let apex = values.integer(tag)? as f64 / 256.0;
            Some(f_number(std::f64::consts::SQRT_2.powf(apex)))
        }
        olympus_equipment::LensProperties => Some(format!("0x{:04X}", values.integer(tag)?)),
        olympus_equipment::FlashType => lookup(
            values,
            tag,
            &[(0, "None"), (2, "Simple E-System"), (3, "E-System")],
        ),
        olympus_equipment::FlashModel => lookup(
            values,
            tag,
            &[
                (0, "None"),
                (1, "FL-20"),
                (2, "FL-50"),
                (3, "RF-11"),
                (4, "TF-22"),
                (5, "FL-36"),
                (6, "FL-50R"),
                (7, "FL-36R"),
                (9, "FL-14"),
                (11, "FL-600R"),
            ],
        ),
        _ => fallback(values, tag),
    }
}

fn find(table: &[(&str, &'static str)], key: &str) -> Option<String> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| name.to_string())
}

#[cfg(test)]
mod tests {
    use crate::makernotes::test_util::{bytes, describe};
    use crate::tags::{olympus_equipment, Vendor};
    use crate::value::TagValue;

    fn equipment(tag: u16, value: TagValue) -> Option<String> {
        describe(Vendor::OlympusEquipment, tag, value)
    }

    #[test]
    fn versions() {
        assert_eq!(
            equipment(olympus_equipment::EquipmentVersion, bytes(b"0100")),
            Some("1.00".to_string())
        );
        assert_eq!(
            equipment(olympus_equipment::BodyFirmwareVersion, TagValue::Long(0x1234)),
            Some("1.234".to_string())
        );
    }

    #[test]
    fn lens_and_extender() {
        assert_eq!(
            equipment(olympus_equipment::LensType, bytes(&[0, 0, 17, 16, 0, 0])),
            Some("Olympus M.Zuiko Digital 45mm F1.8".to_string())
        );
        assert_eq!(
            equipment(olympus_equipment::LensType, bytes(&[9, 0, 9, 9, 0, 0])),
            None
        );
        assert_eq!(
            equipment(olympus_equipment::Extender, bytes(&[0, 0, 4, 0, 0, 0])),
            Some("Olympus Zuiko Digital EC-14 1.4x Teleconverter".to_string())
        );
    }

    #[test]
    fn apertures_and_flash() {
        assert_eq!(
            equipment(olympus_equipment::MaxAperture, TagValue::Short(768)),
            Some("f/2.8".to_string())
        );
        assert_eq!(
            equipment(olympus_equipment::LensProperties, TagValue::Short(0x14)),
            Some("0x0014".to_string())
        );
        assert_eq!(
            equipment(olympus_equipment::FlashModel, TagValue::Short(11)),
            Some("FL-600R".to_string())
        );
        assert_eq!(
            equipment(olympus_equipment::FocalPlaneDiagonal, TagValue::Rational(216, 10)),
            Some("21.6 mm".to_string())
        );
    }
}
