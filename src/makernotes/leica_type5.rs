use crate::accessor::ValueAccessor;
use crate::describe::{fallback, joined_lookup};
use crate::tags::leica_type5;

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        leica_type5::ExposureMode => joined_lookup(
            values,
            tag,
            &[
                ("0 0 0 0", "Program AE"),
                ("1 0 0 0", "Aperture-priority AE"),
                ("1 1 0 0", "Aperture-priority AE (1)"),
                ("2 0 0 0", "Shutter speed priority AE"),
                ("3 0 0 0", "Manual"),
            ],
        ),
        _ => fallback(values, tag),
    }
}
