use crate::accessor::ValueAccessor;
use crate::describe::fallback;
use crate::tags::sigma;

/// Sigma stores its settings as short strings; the mode tags are keyed by their first character.
fn first_char_lookup(
    values: &dyn ValueAccessor,
    tag: u16,
    table: &[(char, &str)],
) -> Option<String> {
    let value = values.string(tag)?;
    let first = value.chars().next()?;
    Some(
        table
            .iter()
            .find(|(key, _)| *key == first)
            .map_or(value.clone(), |(_, label)| label.to_string()),
    )
}

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        sigma::ExposureMode => first_char_lookup(
            values,
            tag,
            &[
                ('A', "Aperture Priority AE"),
                ('M', "Manual"),
                ('P', "Program AE"),
                ('S', "Shutter Speed Priority AE"),
            ],
        ),
        sigma::MeteringMode => first_char_lookup(
            values,
            tag,
            &[
                ('8', "Multi Segment"),
                ('A', "Average"),
                ('C', "Center Weighted Average"),
            ],
        ),
        _ => fallback(values, tag),
    }
}
