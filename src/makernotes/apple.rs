use crate::accessor::ValueAccessor;
use crate::describe::{fallback, indexed};
use crate::tags::apple;
use crate::value::Rational;

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        apple::HdrImageType => indexed(values, tag, 3, &["HDR Image", "Original Image"]),
        apple::AccelerationVector => acceleration_vector(values),
        _ => fallback(values, tag),
    }
}

/// Gravity along the three device axes, e.g. `0.01g left, 0.98g down, 0.20g forward`.
fn acceleration_vector(values: &dyn ValueAccessor) -> Option<String> {
    let vector = values.rational_array(apple::AccelerationVector)?;
    let [x, y, z] = vector.as_slice() else {
        return None;
    };
    let axis = |value: &Rational, positive: &str, negative: &str| {
        let g = value.to_f64();
        format!("{:.2}g {}", g.abs(), if g >= 0.0 { positive } else { negative })
    };
    Some(format!(
        "{}, {}, {}",
        axis(x, "left", "right"),
        axis(y, "down", "up"),
        axis(z, "forward", "backward")
    ))
}

#[cfg(test)]
mod tests {
    use crate::makernotes::test_util::describe;
    use crate::tags::{apple, Vendor};
    use crate::value::TagValue;

    #[test]
    fn hdr_image_type() {
        let hdr = |value| describe(Vendor::Apple, apple::HdrImageType, TagValue::SLong(value));
        assert_eq!(hdr(3), Some("HDR Image".to_string()));
        assert_eq!(hdr(4), Some("Original Image".to_string()));
        assert_eq!(hdr(2), None);
    }

    #[test]
    fn acceleration_vector() {
        let value = TagValue::List(vec![
            TagValue::SRational(-1, 100),
            TagValue::SRational(98, 100),
            TagValue::SRational(1, 5),
        ]);
        assert_eq!(
            describe(Vendor::Apple, apple::AccelerationVector, value),
            Some("0.01g right, 0.98g down, 0.20g forward".to_string())
        );
        let incomplete = TagValue::List(vec![TagValue::SRational(1, 1)]);
        assert_eq!(
            describe(Vendor::Apple, apple::AccelerationVector, incomplete),
            None
        );
    }
}
