use crate::accessor::ValueAccessor;
use crate::describe::{byte_length, fallback};
use crate::tags::kyocera;

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        kyocera::ProprietaryThumbnail | kyocera::PrintImageMatchingInfo => {
            byte_length(values, tag)
        }
        _ => fallback(values, tag),
    }
}
