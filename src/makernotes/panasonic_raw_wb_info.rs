use super::LIGHT_SOURCES;
use crate::accessor::ValueAccessor;
use crate::describe::{fallback, lookup};
use crate::tags::panasonic_raw_wb_info;

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        panasonic_raw_wb_info::WbType1
        | panasonic_raw_wb_info::WbType2
        | panasonic_raw_wb_info::WbType3
        | panasonic_raw_wb_info::WbType4
        | panasonic_raw_wb_info::WbType5
        | panasonic_raw_wb_info::WbType6
        | panasonic_raw_wb_info::WbType7 => lookup(values, tag, &LIGHT_SOURCES),
        _ => fallback(values, tag),
    }
}
