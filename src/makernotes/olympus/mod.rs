//! The Olympus makernote is split into several sub-directories. The tables they share live here.

use crate::accessor::ValueAccessor;
use crate::describe::bit_flags;
use itertools::Itertools;

pub mod equipment;
pub mod focus_info;
pub mod image_processing;
pub mod raw_development;
pub mod raw_development2;
pub mod raw_info;

pub(crate) const NOISE_REDUCTION: [&str; 3] =
    ["Noise Reduction", "Noise Filter", "Noise Filter (ISO Boost)"];

pub(crate) const COLOR_SPACES: [&str; 3] = ["sRGB", "Adobe RGB", "Pro Photo RGB"];

pub(crate) const ENGINES: [&str; 4] = [
    "High Speed",
    "High Function",
    "Advanced High Speed",
    "Advanced High Function",
];

pub(crate) fn noise_reduction(values: &dyn ValueAccessor, tag: u16) -> Option<String> {
    bit_flags(values, tag, &NOISE_REDUCTION)
}

const ART_FILTERS: [(i64, &str); 38] = [
    (0, "Off"),
    (1, "Soft Focus"),
    (2, "Pop Art"),
    (3, "Pale & Light Color"),
    (4, "Light Tone"),
    (5, "Pin Hole"),
    (6, "Grainy Film"),
    (9, "Diorama"),
    (10, "Cross Process"),
    (12, "Fish Eye"),
    (13, "Drawing"),
    (14, "Gentle Sepia"),
    (15, "Pale & Light Color II"),
    (16, "Pop Art II"),
    (17, "Pin Hole II"),
    (18, "Pin Hole III"),
    (19, "Grainy Film II"),
    (20, "Dramatic Tone"),
    (21, "Punk"),
    (22, "Soft Focus 2"),
    (23, "Sparkle"),
    (24, "Watercolor"),
    (25, "Key Line"),
    (26, "Key Line II"),
    (27, "Miniature"),
    (28, "Reflection"),
    (29, "Fragmented"),
    (31, "Cross Process II"),
    (32, "Dramatic Tone II"),
    (33, "Watercolor I"),
    (34, "Watercolor II"),
    (35, "Diorama II"),
    (36, "Vintage"),
    (37, "Vintage II"),
    (38, "Vintage III"),
    (39, "Partial Color"),
    (40, "Partial Color II"),
    (41, "Partial Color III"),
];

/// The first element names the art filter, the remaining ones are its parameters:
/// `[2, 0, 1]` becomes `Pop Art; 0; 1`.
pub(crate) fn art_filter(values: &dyn ValueAccessor, tag: u16) -> Option<String> {
    let filter = values.int_array(tag)?;
    let (first, parameters) = filter.split_first()?;
    let name = ART_FILTERS
        .iter()
        .find(|(key, _)| key == first)
        .map_or("[unknown]", |(_, name)| *name);
    Some(
        std::iter::once(name.to_string())
            .chain(parameters.iter().map(|x| x.to_string()))
            .join("; "),
    )
}

/// Keyed by make, model and sub-model of the lens id.
pub(crate) const LENS_TYPES: [(&str, &str); 28] = [
    ("0 0 0", "None"),
    ("0 1 0", "Olympus Zuiko Digital ED 50mm F2.0 Macro"),
    ("0 1 1", "Olympus Zuiko Digital 40-150mm F3.5-4.5"),
    ("0 1 16", "Olympus M.Zuiko Digital ED 14-42mm F3.5-5.6"),
    ("0 2 0", "Olympus Zuiko Digital ED 150mm F2.0"),
    ("0 2 16", "Olympus M.Zuiko Digital 17mm F2.8 Pancake"),
    ("0 3 0", "Olympus Zuiko Digital ED 300mm F2.8"),
    ("0 3 16", "Olympus M.Zuiko Digital ED 14-150mm F4.0-5.6"),
    ("0 4 16", "Olympus M.Zuiko Digital ED 9-18mm F4.0-5.6"),
    ("0 5 0", "Olympus Zuiko Digital 14-54mm F2.8-3.5"),
    ("0 5 16", "Olympus M.Zuiko Digital ED 14-42mm F3.5-5.6 L"),
    ("0 6 16", "Olympus M.Zuiko Digital ED 40-150mm F4.0-5.6"),
    ("0 7 0", "Olympus Zuiko Digital ED 50-200mm F2.8-3.5"),
    ("0 7 16", "Olympus M.Zuiko Digital ED 12mm F2.0"),
    ("0 8 0", "Olympus Zuiko Digital 11-22mm F2.8-3.5"),
    ("0 8 16", "Olympus M.Zuiko Digital ED 75-300mm F4.8-6.7"),
    ("0 9 16", "Olympus M.Zuiko Digital 14-42mm F3.5-5.6 II"),
    ("0 16 16", "Olympus M.Zuiko Digital ED 12-50mm F3.5-6.3 EZ"),
    ("0 17 16", "Olympus M.Zuiko Digital 45mm F1.8"),
    ("0 19 16", "Olympus M.Zuiko Digital ED 12-40mm F2.8 Pro"),
    ("0 21 16", "Olympus M.Zuiko Digital ED 75mm F1.8"),
    ("0 22 16", "Olympus M.Zuiko Digital 17mm F1.8"),
    ("0 25 16", "Olympus M.Zuiko Digital ED 40-150mm F2.8 Pro"),
    ("1 1 0", "Sigma 18-50mm F3.5-5.6 DC"),
    ("2 1 16", "Lumix G Vario 14-45mm F3.5-5.6 Asph. Mega OIS"),
    ("2 2 16", "Lumix G Vario 45-200mm F4.0-5.6 Mega OIS"),
    ("2 4 16", "Lumix G 20mm F1.7 Asph."),
    ("2 5 16", "Lumix G Vario 7-14mm F4.0 Asph."),
];

/// Keyed by make and model of the extender id.
pub(crate) const EXTENDER_TYPES: [(&str, &str); 4] = [
    ("0 0", "None"),
    ("0 4", "Olympus Zuiko Digital EC-14 1.4x Teleconverter"),
    ("0 8", "Olympus EX-25 Extension Tube"),
    ("0 16", "Olympus Zuiko Digital EC-20 2.0x Teleconverter"),
];
