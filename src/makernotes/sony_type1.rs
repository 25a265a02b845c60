use crate::accessor::ValueAccessor;
use crate::describe::{byte_length, fallback, joined_lookup, lookup, simple_rational};
use crate::tags::sony_type1;

const IMAGE_QUALITY: [(i64, &str); 9] = [
    (0, "RAW"),
    (1, "Super Fine"),
    (2, "Fine"),
    (3, "Standard"),
    (4, "Economy"),
    (5, "Extra Fine"),
    (6, "RAW + JPEG"),
    (7, "Compressed RAW"),
    (8, "Compressed RAW + JPEG"),
];

const TELECONVERTERS: [(i64, &str); 7] = [
    (0x00, "None"),
    (0x48, "Minolta/Sony AF 2x APO (D)"),
    (0x50, "Minolta AF 2x APO II"),
    (0x51, "Minolta AF 2x APO"),
    (0x88, "Minolta/Sony AF 1.4x APO (D)"),
    (0x90, "Minolta AF 1.4x APO II"),
    (0xA0, "Minolta AF 1.4x APO"),
];

const WHITE_BALANCE: [(i64, &str); 10] = [
    (0x00, "Auto"),
    (0x01, "Color Temperature/Color Filter"),
    (0x10, "Daylight"),
    (0x20, "Cloudy"),
    (0x30, "Shade"),
    (0x40, "Tungsten"),
    (0x50, "Flash"),
    (0x60, "Fluorescent"),
    (0x70, "Custom"),
    (0x80, "Underwater"),
];

const LONG_EXPOSURE_NOISE_REDUCTION: [(i64, &str); 6] = [
    (0, "Off"),
    (1, "On (unused)"),
    (0x10001, "On (dark subtracted)"),
    (0xFFFF0000, "Off (65535)"),
    (0xFFFF0001, "On (65535)"),
    (0xFFFFFFFF, "N/A"),
];

const HIGH_ISO_NOISE_REDUCTION: [(i64, &str); 6] = [
    (0, "Off"),
    (1, "On"),
    (2, "Normal"),
    (3, "High"),
    (0x100, "Auto"),
    (0xFFFF, "N/A"),
];

const HDR: [(i64, &str); 13] = [
    (0x0, "Off"),
    (0x10001, "Auto"),
    (0x10010, "1.0 EV"),
    (0x10011, "1.5 EV"),
    (0x10012, "2.0 EV"),
    (0x10013, "2.5 EV"),
    (0x10014, "3.0 EV"),
    (0x10015, "3.5 EV"),
    (0x10016, "4.0 EV"),
    (0x10017, "4.5 EV"),
    (0x10018, "5.0 EV"),
    (0x10019, "5.5 EV"),
    (0x1001A, "6.0 EV"),
];

const PICTURE_EFFECTS: [(i64, &str); 36] = [
    (0, "Off"),
    (1, "Toy Camera"),
    (2, "Pop Color"),
    (3, "Posterization"),
    (4, "Posterization B/W"),
    (5, "Retro Photo"),
    (6, "Soft High Key"),
    (7, "Partial Color (red)"),
    (8, "Partial Color (green)"),
    (9, "Partial Color (blue)"),
    (10, "Partial Color (yellow)"),
    (13, "High Contrast Monochrome"),
    (16, "Toy Camera (normal)"),
    (17, "Toy Camera (cool)"),
    (18, "Toy Camera (warm)"),
    (19, "Toy Camera (green)"),
    (20, "Toy Camera (magenta)"),
    (32, "Soft Focus (low)"),
    (33, "Soft Focus"),
    (34, "Soft Focus (high)"),
    (48, "Miniature (auto)"),
    (49, "Miniature (top)"),
    (50, "Miniature (middle horizontal)"),
    (51, "Miniature (bottom)"),
    (52, "Miniature (left)"),
    (53, "Miniature (middle vertical)"),
    (54, "Miniature (right)"),
    (64, "HDR Painting (low)"),
    (65, "HDR Painting"),
    (66, "HDR Painting (high)"),
    (80, "Rich-tone Monochrome"),
    (97, "Water Color"),
    (98, "Water Color 2"),
    (112, "Illustration (low)"),
    (113, "Illustration"),
    (114, "Illustration (high)"),
];

/// Vignetting and lateral chromatic aberration correction share their codes.
const LENS_CORRECTION: [(i64, &str); 3] = [(0, "Off"), (2, "Auto"), (0xFFFFFFFF, "N/A")];

const AF_POINTS: [(i64, &str); 16] = [
    (0, "Auto"),
    (1, "Center"),
    (2, "Top"),
    (3, "Upper-right"),
    (4, "Right"),
    (5, "Lower-right"),
    (6, "Bottom"),
    (7, "Lower-left"),
    (8, "Left"),
    (9, "Upper-left"),
    (10, "Far Right"),
    (11, "Far Left"),
    (12, "Upper-middle"),
    (13, "Near Right"),
    (14, "Lower-middle"),
    (15, "Near Left"),
];

const FILE_FORMATS: [(&str, &str); 9] = [
    ("0 0 0 2", "JPEG"),
    ("1 0 0 0", "SR2"),
    ("2 0 0 0", "ARW 1.0"),
    ("3 0 0 0", "ARW 2.0"),
    ("3 1 0 0", "ARW 2.1"),
    ("3 2 0 0", "ARW 2.2"),
    ("3 3 0 0", "ARW 2.3"),
    ("3 3 1 0", "ARW 2.3.1"),
    ("3 3 2 0", "ARW 2.3.2"),
];

const MODELS: [(i64, &str); 36] = [
    (2, "DSC-R1"),
    (256, "DSLR-A100"),
    (257, "DSLR-A900"),
    (258, "DSLR-A700"),
    (259, "DSLR-A200"),
    (260, "DSLR-A350"),
    (261, "DSLR-A300"),
    (263, "DSLR-A380/A390"),
    (264, "DSLR-A330"),
    (265, "DSLR-A230"),
    (266, "DSLR-A290"),
    (269, "DSLR-A850"),
    (273, "DSLR-A550"),
    (274, "DSLR-A500"),
    (275, "DSLR-A450"),
    (278, "NEX-5"),
    (279, "NEX-3"),
    (280, "SLT-A33"),
    (281, "SLT-A55V"),
    (282, "DSLR-A560"),
    (283, "DSLR-A580"),
    (284, "NEX-C3"),
    (285, "SLT-A35"),
    (286, "SLT-A65V"),
    (287, "SLT-A77V"),
    (288, "NEX-5N"),
    (289, "NEX-7"),
    (290, "NEX-VG20E"),
    (291, "SLT-A37"),
    (292, "SLT-A57"),
    (293, "NEX-F3"),
    (294, "SLT-A99V"),
    (295, "NEX-6"),
    (296, "NEX-5R"),
    (297, "DSC-RX100"),
    (298, "DSC-RX1"),
];

const SCENE_MODES: [(i64, &str); 23] = [
    (0, "Standard"),
    (1, "Portrait"),
    (2, "Text"),
    (3, "Night Scene"),
    (4, "Sunset"),
    (5, "Sports"),
    (6, "Landscape"),
    (7, "Night Portrait"),
    (8, "Macro"),
    (9, "Super Macro"),
    (16, "Auto"),
    (17, "Night View/Portrait"),
    (18, "Sweep Panorama"),
    (19, "Handheld Night Shot"),
    (20, "Anti Motion Blur"),
    (21, "Cont. Priority AE"),
    (22, "Auto+"),
    (23, "3D Sweep Panorama"),
    (24, "Superior Auto"),
    (25, "High Sensitivity"),
    (26, "Fireworks"),
    (27, "Food"),
    (28, "Pet"),
];

const DYNAMIC_RANGE_OPTIMISER: [(i64, &str); 14] = [
    (0, "Off"),
    (1, "Standard"),
    (2, "Advanced Auto"),
    (3, "Auto"),
    (8, "Advanced LV1"),
    (9, "Advanced LV2"),
    (10, "Advanced LV3"),
    (11, "Advanced LV4"),
    (12, "Advanced LV5"),
    (16, "LV1"),
    (17, "LV2"),
    (18, "LV3"),
    (19, "LV4"),
    (20, "LV5"),
];

const COLOR_MODES: [(i64, &str); 21] = [
    (0, "Standard"),
    (1, "Vivid"),
    (2, "Portrait"),
    (3, "Landscape"),
    (4, "Sunset"),
    (5, "Night Portrait"),
    (6, "Black & White"),
    (7, "Adobe RGB"),
    (12, "Neutral"),
    (13, "Clear"),
    (14, "Deep"),
    (15, "Light"),
    (16, "Autumn"),
    (17, "Sepia"),
    (100, "Neutral"),
    (101, "Clear"),
    (102, "Deep"),
    (103, "Light"),
    (104, "Night View"),
    (105, "Autumn Leaves"),
    (0xFFFFFFFF, "N/A"),
];

const EXPOSURE_MODES: [(i64, &str); 28] = [
    (0, "Program"),
    (1, "Portrait"),
    (2, "Beach"),
    (3, "Sports"),
    (4, "Snow"),
    (5, "Landscape"),
    (6, "Auto"),
    (7, "Aperture Priority"),
    (8, "Shutter Priority"),
    (9, "Night Scene / Twilight"),
    (10, "Hi-Speed Shutter"),
    (11, "Twilight Portrait"),
    (12, "Soft Snap/Portrait"),
    (13, "Fireworks"),
    (14, "Smile Shutter"),
    (15, "Manual"),
    (18, "High Sensitivity"),
    (19, "Macro"),
    (20, "Advanced Sports Shooting"),
    (29, "Underwater"),
    (33, "Food"),
    (34, "Panorama"),
    (35, "Handheld Night Shot"),
    (36, "Anti Motion Blur"),
    (37, "Pet"),
    (38, "Backlight Correction HDR"),
    (40, "Background Defocus"),
    (0xFFFF, "N/A"),
];

const AF_MODES: [(i64, &str); 9] = [
    (0, "Default"),
    (1, "Multi"),
    (2, "Center"),
    (3, "Spot"),
    (4, "Flexible Spot"),
    (6, "Touch"),
    (14, "Manual Focus"),
    (15, "Face Detected"),
    (0xFFFF, "N/A"),
];

const FLASH_LEVELS: [(i64, &str); 10] = [
    (-32768, "Low"),
    (-3, "-3/3"),
    (-2, "-2/3"),
    (-1, "-1/3"),
    (0, "Normal"),
    (1, "+1/3"),
    (2, "+2/3"),
    (3, "+3/3"),
    (128, "N/A"),
    (32767, "High"),
];

const WHITE_BALANCE_2: [(i64, &str); 13] = [
    (0, "Auto"),
    (4, "Custom"),
    (5, "Daylight"),
    (6, "Cloudy"),
    (7, "Cool White Fluorescent"),
    (8, "Day White Fluorescent"),
    (9, "Daylight Fluorescent"),
    (10, "Incandescent2"),
    (11, "Warm White Fluorescent"),
    (14, "Incandescent"),
    (15, "Flash"),
    (17, "Underwater 1 (Blue Water)"),
    (18, "Underwater 2 (Green Water)"),
];

pub fn describe(tag: u16, values: &dyn ValueAccessor) -> Option<String> {
    match tag {
        sony_type1::ImageQuality => lookup(values, tag, &IMAGE_QUALITY),
        sony_type1::FlashExposureComp => {
            Some(format!("{} EV", simple_rational(values, tag, true)?))
        }
        sony_type1::Teleconverter => lookup(values, tag, &TELECONVERTERS),
        sony_type1::WhiteBalance => lookup(values, tag, &WHITE_BALANCE),
        sony_type1::PrintImageMatchingInfo | sony_type1::PreviewImage => byte_length(values, tag),
        sony_type1::LongExposureNoiseReduction => {
            lookup(values, tag, &LONG_EXPOSURE_NOISE_REDUCTION)
        }
        sony_type1::HighIsoNoiseReduction => lookup(values, tag, &HIGH_ISO_NOISE_REDUCTION),
        sony_type1::Hdr => lookup(values, tag, &HDR),
        sony_type1::MultiFrameNoiseReduction => {
            lookup(values, tag, &[(0, "Off"), (1, "On"), (255, "N/A")])
        }
        sony_type1::PictureEffect => lookup(values, tag, &PICTURE_EFFECTS),
        sony_type1::SoftSkinEffect => lookup(
            values,
            tag,
            &[
                (0, "Off"),
                (1, "Low"),
                (2, "Mid"),
                (3, "High"),
                (0xFFFFFFFF, "N/A"),
            ],
        ),
        sony_type1::VignettingCorrection | sony_type1::LateralChromaticAberration => {
            lookup(values, tag, &LENS_CORRECTION)
        }
        sony_type1::DistortionCorrection => lookup(
            values,
            tag,
            &[
                (0, "Off"),
                (2, "Auto"),
                (0xFFFFFFFF, "No correction params available"),
            ],
        ),
        sony_type1::AutoPortraitFramed => lookup(values, tag, &[(0, "No"), (1, "Yes")]),
        sony_type1::FocusMode => lookup(
            values,
            tag,
            &[
                (0, "Manual"),
                (2, "AF-S"),
                (3, "AF-C"),
                (5, "Semi-manual"),
                (6, "DMF"),
            ],
        ),
        sony_type1::AfPointSelected => lookup(values, tag, &AF_POINTS),
        sony_type1::FileFormat => joined_lookup(values, tag, &FILE_FORMATS),
        sony_type1::SonyModelId => lookup(values, tag, &MODELS),
        sony_type1::ColorTemperature => {
            let value = values.integer(tag)?;
            if value == 0 {
                return Some("Auto".to_string());
            }
            // the temperature is stored byte swapped in the upper half
            let kelvin = ((value & 0x00FF_0000) >> 8) | ((value & 0xFF00_0000) >> 24);
            Some(format!("{kelvin} K"))
        }
        sony_type1::SceneMode => lookup(values, tag, &SCENE_MODES),
        sony_type1::ZoneMatching => lookup(
            values,
            tag,
            &[(0, "ISO Setting Used"), (1, "High Key"), (2, "Low Key")],
        ),
        sony_type1::DynamicRangeOptimiser => lookup(values, tag, &DYNAMIC_RANGE_OPTIMISER),
        sony_type1::ImageStabilisation => Some(
            match values.integer(tag)? {
                0 => "Off",
                1 => "On",
                _ => "N/A",
            }
            .to_string(),
        ),
        sony_type1::ColorMode => lookup(values, tag, &COLOR_MODES),
        sony_type1::FullImageSize | sony_type1::PreviewImageSize => {
            match values.int_array(tag)?.as_slice() {
                [height, width] => Some(format!("{width} x {height}")),
                _ => fallback(values, tag),
            }
        }
        sony_type1::Macro => lookup(
            values,
            tag,
            &[
                (0, "Off"),
                (1, "On"),
                (2, "Magnifying Glass/Super Macro"),
                (0xFFFF, "N/A"),
            ],
        ),
        sony_type1::ExposureMode => lookup(values, tag, &EXPOSURE_MODES),
        sony_type1::FocusMode2 => lookup(
            values,
            tag,
            &[
                (1, "AF-S"),
                (2, "AF-C"),
                (4, "Permanent-AF"),
                (0xFFFF, "N/A"),
            ],
        ),
        sony_type1::AfMode => lookup(values, tag, &AF_MODES),
        sony_type1::AfIlluminator => {
            lookup(values, tag, &[(0, "Off"), (1, "Auto"), (0xFFFF, "N/A")])
        }
        sony_type1::JpegQuality => lookup(
            values,
            tag,
            &[
                (0, "Normal"),
                (1, "Fine"),
                (2, "Extra Fine"),
                (0xFFFF, "N/A"),
            ],
        ),
        sony_type1::FlashLevel => lookup(values, tag, &FLASH_LEVELS),
        sony_type1::ReleaseMode => lookup(
            values,
            tag,
            &[
                (0, "Normal"),
                (2, "Continuous"),
                (5, "Exposure Bracketing"),
                (6, "White Balance Bracketing"),
                (0xFFFF, "N/A"),
            ],
        ),
        sony_type1::SequenceNumber => Some(match values.integer(tag)? {
            0 => "Single".to_string(),
            0xFFFF => "N/A".to_string(),
            n => n.to_string(),
        }),
        sony_type1::AntiBlur => lookup(
            values,
            tag,
            &[
                (0, "Off"),
                (1, "On (Continuous)"),
                (2, "On (Shooting)"),
                (0xFFFF, "N/A"),
            ],
        ),
        sony_type1::LongExposureNoiseReductionOrFocusMode => lookup(
            values,
            tag,
            &[(0, "Off"), (1, "On"), (2, "On 2sec"), (0xFFFF, "N/A")],
        ),
        sony_type1::DynamicRangeOptimizer => {
            lookup(values, tag, &[(0, "Off"), (1, "Standard"), (2, "Plus")])
        }
        sony_type1::HighIsoNoiseReduction2 => lookup(
            values,
            tag,
            &[
                (0, "Normal"),
                (1, "High"),
                (2, "Low"),
                (3, "Off"),
                (0xFFFF, "N/A"),
            ],
        ),
        sony_type1::IntelligentAuto => {
            lookup(values, tag, &[(0, "Off"), (1, "On"), (2, "Advanced")])
        }
        sony_type1::WhiteBalance2 => lookup(values, tag, &WHITE_BALANCE_2),
        _ => fallback(values, tag),
    }
}

#[cfg(test)]
mod tests {
    use crate::makernotes::test_util::{bytes, describe};
    use crate::tags::{sony_type1, Vendor};
    use crate::value::TagValue;

    fn sony(tag: u16, value: TagValue) -> Option<String> {
        describe(Vendor::SonyType1, tag, value)
    }

    #[test]
    fn color_temperature_is_byte_swapped() {
        assert_eq!(
            sony(sony_type1::ColorTemperature, TagValue::Long(0)),
            Some("Auto".to_string())
        );
        assert_eq!(
            sony(sony_type1::ColorTemperature, TagValue::Long(0x7C15_0000)),
            Some("5500 K".to_string())
        );
    }

    #[test]
    fn wide_codes() {
        assert_eq!(
            sony(sony_type1::Hdr, TagValue::Long(0x10012)),
            Some("2.0 EV".to_string())
        );
        assert_eq!(
            sony(sony_type1::LongExposureNoiseReduction, TagValue::Long(0xFFFF_FFFF)),
            Some("N/A".to_string())
        );
        assert_eq!(
            sony(sony_type1::DistortionCorrection, TagValue::Long(2)),
            Some("Auto".to_string())
        );
        assert_eq!(
            sony(sony_type1::FlashLevel, TagValue::SShort(-2)),
            Some("-2/3".to_string())
        );
    }

    #[test]
    fn files_and_sizes() {
        assert_eq!(
            sony(sony_type1::FileFormat, bytes(&[3, 3, 1, 0])),
            Some("ARW 2.3.1".to_string())
        );
        assert_eq!(
            sony(sony_type1::FileFormat, bytes(&[9, 9, 9, 9])),
            Some("Unknown (9 9 9 9)".to_string())
        );
        assert_eq!(
            sony(
                sony_type1::FullImageSize,
                TagValue::List(vec![TagValue::Long(4000), TagValue::Long(6000)])
            ),
            Some("6000 x 4000".to_string())
        );
        assert_eq!(
            sony(sony_type1::SonyModelId, TagValue::Short(289)),
            Some("NEX-7".to_string())
        );
    }

    #[test]
    fn special_cases() {
        assert_eq!(
            sony(sony_type1::ImageStabilisation, TagValue::Long(7)),
            Some("N/A".to_string())
        );
        assert_eq!(
            sony(sony_type1::SequenceNumber, TagValue::Short(0)),
            Some("Single".to_string())
        );
        assert_eq!(
            sony(sony_type1::SequenceNumber, TagValue::Short(4)),
            Some("4".to_string())
        );
        assert_eq!(
            sony(sony_type1::FlashExposureComp, TagValue::SRational(-1, 3)),
            Some("-1/3 EV".to_string())
        );
    }
}
