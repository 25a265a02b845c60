use derivative::Derivative;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/makernote_tags.rs"));

/// The makernote layout a directory was decoded from. Each variant owns one tag catalog and one
/// set of description rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Apple,
    CasioType1,
    CasioType2,
    Kodak,
    Kyocera,
    Leica,
    LeicaType5,
    NikonType1,
    OlympusEquipment,
    OlympusFocusInfo,
    OlympusImageProcessing,
    OlympusRawDevelopment,
    OlympusRawDevelopment2,
    OlympusRawInfo,
    PanasonicRawDistortion,
    PanasonicRawWbInfo,
    PanasonicRawWbInfo2,
    Pentax,
    ReconyxHyperFire,
    ReconyxUltraFire,
    Ricoh,
    SamsungType2,
    Sanyo,
    Sigma,
    SonyType1,
    SonyType6,
}

impl Vendor {
    pub const ALL: [Vendor; 26] = [
        Vendor::Apple,
        Vendor::CasioType1,
        Vendor::CasioType2,
        Vendor::Kodak,
        Vendor::Kyocera,
        Vendor::Leica,
        Vendor::LeicaType5,
        Vendor::NikonType1,
        Vendor::OlympusEquipment,
        Vendor::OlympusFocusInfo,
        Vendor::OlympusImageProcessing,
        Vendor::OlympusRawDevelopment,
        Vendor::OlympusRawDevelopment2,
        Vendor::OlympusRawInfo,
        Vendor::PanasonicRawDistortion,
        Vendor::PanasonicRawWbInfo,
        Vendor::PanasonicRawWbInfo2,
        Vendor::Pentax,
        Vendor::ReconyxHyperFire,
        Vendor::ReconyxUltraFire,
        Vendor::Ricoh,
        Vendor::SamsungType2,
        Vendor::Sanyo,
        Vendor::Sigma,
        Vendor::SonyType1,
        Vendor::SonyType6,
    ];

    pub fn namespace(&self) -> &'static [MakernoteTagDescriptor] {
        match self {
            Vendor::Apple => &apple::ALL,
            Vendor::CasioType1 => &casio_type1::ALL,
            Vendor::CasioType2 => &casio_type2::ALL,
            Vendor::Kodak => &kodak::ALL,
            Vendor::Kyocera => &kyocera::ALL,
            Vendor::Leica => &leica::ALL,
            Vendor::LeicaType5 => &leica_type5::ALL,
            Vendor::NikonType1 => &nikon_type1::ALL,
            Vendor::OlympusEquipment => &olympus_equipment::ALL,
            Vendor::OlympusFocusInfo => &olympus_focus_info::ALL,
            Vendor::OlympusImageProcessing => &olympus_image_processing::ALL,
            Vendor::OlympusRawDevelopment => &olympus_raw_development::ALL,
            Vendor::OlympusRawDevelopment2 => &olympus_raw_development2::ALL,
            Vendor::OlympusRawInfo => &olympus_raw_info::ALL,
            Vendor::PanasonicRawDistortion => &panasonic_raw_distortion::ALL,
            Vendor::PanasonicRawWbInfo => &panasonic_raw_wb_info::ALL,
            Vendor::PanasonicRawWbInfo2 => &panasonic_raw_wb_info2::ALL,
            Vendor::Pentax => &pentax::ALL,
            Vendor::ReconyxHyperFire => &reconyx_hyperfire::ALL,
            Vendor::ReconyxUltraFire => &reconyx_ultrafire::ALL,
            Vendor::Ricoh => &ricoh::ALL,
            Vendor::SamsungType2 => &samsung_type2::ALL,
            Vendor::Sanyo => &sanyo::ALL,
            Vendor::Sigma => &sigma::ALL,
            Vendor::SonyType1 => &sony_type1::ALL,
            Vendor::SonyType6 => &sony_type6::ALL,
        }
    }

    /// The name of the directory as shown to users, e.g. `Casio Makernote`.
    ///
    /// Several layouts of the same manufacturer share one name.
    pub fn name(&self) -> &'static str {
        match self {
            Vendor::Apple => "Apple Makernote",
            Vendor::CasioType1 | Vendor::CasioType2 => "Casio Makernote",
            Vendor::Kodak => "Kodak Makernote",
            Vendor::Kyocera => "Kyocera/Contax Makernote",
            Vendor::Leica | Vendor::LeicaType5 => "Leica Makernote",
            Vendor::NikonType1 => "Nikon Makernote",
            Vendor::OlympusEquipment => "Olympus Equipment",
            Vendor::OlympusFocusInfo => "Olympus Focus Info",
            Vendor::OlympusImageProcessing => "Olympus Image Processing",
            Vendor::OlympusRawDevelopment => "Olympus Raw Development",
            Vendor::OlympusRawDevelopment2 => "Olympus Raw Development 2",
            Vendor::OlympusRawInfo => "Olympus Raw Info",
            Vendor::PanasonicRawDistortion => "PanasonicRaw DistortionInfo",
            Vendor::PanasonicRawWbInfo => "PanasonicRaw WbInfo",
            Vendor::PanasonicRawWbInfo2 => "PanasonicRaw WbInfo2",
            Vendor::Pentax => "Pentax Makernote",
            Vendor::ReconyxHyperFire => "Reconyx HyperFire Makernote",
            Vendor::ReconyxUltraFire => "Reconyx UltraFire Makernote",
            Vendor::Ricoh => "Ricoh Makernote",
            Vendor::SamsungType2 => "Samsung Makernote",
            Vendor::Sanyo => "Sanyo Makernote",
            Vendor::Sigma => "Sigma Makernote",
            Vendor::SonyType1 | Vendor::SonyType6 => "Sony Makernote",
        }
    }

    /// A stable snake_case identifier, unique per variant.
    pub fn id(&self) -> &'static str {
        match self {
            Vendor::Apple => "apple",
            Vendor::CasioType1 => "casio_type1",
            Vendor::CasioType2 => "casio_type2",
            Vendor::Kodak => "kodak",
            Vendor::Kyocera => "kyocera",
            Vendor::Leica => "leica",
            Vendor::LeicaType5 => "leica_type5",
            Vendor::NikonType1 => "nikon_type1",
            Vendor::OlympusEquipment => "olympus_equipment",
            Vendor::OlympusFocusInfo => "olympus_focus_info",
            Vendor::OlympusImageProcessing => "olympus_image_processing",
            Vendor::OlympusRawDevelopment => "olympus_raw_development",
            Vendor::OlympusRawDevelopment2 => "olympus_raw_development2",
            Vendor::OlympusRawInfo => "olympus_raw_info",
            Vendor::PanasonicRawDistortion => "panasonic_raw_distortion",
            Vendor::PanasonicRawWbInfo => "panasonic_raw_wb_info",
            Vendor::PanasonicRawWbInfo2 => "panasonic_raw_wb_info2",
            Vendor::Pentax => "pentax",
            Vendor::ReconyxHyperFire => "reconyx_hyperfire",
            Vendor::ReconyxUltraFire => "reconyx_ultrafire",
            Vendor::Ricoh => "ricoh",
            Vendor::SamsungType2 => "samsung_type2",
            Vendor::Sanyo => "sanyo",
            Vendor::Sigma => "sigma",
            Vendor::SonyType1 => "sony_type1",
            Vendor::SonyType6 => "sony_type6",
        }
    }

    /// Looks up the display name of a tag. `None` means the tag is not part of this layout.
    pub fn name_of(&self, tag: u16) -> Option<&'static str> {
        self.namespace()
            .iter()
            .find(|x| x.tag == tag)
            .map(|x| x.display_name)
    }
}

impl Display for Vendor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("No makernote layout named '{0}' known")]
pub struct UnknownVendor(pub String);

impl FromStr for Vendor {
    type Err = UnknownVendor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vendor::ALL
            .into_iter()
            .find(|vendor| vendor.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVendor(s.to_string()))
    }
}

/// A data structure describing one specific tag (2 byte key) that can appear in a makernote
/// directory.
///
/// `name` is the identifier used in code and in the YAML representation, `display_name` is what
/// users get to see.
#[derive(Derivative, Debug, Copy, Clone)]
#[derivative(PartialEq, Eq, Hash)]
pub struct MakernoteTagDescriptor {
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub name: &'static str,
    pub tag: u16,
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub display_name: &'static str,
}

impl MakernoteTagDescriptor {
    pub fn as_maybe(&self) -> MaybeKnownTag {
        MaybeKnownTag::Known(*self)
    }
}

impl From<MakernoteTagDescriptor> for MaybeKnownTag {
    fn from(x: MakernoteTagDescriptor) -> Self {
        MaybeKnownTag::Known(x)
    }
}

/// Represents a 2-byte makernote key, that is either known or unknown
#[derive(Clone, Eq, Copy)]
pub enum MaybeKnownTag {
    Known(MakernoteTagDescriptor),
    Unknown(u16),
}

impl MaybeKnownTag {
    pub fn from_number(tag: u16, vendor: Vendor) -> Self {
        if let Some(descriptor) = vendor.namespace().iter().find(|x| x.tag == tag) {
            Self::Known(*descriptor)
        } else {
            Self::Unknown(tag)
        }
    }

    pub fn from_name(name: &str, vendor: Vendor) -> Result<Self, String> {
        if let Some(descriptor) = vendor.namespace().iter().find(|x| x.name == name) {
            Ok(Self::Known(*descriptor))
        } else {
            Err(format!("No Tag named '{}' known for {}", name, vendor.id()))
        }
    }

    pub fn known_name(&self) -> Option<&'static str> {
        match self {
            Self::Known(descriptor) => Some(descriptor.name),
            Self::Unknown(_) => None,
        }
    }

    /// The human readable name, falling back to `Unknown tag (0x....)` for unknown keys.
    pub fn display_name(&self) -> String {
        match self {
            Self::Known(descriptor) => descriptor.display_name.to_string(),
            Self::Unknown(tag) => format!("Unknown tag ({tag:#06x})"),
        }
    }
}

impl From<MaybeKnownTag> for u16 {
    fn from(value: MaybeKnownTag) -> Self {
        match value {
            MaybeKnownTag::Known(descriptor) => descriptor.tag,
            MaybeKnownTag::Unknown(tag) => tag,
        }
    }
}

impl Display for MaybeKnownTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self {
            MaybeKnownTag::Known(tag) => Display::fmt(&tag.name, f),
            MaybeKnownTag::Unknown(tag) => f.write_fmt(format_args!("{:#06X}", &tag)),
        }
    }
}

impl Debug for MaybeKnownTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self) // call method from Display
    }
}

impl PartialEq for MaybeKnownTag {
    fn eq(&self, other: &Self) -> bool {
        u16::from(*self) == (*other).into()
    }
}
