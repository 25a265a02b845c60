//! Tag dictionaries for the manufacturer specific "makernote" blocks found inside EXIF metadata.
//!
//! For every supported makernote layout ([Vendor]) this crate knows the tag ids, their names and
//! how to turn a decoded value into a human readable description:
//!
//! ```
//! use makernote::{Directory, TagValue, Vendor};
//! use makernote::tags::casio_type1;
//!
//! let mut directory = Directory::new(Vendor::CasioType1);
//! directory.insert(casio_type1::FlashMode, TagValue::Short(4));
//! assert_eq!(directory.description(casio_type1::FlashMode), Some("Red eye reduction".to_string()));
//! ```

pub mod accessor;
pub(crate) mod describe;
pub mod directory;
pub mod makernotes;
pub mod tags;
pub mod value;

#[cfg(feature = "yaml")]
pub mod yaml;

pub use accessor::ValueAccessor;
pub use directory::{Directory, DirectoryEntry};
pub use tags::{MakernoteTagDescriptor, MaybeKnownTag, UnknownVendor, Vendor};
pub use value::{Rational, TagValue, TagValueType};
