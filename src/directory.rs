use crate::accessor::ValueAccessor;
use crate::tags::{MaybeKnownTag, Vendor};
use crate::value::TagValue;
use tracing::trace;

/// The decoded values of one makernote block, in the order they were read.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    pub entries: Vec<DirectoryEntry>,
    pub vendor: Vendor,
}
impl Directory {
    pub fn new(vendor: Vendor) -> Self {
        Self {
            entries: Vec::new(),
            vendor,
        }
    }
    /// Adds a value. A value already stored under the same tag is replaced in place.
    pub fn insert(&mut self, tag: u16, value: TagValue) {
        let tag = MaybeKnownTag::from_number(tag, self.vendor);
        if let Some(existing) = self.entries.iter_mut().find(|x| x.tag == tag) {
            trace!(%tag, vendor = self.vendor.id(), "replacing existing entry");
            existing.value = value;
        } else {
            self.entries.push(DirectoryEntry { tag, value })
        }
    }
    pub fn entry(&self, tag: u16) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|x| u16::from(x.tag) == tag)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display name of the tag, or the generic `Unknown tag (0x....)` name.
    pub fn tag_name(&self, tag: u16) -> String {
        MaybeKnownTag::from_number(tag, self.vendor).display_name()
    }
    pub fn description(&self, tag: u16) -> Option<String> {
        self.vendor.describe(tag, self)
    }
    /// `(name, description)` for every entry in insertion order. Entries without a description
    /// show their raw value.
    pub fn describe_all(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|entry| {
                let tag = u16::from(entry.tag);
                let description = self
                    .description(tag)
                    .unwrap_or_else(|| entry.value.to_string());
                (entry.tag.display_name(), description)
            })
            .collect()
    }
}
impl ValueAccessor for Directory {
    fn value(&self, tag: u16) -> Option<&TagValue> {
        self.entry(tag).map(|x| &x.value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectoryEntry {
    pub tag: MaybeKnownTag,
    pub value: TagValue,
}
impl From<DirectoryEntry> for TagValue {
    fn from(entry: DirectoryEntry) -> Self {
        entry.value
    }
}
