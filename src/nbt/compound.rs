//! Insertion-ordered compound tag with typed accessors.

use super::{Tag, TagType};
use indexmap::IndexMap;

/// A compound tag: named child tags in insertion order.
///
/// Typed getters return `None` both when the key is missing and when it
/// holds a different tag type, so validators can probe arbitrary trees
/// without failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
    entries: IndexMap<String, Tag>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for assembling trees inline.
    pub fn with(mut self, key: impl Into<String>, tag: impl Into<Tag>) -> Self {
        self.entries.insert(key.into(), tag.into());
        self
    }

    /// Insert a tag, returning the previous value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, tag: impl Into<Tag>) -> Option<Tag> {
        self.entries.insert(key.into(), tag.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.entries.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True if `key` exists and holds a tag of type `ty`
    pub fn contains_key_of(&self, key: &str, ty: TagType) -> bool {
        self.get(key).is_some_and(|tag| tag.tag_type() == ty)
    }

    /// True if `key` exists and holds any scalar number
    pub fn contains_numeric(&self, key: &str) -> bool {
        self.get(key).is_some_and(|tag| tag.tag_type().is_numeric())
    }

    pub fn get_byte(&self, key: &str) -> Option<i8> {
        match self.get(key)? {
            Tag::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_short(&self, key: &str) -> Option<i16> {
        match self.get(key)? {
            Tag::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.get(key)? {
            Tag::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_long(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Tag::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Any numeric tag under `key`, widened to `i64`
    pub fn get_numeric(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_i64()
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    pub fn get_compound(&self, key: &str) -> Option<&Compound> {
        self.get(key)?.as_compound()
    }

    pub fn get_list(&self, key: &str) -> Option<&[Tag]> {
        match self.get(key)? {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_byte_array(&self, key: &str) -> Option<&[u8]> {
        match self.get(key)? {
            Tag::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_int_array(&self, key: &str) -> Option<&[i32]> {
        match self.get(key)? {
            Tag::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_long_array(&self, key: &str) -> Option<&[i64]> {
        match self.get(key)? {
            Tag::LongArray(v) => Some(v),
            _ => None,
        }
    }
}

impl FromIterator<(String, Tag)> for Compound {
    fn from_iter<I: IntoIterator<Item = (String, Tag)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
