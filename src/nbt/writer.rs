//! Binary tag-tree encoding.

use super::{Compound, NbtError, Tag, TagType};
use flate2::write::GzEncoder;
use std::io::Write;
use std::path::Path;

/// Container compression applied when writing a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Gzip, as written by the game and by schematic editors
    #[default]
    Gzip,
    /// Raw, uncompressed NBT
    None,
}

/// Encode `root` as an uncompressed document with the given root name.
pub fn write_compound(root: &Compound, name: &str) -> Result<Vec<u8>, NbtError> {
    let mut writer = TagWriter { inner: Vec::new() };
    writer.write_root(root, name)?;
    Ok(writer.inner)
}

/// Encode `root` and write it to `path`.
pub fn write_file(path: &Path, root: &Compound, compression: Compression) -> Result<(), NbtError> {
    let raw = write_compound(root, "")?;
    let bytes = match compression {
        Compression::None => raw,
        Compression::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
            encoder.write_all(&raw)?;
            encoder.finish()?
        }
    };
    std::fs::write(path, bytes)?;
    Ok(())
}

struct TagWriter<W> {
    inner: W,
}

impl<W: Write> TagWriter<W> {
    fn write_root(&mut self, root: &Compound, name: &str) -> Result<(), NbtError> {
        self.inner.write_all(&[TagType::Compound.id()])?;
        self.write_string(name)?;
        self.write_compound(root)
    }

    fn write_payload(&mut self, tag: &Tag) -> Result<(), NbtError> {
        match tag {
            Tag::Byte(v) => self.inner.write_all(&v.to_be_bytes())?,
            Tag::Short(v) => self.inner.write_all(&v.to_be_bytes())?,
            Tag::Int(v) => self.inner.write_all(&v.to_be_bytes())?,
            Tag::Long(v) => self.inner.write_all(&v.to_be_bytes())?,
            Tag::Float(v) => self.inner.write_all(&v.to_be_bytes())?,
            Tag::Double(v) => self.inner.write_all(&v.to_be_bytes())?,
            Tag::ByteArray(bytes) => {
                self.write_len("Byte array", bytes.len())?;
                self.inner.write_all(bytes)?;
            }
            Tag::String(s) => self.write_string(s)?,
            Tag::List(items) => self.write_list(items)?,
            Tag::Compound(c) => self.write_compound(c)?,
            Tag::IntArray(values) => {
                self.write_len("Int array", values.len())?;
                for v in values {
                    self.inner.write_all(&v.to_be_bytes())?;
                }
            }
            Tag::LongArray(values) => {
                self.write_len("Long array", values.len())?;
                for v in values {
                    self.inner.write_all(&v.to_be_bytes())?;
                }
            }
        }
        Ok(())
    }

    fn write_list(&mut self, items: &[Tag]) -> Result<(), NbtError> {
        let element_type = items.first().map_or(TagType::End, Tag::tag_type);
        if let Some(odd) = items.iter().find(|t| t.tag_type() != element_type) {
            return Err(NbtError::HeterogeneousList {
                expected: element_type,
                found: odd.tag_type(),
            });
        }
        self.inner.write_all(&[element_type.id()])?;
        self.write_len("List", items.len())?;
        for item in items {
            self.write_payload(item)?;
        }
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound) -> Result<(), NbtError> {
        for (name, tag) in compound.iter() {
            self.inner.write_all(&[tag.tag_type().id()])?;
            self.write_string(name)?;
            self.write_payload(tag)?;
        }
        self.inner.write_all(&[TagType::End.id()])?;
        Ok(())
    }

    fn write_string(&mut self, s: &str) -> Result<(), NbtError> {
        let len = u16::try_from(s.len()).map_err(|_| NbtError::TooLong {
            kind: "String",
            len: s.len(),
        })?;
        self.inner.write_all(&len.to_be_bytes())?;
        self.inner.write_all(s.as_bytes())?;
        Ok(())
    }

    fn write_len(&mut self, kind: &'static str, len: usize) -> Result<(), NbtError> {
        let len = i32::try_from(len).map_err(|_| NbtError::TooLong { kind, len })?;
        self.inner.write_all(&len.to_be_bytes())?;
        Ok(())
    }
}
