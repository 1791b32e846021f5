//! Binary tag-tree decoding.

use super::{Compound, NbtError, Tag, TagType};
use crate::base::constants::DEFAULT_MAX_DEPTH;
use flate2::read::GzDecoder;
use std::io::Read;
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Upper bound on speculative preallocation for array payloads.
const PREALLOC_LIMIT: usize = 4096;

/// Options controlling how tag trees are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Maximum nesting of lists and compounds below the root.
    pub max_depth: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Read and decode the tag tree stored at `path`.
pub fn read_file(path: &Path, options: &ReadOptions) -> Result<Compound, NbtError> {
    let bytes = std::fs::read(path)?;
    read_compound(&bytes, options)
}

/// Decode a tag tree, discarding the root name.
pub fn read_compound(bytes: &[u8], options: &ReadOptions) -> Result<Compound, NbtError> {
    read_named(bytes, options).map(|(_, root)| root)
}

/// Decode a tag tree, returning the root name alongside the root compound.
///
/// Gzip input is inflated first; anything else is read as raw NBT.
pub fn read_named(bytes: &[u8], options: &ReadOptions) -> Result<(String, Compound), NbtError> {
    if bytes.starts_with(&GZIP_MAGIC) {
        TagReader::new(GzDecoder::new(bytes), options.max_depth).read_root()
    } else {
        TagReader::new(bytes, options.max_depth).read_root()
    }
}

struct TagReader<R> {
    inner: R,
    max_depth: usize,
}

impl<R: Read> TagReader<R> {
    fn new(inner: R, max_depth: usize) -> Self {
        Self { inner, max_depth }
    }

    fn read_root(&mut self) -> Result<(String, Compound), NbtError> {
        let ty = self.read_type()?;
        if ty != TagType::Compound {
            return Err(NbtError::RootNotCompound(ty));
        }
        let name = self.read_string()?;
        let root = self.read_compound(0)?;
        Ok((name, root))
    }

    fn read_type(&mut self) -> Result<TagType, NbtError> {
        let id = self.read_u8()?;
        TagType::from_id(id).ok_or(NbtError::UnknownTagType(id))
    }

    fn read_payload(&mut self, ty: TagType, depth: usize) -> Result<Tag, NbtError> {
        let tag = match ty {
            TagType::End => return Err(NbtError::UnknownTagType(0)),
            TagType::Byte => Tag::Byte(self.read_u8()? as i8),
            TagType::Short => Tag::Short(i16::from_be_bytes(self.read_array()?)),
            TagType::Int => Tag::Int(self.read_i32()?),
            TagType::Long => Tag::Long(i64::from_be_bytes(self.read_array()?)),
            TagType::Float => Tag::Float(f32::from_be_bytes(self.read_array()?)),
            TagType::Double => Tag::Double(f64::from_be_bytes(self.read_array()?)),
            TagType::ByteArray => {
                let len = self.read_len()?;
                let mut bytes = Vec::with_capacity(len.min(PREALLOC_LIMIT));
                (&mut self.inner).take(len as u64).read_to_end(&mut bytes)?;
                if bytes.len() != len {
                    return Err(unexpected_eof());
                }
                Tag::ByteArray(bytes)
            }
            TagType::String => Tag::String(self.read_string()?),
            TagType::List => Tag::List(self.read_list(depth + 1)?),
            TagType::Compound => Tag::Compound(self.read_compound(depth + 1)?),
            TagType::IntArray => {
                let len = self.read_len()?;
                let mut values = Vec::with_capacity(len.min(PREALLOC_LIMIT));
                for _ in 0..len {
                    values.push(self.read_i32()?);
                }
                Tag::IntArray(values)
            }
            TagType::LongArray => {
                let len = self.read_len()?;
                let mut values = Vec::with_capacity(len.min(PREALLOC_LIMIT));
                for _ in 0..len {
                    values.push(i64::from_be_bytes(self.read_array()?));
                }
                Tag::LongArray(values)
            }
        };
        Ok(tag)
    }

    fn read_list(&mut self, depth: usize) -> Result<Vec<Tag>, NbtError> {
        self.check_depth(depth)?;
        let ty = self.read_type()?;
        let raw_len = self.read_i32()?;
        if raw_len < 0 {
            return Err(NbtError::NegativeLength(raw_len));
        }
        if ty == TagType::End {
            return if raw_len == 0 {
                Ok(Vec::new())
            } else {
                Err(NbtError::UntypedList(raw_len))
            };
        }
        let len = raw_len as usize;
        let mut items = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            items.push(self.read_payload(ty, depth)?);
        }
        Ok(items)
    }

    fn read_compound(&mut self, depth: usize) -> Result<Compound, NbtError> {
        self.check_depth(depth)?;
        let mut compound = Compound::new();
        loop {
            let ty = self.read_type()?;
            if ty == TagType::End {
                return Ok(compound);
            }
            let name = self.read_string()?;
            let tag = self.read_payload(ty, depth)?;
            compound.insert(name, tag);
        }
    }

    fn check_depth(&self, depth: usize) -> Result<(), NbtError> {
        if depth > self.max_depth {
            return Err(NbtError::TooDeep(self.max_depth));
        }
        Ok(())
    }

    fn read_string(&mut self) -> Result<String, NbtError> {
        let len = u16::from_be_bytes(self.read_array()?) as usize;
        let mut buf = vec![0u8; len];
        self.inner.read_exact(&mut buf)?;
        // Java writes modified UTF-8; the rare non-standard sequences are replaced
        Ok(String::from_utf8(buf)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()))
    }

    fn read_len(&mut self) -> Result<usize, NbtError> {
        let len = self.read_i32()?;
        if len < 0 {
            return Err(NbtError::NegativeLength(len));
        }
        Ok(len as usize)
    }

    fn read_u8(&mut self) -> Result<u8, NbtError> {
        Ok(self.read_array::<1>()?[0])
    }

    fn read_i32(&mut self) -> Result<i32, NbtError> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], NbtError> {
        let mut buf = [0u8; N];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }
}

fn unexpected_eof() -> NbtError {
    NbtError::Io(std::io::Error::from(std::io::ErrorKind::UnexpectedEof))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Raw bytes of a root compound named "" holding a single `Int`
    fn single_int_document(value: i32) -> Vec<u8> {
        let mut bytes = vec![10, 0, 0, 3, 0, 1, b'v'];
        bytes.extend_from_slice(&value.to_be_bytes());
        bytes.push(0);
        bytes
    }

    #[test]
    fn reads_raw_document() {
        let root = read_compound(&single_int_document(42), &ReadOptions::default()).unwrap();
        assert_eq!(root.get_int("v"), Some(42));
    }

    #[test]
    fn rejects_non_compound_root() {
        let err = read_compound(&[3, 0, 0, 0, 0, 0, 1], &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, NbtError::RootNotCompound(TagType::Int)));
    }

    #[test]
    fn rejects_unknown_tag_id() {
        let err = read_compound(&[10, 0, 0, 42, 0, 0], &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, NbtError::UnknownTagType(42)));
    }

    #[test]
    fn rejects_truncated_input() {
        let mut bytes = single_int_document(1);
        bytes.truncate(bytes.len() - 3);
        let err = read_compound(&bytes, &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, NbtError::Io(_)));
    }

    #[test]
    fn rejects_negative_array_length() {
        let mut bytes = vec![10, 0, 0, 7, 0, 1, b'a'];
        bytes.extend_from_slice(&(-1i32).to_be_bytes());
        let err = read_compound(&bytes, &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, NbtError::NegativeLength(-1)));
    }

    #[test]
    fn rejects_byte_array_longer_than_input() {
        let mut bytes = vec![10, 0, 0, 7, 0, 1, b'a'];
        bytes.extend_from_slice(&1_000_000i32.to_be_bytes());
        bytes.extend_from_slice(&[1, 2, 3]);
        let err = read_compound(&bytes, &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, NbtError::Io(_)));
    }

    #[test]
    fn rejects_untyped_non_empty_list() {
        let mut bytes = vec![10, 0, 0, 9, 0, 1, b'l', 0];
        bytes.extend_from_slice(&2i32.to_be_bytes());
        let err = read_compound(&bytes, &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, NbtError::UntypedList(2)));
    }

    #[test]
    fn enforces_depth_limit() {
        // root -> c -> c -> c
        let mut bytes = vec![10, 0, 0];
        for _ in 0..3 {
            bytes.extend_from_slice(&[10, 0, 1, b'c']);
        }
        bytes.extend_from_slice(&[0, 0, 0, 0]);

        let shallow = ReadOptions { max_depth: 2 };
        assert!(matches!(
            read_compound(&bytes, &shallow),
            Err(NbtError::TooDeep(2))
        ));
        assert!(read_compound(&bytes, &ReadOptions::default()).is_ok());
    }
}
