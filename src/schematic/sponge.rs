//! Sponge (`.schem`) schematics, versions 1 to 3: a single box of blocks
//! indexed into a named block-state palette.
//!
//! ```text
//! v1/v2                     v3
//! root                      root
//! ├── Version               └── Schematic
//! ├── Width/Height/Length       ├── Version = 3
//! ├── Palette                   ├── Width/Height/Length
//! └── BlockData (varints)       └── Blocks
//!                                   ├── Palette
//!                                   └── Data (varints)
//! ```

use super::{Schematic, SchematicMetadata, list_len, name_from_file};
use crate::base::constants::{
    AIR_BLOCK, SPONGE_DISPLAY_NAME, SPONGE_MAX_VERSION, SPONGE_MIN_VERSION, keys,
};
use crate::base::{BlockPos, BlockSize};
use crate::nbt::Compound;
use indexmap::IndexMap;
use std::any::Any;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default)]
pub struct SpongeSchematic {
    file: Option<PathBuf>,
    metadata: SchematicMetadata,
    version: i32,
    data_version: Option<i32>,
    size: BlockSize,
    offset: BlockPos,
    palette: IndexMap<u32, String>,
    blocks: Vec<u32>,
    entity_count: usize,
    block_entity_count: usize,
}

/// Where the interesting parts of a Sponge document live, by version.
struct Layout<'a> {
    body: &'a Compound,
    version: i32,
    palette: &'a Compound,
    block_data: &'a [u8],
    block_entities: usize,
}

impl<'a> Layout<'a> {
    fn of(tag: &'a Compound) -> Option<Self> {
        if let Some(body) = tag.get_compound(keys::SCHEMATIC) {
            let version = body.get_int(keys::VERSION)?;
            if version != 3 {
                return None;
            }
            let blocks = body.get_compound(keys::BLOCKS)?;
            return Some(Self {
                body,
                version,
                palette: blocks.get_compound(keys::PALETTE)?,
                block_data: blocks.get_byte_array(keys::DATA)?,
                block_entities: list_len(blocks, keys::BLOCK_ENTITIES),
            });
        }

        let version = tag.get_int(keys::VERSION)?;
        let block_entities = if version == 1 {
            list_len(tag, keys::TILE_ENTITIES)
        } else {
            list_len(tag, keys::BLOCK_ENTITIES)
        };
        Some(Self {
            body: tag,
            version,
            palette: tag.get_compound(keys::PALETTE)?,
            block_data: tag.get_byte_array(keys::BLOCK_DATA)?,
            block_entities,
        })
    }
}

impl SpongeSchematic {
    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn data_version(&self) -> Option<i32> {
        self.data_version
    }

    pub fn size(&self) -> BlockSize {
        self.size
    }

    /// Placement offset of the schematic origin
    pub fn offset(&self) -> BlockPos {
        self.offset
    }

    /// Palette ids to block-state strings, in file order
    pub fn palette(&self) -> &IndexMap<u32, String> {
        &self.palette
    }

    pub fn entity_count(&self) -> usize {
        self.entity_count
    }

    pub fn block_entity_count(&self) -> usize {
        self.block_entity_count
    }

    /// Block state at `pos`, if inside the schematic
    pub fn block_at(&self, pos: BlockPos) -> Option<&str> {
        let BlockSize { x: w, y: h, z: l } = self.size;
        if !(0..w).contains(&pos.x) || !(0..h).contains(&pos.y) || !(0..l).contains(&pos.z) {
            return None;
        }
        let index = ((pos.y as usize * l as usize) + pos.z as usize) * w as usize + pos.x as usize;
        let id = self.blocks.get(index)?;
        self.palette.get(id).map(String::as_str)
    }

    fn clear(&mut self) {
        let file = self.file.take();
        *self = Self {
            file,
            ..Self::default()
        };
    }

    fn read(&mut self, tag: &Compound) -> Option<()> {
        let layout = Layout::of(tag)?;
        if !(SPONGE_MIN_VERSION..=SPONGE_MAX_VERSION).contains(&layout.version) {
            debug!(version = layout.version, "unsupported Sponge schematic version");
            return None;
        }
        let body = layout.body;
        let size = read_size(body)?;
        let total_volume = size.volume()?;
        let volume = usize::try_from(total_volume).ok()?;

        let mut palette = IndexMap::with_capacity(layout.palette.len());
        for (state, id) in layout.palette.iter() {
            let id = id.as_i64().and_then(|id| u32::try_from(id).ok())?;
            palette.insert(id, state.to_string());
        }

        let Some(blocks) = decode_varints(layout.block_data, volume) else {
            debug!(volume, "Sponge block data does not hold one varint per block");
            return None;
        };
        if let Some(id) = blocks.iter().find(|id| !palette.contains_key(*id)) {
            debug!(id, "Sponge block data references a missing palette entry");
            return None;
        }

        let meta = body.get_compound(keys::METADATA);
        let text = |key: &str| {
            meta.and_then(|m| m.get_string(key))
                .map(str::to_string)
        };
        self.metadata = SchematicMetadata {
            name: text(keys::NAME).unwrap_or_else(|| name_from_file(self.file.as_deref())),
            author: text(keys::AUTHOR).unwrap_or_default(),
            enclosing_size: size,
            region_count: 1,
            total_volume,
            total_blocks: blocks
                .iter()
                .filter(|id| palette.get(*id).is_some_and(|s| s != AIR_BLOCK))
                .count() as i64,
            time_created: meta.and_then(|m| m.get_numeric(keys::DATE)).unwrap_or(0),
            ..SchematicMetadata::default()
        };
        self.version = layout.version;
        self.data_version = body.get_int(keys::DATA_VERSION_SPONGE);
        self.size = size;
        self.offset = match body.get_int_array(keys::OFFSET) {
            Some(&[x, y, z]) => BlockPos::new(x, y, z),
            _ => BlockPos::ORIGIN,
        };
        self.palette = palette;
        self.blocks = blocks;
        self.entity_count = list_len(body, keys::ENTITIES);
        self.block_entity_count = layout.block_entities;
        Some(())
    }
}

/// Sizes are stored as shorts but meant as unsigned.
fn read_size(body: &Compound) -> Option<BlockSize> {
    let dim = |key: &str| body.get_numeric(key).map(|v| (v & 0xffff) as i32);
    let size = BlockSize::new(dim(keys::WIDTH)?, dim(keys::HEIGHT)?, dim(keys::LENGTH)?);
    size.is_positive().then_some(size)
}

/// Decode exactly `expected` unsigned LEB128 varints of at most 32 bits.
fn decode_varints(bytes: &[u8], expected: usize) -> Option<Vec<u32>> {
    let mut values = Vec::with_capacity(expected.min(bytes.len()));
    let mut value = 0u32;
    let mut shift = 0u32;
    for &byte in bytes {
        // Fifth byte may only carry the top four bits
        if shift == 28 && byte & 0x70 != 0 {
            return None;
        }
        value |= u32::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            if values.len() == expected {
                return None;
            }
            values.push(value);
            value = 0;
            shift = 0;
        } else {
            shift += 7;
            if shift > 28 {
                return None;
            }
        }
    }
    (shift == 0 && values.len() == expected).then_some(values)
}

impl Schematic for SpongeSchematic {
    fn new(file: Option<&Path>) -> Self {
        Self {
            file: file.map(Path::to_path_buf),
            ..Self::default()
        }
    }

    fn is_valid_schematic(tag: &Compound) -> bool {
        Layout::of(tag).is_some_and(|layout| {
            let body = layout.body;
            body.contains_numeric(keys::WIDTH)
                && body.contains_numeric(keys::HEIGHT)
                && body.contains_numeric(keys::LENGTH)
                && read_size(body).is_some()
        })
    }

    fn from_tag(&mut self, tag: &Compound) -> bool {
        self.clear();
        if !Self::is_valid_schematic(tag) {
            return false;
        }
        if self.read(tag).is_none() {
            self.clear();
            return false;
        }
        true
    }

    fn format_name(&self) -> &'static str {
        SPONGE_DISPLAY_NAME
    }

    fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    fn metadata(&self) -> &SchematicMetadata {
        &self.metadata
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
