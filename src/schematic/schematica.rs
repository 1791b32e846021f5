//! Schematica / MCEdit (`.schematic`) schematics: a single box of legacy
//! numeric block ids with 4-bit metadata.

use super::{Schematic, SchematicMetadata, list_len, name_from_file};
use crate::base::constants::{SCHEMATICA_DISPLAY_NAME, keys};
use crate::base::{BlockPos, BlockSize};
use crate::nbt::{Compound, TagType};
use std::any::Any;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default)]
pub struct SchematicaSchematic {
    file: Option<PathBuf>,
    metadata: SchematicMetadata,
    size: BlockSize,
    materials: Option<String>,
    block_ids: Vec<u16>,
    block_data: Vec<u8>,
    has_block_mapping: bool,
    entity_count: usize,
    tile_entity_count: usize,
}

impl SchematicaSchematic {
    pub fn size(&self) -> BlockSize {
        self.size
    }

    /// The `Materials` tag, normally `"Alpha"`
    pub fn materials(&self) -> Option<&str> {
        self.materials.as_deref()
    }

    /// True if the file carries an id-to-name block mapping
    pub fn has_block_mapping(&self) -> bool {
        self.has_block_mapping
    }

    pub fn entity_count(&self) -> usize {
        self.entity_count
    }

    pub fn tile_entity_count(&self) -> usize {
        self.tile_entity_count
    }

    /// Legacy block id and metadata at `pos`, if inside the schematic
    pub fn block_at(&self, pos: BlockPos) -> Option<(u16, u8)> {
        let index = self.index_of(pos)?;
        Some((*self.block_ids.get(index)?, *self.block_data.get(index)? & 0x0f))
    }

    fn index_of(&self, pos: BlockPos) -> Option<usize> {
        let BlockSize { x: w, y: h, z: l } = self.size;
        if !(0..w).contains(&pos.x) || !(0..h).contains(&pos.y) || !(0..l).contains(&pos.z) {
            return None;
        }
        // Layout is YZX: x varies fastest
        Some(((pos.y as usize * l as usize) + pos.z as usize) * w as usize + pos.x as usize)
    }

    fn clear(&mut self) {
        let file = self.file.take();
        *self = Self {
            file,
            ..Self::default()
        };
    }

    fn read(&mut self, tag: &Compound) -> Option<()> {
        let size = read_size(tag)?;
        let total_volume = size.volume()?;
        let volume = usize::try_from(total_volume).ok()?;
        let blocks = tag.get_byte_array(keys::BLOCKS)?;
        let data = tag.get_byte_array(keys::DATA)?;
        if blocks.len() < volume || data.len() < volume {
            debug!(
                volume,
                blocks = blocks.len(),
                data = data.len(),
                "Schematica block arrays shorter than volume"
            );
            return None;
        }

        let add = tag.get_byte_array(keys::ADD_BLOCKS);
        if add.is_some_and(|add| add.len() < volume.div_ceil(2)) {
            debug!("Schematica AddBlocks array shorter than volume");
            return None;
        }

        let block_ids: Vec<u16> = (0..volume)
            .map(|i| {
                let high = add.map_or(0, |add| {
                    // Two ids per byte, even indices in the high nibble
                    let shift = if i & 1 == 0 { 4 } else { 0 };
                    u16::from((add[i >> 1] >> shift) & 0x0f)
                });
                (high << 8) | u16::from(blocks[i])
            })
            .collect();

        self.metadata = SchematicMetadata {
            name: name_from_file(self.file.as_deref()),
            enclosing_size: size,
            region_count: 1,
            total_volume,
            total_blocks: block_ids.iter().filter(|&&id| id != 0).count() as i64,
            ..SchematicMetadata::default()
        };
        self.size = size;
        self.materials = tag.get_string(keys::MATERIALS).map(str::to_string);
        self.block_ids = block_ids;
        self.block_data = data[..volume].to_vec();
        self.has_block_mapping = tag.contains_key_of(keys::SCHEMATICA_MAPPING, TagType::Compound);
        self.entity_count = list_len(tag, keys::ENTITIES);
        self.tile_entity_count = list_len(tag, keys::TILE_ENTITIES);
        Some(())
    }
}

fn read_size(tag: &Compound) -> Option<BlockSize> {
    let size = BlockSize::new(
        i32::from(tag.get_short(keys::WIDTH)?),
        i32::from(tag.get_short(keys::HEIGHT)?),
        i32::from(tag.get_short(keys::LENGTH)?),
    );
    size.is_positive().then_some(size)
}

impl Schematic for SchematicaSchematic {
    fn new(file: Option<&Path>) -> Self {
        Self {
            file: file.map(Path::to_path_buf),
            ..Self::default()
        }
    }

    fn is_valid_schematic(tag: &Compound) -> bool {
        tag.contains_key_of(keys::BLOCKS, TagType::ByteArray)
            && tag.contains_key_of(keys::DATA, TagType::ByteArray)
            && read_size(tag).is_some()
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
        SCHEMATICA_DISPLAY_NAME
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
