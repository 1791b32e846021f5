//! Litematica (`.litematic`) schematics: named metadata plus any number of
//! independently positioned sub-regions.

use super::{Schematic, SchematicMetadata, list_len, read_xyz};
use crate::base::constants::{LITEMATICA_DISPLAY_NAME, LITEMATICA_MAX_VERSION, keys};
use crate::base::{BlockPos, BlockSize};
use crate::nbt::{Compound, TagType};
use std::any::Any;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Summary of one sub-region of a Litematica schematic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionInfo {
    pub name: String,
    /// Origin relative to the schematic origin
    pub position: BlockPos,
    /// Signed extent from `position`
    pub size: BlockSize,
    pub palette_size: usize,
    pub entity_count: usize,
    pub tile_entity_count: usize,
}

#[derive(Debug, Default)]
pub struct LitematicaSchematic {
    file: Option<PathBuf>,
    metadata: SchematicMetadata,
    version: i32,
    data_version: Option<i32>,
    regions: Vec<RegionInfo>,
}

impl LitematicaSchematic {
    /// Container version of the loaded document, zero when empty
    pub fn version(&self) -> i32 {
        self.version
    }

    /// Game data version the schematic was saved with, if recorded
    pub fn data_version(&self) -> Option<i32> {
        self.data_version
    }

    pub fn regions(&self) -> &[RegionInfo] {
        &self.regions
    }

    pub fn region(&self, name: &str) -> Option<&RegionInfo> {
        self.regions.iter().find(|r| r.name == name)
    }

    fn clear(&mut self) {
        self.metadata = SchematicMetadata::default();
        self.version = 0;
        self.data_version = None;
        self.regions.clear();
    }

    fn read(&mut self, tag: &Compound) -> Option<()> {
        let version = tag.get_int(keys::VERSION)?;
        if !(1..=LITEMATICA_MAX_VERSION).contains(&version) {
            debug!(version, "unsupported Litematica schematic version");
            return None;
        }

        let mut regions = Vec::new();
        for (name, region) in tag.get_compound(keys::REGIONS)?.iter() {
            let Some(info) = region.as_compound().and_then(|r| read_region(name, r)) else {
                debug!(region = name, "malformed Litematica region");
                return None;
            };
            regions.push(info);
        }

        self.version = version;
        self.data_version = tag.get_int(keys::DATA_VERSION);
        self.metadata = read_metadata(tag.get_compound(keys::METADATA)?, &regions)?;
        self.regions = regions;
        Some(())
    }
}

fn read_region(name: &str, tag: &Compound) -> Option<RegionInfo> {
    let position = read_xyz(tag.get_compound(keys::POSITION)?)?;
    let size = read_xyz(tag.get_compound(keys::SIZE)?)?;
    let size = BlockSize::new(size.x, size.y, size.z);
    if size.is_empty() {
        return None;
    }
    size.volume()?;

    Some(RegionInfo {
        name: name.to_string(),
        position,
        size,
        palette_size: list_len(tag, keys::BLOCK_STATE_PALETTE),
        entity_count: list_len(tag, keys::ENTITIES),
        tile_entity_count: list_len(tag, keys::TILE_ENTITIES),
    })
}

fn read_metadata(tag: &Compound, regions: &[RegionInfo]) -> Option<SchematicMetadata> {
    let text = |key: &str| tag.get_string(key).unwrap_or_default().to_string();
    let enclosing_size = tag
        .get_compound(keys::ENCLOSING_SIZE)
        .and_then(read_xyz)
        .map_or_else(BlockSize::default, |p| BlockSize::new(p.x, p.y, p.z));

    let total_volume = match tag.get_numeric(keys::TOTAL_VOLUME) {
        Some(volume) => volume,
        None => regions
            .iter()
            .try_fold(0i64, |sum, r| sum.checked_add(r.size.volume()?))?,
    };

    Some(SchematicMetadata {
        name: text(keys::NAME),
        author: text(keys::AUTHOR),
        description: text(keys::DESCRIPTION),
        enclosing_size,
        region_count: tag
            .get_numeric(keys::REGION_COUNT)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(regions.len() as u32),
        total_volume,
        total_blocks: tag.get_numeric(keys::TOTAL_BLOCKS).unwrap_or(0),
        time_created: tag.get_numeric(keys::TIME_CREATED).unwrap_or(0),
        time_modified: tag.get_numeric(keys::TIME_MODIFIED).unwrap_or(0),
    })
}

impl Schematic for LitematicaSchematic {
    fn new(file: Option<&Path>) -> Self {
        Self {
            file: file.map(Path::to_path_buf),
            ..Self::default()
        }
    }

    fn is_valid_schematic(tag: &Compound) -> bool {
        tag.contains_key_of(keys::VERSION, TagType::Int)
            && tag.contains_key_of(keys::REGIONS, TagType::Compound)
            && tag.contains_key_of(keys::METADATA, TagType::Compound)
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
        LITEMATICA_DISPLAY_NAME
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nbt::Tag;

    fn xyz(x: i32, y: i32, z: i32) -> Compound {
        Compound::new().with("x", x).with("y", y).with("z", z)
    }

    fn region(size: Compound) -> Compound {
        Compound::new()
            .with(keys::POSITION, xyz(0, 0, 0))
            .with(keys::SIZE, size)
            .with(
                keys::BLOCK_STATE_PALETTE,
                Tag::List(vec![
                    Tag::Compound(Compound::new().with("Name", "minecraft:air")),
                    Tag::Compound(Compound::new().with("Name", "minecraft:stone")),
                ]),
            )
            .with(keys::ENTITIES, Tag::List(Vec::new()))
    }

    fn document(version: i32, regions: Compound) -> Compound {
        Compound::new()
            .with(keys::VERSION, version)
            .with(keys::DATA_VERSION, 3465)
            .with(
                keys::METADATA,
                Compound::new()
                    .with(keys::NAME, "Tower")
                    .with(keys::AUTHOR, "builder")
                    .with(keys::ENCLOSING_SIZE, xyz(3, 10, 3))
                    .with(keys::TOTAL_BLOCKS, 42)
                    .with(keys::TIME_CREATED, 1_700_000_000_000i64),
            )
            .with(keys::REGIONS, regions)
    }

    #[test]
    fn populates_metadata_and_regions() {
        let tag = document(6, Compound::new().with("Main", region(xyz(3, -10, 3))));
        let mut schematic = LitematicaSchematic::new(None);
        assert!(schematic.from_tag(&tag));

        let meta = schematic.metadata();
        assert_eq!(meta.name, "Tower");
        assert_eq!(meta.author, "builder");
        assert_eq!(meta.enclosing_size, BlockSize::new(3, 10, 3));
        assert_eq!(meta.region_count, 1);
        assert_eq!(meta.total_volume, 90);
        assert_eq!(meta.total_blocks, 42);
        assert_eq!(meta.time_created, 1_700_000_000_000);
        assert_eq!(schematic.version(), 6);
        assert_eq!(schematic.data_version(), Some(3465));

        let main = schematic.region("Main").unwrap();
        assert_eq!(main.size, BlockSize::new(3, -10, 3));
        assert_eq!(main.palette_size, 2);
        assert_eq!(main.entity_count, 0);
    }

    #[test]
    fn rejects_unsupported_version() {
        let mut schematic = LitematicaSchematic::new(None);
        let tag = document(LITEMATICA_MAX_VERSION + 1, Compound::new());
        assert!(LitematicaSchematic::is_valid_schematic(&tag));
        assert!(!schematic.from_tag(&tag));
        assert_eq!(schematic.version(), 0);
    }

    #[test]
    fn rejects_region_without_size() {
        let broken = Compound::new().with(keys::POSITION, xyz(0, 0, 0));
        let tag = document(5, Compound::new().with("Broken", broken));
        let mut schematic = LitematicaSchematic::new(None);
        assert!(!schematic.from_tag(&tag));
        assert!(schematic.regions().is_empty());
    }

    #[test]
    fn rejects_zero_sized_region() {
        let tag = document(5, Compound::new().with("Flat", region(xyz(4, 0, 4))));
        assert!(!LitematicaSchematic::new(None).from_tag(&tag));
    }

    #[test]
    fn rejects_region_whose_volume_overflows() {
        let huge = region(xyz(i32::MAX, i32::MAX, i32::MAX));
        let tag = document(6, Compound::new().with("Huge", huge));
        assert!(LitematicaSchematic::is_valid_schematic(&tag));
        assert!(!LitematicaSchematic::new(None).from_tag(&tag));
    }

    #[test]
    fn rejects_regions_whose_total_volume_overflows() {
        let slab = || region(xyz(i32::MAX, i32::MAX, 1));
        let two = Compound::new().with("A", slab()).with("B", slab());
        let mut schematic = LitematicaSchematic::new(None);
        let three = two.clone().with("C", slab());
        assert!(!schematic.from_tag(&document(6, three)));
        assert!(schematic.from_tag(&document(6, two)));
        assert_eq!(
            schematic.metadata().total_volume,
            2 * i64::from(i32::MAX) * i64::from(i32::MAX)
        );
    }

    #[test]
    fn failed_population_clears_previous_contents() {
        let mut schematic = LitematicaSchematic::new(None);
        let good = document(6, Compound::new().with("Main", region(xyz(1, 1, 1))));
        assert!(schematic.from_tag(&good));
        assert!(!schematic.from_tag(&Compound::new()));
        assert_eq!(schematic.metadata(), &SchematicMetadata::default());
        assert!(schematic.regions().is_empty());
    }

    #[test]
    fn validator_requires_typed_keys() {
        let wrong_type = Compound::new()
            .with(keys::VERSION, 5i16)
            .with(keys::REGIONS, Compound::new())
            .with(keys::METADATA, Compound::new());
        assert!(!LitematicaSchematic::is_valid_schematic(&wrong_type));
        assert!(!LitematicaSchematic::is_valid_schematic(&Compound::new()));
    }
}
