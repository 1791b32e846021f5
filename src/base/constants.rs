//! Domain constants: file extensions, display names, tag keys and limits.

// File extensions, including the leading separator
pub const LITEMATICA_EXTENSION: &str = ".litematic";
pub const SCHEMATICA_EXTENSION: &str = ".schematic";
pub const SPONGE_EXTENSION: &str = ".schem";

// Display names
pub const LITEMATICA_DISPLAY_NAME: &str = "Litematica";
pub const SCHEMATICA_DISPLAY_NAME: &str = "Schematica/MCEdit";
pub const SPONGE_DISPLAY_NAME: &str = "Sponge";

/// Display name used when a descriptor is configured without one.
pub const UNNAMED_DISPLAY_NAME: &str = "?";

// Icon keys, resolved by whatever renders them
pub const LITEMATICA_ICON: &str = "file_icon_litematic";
pub const SCHEMATICA_ICON: &str = "file_icon_schematic";
pub const SPONGE_ICON: &str = "file_icon_sponge";

/// Highest Litematica container version this crate understands.
pub const LITEMATICA_MAX_VERSION: i32 = 7;

/// Sponge versions this crate understands.
pub const SPONGE_MIN_VERSION: i32 = 1;
pub const SPONGE_MAX_VERSION: i32 = 3;

/// Default cap on tag-tree nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Registry id of the empty block.
pub const AIR_BLOCK: &str = "minecraft:air";

/// Tag keys used by the built-in formats.
pub mod keys {
    pub const VERSION: &str = "Version";
    pub const DATA_VERSION: &str = "MinecraftDataVersion";
    pub const METADATA: &str = "Metadata";
    pub const REGIONS: &str = "Regions";
    pub const NAME: &str = "Name";
    pub const AUTHOR: &str = "Author";
    pub const DESCRIPTION: &str = "Description";
    pub const REGION_COUNT: &str = "RegionCount";
    pub const TOTAL_VOLUME: &str = "TotalVolume";
    pub const TOTAL_BLOCKS: &str = "TotalBlocks";
    pub const TIME_CREATED: &str = "TimeCreated";
    pub const TIME_MODIFIED: &str = "TimeModified";
    pub const ENCLOSING_SIZE: &str = "EnclosingSize";
    pub const POSITION: &str = "Position";
    pub const SIZE: &str = "Size";
    pub const BLOCK_STATE_PALETTE: &str = "BlockStatePalette";
    pub const ENTITIES: &str = "Entities";
    pub const TILE_ENTITIES: &str = "TileEntities";
    pub const BLOCK_ENTITIES: &str = "BlockEntities";

    pub const WIDTH: &str = "Width";
    pub const HEIGHT: &str = "Height";
    pub const LENGTH: &str = "Length";
    pub const BLOCKS: &str = "Blocks";
    pub const DATA: &str = "Data";
    pub const ADD_BLOCKS: &str = "AddBlocks";
    pub const MATERIALS: &str = "Materials";
    pub const SCHEMATICA_MAPPING: &str = "SchematicaMapping";

    pub const SCHEMATIC: &str = "Schematic";
    pub const PALETTE: &str = "Palette";
    pub const BLOCK_DATA: &str = "BlockData";
    pub const OFFSET: &str = "Offset";
    pub const DATE: &str = "Date";
    pub const DATA_VERSION_SPONGE: &str = "DataVersion";
}
