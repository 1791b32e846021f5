use crate::base::BlockSize;

/// Descriptive data common to every schematic format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchematicMetadata {
    pub name: String,
    pub author: String,
    pub description: String,
    /// Size of the box enclosing all regions
    pub enclosing_size: BlockSize,
    pub region_count: u32,
    pub total_volume: i64,
    /// Number of non-air blocks
    pub total_blocks: i64,
    /// Milliseconds since the epoch, zero when unknown
    pub time_created: i64,
    pub time_modified: i64,
}
