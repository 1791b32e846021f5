//! Working with directories of schematic files.

mod batch;
mod collection;

pub use batch::{LoadedSchematic, load_all};
pub use collection::collect_schematic_files;
