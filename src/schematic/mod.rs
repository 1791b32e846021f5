//! Schematic capability trait and the built-in formats.
//!
//! Each format is a plain struct implementing [`Schematic`]. The format
//! registry never holds instances; it holds descriptors whose factory and
//! validator are the associated functions of these types.

mod litematica;
mod metadata;
mod schematica;
mod sponge;

pub use litematica::{LitematicaSchematic, RegionInfo};
pub use metadata::SchematicMetadata;
pub use schematica::SchematicaSchematic;
pub use sponge::SpongeSchematic;

use crate::base::BlockPos;
use crate::nbt::Compound;
use std::any::Any;
use std::path::Path;

/// A schematic file format's in-memory representation.
pub trait Schematic: Any + Send + Sync + std::fmt::Debug {
    /// Create an empty schematic associated with `file`.
    ///
    /// The file is only remembered, never read.
    fn new(file: Option<&Path>) -> Self
    where
        Self: Sized;

    /// Cheap structural check that `tag` is a document of this format.
    ///
    /// Total over any tree: returns `false` for unexpected shapes.
    fn is_valid_schematic(tag: &Compound) -> bool
    where
        Self: Sized;

    /// Populate this schematic from `tag`, replacing any previous contents.
    ///
    /// Returns `false` and leaves the schematic empty if the document is
    /// not a well-formed instance of this format.
    fn from_tag(&mut self, tag: &Compound) -> bool;

    /// Human-readable name of the format
    fn format_name(&self) -> &'static str;

    /// The file this schematic was created for, if any
    fn file(&self) -> Option<&Path>;

    fn metadata(&self) -> &SchematicMetadata;

    fn as_any(&self) -> &dyn Any;
}

impl dyn Schematic {
    /// True if this schematic is of format `S`
    pub fn is<S: Schematic>(&self) -> bool {
        self.as_any().is::<S>()
    }

    pub fn downcast_ref<S: Schematic>(&self) -> Option<&S> {
        self.as_any().downcast_ref::<S>()
    }
}

/// Boxed constructor for `S`, usable as a descriptor factory.
pub fn new_boxed<S: Schematic>(file: Option<&Path>) -> Box<dyn Schematic> {
    Box::new(S::new(file))
}

/// Name used for formats that do not embed one: the file stem, or empty.
pub(crate) fn name_from_file(file: Option<&Path>) -> String {
    file.and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Read an `{x, y, z}` compound of ints.
pub(crate) fn read_xyz(tag: &Compound) -> Option<BlockPos> {
    Some(BlockPos::new(
        tag.get_int("x")?,
        tag.get_int("y")?,
        tag.get_int("z")?,
    ))
}

/// Length of the list under `key`, zero when absent.
pub(crate) fn list_len(tag: &Compound, key: &str) -> usize {
    tag.get_list(key).map_or(0, <[_]>::len)
}
