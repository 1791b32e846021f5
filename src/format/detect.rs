//! Two-stage format detection: extension filtering, then content resolution.
//!
//! Both stages are pure. Neither touches the file system.

use super::SchematicType;
use crate::nbt::Compound;
use std::path::Path;
use tracing::trace;

/// The extension of `path` with its leading `.`, exactly as written.
///
/// `None` if the path has no extension or it is not valid UTF-8.
pub fn file_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    Some(format!(".{ext}"))
}

/// Every type accepting `path`'s extension, in the order of `types`.
pub fn candidates_for_path<'a>(types: &'a [SchematicType], path: &Path) -> Vec<&'a SchematicType> {
    let Some(extension) = file_extension(path) else {
        return Vec::new();
    };
    types
        .iter()
        .filter(|ty| ty.is_valid_extension(&extension))
        .collect()
}

/// The first candidate whose data validator accepts `tag`.
pub fn resolve<'a>(candidates: &[&'a SchematicType], tag: &Compound) -> Option<&'a SchematicType> {
    candidates.iter().copied().find(|ty| {
        let accepted = ty.is_valid_data(tag);
        trace!(format = ty.display_name(), accepted, "content check");
        accepted
    })
}
