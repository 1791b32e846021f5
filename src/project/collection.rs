use crate::format::SchematicRegistry;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Recursively collect files under `dir` that some format in `registry`
/// could open, judged by extension alone.
///
/// Paths are sorted for deterministic ordering. Entries that cannot be read
/// are skipped; a missing `dir` yields an empty list.
pub fn collect_schematic_files(dir: &Path, registry: &SchematicRegistry) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(%err, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| !registry.candidates_for_path(path).is_empty())
        .collect();
    paths.sort();
    paths
}
