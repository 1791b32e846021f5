//! End-to-end loading: detect a file's format and build its schematic.

use super::{SchematicRegistry, SchematicType};
use crate::nbt::{self, Compound, ReadOptions};
use crate::schematic::Schematic;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Source of parsed tag trees for files on disk.
///
/// Returns `None` for missing, unreadable or structurally invalid files.
pub trait TagTreeReader: Send + Sync {
    fn read_tag_tree(&self, path: &Path) -> Option<Compound>;
}

impl<F> TagTreeReader for F
where
    F: Fn(&Path) -> Option<Compound> + Send + Sync,
{
    fn read_tag_tree(&self, path: &Path) -> Option<Compound> {
        self(path)
    }
}

/// Reads binary NBT files, gzip-compressed or raw.
#[derive(Debug, Clone, Copy, Default)]
pub struct NbtFileReader {
    options: ReadOptions,
}

impl NbtFileReader {
    pub fn new(options: ReadOptions) -> Self {
        Self { options }
    }
}

impl TagTreeReader for NbtFileReader {
    fn read_tag_tree(&self, path: &Path) -> Option<Compound> {
        match nbt::read_file(path, &self.options) {
            Ok(tag) => Some(tag),
            Err(err) => {
                debug!(path = %path.display(), %err, "could not read tag tree");
                None
            }
        }
    }
}

/// Why loading a schematic produced nothing.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No registered format accepts the file's extension.
    #[error("No schematic format accepts the extension of {}", .path.display())]
    UnknownExtension { path: PathBuf },

    /// The file could not be read as a tag tree.
    #[error("Could not read a tag tree from {}", .path.display())]
    Unreadable { path: PathBuf },

    /// No candidate format accepts the file's contents.
    #[error("No schematic format matches the contents of {}", .path.display())]
    NoMatchingType { path: PathBuf },

    /// The matched format rejected the document while populating.
    #[error("Malformed {format} schematic: {}", .path.display())]
    PopulationFailed { path: PathBuf, format: &'static str },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            Self::UnknownExtension { path }
            | Self::Unreadable { path }
            | Self::NoMatchingType { path }
            | Self::PopulationFailed { path, .. } => path,
        }
    }
}

/// Runs the detection pipeline against one registry.
///
/// Holds no state between calls; a single loader can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct SchematicLoader<'r, R = NbtFileReader> {
    registry: &'r SchematicRegistry,
    reader: R,
}

impl<'r> SchematicLoader<'r> {
    /// A loader reading files with the default [`NbtFileReader`].
    pub fn new(registry: &'r SchematicRegistry) -> Self {
        Self::with_reader(registry, NbtFileReader::default())
    }
}

impl Default for SchematicLoader<'static> {
    fn default() -> Self {
        Self::new(SchematicRegistry::builtin())
    }
}

impl<'r, R: TagTreeReader> SchematicLoader<'r, R> {
    pub fn with_reader(registry: &'r SchematicRegistry, reader: R) -> Self {
        Self { registry, reader }
    }

    pub fn registry(&self) -> &'r SchematicRegistry {
        self.registry
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Detect the format of the file at `path`, read it and build its
    /// schematic. The file is only read if its extension has candidates.
    pub fn load(&self, path: &Path) -> Result<Box<dyn Schematic>, LoadError> {
        let candidates = self.candidates(path)?;
        let tag = self
            .reader
            .read_tag_tree(path)
            .ok_or_else(|| LoadError::Unreadable {
                path: path.to_path_buf(),
            })?;
        self.load_candidates(path, &candidates, &tag)
    }

    /// Like [`load`](Self::load), with an already parsed tree for `path`.
    pub fn load_tag(&self, path: &Path, tag: &Compound) -> Result<Box<dyn Schematic>, LoadError> {
        let candidates = self.candidates(path)?;
        self.load_candidates(path, &candidates, tag)
    }

    /// [`load`](Self::load), discarding the reason for failure.
    pub fn detect_and_load(&self, path: &Path) -> Option<Box<dyn Schematic>> {
        self.load(path).ok()
    }

    /// [`load_tag`](Self::load_tag), discarding the reason for failure.
    pub fn detect_and_load_tag(&self, path: &Path, tag: &Compound) -> Option<Box<dyn Schematic>> {
        self.load_tag(path, tag).ok()
    }

    fn candidates(&self, path: &Path) -> Result<Vec<&'r SchematicType>, LoadError> {
        let candidates = self.registry.candidates_for_path(path);
        if candidates.is_empty() {
            debug!(path = %path.display(), "no schematic format for extension");
            return Err(LoadError::UnknownExtension {
                path: path.to_path_buf(),
            });
        }
        Ok(candidates)
    }

    fn load_candidates(
        &self,
        path: &Path,
        candidates: &[&'r SchematicType],
        tag: &Compound,
    ) -> Result<Box<dyn Schematic>, LoadError> {
        let Some(ty) = super::resolve(candidates, tag) else {
            debug!(path = %path.display(), "no schematic format matches contents");
            return Err(LoadError::NoMatchingType {
                path: path.to_path_buf(),
            });
        };

        match ty.create_schematic_from_tag(Some(path), tag) {
            Some(schematic) => {
                debug!(path = %path.display(), format = ty.display_name(), "loaded schematic");
                Ok(schematic)
            }
            None => {
                warn!(
                    path = %path.display(),
                    format = ty.display_name(),
                    "schematic contents rejected"
                );
                Err(LoadError::PopulationFailed {
                    path: path.to_path_buf(),
                    format: ty.display_name(),
                })
            }
        }
    }
}

/// Detect and load the file at `path` using the built-in formats.
pub fn detect_and_load(path: &Path) -> Option<Box<dyn Schematic>> {
    SchematicLoader::default().detect_and_load(path)
}

/// Detect and load `tag`, read from `path`, using the built-in formats.
pub fn detect_and_load_tag(path: &Path, tag: &Compound) -> Option<Box<dyn Schematic>> {
    SchematicLoader::default().detect_and_load_tag(path, tag)
}
