//! The ordered set of known schematic formats.

use super::builtin;
use super::detect;
use super::{ConfigError, SchematicType, SchematicTypeConfig};
use crate::nbt::Compound;
use std::path::Path;
use std::sync::LazyLock;

/// Built-in registry, built once on first access.
static BUILTIN: LazyLock<SchematicRegistry> = LazyLock::new(|| {
    SchematicRegistry::new(builtin::configs())
        .unwrap_or_else(|err| panic!("invalid built-in schematic type: {err}"))
});

/// An ordered, read-only list of schematic formats.
///
/// Order is the detection priority: when several formats accept a file's
/// extension, their content validators are tried first to last and the
/// first match wins.
#[derive(Debug, Clone, Default)]
pub struct SchematicRegistry {
    types: Vec<SchematicType>,
}

impl SchematicRegistry {
    /// Build a registry from configs, in the given order.
    pub fn new(
        configs: impl IntoIterator<Item = SchematicTypeConfig>,
    ) -> Result<Self, ConfigError> {
        let types = configs
            .into_iter()
            .map(SchematicType::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { types })
    }

    /// Build a registry from already constructed descriptors.
    pub fn from_types(types: impl IntoIterator<Item = SchematicType>) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }

    /// The process-wide registry of built-in formats:
    /// Litematica, Schematica/MCEdit, Sponge.
    ///
    /// # Panics
    ///
    /// On first access, if a built-in configuration is invalid.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// All formats, in priority order
    pub fn known_types(&self) -> &[SchematicType] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// First format with the given display name
    pub fn find(&self, display_name: &str) -> Option<&SchematicType> {
        self.types.iter().find(|t| t.display_name() == display_name)
    }

    /// Canonical extensions of all formats, in priority order
    pub fn extensions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.iter().map(SchematicType::file_name_extension)
    }

    /// Formats whose extension validator accepts `path`'s extension.
    pub fn candidates_for_path(&self, path: &Path) -> Vec<&SchematicType> {
        detect::candidates_for_path(&self.types, path)
    }

    /// The first format accepting both `path`'s extension and `tag`.
    pub fn resolve_type(&self, path: &Path, tag: &Compound) -> Option<&SchematicType> {
        detect::resolve(&self.candidates_for_path(path), tag)
    }
}
