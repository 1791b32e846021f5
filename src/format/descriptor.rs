//! Immutable schematic format descriptors.

use crate::base::constants::UNNAMED_DISPLAY_NAME;
use crate::nbt::Compound;
use crate::schematic::Schematic;
use std::path::Path;
use thiserror::Error;
use tracing::trace;

/// Creates an empty schematic for an optional file, without reading it.
pub type SchematicFactory = fn(Option<&Path>) -> Box<dyn Schematic>;

/// Accepts or rejects a file extension, given with its leading `.`.
pub type ExtensionValidator = fn(&str) -> bool;

/// Accepts or rejects a parsed tag tree.
pub type DataValidator = fn(&Compound) -> bool;

/// Opaque reference to an icon, resolved by whoever renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconRef(&'static str);

impl IconRef {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn key(&self) -> &'static str {
        self.0
    }
}

/// Errors from building a [`SchematicType`].
///
/// These are programming errors in a format's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required field was left unset.
    #[error("Schematic type '{display_name}' is missing required field `{field}`")]
    MissingField {
        display_name: &'static str,
        field: &'static str,
    },

    /// The canonical extension lacks its leading separator.
    #[error("Schematic type '{display_name}' has extension '{extension}' without a leading '.'")]
    MissingSeparator {
        display_name: &'static str,
        extension: &'static str,
    },

    /// The extension validator rejects the canonical extension.
    #[error("Schematic type '{display_name}' rejects its own extension '{extension}'")]
    RejectsOwnExtension {
        display_name: &'static str,
        extension: &'static str,
    },
}

/// Field values for a [`SchematicType`].
///
/// `factory`, `data_validator`, `extension_validator` and `extension` are
/// required; `display_name` falls back to `"?"`.
///
/// ```ignore
/// let ty = SchematicType::new(SchematicTypeConfig {
///     display_name: Some("Litematica"),
///     extension: Some(".litematic"),
///     extension_validator: Some(|ext: &str| ext == ".litematic"),
///     data_validator: Some(LitematicaSchematic::is_valid_schematic),
///     factory: Some(new_boxed::<LitematicaSchematic>),
///     has_name: true,
///     ..Default::default()
/// })?;
/// ```
#[derive(Clone, Default)]
pub struct SchematicTypeConfig {
    pub display_name: Option<&'static str>,
    pub extension: Option<&'static str>,
    pub extension_validator: Option<ExtensionValidator>,
    pub data_validator: Option<DataValidator>,
    pub icon: Option<IconRef>,
    pub has_name: bool,
    pub factory: Option<SchematicFactory>,
}

impl std::fmt::Debug for SchematicTypeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchematicTypeConfig")
            .field("display_name", &self.display_name)
            .field("extension", &self.extension)
            .field("has_extension_validator", &self.extension_validator.is_some())
            .field("has_data_validator", &self.data_validator.is_some())
            .field("icon", &self.icon)
            .field("has_name", &self.has_name)
            .field("has_factory", &self.factory.is_some())
            .finish()
    }
}

/// Description of one schematic file format.
///
/// Every field is fixed at construction.
#[derive(Clone, Copy)]
pub struct SchematicType {
    display_name: &'static str,
    extension: &'static str,
    extension_validator: ExtensionValidator,
    data_validator: DataValidator,
    icon: Option<IconRef>,
    has_name: bool,
    factory: SchematicFactory,
}

impl SchematicType {
    /// Validate `config` and build a descriptor from it.
    pub fn new(config: SchematicTypeConfig) -> Result<Self, ConfigError> {
        let display_name = config.display_name.unwrap_or(UNNAMED_DISPLAY_NAME);
        let missing = |field| ConfigError::MissingField {
            display_name,
            field,
        };

        let factory = config.factory.ok_or_else(|| missing("factory"))?;
        let data_validator = config.data_validator.ok_or_else(|| missing("data_validator"))?;
        let extension_validator = config
            .extension_validator
            .ok_or_else(|| missing("extension_validator"))?;
        let extension = config.extension.ok_or_else(|| missing("extension"))?;

        if !extension.starts_with('.') {
            return Err(ConfigError::MissingSeparator {
                display_name,
                extension,
            });
        }
        if !extension_validator(extension) {
            return Err(ConfigError::RejectsOwnExtension {
                display_name,
                extension,
            });
        }

        Ok(Self {
            display_name,
            extension,
            extension_validator,
            data_validator,
            icon: config.icon,
            has_name: config.has_name,
            factory,
        })
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Canonical extension, including the leading `.`
    pub fn file_name_extension(&self) -> &'static str {
        self.extension
    }

    pub fn icon(&self) -> Option<IconRef> {
        self.icon
    }

    /// Whether schematics of this format carry an editable name
    pub fn has_name(&self) -> bool {
        self.has_name
    }

    /// True if files with `extension` may be of this format
    pub fn is_valid_extension(&self, extension: &str) -> bool {
        (self.extension_validator)(extension)
    }

    /// True if `tag` is a document of this format
    pub fn is_valid_data(&self, tag: &Compound) -> bool {
        (self.data_validator)(tag)
    }

    /// Create an empty schematic of this format for `file`.
    ///
    /// Nothing is read from the file.
    pub fn create_schematic(&self, file: Option<&Path>) -> Box<dyn Schematic> {
        (self.factory)(file)
    }

    /// Create a schematic of this format and populate it from `tag`.
    ///
    /// Returns `None` if population fails; a partially populated schematic
    /// is never returned.
    pub fn create_schematic_from_tag(
        &self,
        file: Option<&Path>,
        tag: &Compound,
    ) -> Option<Box<dyn Schematic>> {
        let mut schematic = self.create_schematic(file);
        if schematic.from_tag(tag) {
            Some(schematic)
        } else {
            trace!(format = self.display_name, "population rejected tag tree");
            None
        }
    }
}

impl std::fmt::Debug for SchematicType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchematicType")
            .field("display_name", &self.display_name)
            .field("extension", &self.extension)
            .field("icon", &self.icon)
            .field("has_name", &self.has_name)
            .finish_non_exhaustive()
    }
}
