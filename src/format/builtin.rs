//! Configurations of the built-in schematic formats.
//!
//! [`configs`] lists them in registry order. Sponge also claims the
//! `.schematic` extension so that Sponge documents saved under the older
//! name still open; Schematica is tried first for those files, and the
//! content validators decide.

use super::{IconRef, SchematicTypeConfig};
use crate::base::constants::*;
use crate::schematic::{
    LitematicaSchematic, Schematic, SchematicaSchematic, SpongeSchematic, new_boxed,
};

pub fn litematica() -> SchematicTypeConfig {
    SchematicTypeConfig {
        display_name: Some(LITEMATICA_DISPLAY_NAME),
        factory: Some(new_boxed::<LitematicaSchematic>),
        data_validator: Some(LitematicaSchematic::is_valid_schematic),
        extension: Some(LITEMATICA_EXTENSION),
        extension_validator: Some(|ext: &str| ext == LITEMATICA_EXTENSION),
        icon: Some(IconRef::new(LITEMATICA_ICON)),
        has_name: true,
    }
}

pub fn schematica() -> SchematicTypeConfig {
    SchematicTypeConfig {
        display_name: Some(SCHEMATICA_DISPLAY_NAME),
        factory: Some(new_boxed::<SchematicaSchematic>),
        data_validator: Some(SchematicaSchematic::is_valid_schematic),
        extension: Some(SCHEMATICA_EXTENSION),
        extension_validator: Some(|ext: &str| ext == SCHEMATICA_EXTENSION),
        icon: Some(IconRef::new(SCHEMATICA_ICON)),
        has_name: false,
    }
}

pub fn sponge() -> SchematicTypeConfig {
    SchematicTypeConfig {
        display_name: Some(SPONGE_DISPLAY_NAME),
        factory: Some(new_boxed::<SpongeSchematic>),
        data_validator: Some(SpongeSchematic::is_valid_schematic),
        extension: Some(SPONGE_EXTENSION),
        extension_validator: Some(|ext: &str| {
            ext == SPONGE_EXTENSION || ext == SCHEMATICA_EXTENSION
        }),
        icon: Some(IconRef::new(SPONGE_ICON)),
        has_name: true,
    }
}

/// All built-in formats, in registry order.
pub fn configs() -> [SchematicTypeConfig; 3] {
    [litematica(), schematica(), sponge()]
}
