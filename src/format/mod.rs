//! Schematic format detection, registry and loading.
//!
//! Detection runs in two stages: a cheap extension filter narrows the
//! registry to candidates, then each candidate's content validator is tried
//! against the parsed tag tree, in registry order.
//!
//! ```text
//! path ──► candidates_for_path ──► [SchematicType]   (extension)
//!                                       │
//!              TagTreeReader ──► Compound
//!                                       │
//!                                       ▼
//!                               resolve ──► SchematicType   (content)
//!                                               │
//!                                               ▼
//!                           create_schematic_from_tag ──► Box<dyn Schematic>
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use schemata::format::{SchematicLoader, SchematicRegistry};
//!
//! let loader = SchematicLoader::new(SchematicRegistry::builtin());
//! if let Some(schematic) = loader.detect_and_load(path) {
//!     println!("{}: {}", schematic.format_name(), schematic.metadata().name);
//! }
//! ```

pub mod builtin;
mod descriptor;
mod detect;
mod loader;
mod registry;

pub use descriptor::{
    ConfigError, DataValidator, ExtensionValidator, IconRef, SchematicFactory, SchematicType,
    SchematicTypeConfig,
};
pub use detect::{candidates_for_path, file_extension, resolve};
pub use loader::{
    LoadError, NbtFileReader, SchematicLoader, TagTreeReader, detect_and_load, detect_and_load_tag,
};
pub use registry::SchematicRegistry;
