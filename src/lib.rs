//! # schemata-base
//!
//! Core library for identifying, validating and loading block schematic
//! files (Litematica, Schematica/MCEdit, Sponge).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Directory scanning, parallel batch loading
//!   ↓
//! format    → Format descriptors, registry, detection, loading
//!   ↓
//! schematic → Schematic trait and the built-in formats
//!   ↓
//! nbt       → Tag-tree documents and their binary codec
//!   ↓
//! base      → Primitives (BlockPos, BlockSize, constants)
//! ```
//!
//! ## Quick start
//!
//! ```ignore
//! use schemata::format::detect_and_load;
//!
//! if let Some(schematic) = detect_and_load(Path::new("tower.litematic")) {
//!     println!("{} by {}", schematic.metadata().name, schematic.metadata().author);
//! }
//! ```

// ============================================================================
// MODULES (dependency order: base → nbt → schematic → format → project)
// ============================================================================

/// Foundation types: block coordinates, domain constants
pub mod base;

/// Tag-tree model and binary encoding
pub mod nbt;

/// Schematic capability trait and built-in formats
pub mod schematic;

/// Format descriptors, registry, two-stage detection and loading
pub mod format;

/// Directory scanning and batch loading
pub mod project;

// Re-export commonly needed items
pub use base::{BlockPos, BlockSize};
pub use format::{
    LoadError, SchematicLoader, SchematicRegistry, SchematicType, SchematicTypeConfig,
    detect_and_load, detect_and_load_tag,
};
pub use nbt::{Compound, Tag, TagType};
pub use schematic::{Schematic, SchematicMetadata};
