//! Tag-tree documents and their binary encoding.
//!
//! Schematics are stored as named binary tag trees: a root [`Compound`]
//! holding primitives, arrays, lists and nested compounds.
//!
//! ```text
//! root (Compound)
//! ├── Version: Int
//! ├── Metadata: Compound
//! │   └── Name: String
//! └── Regions: Compound
//!     └── ...
//! ```
//!
//! The codec reads big-endian binary NBT, inflating gzip input
//! transparently, and writes it back either raw or gzip-compressed.

mod compound;
mod error;
mod reader;
mod tag;
mod writer;

pub use compound::Compound;
pub use error::NbtError;
pub use reader::{ReadOptions, read_compound, read_file, read_named};
pub use tag::{Tag, TagType};
pub use writer::{Compression, write_compound, write_file};
