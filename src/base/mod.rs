//! Foundation types shared by every layer.
//!
//! - [`BlockPos`], [`BlockSize`] - integer block coordinates and box dimensions
//! - Domain constants (file extensions, tag keys, version bounds)
//!
//! This module has NO dependencies on other schemata modules.

pub mod constants;
mod position;

pub use position::{BlockPos, BlockSize};
