//! Error types for tag-tree encoding and decoding.

use super::TagType;
use thiserror::Error;

/// Errors from reading or writing binary tag trees.
#[derive(Debug, Error)]
pub enum NbtError {
    /// IO error, including truncated input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A tag id outside the known range.
    #[error("Unknown tag type id: {0}")]
    UnknownTagType(u8),

    /// The document does not start with a compound.
    #[error("Root tag must be a compound, found {0}")]
    RootNotCompound(TagType),

    /// A length prefix below zero.
    #[error("Negative length: {0}")]
    NegativeLength(i32),

    /// A non-empty list declared with element type End.
    #[error("List of {0} elements declared with element type TAG_End")]
    UntypedList(i32),

    /// Nesting exceeded the configured depth.
    #[error("Tag nesting deeper than {0} levels")]
    TooDeep(usize),

    /// List elements of differing types.
    #[error("List mixes {expected} and {found} elements")]
    HeterogeneousList { expected: TagType, found: TagType },

    /// Value does not fit its length prefix.
    #[error("{kind} too long to encode: {len}")]
    TooLong { kind: &'static str, len: usize },
}
