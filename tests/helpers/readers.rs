//! Tag-tree readers that record how they are used.

use schemata::Compound;
use schemata::format::TagTreeReader;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns a fixed tree for every path and counts the reads.
pub struct CountingReader {
    tree: Option<Compound>,
    reads: AtomicUsize,
}

impl CountingReader {
    pub fn returning(tree: Option<Compound>) -> Self {
        Self {
            tree,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl TagTreeReader for CountingReader {
    fn read_tag_tree(&self, _path: &Path) -> Option<Compound> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.tree.clone()
    }
}
