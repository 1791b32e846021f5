use crate::format::{LoadError, SchematicLoader, TagTreeReader};
use crate::schematic::Schematic;
use rayon::prelude::*;
use std::path::PathBuf;

/// Outcome of loading one file in a batch.
#[derive(Debug)]
pub struct LoadedSchematic {
    pub path: PathBuf,
    pub result: Result<Box<dyn Schematic>, LoadError>,
}

impl LoadedSchematic {
    pub fn schematic(&self) -> Option<&dyn Schematic> {
        self.result.as_ref().ok().map(|s| &**s)
    }
}

/// Load every path in parallel. Results follow the order of `paths`.
pub fn load_all<R>(loader: &SchematicLoader<'_, R>, paths: &[PathBuf]) -> Vec<LoadedSchematic>
where
    R: TagTreeReader,
{
    paths
        .par_iter()
        .map(|path| LoadedSchematic {
            path: path.clone(),
            result: loader.load(path),
        })
        .collect()
}
