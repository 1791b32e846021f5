//! Synthetic schematic documents and on-disk fixtures.

use schemata::nbt::{self, Compression};
use schemata::{Compound, Tag};
use std::path::{Path, PathBuf};

fn xyz(x: i32, y: i32, z: i32) -> Compound {
    Compound::new().with("x", x).with("y", y).with("z", z)
}

/// A Litematica document with one 2x2x2 region.
pub fn litematica_document(name: &str) -> Compound {
    let region = Compound::new()
        .with("Position", xyz(0, 0, 0))
        .with("Size", xyz(2, 2, 2))
        .with(
            "BlockStatePalette",
            Tag::List(vec![Tag::Compound(
                Compound::new().with("Name", "minecraft:air"),
            )]),
        )
        .with("BlockStates", Tag::LongArray(vec![0]))
        .with("Entities", Tag::List(Vec::new()))
        .with("TileEntities", Tag::List(Vec::new()));

    Compound::new()
        .with("Version", 6)
        .with("MinecraftDataVersion", 3700)
        .with(
            "Metadata",
            Compound::new()
                .with("Name", name)
                .with("Author", "tester")
                .with("Description", "")
                .with("EnclosingSize", xyz(2, 2, 2))
                .with("RegionCount", 1)
                .with("TotalVolume", 8)
                .with("TotalBlocks", 0),
        )
        .with("Regions", Compound::new().with("Main", region))
}

/// A Schematica/MCEdit document of size 2x1x1 holding stone and air.
pub fn schematica_document() -> Compound {
    Compound::new()
        .with("Width", 2i16)
        .with("Height", 1i16)
        .with("Length", 1i16)
        .with("Materials", "Alpha")
        .with("Blocks", Tag::ByteArray(vec![1, 0]))
        .with("Data", Tag::ByteArray(vec![0, 0]))
        .with("Entities", Tag::List(Vec::new()))
        .with("TileEntities", Tag::List(Vec::new()))
}

/// A version 2 Sponge document of size 2x1x1.
pub fn sponge_document(name: &str) -> Compound {
    Compound::new()
        .with("Version", 2)
        .with("DataVersion", 3700)
        .with("Width", 2i16)
        .with("Height", 1i16)
        .with("Length", 1i16)
        .with("Metadata", Compound::new().with("Name", name))
        .with(
            "Palette",
            Compound::new()
                .with("minecraft:air", 0)
                .with("minecraft:stone", 1),
        )
        .with("BlockData", Tag::ByteArray(vec![1, 0]))
        .with("BlockEntities", Tag::List(Vec::new()))
}

/// Write `tag` gzip-compressed to `dir/file_name`.
pub fn write_fixture(dir: &Path, file_name: &str, tag: &Compound) -> PathBuf {
    let path = dir.join(file_name);
    nbt::write_file(&path, tag, Compression::Gzip).expect("write fixture");
    path
}
