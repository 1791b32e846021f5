#![allow(clippy::unwrap_used)]

#[path = "helpers/mod.rs"]
mod helpers;

use helpers::fixtures::{litematica_document, schematica_document, sponge_document};
use helpers::readers::CountingReader;
use rstest::rstest;
use schemata::format::{SchematicLoader, SchematicTypeConfig, candidates_for_path, resolve};
use schemata::schematic::{
    LitematicaSchematic, SchematicaSchematic, SpongeSchematic, new_boxed,
};
use schemata::{Compound, Schematic, SchematicRegistry, SchematicType};
use std::path::Path;

// =============================================================================
// Registry-order resolution
// =============================================================================

fn fake(name: &'static str, validator: fn(&Compound) -> bool) -> SchematicType {
    SchematicType::new(SchematicTypeConfig {
        display_name: Some(name),
        extension: Some(".fake"),
        extension_validator: Some(|ext: &str| ext == ".fake"),
        data_validator: Some(validator),
        factory: Some(new_boxed::<SchematicaSchematic>),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn earlier_registered_type_wins_when_both_accept() {
    let registry = SchematicRegistry::from_types([
        fake("older", |tag: &Compound| tag.contains_key("shared")),
        fake("newer", |tag: &Compound| tag.contains_key("shared")),
    ]);
    let tree = Compound::new().with("shared", 1);

    let candidates = candidates_for_path(registry.known_types(), Path::new("a.fake"));
    assert_eq!(candidates.len(), 2);
    let chosen = resolve(&candidates, &tree).unwrap();
    assert_eq!(chosen.display_name(), "older");
    assert!(std::ptr::eq(chosen, &registry.known_types()[0]));
}

#[test]
fn later_type_wins_when_only_it_accepts() {
    let registry = SchematicRegistry::from_types([
        fake("first", |tag: &Compound| tag.contains_key("first")),
        fake("second", |tag: &Compound| tag.contains_key("second")),
    ]);
    let tree = Compound::new().with("second", 1);
    let chosen = registry.resolve_type(Path::new("a.fake"), &tree).unwrap();
    assert_eq!(chosen.display_name(), "second");
}

// =============================================================================
// Built-in formats, end to end with supplied trees
// =============================================================================

#[rstest]
#[case("tower.litematic", litematica_document("Tower"), "Litematica")]
#[case("hut.schematic", schematica_document(), "Schematica/MCEdit")]
#[case("shed.schem", sponge_document("Shed"), "Sponge")]
fn each_format_loads_under_its_extension(
    #[case] path: &str,
    #[case] tree: Compound,
    #[case] format: &str,
) {
    let loaded = schemata::detect_and_load_tag(Path::new(path), &tree).unwrap();
    assert_eq!(loaded.format_name(), format);
}

#[test]
fn sponge_content_under_schematica_extension_loads_as_sponge() {
    let path = Path::new("legacy.schematic");
    let registry = SchematicRegistry::builtin();
    let names: Vec<_> = registry
        .candidates_for_path(path)
        .iter()
        .map(|t| t.display_name())
        .collect();
    assert_eq!(names, ["Schematica/MCEdit", "Sponge"]);

    let loaded = schemata::detect_and_load_tag(path, &sponge_document("Legacy")).unwrap();
    let sponge = loaded.downcast_ref::<SpongeSchematic>().unwrap();
    assert_eq!(sponge.metadata().name, "Legacy");
    assert!(!loaded.is::<SchematicaSchematic>());
}

#[test]
fn recognized_extension_with_foreign_tree_is_absent() {
    let path = Path::new("tower.litematic");
    assert!(schemata::detect_and_load_tag(path, &sponge_document("x")).is_none());
    assert!(schemata::detect_and_load_tag(path, &Compound::new()).is_none());
}

#[test]
fn unknown_extension_never_reads_content() {
    let reader = CountingReader::returning(Some(litematica_document("Tower")));
    let loader = SchematicLoader::with_reader(SchematicRegistry::builtin(), reader);

    assert!(loader.detect_and_load(Path::new("tower.zip")).is_none());
    assert!(loader.detect_and_load(Path::new("tower")).is_none());
    assert_eq!(loader.reader().reads(), 0);

    assert!(loader.detect_and_load(Path::new("tower.litematic")).is_some());
    assert_eq!(loader.reader().reads(), 1);
}

#[test]
fn populated_schematic_satisfies_its_validator() {
    let registry = SchematicRegistry::builtin();
    let trees = [
        ("a.litematic", litematica_document("A")),
        ("b.schematic", schematica_document()),
        ("c.schem", sponge_document("C")),
    ];
    for (path, tree) in trees {
        let ty = registry.resolve_type(Path::new(path), &tree).unwrap();
        let schematic = ty.create_schematic_from_tag(Some(Path::new(path)), &tree);
        assert!(schematic.is_some(), "{path} should populate");
        assert!(ty.is_valid_data(&tree));
        assert_eq!(schematic.unwrap().format_name(), ty.display_name());
    }
}

#[test]
fn empty_schematic_reads_nothing() {
    let ty = SchematicRegistry::builtin().find("Litematica").unwrap();
    let empty = ty.create_schematic(Some(Path::new("/does/not/exist.litematic")));
    let litematica = empty.downcast_ref::<LitematicaSchematic>().unwrap();
    assert_eq!(litematica.version(), 0);
    assert!(litematica.regions().is_empty());
    assert_eq!(empty.file(), Some(Path::new("/does/not/exist.litematic")));
}

#[test]
fn concurrent_detection_agrees() {
    let tree = sponge_document("Shared");
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    schemata::detect_and_load_tag(Path::new("x.schematic"), &tree)
                        .map(|s| s.format_name())
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(results.iter().all(|r| *r == Some("Sponge")));
}


#[test]
fn oversized_litematica_region_is_absent() {
    let xyz = |v: i32| Compound::new().with("x", v).with("y", v).with("z", v);
    let region = Compound::new()
        .with("Position", xyz(0))
        .with("Size", xyz(i32::MAX));
    let tree = Compound::new()
        .with("Version", 6)
        .with("Metadata", Compound::new().with("Name", "Huge"))
        .with("Regions", Compound::new().with("Main", region));

    let path = Path::new("huge.litematic");
    assert!(SchematicRegistry::builtin().resolve_type(path, &tree).is_some());
    assert!(schemata::detect_and_load_tag(path, &tree).is_none());
}
