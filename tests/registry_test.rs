use std::io::Write;

use isle_layout::layout::boundary::IslandShape;
use isle_layout::{BoundaryConfig, IslandRegistry, Preset, RegistryLoadError};

const ISLANDS: &str = r#"
[
    (
        name: "meadow",
        boundary: Shape((shape: Circle(radius: 18.0), margin: 2.0)),
        nominal_radius: 18.0,
        min_distance: 1.8,
    ),
    (
        name: "paw-pad",
        boundary: Shape((shape: Paw(radius: 8.0))),
        nominal_radius: 8.0,
        min_distance: 1.2,
    ),
    (
        name: "sweetheart",
        boundary: Preset(preset: heart, scale_factor: 20.0),
    ),
]
"#;

#[test]
fn loads_islands_with_defaults() {
    let reg = IslandRegistry::from_ron_str(ISLANDS).unwrap();
    assert_eq!(reg.len(), 3);

    let meadow = reg.get("meadow").unwrap();
    assert_eq!(meadow.boundary, BoundaryConfig::circle(18.0));
    assert_eq!(meadow.min_distance, 1.8);

    let paw = reg.get("paw-pad").unwrap();
    assert_eq!(paw.boundary.margin, 2.0);

    let heart = reg.get("sweetheart").unwrap();
    assert_eq!(heart.nominal_radius, 15.0);
    assert_eq!(heart.min_distance, 1.5);
    match &heart.boundary.shape {
        IslandShape::Custom { points, scale_factor } => {
            assert_eq!(points, &Preset::Heart.points());
            assert_eq!(*scale_factor, 20.0);
        }
        other => panic!("expected custom outline, got {other:?}"),
    }
}

#[test]
fn island_layouts_place_inside_their_boundaries() {
    let reg = IslandRegistry::from_ron_str(ISLANDS).unwrap();
    for island in reg.iter().filter(|i| i.name != "sweetheart") {
        let trees = island.batch(12, 99);
        assert!(!trees.is_empty(), "{} placed nothing", island.name);
        for p in &trees {
            assert!(island.boundary.is_inside(p.x, p.z), "{}: {p:?}", island.name);
        }

        let a = island.position_for("mem-1");
        assert_eq!(a, island.position_for("mem-1"));
        assert!(island.boundary.is_inside(a.x, a.z));
    }
}

#[test]
fn position_uses_island_name_as_container() {
    let reg = IslandRegistry::from_ron_str(ISLANDS).unwrap();
    let meadow = reg.get("meadow").unwrap();
    let expected = isle_layout::generate_for_identity(
        "mem-42",
        "meadow",
        meadow.nominal_radius,
        Some(&meadow.boundary),
    );
    assert_eq!(meadow.position_for("mem-42"), expected);
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ISLANDS.as_bytes()).unwrap();
    let reg = IslandRegistry::load(file.path()).unwrap();
    assert_eq!(reg.index_of("paw-pad"), Some(1));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = IslandRegistry::load(dir.path().join("nope.islands.ron")).unwrap_err();
    assert!(matches!(err, RegistryLoadError::Io(_)), "{err}");
}

#[test]
fn bad_ron_reports_parse_error() {
    let err = IslandRegistry::from_ron_str("[ (name: \"x\", boundary: Blob) ]").unwrap_err();
    assert!(matches!(err, RegistryLoadError::Ron(_)), "{err}");
}

#[test]
fn unknown_preset_is_a_parse_error() {
    let src = r#"[ (name: "moon", boundary: Preset(preset: moon)) ]"#;
    let err = IslandRegistry::from_bytes(src.as_bytes()).unwrap_err();
    assert!(matches!(err, RegistryLoadError::Ron(_)), "{err}");
}

#[test]
fn duplicate_island_names() {
    let src = r#"[
        (name: "twin", boundary: Shape((shape: Circle(radius: 15.0)))),
        (name: "twin", boundary: Shape((shape: Hexagon(radius: 12.0)))),
    ]"#;
    let err = IslandRegistry::from_ron_str(src).unwrap_err();
    assert!(
        matches!(err, RegistryLoadError::DuplicateName { ref name, first: 0, second: 1 } if name == "twin"),
        "{err}"
    );
}
