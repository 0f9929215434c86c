use std::path::PathBuf;

use isoworld::{
    preset::PresetLoader,
    render::render_isometric,
    world::{SeedSet, WorldSnapshot},
    Algorithm,
};

fn preset_loader() -> PresetLoader {
    PresetLoader::new(env!("CARGO_MANIFEST_DIR"))
}

fn preset_path(name: &str) -> PathBuf {
    PathBuf::from("presets").join(format!("{name}.yaml"))
}

#[test]
fn preset_loader_reads_small_island() {
    let preset = preset_loader().load(preset_path("small_island")).expect("preset parses");
    assert_eq!(preset.name, "small_island");
    assert_eq!((preset.width, preset.height), (24, 12));
    assert_eq!(preset.algorithm, Algorithm::Simple { smoothing: 2 });
    assert_eq!(preset.seeds(), SeedSet::new(Some(42), Some(7), Some(1999)));
    assert!(preset
        .description
        .as_deref()
        .is_some_and(|d| d.contains("island")));
}

#[test]
fn preset_loader_reads_fractal_continent() {
    let preset = preset_loader()
        .load(preset_path("fractal_continent"))
        .expect("preset parses");
    assert_eq!(preset.algorithm, Algorithm::Fractal { roughness: 1.0 });
    assert!(preset.color);
    assert_eq!(preset.seeds(), SeedSet::derived(20240601));
}

#[test]
fn presets_generate_deterministically() {
    for name in ["small_island", "fractal_continent"] {
        let preset = preset_loader().load(preset_path(name)).unwrap();
        let settings = preset.settings();
        let a = settings.generate().unwrap();
        let b = settings.generate().unwrap();
        assert_eq!(a, b, "preset {name} should be reproducible");
        assert_eq!(a.dimensions(), (preset.width, preset.height));
    }
}

#[test]
fn preset_from_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiny.yaml");
    std::fs::write(
        &path,
        "name: tiny\nwidth: 3\nheight: 2\nalgorithm:\n  kind: simple\n  smoothing: 0\nseeds:\n  height: 42\n",
    )
    .unwrap();

    let preset = PresetLoader::new(dir.path()).load("tiny.yaml").unwrap();
    let world = preset.settings().generate().unwrap();
    assert_eq!(world.dimensions(), (3, 2));

    let rendered = render_isometric(&world, false);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(' '));
    assert_eq!(lines[1].chars().count(), 6);
}

#[test]
fn invalid_preset_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.yaml"), "name: bad\nwidth: -3\n").unwrap();
    let err = PresetLoader::new(dir.path()).load("bad.yaml").unwrap_err();
    assert!(format!("{err:#}").contains("bad.yaml"));
}

#[test]
fn zero_sized_preset_fails_generation() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("flat.yaml"), "name: flat\nwidth: 0\n").unwrap();
    let preset = PresetLoader::new(dir.path()).load("flat.yaml").unwrap();
    assert!(preset.settings().generate().is_err());
}

#[test]
fn snapshot_serializes_to_json() {
    let preset = preset_loader().load(preset_path("small_island")).unwrap();
    let world = preset.settings().generate().unwrap();
    let json = serde_json::to_string(&world.snapshot()).unwrap();
    assert!(json.contains("\"terrain_counts\""));

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["width"], 24);
    assert_eq!(parsed["rows"].as_array().map(Vec::len), Some(12));
    let first = &parsed["rows"][0][0];
    let snapshot: WorldSnapshot = world.snapshot();
    assert_eq!(first["terrain"], snapshot.rows[0][0].terrain.as_str());
}
