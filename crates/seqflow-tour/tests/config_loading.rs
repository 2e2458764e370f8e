use std::io::Write;

use seqflow_tour::{TourConfig, TourError, run};

#[test]
fn load_from_file_and_run() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "collection: [b2, a1, b1]").unwrap();
    writeln!(file, "count_prefix: b").unwrap();
    writeln!(file, "map_size: 2").unwrap();

    let config = TourConfig::load(file.path()).unwrap();
    let sections = run(&config).unwrap();

    let streams = sections.iter().find(|s| s.title == "streams").unwrap();
    assert!(streams.lines.contains(&"filter: a1".to_string()));
    assert!(streams.lines.contains(&"count starting with b: 2".to_string()));
    assert!(streams.lines.contains(&"reduce: a1#b1#b2".to_string()));

    let maps = sections.iter().find(|s| s.title == "maps").unwrap();
    assert_eq!(maps.lines, vec!["val0", "val1"]);
}

#[test]
fn bundled_sample_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tour.yaml");
    let loaded = run(&TourConfig::load(path).unwrap()).unwrap();
    let defaults = run(&TourConfig::default()).unwrap();
    assert_eq!(loaded, defaults);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TourConfig::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, TourError::Io { .. }));
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn empty_names_rejected_on_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "names: []").unwrap();
    let err = TourConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, TourError::Config(_)));
}
