use drawscape::*;
use std::path::PathBuf;

#[test]
fn test_default_options() {
    let options = CreateOptions::default();
    assert_eq!(options.orientation, Orientation::Landscape);
    assert_eq!(options.template, Template::Default);
    assert_eq!(options.output_file, PathBuf::from("output.svg"));
    assert!(!options.optimize);
}

#[test]
fn test_validate_rejects_empty_output() {
    let options = CreateOptions {
        output_file: PathBuf::new(),
        ..Default::default()
    };
    assert!(matches!(
        options.validate().unwrap_err(),
        DrawscapeError::Config(_)
    ));
}

#[test]
fn test_validate_accepts_defaults() {
    assert!(CreateOptions::default().validate().is_ok());
}

#[test]
fn test_options_roundtrip_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");

    let options = CreateOptions {
        orientation: Orientation::Portrait,
        template: Template::Circles,
        output_file: PathBuf::from("base.svg"),
        optimize: true,
    };
    options.save(&path).unwrap();

    let loaded = CreateOptions::load(&path).unwrap();
    assert_eq!(loaded, options);

    // Selectors serialize as the names the CLI exposes
    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"portrait\""));
    assert!(json.contains("\"circles\""));
}

#[test]
fn test_load_rejects_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");
    std::fs::write(&path, "{\"orientation\": \"diagonal\"}").unwrap();

    assert!(matches!(
        CreateOptions::load(&path).unwrap_err(),
        DrawscapeError::Config(_)
    ));
}
