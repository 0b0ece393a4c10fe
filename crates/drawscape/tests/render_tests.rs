use drawscape::layout::{compute_bounds, compute_layout};
use drawscape::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const EXPORT: &str = r#"{
    "entities": [
        {"name": "transport-belt", "x": 0, "y": 0, "direction": 2},
        {"name": "transport-belt", "x": 1, "y": 0, "direction": 2},
        {"name": "stone-wall", "x": 100, "y": 50},
        {"name": "assembling-machine-2", "x": 40, "y": 20, "width": 3, "height": 3}
    ]
}"#;

fn write_export(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("blueprint.json");
    fs::write(&path, json).unwrap();
    path
}

fn options_in(dir: &TempDir) -> CreateOptions {
    CreateOptions {
        output_file: dir.path().join("output.svg"),
        ..Default::default()
    }
}

#[test]
fn test_create_writes_page_sized_svg() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(&dir, EXPORT);
    let options = options_in(&dir);

    let summary = create(&input, &options).unwrap();
    assert_eq!(summary.page_width_mm, 297.0);
    assert_eq!(summary.page_height_mm, 210.0);

    let svg = fs::read_to_string(&options.output_file).unwrap();
    assert!(svg.contains("width=\"297mm\""));
    assert!(svg.contains("height=\"210mm\""));
    assert!(svg.contains(&format!(
        "viewBox=\"{} {} {} {}\"",
        summary.viewbox.x, summary.viewbox.y, summary.viewbox.width, summary.viewbox.height
    )));
}

#[test]
fn test_portrait_orientation() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(&dir, EXPORT);
    let options = CreateOptions {
        orientation: Orientation::Portrait,
        ..options_in(&dir)
    };

    let summary = create(&input, &options).unwrap();
    assert_eq!(summary.page_width_mm, 210.0);
    assert_eq!(summary.page_height_mm, 297.0);
}

#[test]
fn test_groups_present_only_for_populated_categories() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(&dir, EXPORT);
    let options = options_in(&dir);

    create(&input, &options).unwrap();
    let svg = fs::read_to_string(&options.output_file).unwrap();

    assert!(svg.contains("id=\"grid\""));
    assert!(svg.contains("id=\"belts\""));
    assert!(svg.contains("id=\"walls\""));
    assert!(svg.contains("id=\"asset\""));
    assert!(!svg.contains("id=\"splitters\""));
    assert!(!svg.contains("id=\"rails\""));
    assert!(!svg.contains("id=\"spaceship\""));
}

#[test]
fn test_grid_drawn_beneath_categories() {
    let collection = parse_blueprint_str(EXPORT).unwrap();
    let bounds = compute_bounds(&collection).unwrap();
    let layout = compute_layout(&bounds, Orientation::Landscape).unwrap();
    let theme = theme_for(Template::Default);

    let svg = build_document(&collection, &layout, theme.as_ref()).to_string();

    let grid = svg.find("id=\"grid\"").unwrap();
    let belts = svg.find("id=\"belts\"").unwrap();
    let walls = svg.find("id=\"walls\"").unwrap();
    assert!(grid < belts);
    assert!(belts < walls);
}

#[test]
fn test_circles_template_draws_circles() {
    let collection = parse_blueprint_str(EXPORT).unwrap();
    let bounds = compute_bounds(&collection).unwrap();
    let layout = compute_layout(&bounds, Orientation::Landscape).unwrap();
    let theme = theme_for(Template::Circles);

    let svg = build_document(&collection, &layout, theme.as_ref()).to_string();
    assert!(svg.contains("<circle"));
    assert!(!svg.contains("<rect"));
}

#[test]
fn test_empty_dataset_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(&dir, r#"{"entities": []}"#);
    let options = options_in(&dir);

    let err = create(&input, &options).unwrap_err();
    assert!(matches!(err, DrawscapeError::EmptyDataset));
    assert!(!options.output_file.exists());
}

#[test]
fn test_collinear_dataset_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(
        &dir,
        r#"{"entities": [
            {"name": "stone-wall", "x": 3, "y": 0},
            {"name": "stone-wall", "x": 3, "y": 9}
        ]}"#,
    );
    let options = options_in(&dir);

    let err = create(&input, &options).unwrap_err();
    assert!(matches!(err, DrawscapeError::DegenerateExtent(_)));
    assert!(!options.output_file.exists());
}

#[test]
fn test_optimize_replaces_original_on_success() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(&dir, EXPORT);
    let options = CreateOptions {
        optimize: true,
        ..options_in(&dir)
    };

    let summary = create(&input, &options).unwrap();

    let optimized = summary.optimized_file.expect("optimization should succeed");
    assert_eq!(optimized, dir.path().join("output_optimized.svg"));
    assert!(optimized.exists());
    assert!(summary.optimize_failure.is_none());
    // The unoptimized file is only removed once the copy exists
    assert!(!options.output_file.exists());
}

#[test]
fn test_failed_optimization_retains_original() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.svg");
    fs::write(&path, "this is not an svg document").unwrap();

    let err = optimize_svg(&path).unwrap_err();
    assert!(matches!(err, DrawscapeError::Optimize(_)));
    assert!(path.exists());
    assert!(!dir.path().join("broken_optimized.svg").exists());
}
