use assert_fs::prelude::*;
use assert_fs::TempDir;
use datemark::{
    calculate_position, resolve_color, Anchor, BatchProcessor, Color, DateFallback,
    WatermarkConfig, WatermarkError,
};
use std::path::Path;

fn create_test_image(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::new(width, height);
    img.save(path).unwrap();
}

fn batch(config: WatermarkConfig) -> BatchProcessor {
    BatchProcessor::new(config, 0).unwrap()
}

#[test]
fn test_resolve_named_colors() {
    assert_eq!(resolve_color("white").unwrap(), Color::new(255, 255, 255));
    assert_eq!(resolve_color("black").unwrap(), Color::new(0, 0, 0));
    assert_eq!(resolve_color("green").unwrap(), Color::new(0, 128, 0));
    assert_eq!(
        resolve_color("grey").unwrap(),
        resolve_color("gray").unwrap()
    );
}

#[test]
fn test_resolve_color_is_case_insensitive() {
    assert_eq!(
        resolve_color("WHITE").unwrap(),
        resolve_color("white").unwrap()
    );
    assert_eq!(
        resolve_color("Orange").unwrap(),
        resolve_color("orange").unwrap()
    );
}

#[test]
fn test_resolve_hex_colors() {
    assert_eq!(resolve_color("#FF0000").unwrap(), Color::new(255, 0, 0));
    assert_eq!(resolve_color("#ff8800").unwrap(), Color::new(255, 136, 0));
    assert_eq!(resolve_color("#000000").unwrap(), Color::new(0, 0, 0));
}

#[test]
fn test_resolve_color_rejects_invalid_input() {
    for input in ["not-a-color", "#ZZZZZZ", "#FFF", "#FF00000", ""] {
        let result = resolve_color(input);
        assert!(
            matches!(result, Err(WatermarkError::InvalidColor(_))),
            "expected InvalidColor for {:?}",
            input
        );
    }
}

#[test]
fn test_position_within_bounds_for_all_anchors() {
    let (img_w, img_h) = (800u32, 600u32);
    let (text_w, text_h) = (120u32, 24u32);

    let anchors = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
        Anchor::Center,
    ];

    for anchor in anchors {
        let (x, y) = calculate_position(img_w, img_h, text_w, text_h, anchor);
        assert!(
            x >= 0 && x <= (img_w - text_w) as i32,
            "x out of bounds for {:?}: {}",
            anchor,
            x
        );
        assert!(
            y >= 0 && y <= (img_h - text_h) as i32,
            "y out of bounds for {:?}: {}",
            anchor,
            y
        );
    }
}

#[test]
fn test_position_formulas() {
    assert_eq!(
        calculate_position(800, 600, 100, 20, Anchor::BottomRight),
        (800 - 100 - 20, 600 - 20 - 20)
    );
    assert_eq!(
        calculate_position(800, 600, 100, 20, Anchor::TopLeft),
        (20, 20)
    );
    // Center truncates on odd remainders.
    assert_eq!(
        calculate_position(801, 601, 100, 20, Anchor::Center),
        (350, 290)
    );
}

#[test]
fn test_position_allows_negative_coordinates() {
    // Text wider than the image is accepted, not an error.
    let (x, _) = calculate_position(50, 50, 200, 20, Anchor::BottomRight);
    assert!(x < 0);
}

#[test]
fn test_shadow_contrasts_with_text_color() {
    assert_eq!(Color::new(0, 0, 0).shadow(), Color::new(255, 255, 255));
    assert_eq!(Color::new(255, 255, 255).shadow(), Color::new(0, 0, 0));
    assert_eq!(Color::new(255, 0, 0).shadow(), Color::new(0, 0, 0));
}

#[test]
fn test_directory_with_mixed_files() {
    let temp_dir = TempDir::new().unwrap();
    create_test_image(temp_dir.child("a.jpg").path(), 200, 100);
    create_test_image(temp_dir.child("b.png").path(), 200, 100);
    create_test_image(temp_dir.child("c.bmp").path(), 200, 100);
    temp_dir.child("notes.txt").write_str("not an image").unwrap();

    let summary = batch(WatermarkConfig::default())
        .process(temp_dir.path())
        .unwrap();

    assert_eq!(summary.attempted, 3);
    assert_eq!(summary.succeeded, 3);
    assert!(summary.errors.is_empty());
    assert!(summary.is_success());

    let dir_name = temp_dir.path().file_name().unwrap().to_str().unwrap();
    let output_dir = temp_dir.path().join(format!("{}_watermark", dir_name));
    assert_eq!(summary.output_dir, output_dir);
    assert!(output_dir.join("a_watermark.jpg").exists());
    assert!(output_dir.join("b_watermark.png").exists());
    assert!(output_dir.join("c_watermark.bmp").exists());
    assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 3);
}

#[test]
fn test_missing_input_path() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let result = batch(WatermarkConfig::default()).process(&missing);

    assert!(matches!(result, Err(WatermarkError::PathNotFound(_))));
    // Nothing was created for the failed run.
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_skip_policy_without_capture_date() {
    let temp_dir = TempDir::new().unwrap();
    // Images written by the `image` crate carry no EXIF block.
    create_test_image(temp_dir.child("photo.jpg").path(), 200, 100);

    let config = WatermarkConfig {
        date_fallback: DateFallback::Skip,
        ..Default::default()
    };
    let summary = batch(config).process(temp_dir.path()).unwrap();

    assert_eq!(summary.attempted, 1);
    assert_eq!(summary.succeeded, 0);
    assert_eq!(summary.skipped, 1);
    assert!(!summary.is_success());
    assert!(!summary.output_dir.join("photo_watermark.jpg").exists());
}

#[test]
fn test_current_date_policy_without_capture_date() {
    let temp_dir = TempDir::new().unwrap();
    create_test_image(temp_dir.child("photo.jpg").path(), 200, 100);

    let summary = batch(WatermarkConfig::default())
        .process(temp_dir.path())
        .unwrap();

    assert_eq!(summary.succeeded, 1);
    assert!(summary.output_dir.join("photo_watermark.jpg").exists());
}

#[test]
fn test_rerun_overwrites_instead_of_duplicating() {
    let temp_dir = TempDir::new().unwrap();
    create_test_image(temp_dir.child("photo.jpg").path(), 200, 100);

    let processor = batch(WatermarkConfig::default());
    let first = processor.process(temp_dir.path()).unwrap();
    let second = processor.process(temp_dir.path()).unwrap();

    assert_eq!(first.succeeded, 1);
    assert_eq!(second.succeeded, 1);
    assert_eq!(std::fs::read_dir(&second.output_dir).unwrap().count(), 1);
}

#[test]
fn test_output_keeps_source_dimensions() {
    let temp_dir = TempDir::new().unwrap();
    create_test_image(temp_dir.child("photo.png").path(), 317, 211);

    let summary = batch(WatermarkConfig::default())
        .process(temp_dir.path())
        .unwrap();
    assert_eq!(summary.succeeded, 1);

    let reopened = image::open(summary.output_dir.join("photo_watermark.png")).unwrap();
    assert_eq!(reopened.width(), 317);
    assert_eq!(reopened.height(), 211);
}

#[test]
fn test_single_file_input() {
    let temp_dir = TempDir::new().unwrap();
    let photos = temp_dir.child("photos");
    photos.create_dir_all().unwrap();
    create_test_image(photos.child("trip.jpg").path(), 200, 100);

    let summary = batch(WatermarkConfig::default())
        .process(photos.child("trip.jpg").path())
        .unwrap();

    assert_eq!(summary.attempted, 1);
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.output_dir, photos.path().join("photos_watermark"));
    assert!(summary.output_dir.join("trip_watermark.jpg").exists());
}

#[test]
fn test_single_non_image_file_processes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("notes.txt").write_str("plain text").unwrap();

    let summary = batch(WatermarkConfig::default())
        .process(temp_dir.child("notes.txt").path())
        .unwrap();

    assert_eq!(summary.attempted, 0);
    assert!(!summary.is_success());
}

#[test]
fn test_invalid_config_rejected() {
    let config = WatermarkConfig {
        quality: 0,
        ..Default::default()
    };

    let result = BatchProcessor::new(config, 0);
    assert!(matches!(result, Err(WatermarkError::InvalidParameter(_))));
}
