// datemark/src/utils/mod.rs
use crate::core::{Color, Result, WatermarkError};
use std::path::{Path, PathBuf};

// Canonical allow-list shared by every caller; keep webp in.
pub const IMAGE_EXTENSIONS: [&str; 8] = [
    "jpg", "jpeg", "png", "tiff", "tif", "bmp", "gif", "webp",
];

const NAMED_COLORS: [(&str, Color); 14] = [
    ("black", Color::new(0, 0, 0)),
    ("white", Color::new(255, 255, 255)),
    ("red", Color::new(255, 0, 0)),
    ("green", Color::new(0, 128, 0)),
    ("blue", Color::new(0, 0, 255)),
    ("yellow", Color::new(255, 255, 0)),
    ("cyan", Color::new(0, 255, 255)),
    ("magenta", Color::new(255, 0, 255)),
    ("gray", Color::new(128, 128, 128)),
    ("grey", Color::new(128, 128, 128)),
    ("orange", Color::new(255, 165, 0)),
    ("purple", Color::new(128, 0, 128)),
    ("pink", Color::new(255, 192, 203)),
    ("brown", Color::new(165, 42, 42)),
];

pub fn resolve_color(input: &str) -> Result<Color> {
    let name = input.to_lowercase();

    if let Some((_, color)) = NAMED_COLORS.iter().find(|(n, _)| *n == name) {
        return Ok(*color);
    }

    if let Some(hex) = input.strip_prefix('#') {
        return parse_hex_color(hex).ok_or_else(|| {
            WatermarkError::InvalidColor(format!("Invalid hex color: {}", input))
        });
    }

    Err(WatermarkError::InvalidColor(format!(
        "Unsupported color: {}. Known names: {}",
        input,
        NAMED_COLORS
            .iter()
            .map(|(n, _)| *n)
            .collect::<Vec<_>>()
            .join(", ")
    )))
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::new(r, g, b))
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

// Output directory lives next to the inputs: <base>/<basename>_watermark,
// where <base> is the input directory itself or a single file's parent.
pub fn output_dir_for(input_path: &Path) -> PathBuf {
    let base_dir = if input_path.is_file() {
        input_path.parent().unwrap_or_else(|| Path::new("."))
    } else {
        input_path
    };

    let dir_name = base_dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("images");

    base_dir.join(format!("{}_watermark", dir_name))
}

pub fn watermark_file_name(input_path: &Path) -> String {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");

    match input_path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{}_watermark.{}", stem, ext),
        None => format!("{}_watermark", stem),
    }
}
