// datemark/src/core/mod.rs
use std::path::PathBuf;
use thiserror::Error;

pub mod processor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFallback {
    CurrentDate,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // Shadow drawn under the text: black, unless the text itself is black.
    pub fn shadow(&self) -> Color {
        if *self == Color::new(0, 0, 0) {
            Color::new(255, 255, 255)
        } else {
            Color::new(0, 0, 0)
        }
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.r, color.g, color.b])
    }
}

#[derive(Debug, Clone)]
pub struct WatermarkConfig {
    pub font_size: u32,
    pub color: Color,
    pub anchor: Anchor,
    pub quality: u8,
    pub date_fallback: DateFallback,
    pub font_path: Option<PathBuf>,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            font_size: 20,
            color: Color::new(255, 255, 255),
            anchor: Anchor::BottomRight,
            quality: 95,
            date_fallback: DateFallback::CurrentDate,
            font_path: None,
        }
    }
}

impl WatermarkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.font_size == 0 || self.font_size > 500 {
            return Err(WatermarkError::InvalidParameter(
                "Font size must be between 1 and 500".to_string(),
            ));
        }

        if self.quality == 0 || self.quality > 100 {
            return Err(WatermarkError::InvalidParameter(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

// Per-file result the batch loop aggregates; a file without a capture
// date under the Skip policy is neither a success nor an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Written,
    SkippedNoDate,
}

#[derive(Debug, Default)]
pub struct ProcessingSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub skipped: usize,
    pub errors: Vec<(String, String)>,
    pub output_dir: PathBuf,
}

impl ProcessingSummary {
    pub fn is_success(&self) -> bool {
        self.succeeded > 0
    }
}

#[derive(Error, Debug)]
pub enum WatermarkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, WatermarkError>;
