// datemark/src/cli.rs
use crate::core::{Anchor, DateFallback};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "datemark",
    version,
    about = "Stamps photos with a watermark of their EXIF capture date"
)]
pub struct Cli {
    /// Image file or directory to watermark
    pub input_path: PathBuf,

    /// Font size in pixels
    #[arg(short = 's', long = "size", default_value_t = 20)]
    pub size: u32,

    /// Text color: a color name or #RRGGBB
    #[arg(short = 'c', long = "color", default_value = "white")]
    pub color: String,

    /// Watermark placement
    #[arg(short = 'p', long = "position", value_enum, default_value = "bottom-right")]
    pub position: Position,

    /// JPEG output quality (1-100)
    #[arg(short = 'q', long = "quality", default_value_t = 95)]
    pub quality: u8,

    /// What to do when a photo has no capture date
    #[arg(long = "on-missing-date", value_enum, default_value = "current-date")]
    pub on_missing_date: MissingDate,

    /// Path to a TTF/OTF font to use instead of the bundled one
    #[arg(long = "font")]
    pub font: Option<PathBuf>,

    /// Worker threads for batch processing (0 = shared pool)
    #[arg(long = "threads", default_value_t = 0)]
    pub threads: usize,

    /// Show debug-level log output
    #[arg(long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl From<Position> for Anchor {
    fn from(position: Position) -> Self {
        match position {
            Position::TopLeft => Anchor::TopLeft,
            Position::TopRight => Anchor::TopRight,
            Position::BottomLeft => Anchor::BottomLeft,
            Position::BottomRight => Anchor::BottomRight,
            Position::Center => Anchor::Center,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingDate {
    CurrentDate,
    Skip,
}

impl From<MissingDate> for DateFallback {
    fn from(policy: MissingDate) -> Self {
        match policy {
            MissingDate::CurrentDate => DateFallback::CurrentDate,
            MissingDate::Skip => DateFallback::Skip,
        }
    }
}
