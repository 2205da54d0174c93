// datemark/src/processors/font.rs
use crate::core::{Result, WatermarkError};
use ab_glyph::FontArc;
use std::path::PathBuf;

// Compiled into the binary so font resolution cannot come up empty.
static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

const SYSTEM_FONT_PATHS: [&str; 3] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Debug, Clone)]
pub enum FontSource {
    File(PathBuf),
    Bundled,
}

impl FontSource {
    fn load(&self) -> Result<FontArc> {
        match self {
            FontSource::File(path) => {
                let bytes = std::fs::read(path)?;
                FontArc::try_from_vec(bytes).map_err(|e| {
                    WatermarkError::Render(format!(
                        "Invalid font data in {}: {}",
                        path.display(),
                        e
                    ))
                })
            }
            FontSource::Bundled => FontArc::try_from_slice(BUNDLED_FONT)
                .map_err(|e| WatermarkError::Render(format!("Invalid bundled font: {}", e))),
        }
    }

    fn describe(&self) -> String {
        match self {
            FontSource::File(path) => path.display().to_string(),
            FontSource::Bundled => "bundled DejaVu Sans".to_string(),
        }
    }
}

// Ranked resolution: a user-supplied font first, then the bundled asset,
// then well-known system locations. The first source that loads wins.
pub struct FontResolver {
    sources: Vec<FontSource>,
}

impl FontResolver {
    pub fn new(custom_font: Option<PathBuf>) -> Self {
        let mut sources = Vec::new();

        if let Some(path) = custom_font {
            sources.push(FontSource::File(path));
        }

        sources.push(FontSource::Bundled);
        sources.extend(
            SYSTEM_FONT_PATHS
                .iter()
                .map(|path| FontSource::File(PathBuf::from(path))),
        );

        Self { sources }
    }

    pub fn resolve(&self) -> Result<FontArc> {
        for (rank, source) in self.sources.iter().enumerate() {
            match source.load() {
                Ok(font) => {
                    log::debug!("Using font: {}", source.describe());
                    return Ok(font);
                }
                Err(e) => {
                    // A missing user-supplied font warns; probing misses stay at debug.
                    if rank == 0 && matches!(source, FontSource::File(_)) {
                        log::warn!("Could not load font {}: {}", source.describe(), e);
                    } else {
                        log::debug!("Font candidate {} unavailable: {}", source.describe(), e);
                    }
                }
            }
        }

        Err(WatermarkError::Render(
            "No usable font could be loaded".to_string(),
        ))
    }
}
