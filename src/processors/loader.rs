// datemark/src/processors/loader.rs
use crate::core::{Result, WatermarkError};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        self.validate_path(path)?;

        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| {
                WatermarkError::Render(format!("Failed to decode image: {}", e))
            })?;

        let (width, height) = image.dimensions();
        log::debug!(
            "Loaded image: {}x{} pixels, color type: {:?}",
            width,
            height,
            image.color()
        );

        Ok(image)
    }

    fn validate_path(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(WatermarkError::PathNotFound(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let metadata = path.metadata()?;
        if metadata.len() == 0 {
            return Err(WatermarkError::InvalidParameter(format!(
                "File is empty: {}",
                path.display()
            )));
        }

        Ok(())
    }
}
