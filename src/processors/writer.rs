// datemark/src/processors/writer.rs
use crate::core::{Result, WatermarkError};
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};
use oxipng::{optimize_from_memory, Options};
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::Path;

pub struct Writer {
    quality: u8,
}

impl Writer {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn save(&self, image: &RgbImage, path: &Path) -> Result<()> {
        let format = self.detect_format(path);

        log::debug!(
            "Saving image to {} with format {:?}, quality: {}",
            path.display(),
            format,
            self.quality
        );

        match format {
            ImageFormat::Jpeg => self.save_jpeg(image, path)?,
            ImageFormat::Png => self.save_png(image, path)?,
            _ => self.save_generic(image, path, format)?,
        }

        self.log_save_result(path)
    }

    fn save_jpeg(&self, image: &RgbImage, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        let encoder = JpegEncoder::new_with_quality(writer, self.quality);
        image.write_with_encoder(encoder)?;

        Ok(())
    }

    fn save_png(&self, image: &RgbImage, path: &Path) -> Result<()> {
        // Encode to memory first, then run the lossless oxipng pass.
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png)?;

        let optimized = optimize_from_memory(&buffer.into_inner(), &Options::default())
            .map_err(|e| WatermarkError::Render(format!("PNG optimization failed: {}", e)))?;

        std::fs::write(path, optimized)?;

        Ok(())
    }

    fn save_generic(&self, image: &RgbImage, path: &Path, format: ImageFormat) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        image.write_to(&mut writer, format)?;

        Ok(())
    }

    fn detect_format(&self, path: &Path) -> ImageFormat {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("jpg") | Some("jpeg") => ImageFormat::Jpeg,
            Some("png") => ImageFormat::Png,
            Some("gif") => ImageFormat::Gif,
            Some("bmp") => ImageFormat::Bmp,
            Some("webp") => ImageFormat::WebP,
            Some("tiff") | Some("tif") => ImageFormat::Tiff,
            _ => ImageFormat::Jpeg,
        }
    }

    fn log_save_result(&self, path: &Path) -> Result<()> {
        let file_size = std::fs::metadata(path)?.len();
        log::info!("Saved image: {} ({} bytes)", path.display(), file_size);
        Ok(())
    }
}
