// datemark/src/core/processor.rs
use super::{DateFallback, FileOutcome, Result, WatermarkConfig};
use crate::processors::{CaptureDateReader, FontResolver, Loader, WatermarkRenderer, Writer};
use std::path::Path;

pub struct WatermarkProcessor {
    config: WatermarkConfig,
    loader: Loader,
    date_reader: CaptureDateReader,
    renderer: WatermarkRenderer,
    writer: Writer,
}

impl WatermarkProcessor {
    pub fn new(config: WatermarkConfig) -> Result<Self> {
        config.validate()?;

        let font = FontResolver::new(config.font_path.clone()).resolve()?;
        let renderer = WatermarkRenderer::new(font, config.font_size, config.color);
        let writer = Writer::new(config.quality);

        Ok(Self {
            config,
            loader: Loader::new(),
            date_reader: CaptureDateReader::new(),
            renderer,
            writer,
        })
    }

    pub fn process<P: AsRef<Path>>(&self, input_path: P, output_path: P) -> Result<FileOutcome> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        // The Skip policy can end the file before the image is even decoded.
        let text = match self.watermark_text(input_path) {
            Some(text) => text,
            None => return Ok(FileOutcome::SkippedNoDate),
        };

        let image = self.loader.load(input_path)?;
        let stamped = self.renderer.render(&image, &text, self.config.anchor);
        self.writer.save(&stamped, output_path)?;

        Ok(FileOutcome::Written)
    }

    fn watermark_text(&self, input_path: &Path) -> Option<String> {
        if let Some(date) = self.date_reader.read_capture_date(input_path) {
            return Some(date);
        }

        match self.config.date_fallback {
            DateFallback::CurrentDate => {
                log::warn!(
                    "No capture date in {}, using current date",
                    input_path.display()
                );
                Some(chrono::Local::now().format("%Y:%m:%d").to_string())
            }
            DateFallback::Skip => {
                log::warn!("No capture date in {}, skipping", input_path.display());
                None
            }
        }
    }
}
