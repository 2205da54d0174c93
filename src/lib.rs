mod cli;
mod core;
mod processors;
mod utils;

pub use crate::cli::{Cli, MissingDate, Position};
pub use crate::core::processor::WatermarkProcessor;
pub use crate::core::{
    Anchor, Color, DateFallback, FileOutcome, ProcessingSummary, Result, WatermarkConfig,
    WatermarkError,
};
pub use crate::processors::{
    calculate_position, BatchProcessor, CaptureDateReader, FontResolver, Loader,
    WatermarkRenderer, Writer,
};
pub use crate::utils::{
    is_supported_image, output_dir_for, resolve_color, watermark_file_name, IMAGE_EXTENSIONS,
};

pub mod prelude {
    pub use crate::{
        Anchor, BatchProcessor, Color, DateFallback, ProcessingSummary, WatermarkConfig,
        WatermarkProcessor,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
