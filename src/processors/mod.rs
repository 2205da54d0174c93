// datemark/src/processors/mod.rs
mod batch;
mod font;
mod loader;
mod metadata;
mod renderer;
mod writer;

pub use batch::BatchProcessor;
pub use font::{FontResolver, FontSource};
pub use loader::Loader;
pub use metadata::CaptureDateReader;
pub use renderer::{calculate_position, WatermarkRenderer};
pub use writer::Writer;

pub mod prelude {
    pub use super::{BatchProcessor, CaptureDateReader, FontResolver, Loader, WatermarkRenderer, Writer};
}
