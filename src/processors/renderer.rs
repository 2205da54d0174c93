// datemark/src/processors/renderer.rs
use crate::core::{Anchor, Color};
use ab_glyph::{FontArc, PxScale};
use image::{DynamicImage, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

const EDGE_PADDING: i32 = 20;

// Pure placement math. Oversized text is allowed to produce negative
// coordinates; the draw call clips to the canvas.
pub fn calculate_position(
    image_width: u32,
    image_height: u32,
    text_width: u32,
    text_height: u32,
    anchor: Anchor,
) -> (i32, i32) {
    let img_w = image_width as i32;
    let img_h = image_height as i32;
    let text_w = text_width as i32;
    let text_h = text_height as i32;

    match anchor {
        Anchor::TopLeft => (EDGE_PADDING, EDGE_PADDING),
        Anchor::TopRight => (img_w - text_w - EDGE_PADDING, EDGE_PADDING),
        Anchor::BottomLeft => (EDGE_PADDING, img_h - text_h - EDGE_PADDING),
        Anchor::BottomRight => (
            img_w - text_w - EDGE_PADDING,
            img_h - text_h - EDGE_PADDING,
        ),
        Anchor::Center => ((img_w - text_w) / 2, (img_h - text_h) / 2),
    }
}

pub struct WatermarkRenderer {
    font: FontArc,
    font_size: u32,
    color: Color,
}

impl WatermarkRenderer {
    pub fn new(font: FontArc, font_size: u32, color: Color) -> Self {
        Self {
            font,
            font_size,
            color,
        }
    }

    pub fn render(&self, image: &DynamicImage, text: &str, anchor: Anchor) -> RgbImage {
        // Normalize palette/gray/alpha sources to plain RGB before drawing.
        let mut canvas = image.to_rgb8();

        let scale = PxScale::from(self.font_size as f32);
        let (text_width, text_height) = text_size(scale, &self.font, text);

        let (x, y) = calculate_position(
            canvas.width(),
            canvas.height(),
            text_width,
            text_height,
            anchor,
        );

        log::debug!(
            "Drawing '{}' at ({}, {}), text box {}x{}",
            text,
            x,
            y,
            text_width,
            text_height
        );

        // Legibility shadow goes down first, one pixel offset.
        draw_text_mut(
            &mut canvas,
            self.color.shadow().into(),
            x + 1,
            y + 1,
            scale,
            &self.font,
            text,
        );
        draw_text_mut(&mut canvas, self.color.into(), x, y, scale, &self.font, text);

        canvas
    }
}
