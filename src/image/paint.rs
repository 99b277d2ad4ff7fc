use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use thiserror::Error;
use tracing::debug;

use crate::color::Color;
use crate::core::Glyph;
use crate::frame::Frame;
use crate::image::read::Layout;

const MIN_FRAME_PX: u32 = 8;
/// Largest canvas side in px.
pub const MAX_CANVAS_PX: u32 = 16_384;
const MAX_STROKE_WIDTH: u32 = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("canvas {width}x{height} leaves no room inside a {padding}px padding")]
    CanvasTooSmall { width: u32, height: u32, padding: u32 },
    #[error("canvas {width}x{height} exceeds the 16384px limit per side")]
    CanvasTooLarge { width: u32, height: u32 },
}

/// Options controlling PNG generation.
#[derive(Debug, Clone, Copy)]
pub struct ImageRenderOptions {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    /// Line width in px, clamped to 1..=64.
    pub stroke_width: u32,
    pub stroke_color: Color,
    pub background: Color,
}

impl Default for ImageRenderOptions {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            padding: 16,
            stroke_width: 10,
            stroke_color: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

impl ImageRenderOptions {
    pub fn frame(&self) -> Frame {
        Frame::padded(self.width, self.height, self.padding)
    }

    /// Where a reader finds the glyph in images painted with these options.
    pub fn layout(&self) -> Layout {
        Layout {
            frame: self.frame(),
            tolerance: 1,
        }
    }

    fn validate(&self) -> Result<(), RenderError> {
        if self.width > MAX_CANVAS_PX || self.height > MAX_CANVAS_PX {
            return Err(RenderError::CanvasTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        let inner = self.padding.saturating_mul(2).saturating_add(MIN_FRAME_PX);
        if self.width < inner || self.height < inner {
            return Err(RenderError::CanvasTooSmall {
                width: self.width,
                height: self.height,
                padding: self.padding,
            });
        }
        Ok(())
    }
}

/// Paint `glyph` onto a fresh canvas using the supplied options.
pub fn render_glyph_image(
    glyph: &Glyph,
    options: &ImageRenderOptions,
) -> Result<DynamicImage, RenderError> {
    options.validate()?;
    let width = options.stroke_width.clamp(1, MAX_STROKE_WIDTH);
    let ink = options.stroke_color.to_rgba();
    let frame = options.frame();

    let mut canvas: RgbaImage =
        ImageBuffer::from_pixel(options.width, options.height, options.background.to_rgba());
    for stroke in glyph.iter() {
        let (start, end) = frame.stroke(stroke);
        draw_thick_line(&mut canvas, start, end, width, ink);
    }
    debug!(
        number = glyph.number(),
        width = options.width,
        height = options.height,
        "painted glyph"
    );

    Ok(DynamicImage::ImageRgba8(canvas))
}

/// A `width`-px line with round caps: a filled quad plus a disc at each end.
fn draw_thick_line(
    image: &mut RgbaImage,
    start: (f32, f32),
    end: (f32, f32),
    width: u32,
    color: Rgba<u8>,
) {
    if width <= 1 {
        draw_line_segment_mut(image, start, end, color);
        return;
    }

    let half = width as f32 / 2.0;
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let len = dx.hypot(dy).max(f32::EPSILON);
    let (nx, ny) = (-dy / len * half, dx / len * half);
    let corner = |(x, y): (f32, f32), sign: f32| {
        Point::new((x + sign * nx).round() as i32, (y + sign * ny).round() as i32)
    };
    let quad = [
        corner(start, 1.0),
        corner(end, 1.0),
        corner(end, -1.0),
        corner(start, -1.0),
    ];
    draw_polygon_mut(image, &quad, color);

    let radius = half.round() as i32;
    for (x, y) in [start, end] {
        draw_filled_circle_mut(image, (x.round() as i32, y.round() as i32), radius, color);
    }
}
