use crate::core::Stroke;

/// Pixel rectangle the glyph's unit square is mapped onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    /// The canvas minus an even `padding` on every side.
    pub fn padded(canvas_width: u32, canvas_height: u32, padding: u32) -> Self {
        let pad = padding as f32;
        Self {
            left: pad,
            top: pad,
            width: (canvas_width as f32 - 2.0 * pad).max(1.0),
            height: (canvas_height as f32 - 2.0 * pad).max(1.0),
        }
    }

    pub fn to_pixel(&self, (x, y): (f32, f32)) -> (f32, f32) {
        (self.left + x * self.width, self.top + y * self.height)
    }

    /// Stroke endpoints in pixel space.
    pub fn stroke(&self, stroke: Stroke) -> ((f32, f32), (f32, f32)) {
        (
            self.to_pixel(stroke.start().to_unit()),
            self.to_pixel(stroke.end().to_unit()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn padded_frame_maps_corners() {
        let frame = Frame::padded(200, 280, 10);
        assert_eq!(frame.to_pixel((0.0, 0.0)), (10.0, 10.0));
        assert_eq!(frame.to_pixel((1.0, 1.0)), (190.0, 270.0));
        assert_eq!(frame.stroke(Stroke::STEM), ((100.0, 10.0), (100.0, 270.0)));
    }
}
