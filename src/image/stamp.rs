//! Glyphs assembled from the per-digit pixel matrices.
//!
//! The four matrices are stamped into a `2 * MATRIX_SIZE` square: units
//! top-right as-is, tens top-left flipped horizontally, hundreds bottom-right
//! flipped vertically, thousands bottom-left flipped both ways.

use image::{GrayImage, Luma};
use tracing::debug;

use crate::core::{DigitMatrix, Digits, MATRIX_SIZE, Place};
use crate::frame::Frame;
use crate::image::read::Layout;

/// Side of an unscaled stamped glyph in pixels.
pub const STAMP_SIZE: u32 = 2 * MATRIX_SIZE as u32;
const MAX_SCALE: u32 = 64;

/// Options for stamped output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StampOptions {
    /// Integer upscaling factor, clamped to 1..=64.
    pub scale: u32,
}

impl Default for StampOptions {
    fn default() -> Self {
        Self { scale: 1 }
    }
}

impl StampOptions {
    fn scale(&self) -> u32 {
        self.scale.clamp(1, MAX_SCALE)
    }

    /// Where a reader finds the glyph in a stamped image.
    ///
    /// Lattice lines fall on pixel centres, so the frame is inset by half a
    /// matrix pixel and spans one pixel less than the image.
    pub fn layout(&self) -> Layout {
        let s = self.scale() as f32;
        let side = (STAMP_SIZE - 1) as f32 * s;
        Layout {
            frame: Frame {
                left: 0.5 * s,
                top: 0.5 * s,
                width: side,
                height: side,
            },
            tolerance: self.scale(),
        }
    }
}

/// Top-left pixel of each place's quadrant.
fn origin(place: Place) -> (u32, u32) {
    let cell = MATRIX_SIZE as u32;
    match place {
        Place::Units => (cell, 0),
        Place::Tens => (0, 0),
        Place::Hundreds => (cell, cell),
        Place::Thousands => (0, cell),
    }
}

/// Stamp the four digit matrices into one grayscale glyph.
pub fn stamp_glyph(digits: Digits, options: &StampOptions) -> GrayImage {
    let mut image = GrayImage::from_pixel(STAMP_SIZE, STAMP_SIZE, Luma([255]));
    for (place, digit) in digits.iter() {
        let matrix = DigitMatrix::for_digit(digit);
        let mirror = place.mirror();
        let (ox, oy) = origin(place);
        for y in 0..MATRIX_SIZE {
            for x in 0..MATRIX_SIZE {
                if matrix.get_mirrored(x, y, mirror) {
                    image.put_pixel(ox + x as u32, oy + y as u32, Luma([0]));
                }
            }
        }
    }

    let scale = options.scale();
    debug!(digits = %digits, scale, "stamped glyph");
    if scale == 1 {
        return image;
    }
    GrayImage::from_fn(STAMP_SIZE * scale, STAMP_SIZE * scale, |x, y| {
        *image.get_pixel(x / scale, y / scale)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decompose;
    use pretty_assertions::assert_eq;

    fn inked(image: &GrayImage, x: u32, y: u32) -> bool {
        image.get_pixel(x, y).0[0] < 128
    }

    #[test]
    fn quadrants_follow_their_mirrors() {
        let digits = decompose(1234).unwrap();
        let image = stamp_glyph(digits, &StampOptions::default());
        let cell = MATRIX_SIZE as u32;
        for place in Place::ALL {
            let matrix = DigitMatrix::for_digit(digits.get(place));
            let (ox, oy) = origin(place);
            let mirror = place.mirror();
            for y in 0..MATRIX_SIZE {
                for x in 0..MATRIX_SIZE {
                    let sx = if mirror.horizontal { cell as usize - 1 - x } else { x };
                    let sy = if mirror.vertical { cell as usize - 1 - y } else { y };
                    assert_eq!(
                        inked(&image, ox + x as u32, oy + y as u32),
                        matrix.get(sx, sy),
                        "{place} at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn zero_is_a_two_pixel_stem() {
        let image = stamp_glyph(decompose(0).unwrap(), &StampOptions::default());
        assert_eq!(image.dimensions(), (STAMP_SIZE, STAMP_SIZE));
        for (x, y, pixel) in image.enumerate_pixels() {
            let stem = x == 15 || x == 16;
            assert_eq!(pixel.0[0] < 128, stem, "({x}, {y})");
        }
    }

    #[test]
    fn scaling_repeats_pixels() {
        let digits = decompose(9938).unwrap();
        let small = stamp_glyph(digits, &StampOptions::default());
        let big = stamp_glyph(digits, &StampOptions { scale: 4 });
        assert_eq!(big.dimensions(), (STAMP_SIZE * 4, STAMP_SIZE * 4));
        for (x, y, pixel) in small.enumerate_pixels() {
            assert_eq!(big.get_pixel(x * 4 + 2, y * 4 + 1), pixel);
        }
    }

    #[test]
    fn layout_spans_the_lattice() {
        let layout = StampOptions { scale: 2 }.layout();
        assert_eq!(layout.frame.to_pixel((0.0, 0.0)), (1.0, 1.0));
        assert_eq!(layout.frame.to_pixel((1.0, 1.0)), (63.0, 63.0));
        assert_eq!(layout.tolerance, 2);
    }
}
