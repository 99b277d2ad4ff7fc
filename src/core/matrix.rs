//! Per-digit pixel matrices derived from the stroke table.
//!
//! Each matrix covers the units quadrant: column 0 is the stem, rows grow away
//! from the glyph edge. Stamping a matrix into another quadrant is a pixel flip.

use std::sync::LazyLock;

use image::{GrayImage, Luma};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::core::digits::Digit;
use crate::core::strokes::{GRID, Mirror, Place, Point, place_strokes};

/// Side of a digit matrix in pixels.
pub const MATRIX_SIZE: usize = 16;
/// Pixels per lattice cell inside a matrix.
const CELL_PX: u8 = (MATRIX_SIZE as u8 - 1) / (GRID / 2);

const INK: Luma<u8> = Luma([0]);
const PAPER: Luma<u8> = Luma([255]);

static MATRICES: LazyLock<[DigitMatrix; 10]> = LazyLock::new(|| {
    let mut digits = Digit::all();
    std::array::from_fn(|_| DigitMatrix::rasterize(digits.next().unwrap_or_default()))
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitMatrix {
    rows: [[bool; MATRIX_SIZE]; MATRIX_SIZE],
}

impl DigitMatrix {
    /// The shared matrix for `digit`.
    pub fn for_digit(digit: Digit) -> &'static DigitMatrix {
        &MATRICES[usize::from(digit.value())]
    }

    /// Draw the stem and the units strokes of `digit` into a fresh matrix.
    pub fn rasterize(digit: Digit) -> Self {
        let size = MATRIX_SIZE as u32;
        let mut canvas = GrayImage::from_pixel(size, size, PAPER);
        draw_filled_rect_mut(&mut canvas, Rect::at(0, 0).of_size(1, size), INK);
        for stroke in place_strokes(Place::Units, digit) {
            draw_line_segment_mut(
                &mut canvas,
                to_cell(stroke.start()),
                to_cell(stroke.end()),
                INK,
            );
        }

        let mut rows = [[false; MATRIX_SIZE]; MATRIX_SIZE];
        for (x, y, pixel) in canvas.enumerate_pixels() {
            rows[y as usize][x as usize] = pixel.0[0] < 128;
        }
        Self { rows }
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.rows[y][x]
    }

    /// Pixel at `(x, y)` after applying `mirror` to the whole matrix.
    pub fn get_mirrored(&self, x: usize, y: usize, mirror: Mirror) -> bool {
        let sx = if mirror.horizontal { MATRIX_SIZE - 1 - x } else { x };
        let sy = if mirror.vertical { MATRIX_SIZE - 1 - y } else { y };
        self.rows[sy][sx]
    }

    pub fn ink_count(&self) -> usize {
        self.rows.iter().flatten().filter(|p| **p).count()
    }

    /// Render as rows of `#` and `.`.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((MATRIX_SIZE + 1) * MATRIX_SIZE);
        for row in &self.rows {
            out.extend(row.iter().map(|on| if *on { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}

fn to_cell(point: Point) -> (f32, f32) {
    let x = (point.x - GRID / 2) * CELL_PX;
    let y = point.y * CELL_PX;
    (f32::from(x), f32::from(y))
}
