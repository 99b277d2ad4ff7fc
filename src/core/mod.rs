//! Core numeral model: digit decomposition, the stroke table and its derived encodings.

pub mod digits;
pub mod glyph;
pub mod mask;
pub mod matrix;
pub mod strokes;

pub use digits::{Digit, Digits, MAX_NUMBER, NumberError, RangeError, decompose, parse_number};
pub use glyph::{Glyph, build, place_subset};
pub use mask::{DigitMask, SegmentMask};
pub use matrix::{DigitMatrix, MATRIX_SIZE};
pub use strokes::{GRID, Mirror, Place, Point, Segment, Stroke, place_strokes, segments};
