//! Cistercian numerals: glyph construction, rendering and recognition.
//!
//! A number in `0..=9999` becomes a [`Glyph`]: a shared vertical stem plus
//! the strokes of each non-zero digit, placed in the quadrant of its place
//! value. Glyphs render to text, SVG and PNG, and painted or stamped PNGs can
//! be read back into numbers.

pub mod batch;
pub mod color;
pub mod core;
pub mod frame;
pub mod image;
pub mod text;
pub mod vector;

pub use crate::batch::{Manifest, ManifestEntry, OutputForm, render_batch};
pub use crate::color::{Color, ColorError};
pub use crate::core::{
    Digit, DigitMask, DigitMatrix, Digits, Glyph, MAX_NUMBER, NumberError, Place, RangeError,
    SegmentMask, Stroke, decompose, parse_number,
};
pub use crate::image::{
    ImageRenderOptions, Layout, ReadError, RenderError, StampOptions, read_glyph,
    render_glyph_image, stamp_glyph,
};
pub use crate::text::{TextStyle, render_text};
pub use crate::vector::{SvgOptions, render_svg, render_svg_string};
