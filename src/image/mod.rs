//! Raster output of glyphs and reading them back.

pub mod paint;
pub mod read;
pub mod stamp;

pub use paint::{ImageRenderOptions, RenderError, render_glyph_image};
pub use read::{Layout, ReadError, flatten_onto_white, read_glyph};
pub use stamp::{STAMP_SIZE, StampOptions, stamp_glyph};
