//! Reading a number back out of a rendered glyph.
//!
//! Every catalog segment of every place is probed at two points along its
//! length. The probes avoid segment ends, where strokes meet the stem or each
//! other, and the crossing of the two diagonals at the middle.

use image::{DynamicImage, GrayImage, Luma};
use thiserror::Error;
use tracing::{debug, trace};

use crate::core::{DigitMask, Place, Segment, Stroke};
use crate::frame::Frame;

/// Luma below this counts as ink.
const INK_THRESHOLD: u8 = 128;
const PROBES: [f32; 2] = [0.3, 0.7];
/// Search radius for detected layouts. Detected frames are off by up to a
/// pixel; a radius that grows with stroke width reaches into neighbouring
/// strokes of thick glyphs.
const DETECTED_TOLERANCE: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("image contains no ink")]
    Blank,
    #[error("no stem found through the middle of the glyph")]
    NoStem,
    #[error("{place} quadrant shows segments {mask}, which spell no digit")]
    UnknownPattern { place: Place, mask: DigitMask },
}

/// Where to look for the glyph inside an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub frame: Frame,
    /// Search radius in px around each probe point.
    pub tolerance: u32,
}

impl Layout {
    /// Guess the layout of an unknown image from its ink.
    ///
    /// The stem is the only stroke crossing the middle row, so its run gives
    /// the stroke width. Every non-zero digit reaches the outer edge of its
    /// quadrant, which gives the horizontal extent.
    pub fn detect(image: &DynamicImage) -> Result<Self, ReadError> {
        let gray = flatten_onto_white(image);
        let (min_x, min_y, max_x, max_y) = ink_bounds(&gray).ok_or(ReadError::Blank)?;

        let mid_y = (min_y + max_y) / 2;
        let (run_start, run_end) = first_run(&gray, mid_y).ok_or(ReadError::NoStem)?;
        let half_stroke = (run_end - run_start + 1) as f32 / 2.0;
        let stem_x = (run_start + run_end) as f32 / 2.0;

        let top = min_y as f32 + half_stroke;
        let height = ((max_y - min_y) as f32 - 2.0 * half_stroke).max(1.0);
        let reach = (stem_x - min_x as f32).max(max_x as f32 - stem_x) - half_stroke;
        // A bare stem has no horizontal extent to measure; assume a square.
        let half_width = if reach > 2.0 * half_stroke {
            reach
        } else {
            height / 2.0
        };

        let layout = Layout {
            frame: Frame {
                left: stem_x - half_width,
                top,
                width: 2.0 * half_width,
                height,
            },
            tolerance: DETECTED_TOLERANCE,
        };
        debug!(?layout, "detected glyph layout");
        Ok(layout)
    }
}

/// Recover the number drawn in `image` at `layout`.
pub fn read_glyph(image: &DynamicImage, layout: &Layout) -> Result<u16, ReadError> {
    let gray = flatten_onto_white(image);
    if ink_bounds(&gray).is_none() {
        return Err(ReadError::Blank);
    }
    if !stroke_present(&gray, layout, Stroke::STEM, &[0.5]) {
        return Err(ReadError::NoStem);
    }

    let mut total = 0u16;
    for place in Place::ALL {
        let mask = Segment::ALL
            .into_iter()
            .filter(|segment| stroke_present(&gray, layout, segment.stroke(place), &PROBES))
            .fold(DigitMask(0), DigitMask::with);
        let digit = mask
            .digit()
            .ok_or(ReadError::UnknownPattern { place, mask })?;
        trace!(%place, %mask, %digit, "read quadrant");
        total += u16::from(digit.value()) * place.weight();
    }
    debug!(number = total, "read glyph");
    Ok(total)
}

/// Composite any alpha onto white and reduce to luma.
pub fn flatten_onto_white(image: &DynamicImage) -> GrayImage {
    let rgba = image.to_rgba8();
    GrayImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let luma = (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000;
        let alpha = u32::from(a);
        Luma([((luma * alpha + 255 * (255 - alpha)) / 255) as u8])
    })
}

fn is_ink(gray: &GrayImage, x: u32, y: u32) -> bool {
    gray.get_pixel(x, y).0[0] < INK_THRESHOLD
}

fn stroke_present(gray: &GrayImage, layout: &Layout, stroke: Stroke, probes: &[f32]) -> bool {
    probes.iter().all(|t| {
        let (x, y) = layout.frame.to_pixel(stroke.lerp_unit(*t));
        ink_near(gray, x.round() as i64, y.round() as i64, layout.tolerance)
    })
}

fn ink_near(gray: &GrayImage, x: i64, y: i64, radius: u32) -> bool {
    let r = i64::from(radius);
    let (w, h) = (i64::from(gray.width()), i64::from(gray.height()));
    let xs = (x - r).max(0)..=(x + r).min(w - 1);
    let ys = (y - r).max(0)..=(y + r).min(h - 1);
    ys.flat_map(|py| xs.clone().map(move |px| (px, py)))
        .any(|(px, py)| is_ink(gray, px as u32, py as u32))
}

fn ink_bounds(gray: &GrayImage) -> Option<(u32, u32, u32, u32)> {
    gray.enumerate_pixels()
        .filter(|(_, _, p)| p.0[0] < INK_THRESHOLD)
        .fold(None, |acc, (x, y, _)| match acc {
            None => Some((x, y, x, y)),
            Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
        })
}

fn first_run(gray: &GrayImage, y: u32) -> Option<(u32, u32)> {
    let start = (0..gray.width()).find(|x| is_ink(gray, *x, y))?;
    let end = (start..gray.width())
        .take_while(|x| is_ink(gray, *x, y))
        .last()
        .unwrap_or(start);
    Some((start, end))
}
