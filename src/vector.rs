//! SVG output for glyphs.
//!
//! Each stroke becomes one `<line>` inside a group that carries the shared
//! stroke styling, so the document stays readable and easy to restyle.

use svg::Document;
use svg::node::element::{Group, Line, Rectangle};
use tracing::debug;

use crate::color::Color;
use crate::core::Glyph;
use crate::frame::Frame;

/// Options controlling SVG output.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Canvas width in px. Default: 200.
    pub width: u32,
    /// Canvas height in px. Default: 280.
    pub height: u32,
    /// Empty border around the glyph in px. Default: 10.
    pub padding: u32,
    /// Line width in px. Default: 10.
    pub stroke_width: u32,
    pub stroke_color: Color,
    /// Optional background fill; transparent when `None`.
    pub background: Option<Color>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 200,
            height: 280,
            padding: 10,
            stroke_width: 10,
            stroke_color: Color::BLACK,
            background: None,
        }
    }
}

impl SvgOptions {
    pub fn frame(&self) -> Frame {
        Frame::padded(self.width, self.height, self.padding)
    }
}

/// Build the SVG document for `glyph`.
#[must_use]
pub fn render_svg(glyph: &Glyph, opts: &SvgOptions) -> Document {
    let frame = opts.frame();
    let mut strokes = Group::new()
        .set("fill", "none")
        .set("stroke", opts.stroke_color.to_string())
        .set("stroke-width", opts.stroke_width)
        .set("stroke-linecap", "round");

    for stroke in glyph.iter() {
        let ((x1, y1), (x2, y2)) = frame.stroke(stroke);
        strokes = strokes.add(
            Line::new()
                .set("x1", fmt_px(x1))
                .set("y1", fmt_px(y1))
                .set("x2", fmt_px(x2))
                .set("y2", fmt_px(y2)),
        );
    }
    debug!(
        number = glyph.number(),
        lines = glyph.stroke_count(),
        "built svg document"
    );

    let mut doc = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("viewBox", format!("0 0 {} {}", opts.width, opts.height))
        .set("width", opts.width)
        .set("height", opts.height);
    if let Some(background) = opts.background {
        doc = doc.add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", background.to_string()),
        );
    }
    doc.add(strokes)
}

/// Render `glyph` straight to SVG markup.
#[must_use]
pub fn render_svg_string(glyph: &Glyph, opts: &SvgOptions) -> String {
    render_svg(glyph, opts).to_string()
}

fn fmt_px(v: f32) -> String {
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn svg_for(n: i64, opts: &SvgOptions) -> String {
        render_svg_string(&Glyph::from_number(n).unwrap(), opts)
    }

    #[test]
    fn one_line_per_stroke() {
        for n in [0, 1234, 9999] {
            let glyph = Glyph::from_number(n).unwrap();
            let markup = render_svg_string(&glyph, &SvgOptions::default());
            assert_eq!(markup.matches("<line").count(), glyph.stroke_count());
        }
    }

    #[test]
    fn stem_uses_padded_canvas() {
        let markup = svg_for(0, &SvgOptions::default());
        assert!(markup.contains(r#"x1="100""#), "{markup}");
        assert!(markup.contains(r#"y1="10""#), "{markup}");
        assert!(markup.contains(r#"y2="270""#), "{markup}");
        assert!(markup.contains(r#"viewBox="0 0 200 280""#), "{markup}");
    }

    #[test]
    fn styling_is_applied_to_the_group() {
        let opts = SvgOptions {
            stroke_width: 4,
            stroke_color: "#c00".parse().unwrap(),
            background: Some(Color::WHITE),
            ..SvgOptions::default()
        };
        let markup = svg_for(42, &opts);
        assert!(markup.contains(r##"stroke="#cc0000""##), "{markup}");
        assert!(markup.contains(r#"stroke-width="4""#), "{markup}");
        assert!(markup.contains(r##"fill="#ffffff""##), "{markup}");
        assert!(markup.contains("<rect"), "{markup}");
    }

    #[test]
    fn trims_pixel_values() {
        assert_eq!(fmt_px(100.0), "100");
        assert_eq!(fmt_px(66.666), "66.67");
        assert_eq!(fmt_px(12.5), "12.5");
    }
}
