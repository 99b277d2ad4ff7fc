use std::fmt;

use crate::core::{GRID, Glyph, Point, Stroke};

/// Character cells per lattice cell.
const SCALE: i32 = 2;
/// Rows and columns of the text grid.
pub const TEXT_SIDE: usize = GRID as usize * SCALE as usize + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    /// `|`, `-`, `/`, `\` for strokes and `+` where different strokes meet
    #[default]
    Ascii,
    /// Use '█' for every inked cell
    Blocks,
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextStyle::Ascii => write!(f, "ascii"),
            TextStyle::Blocks => write!(f, "blocks"),
        }
    }
}

/// Draw the glyph on a `TEXT_SIDE` x `TEXT_SIDE` character grid, one line per row.
pub fn render_text(glyph: &Glyph, style: TextStyle) -> String {
    let mut grid = [[' '; TEXT_SIDE]; TEXT_SIDE];
    for stroke in glyph.iter() {
        plot(&mut grid, stroke);
    }

    let mut out = String::with_capacity((TEXT_SIDE + 1) * TEXT_SIDE * 3);
    for row in &grid {
        for &cell in row {
            out.push(match style {
                TextStyle::Ascii => cell,
                TextStyle::Blocks if cell == ' ' => ' ',
                TextStyle::Blocks => '█',
            });
        }
        out.push('\n');
    }
    out
}

fn plot(grid: &mut [[char; TEXT_SIDE]; TEXT_SIDE], stroke: Stroke) {
    let (x0, y0) = scaled(stroke.start());
    let (x1, y1) = scaled(stroke.end());
    let (dx, dy) = (x1 - x0, y1 - y0);
    let mark = match (dx.signum(), dy.signum()) {
        (0, _) => '|',
        (_, 0) => '-',
        (sx, sy) if sx == sy => '\\',
        _ => '/',
    };

    let steps = dx.abs().max(dy.abs());
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = (x0 as f32 + dx as f32 * t).round() as usize;
        let y = (y0 as f32 + dy as f32 * t).round() as usize;
        let cell = &mut grid[y][x];
        *cell = match *cell {
            ' ' => mark,
            existing if existing == mark => mark,
            _ => '+',
        };
    }
}

fn scaled(point: Point) -> (i32, i32) {
    (i32::from(point.x) * SCALE, i32::from(point.y) * SCALE)
}
