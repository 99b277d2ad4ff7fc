//! Stroke geometry and the canonical digit table.
//!
//! Coordinates live on an exact lattice of `GRID x GRID` cells with y growing
//! downward. The stem runs down the middle column; every digit occupies the outer
//! third of the height in its quadrant and reaches from the stem to the edge.
//! Only the units quadrant is tabulated. The other places are reflections of it.

use std::fmt;

use crate::core::digits::Digit;

/// Lattice cells per side of the glyph square.
pub const GRID: u8 = 6;
const MID: u8 = GRID / 2;
/// Depth of a digit's strokes measured from the glyph edge.
const DEPTH: u8 = GRID / 3;

/// A lattice point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub fn mirrored(self, mirror: Mirror) -> Self {
        Self {
            x: if mirror.horizontal { GRID - self.x } else { self.x },
            y: if mirror.vertical { GRID - self.y } else { self.y },
        }
    }

    /// Position in the normalized unit square.
    pub fn to_unit(self) -> (f32, f32) {
        (
            f32::from(self.x) / f32::from(GRID),
            f32::from(self.y) / f32::from(GRID),
        )
    }
}

/// A straight segment between two lattice points.
///
/// Endpoints are kept in ascending order so two strokes covering the same
/// segment compare equal regardless of drawing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stroke {
    start: Point,
    end: Point,
}

impl Stroke {
    /// The spine shared by every glyph.
    pub const STEM: Stroke = Stroke {
        start: Point::new(MID, 0),
        end: Point::new(MID, GRID),
    };

    pub fn new(a: Point, b: Point) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn mirrored(self, mirror: Mirror) -> Self {
        Self::new(self.start.mirrored(mirror), self.end.mirrored(mirror))
    }

    /// `[x0, y0, x1, y1]` in the normalized unit square.
    pub fn to_unit(self) -> [f32; 4] {
        let (x0, y0) = self.start.to_unit();
        let (x1, y1) = self.end.to_unit();
        [x0, y0, x1, y1]
    }

    /// Point at parameter `t` along the stroke, in unit coordinates.
    pub fn lerp_unit(self, t: f32) -> (f32, f32) {
        let [x0, y0, x1, y1] = self.to_unit();
        (x0 + (x1 - x0) * t, y0 + (y1 - y0) * t)
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x0, y0, x1, y1] = self.to_unit();
        write!(f, "({x0:.3}, {y0:.3}) -> ({x1:.3}, {y1:.3})")
    }
}

/// Reflections applied to the units table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mirror {
    /// Reflect across the stem (x -> 1 - x).
    pub horizontal: bool,
    /// Reflect across the horizontal midline (y -> 1 - y).
    pub vertical: bool,
}

/// Decimal place of a digit, which fixes its quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Place {
    Units,
    Tens,
    Hundreds,
    Thousands,
}

impl Place {
    pub const ALL: [Place; 4] = [Place::Units, Place::Tens, Place::Hundreds, Place::Thousands];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn weight(self) -> u16 {
        match self {
            Place::Units => 1,
            Place::Tens => 10,
            Place::Hundreds => 100,
            Place::Thousands => 1000,
        }
    }

    pub fn mirror(self) -> Mirror {
        match self {
            Place::Units => Mirror::default(),
            Place::Tens => Mirror {
                horizontal: true,
                vertical: false,
            },
            Place::Hundreds => Mirror {
                horizontal: false,
                vertical: true,
            },
            Place::Thousands => Mirror {
                horizontal: true,
                vertical: true,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Place::Units => "units",
            Place::Tens => "tens",
            Place::Hundreds => "hundreds",
            Place::Thousands => "thousands",
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Elementary strokes of the units quadrant.
///
/// `S0`/`S1` are the stem at the glyph edge and at the quadrant's inner edge,
/// `O0`/`O1` the matching points at the outer side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// S0-O0, horizontal along the glyph edge.
    OuterBar,
    /// S1-O1, horizontal along the quadrant's inner edge.
    InnerBar,
    /// S0-O1.
    Diagonal,
    /// S1-O0.
    AntiDiagonal,
    /// O0-O1, vertical at the outer side.
    Upright,
}

const S0: Point = Point::new(MID, 0);
const S1: Point = Point::new(MID, DEPTH);
const O0: Point = Point::new(GRID, 0);
const O1: Point = Point::new(GRID, DEPTH);

impl Segment {
    pub const ALL: [Segment; 5] = [
        Segment::OuterBar,
        Segment::InnerBar,
        Segment::Diagonal,
        Segment::AntiDiagonal,
        Segment::Upright,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The segment as drawn in the units quadrant.
    pub fn units_stroke(self) -> Stroke {
        match self {
            Segment::OuterBar => Stroke::new(S0, O0),
            Segment::InnerBar => Stroke::new(S1, O1),
            Segment::Diagonal => Stroke::new(S0, O1),
            Segment::AntiDiagonal => Stroke::new(S1, O0),
            Segment::Upright => Stroke::new(O0, O1),
        }
    }

    pub fn stroke(self, place: Place) -> Stroke {
        self.units_stroke().mirrored(place.mirror())
    }
}

#[rustfmt::skip]
const DIGIT_SEGMENTS: [&[Segment]; 10] = [
    &[],
    &[Segment::OuterBar],
    &[Segment::InnerBar],
    &[Segment::Diagonal],
    &[Segment::AntiDiagonal],
    &[Segment::OuterBar, Segment::AntiDiagonal],
    &[Segment::Upright],
    &[Segment::OuterBar, Segment::Upright],
    &[Segment::InnerBar, Segment::Upright],
    &[Segment::OuterBar, Segment::InnerBar, Segment::Upright],
];

/// Segments that spell `digit`; empty for zero.
pub fn segments(digit: Digit) -> &'static [Segment] {
    DIGIT_SEGMENTS[usize::from(digit.value())]
}

/// Strokes contributed by `digit` when written in `place`.
pub fn place_strokes(place: Place, digit: Digit) -> Vec<Stroke> {
    segments(digit)
        .iter()
        .map(|segment| segment.stroke(place))
        .collect()
}
