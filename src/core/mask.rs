use std::fmt;

use crate::core::digits::Digit;
use crate::core::strokes::{Place, Segment, segments};

const SEGMENTS_PER_PLACE: usize = Segment::ALL.len();
const STEM_BIT: usize = SEGMENTS_PER_PLACE * Place::ALL.len();

/// Every drawable segment of a glyph as one bitmask.
/// Bit meaning (LSB -> MSB): five segment bits per place, units first
/// (`place * 5 + segment`), then bit 20 for the stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SegmentMask(pub u32);

impl SegmentMask {
    pub const STEM: SegmentMask = SegmentMask(1 << STEM_BIT);

    pub fn segment(place: Place, segment: Segment) -> Self {
        SegmentMask(1 << (place.index() * SEGMENTS_PER_PLACE + segment.index()))
    }

    pub fn has_stem(self) -> bool {
        self.0 & Self::STEM.0 != 0
    }

    pub fn contains(self, place: Place, segment: Segment) -> bool {
        self.0 & Self::segment(place, segment).0 != 0
    }

    /// The five bits belonging to `place`.
    pub fn place(self, place: Place) -> DigitMask {
        let shift = place.index() * SEGMENTS_PER_PLACE;
        DigitMask(((self.0 >> shift) & DigitMask::ALL.0 as u32) as u8)
    }
}

impl std::ops::BitOr for SegmentMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        SegmentMask(self.0 | rhs.0)
    }
}

impl fmt::Display for SegmentMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#023b}", self.0)
    }
}

/// Segments of one place, bit `segment.index()` per drawn segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitMask(pub u8);

impl DigitMask {
    pub const ALL: DigitMask = DigitMask((1 << SEGMENTS_PER_PLACE) - 1);

    pub fn of(digit: Digit) -> Self {
        segments(digit)
            .iter()
            .fold(DigitMask(0), |mask, segment| mask.with(*segment))
    }

    pub fn with(self, segment: Segment) -> Self {
        DigitMask(self.0 | 1 << segment.index())
    }

    /// The digit spelled by exactly these segments, if any.
    pub fn digit(self) -> Option<Digit> {
        Digit::all().find(|digit| Self::of(*digit) == self)
    }
}

impl fmt::Display for DigitMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05b}", self.0)
    }
}
