use std::collections::BTreeSet;

use crate::core::digits::{Digits, RangeError, decompose};
use crate::core::mask::SegmentMask;
use crate::core::strokes::{Place, Stroke, segments};

/// A complete numeral: the stem plus every stroke of its non-zero digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    digits: Digits,
    strokes: BTreeSet<Stroke>,
    mask: SegmentMask,
}

impl Glyph {
    /// Decompose `n` and build its glyph.
    pub fn from_number(n: i64) -> Result<Self, RangeError> {
        decompose(n).map(build)
    }

    pub fn digits(&self) -> Digits {
        self.digits
    }

    pub fn number(&self) -> u16 {
        self.digits.value()
    }

    pub fn stem(&self) -> Stroke {
        Stroke::STEM
    }

    /// Quadrant strokes, excluding the stem.
    pub fn strokes(&self) -> &BTreeSet<Stroke> {
        &self.strokes
    }

    /// Stem first, then the quadrant strokes.
    pub fn iter(&self) -> impl Iterator<Item = Stroke> + '_ {
        std::iter::once(Stroke::STEM).chain(self.strokes.iter().copied())
    }

    /// Number of strokes including the stem.
    pub fn stroke_count(&self) -> usize {
        1 + self.strokes.len()
    }

    pub fn mask(&self) -> SegmentMask {
        self.mask
    }
}

/// Assemble the glyph for four place digits.
pub fn build(digits: Digits) -> Glyph {
    let mut strokes = BTreeSet::new();
    let mut mask = SegmentMask::STEM;
    for (place, digit) in digits.iter().filter(|(_, digit)| !digit.is_zero()) {
        for &segment in segments(digit) {
            strokes.insert(segment.stroke(place));
            mask = mask | SegmentMask::segment(place, segment);
        }
    }
    Glyph {
        digits,
        strokes,
        mask,
    }
}

/// Strokes that `place` contributes to `glyph`.
pub fn place_subset(glyph: &Glyph, place: Place) -> BTreeSet<Stroke> {
    segments(glyph.digits.get(place))
        .iter()
        .map(|segment| segment.stroke(place))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::digits::{Digit, MAX_NUMBER};
    use crate::core::strokes::place_strokes;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_is_the_bare_stem() {
        let glyph = build(Digits::default());
        assert!(glyph.strokes().is_empty());
        assert_eq!(glyph.iter().collect::<Vec<_>>(), vec![Stroke::STEM]);
        assert_eq!(glyph.stroke_count(), 1);
    }

    #[test]
    fn out_of_range_builds_nothing() {
        assert_eq!(Glyph::from_number(-1), Err(RangeError { value: -1 }));
        assert_eq!(Glyph::from_number(10000), Err(RangeError { value: 10000 }));
    }

    #[test]
    fn composes_places_for_1234() {
        let glyph = Glyph::from_number(1234).unwrap();
        let digits = glyph.digits();
        assert_eq!(
            [digits.units, digits.tens, digits.hundreds, digits.thousands].map(Digit::value),
            [4, 3, 2, 1]
        );

        let mut expected = BTreeSet::new();
        for (place, value) in [
            (Place::Units, 4),
            (Place::Tens, 3),
            (Place::Hundreds, 2),
            (Place::Thousands, 1),
        ] {
            let digit = Digit::new(value).unwrap();
            expected.extend(place_strokes(place, digit));
            assert_eq!(
                place_subset(&glyph, place),
                place_strokes(place, digit).into_iter().collect::<BTreeSet<_>>()
            );
        }
        assert_eq!(glyph.strokes(), &expected);
        assert_eq!(glyph.iter().next(), Some(Stroke::STEM));
        assert_eq!(glyph.number(), 1234);
    }

    #[test]
    fn nines_have_the_most_strokes() {
        let full = Glyph::from_number(9999).unwrap();
        assert_eq!(full.stroke_count(), 13);
        for n in 0..=i64::from(MAX_NUMBER) {
            assert!(Glyph::from_number(n).unwrap().stroke_count() <= full.stroke_count());
        }
    }

    #[test]
    fn stem_is_never_duplicated() {
        for n in [0, 1, 4, 40, 400, 4000, 4444, 9999] {
            let glyph = Glyph::from_number(n).unwrap();
            assert_eq!(glyph.iter().filter(|s| *s == Stroke::STEM).count(), 1);
        }
    }

    #[test]
    fn building_is_idempotent() {
        for n in [0, 7, 1992, 4723, 6859, 9938] {
            let a = Glyph::from_number(n).unwrap();
            let b = Glyph::from_number(n).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn distinct_numbers_give_distinct_glyphs() {
        let mut seen = std::collections::HashSet::new();
        for n in 0..=i64::from(MAX_NUMBER) {
            let glyph = Glyph::from_number(n).unwrap();
            assert!(seen.insert(glyph.strokes().clone()), "duplicate glyph for {n}");
        }
    }
}
