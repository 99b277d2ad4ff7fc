use std::fmt;
use std::num::IntErrorKind;

use thiserror::Error;

use crate::core::strokes::Place;

/// Largest value a single glyph can carry: one digit per quadrant.
pub const MAX_NUMBER: u16 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{value} is outside the representable range 0..=9999")]
pub struct RangeError {
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("'{0}' is not an integer")]
    Parse(String),
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    /// All ten digits in ascending order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9).map(Digit)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four place values of a number in glyph range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Digits {
    pub units: Digit,
    pub tens: Digit,
    pub hundreds: Digit,
    pub thousands: Digit,
}

impl Digits {
    pub fn new(units: Digit, tens: Digit, hundreds: Digit, thousands: Digit) -> Self {
        Self {
            units,
            tens,
            hundreds,
            thousands,
        }
    }

    pub fn get(&self, place: Place) -> Digit {
        match place {
            Place::Units => self.units,
            Place::Tens => self.tens,
            Place::Hundreds => self.hundreds,
            Place::Thousands => self.thousands,
        }
    }

    /// `(place, digit)` pairs from units to thousands.
    pub fn iter(&self) -> impl Iterator<Item = (Place, Digit)> + '_ {
        Place::ALL.into_iter().map(|place| (place, self.get(place)))
    }

    /// Weighted sum of the four digits.
    pub fn value(&self) -> u16 {
        self.iter()
            .map(|(place, digit)| u16::from(digit.value()) * place.weight())
            .sum()
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.thousands, self.hundreds, self.tens, self.units
        )
    }
}

/// Split `n` into its units, tens, hundreds and thousands digits.
pub fn decompose(n: i64) -> Result<Digits, RangeError> {
    if !(0..=i64::from(MAX_NUMBER)).contains(&n) {
        return Err(RangeError { value: n });
    }
    let digit = |divisor: i64| Digit(((n / divisor) % 10) as u8);
    Ok(Digits::new(digit(1), digit(10), digit(100), digit(1000)))
}

/// Parse user input into a number that fits in a glyph.
pub fn parse_number(input: &str) -> Result<u16, NumberError> {
    let trimmed = input.trim();
    // Integers too wide for i64 are still integers; report them as out of range.
    let value = trimmed.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => NumberError::Range(RangeError { value: i64::MAX }),
        IntErrorKind::NegOverflow => NumberError::Range(RangeError { value: i64::MIN }),
        _ => NumberError::Parse(trimmed.to_string()),
    })?;
    decompose(value)?;
    Ok(value as u16)
}
