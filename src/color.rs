use std::fmt;
use std::str::FromStr;

use image::Rgba;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),
    #[error("color '{0}' must have 3 or 6 hex digits")]
    Length(String),
    #[error("color '{0}' contains a non-hex digit")]
    Digit(String),
}

/// Opaque RGB color given as a hex triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 0xff])
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts `#rgb` and `#rrggbb`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Digit(s.to_string()));
        }
        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| ColorError::Digit(s.to_string()))
        };
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Color::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(ColorError::Length(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!("#000".parse::<Color>(), Ok(Color::BLACK));
        assert_eq!("#FfF".parse::<Color>(), Ok(Color::WHITE));
        assert_eq!("#1a2B3c".parse::<Color>(), Ok(Color::rgb(0x1a, 0x2b, 0x3c)));
        assert_eq!("#abc".parse::<Color>().unwrap().to_string(), "#aabbcc");
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!("000".parse::<Color>(), Err(ColorError::MissingHash("000".into())));
        assert_eq!("#0000".parse::<Color>(), Err(ColorError::Length("#0000".into())));
        assert_eq!("#00g".parse::<Color>(), Err(ColorError::Digit("#00g".into())));
        assert_eq!("#ééé".parse::<Color>(), Err(ColorError::Digit("#ééé".into())));
    }
}
