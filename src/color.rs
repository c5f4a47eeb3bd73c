//! RGBA colors and their CSS-like text form.

use std::fmt;
use std::str::FromStr;

use crate::errors::ColorError;

/// 8-bit RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const DARK_GRAY: Color = Color::rgb(169, 169, 169);
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    fn named(name: &str) -> Option<Color> {
        NAMED
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }

    fn parse_hex(input: &str, digits: &str) -> Result<Color, ColorError> {
        let mut nibbles = Vec::with_capacity(8);
        for c in digits.chars() {
            let v = c.to_digit(16).ok_or_else(|| ColorError::InvalidHexDigit {
                input: input.to_string(),
                digit: c,
            })?;
            nibbles.push(v as u8);
        }
        let byte = |i: usize| nibbles[i] << 4 | nibbles[i + 1];
        match nibbles.len() {
            // #rgb expands each nibble: f -> ff
            3 => Ok(Color::rgb(nibbles[0] * 17, nibbles[1] * 17, nibbles[2] * 17)),
            6 => Ok(Color::rgb(byte(0), byte(2), byte(4))),
            8 => Ok(Color::rgba(byte(0), byte(2), byte(4), byte(6))),
            len => Err(ColorError::InvalidHexLength {
                input: input.to_string(),
                len,
            }),
        }
    }
}

/// Named colors accepted by `Color::from_str`.
const NAMED: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("gray", Color::GRAY),
    ("grey", Color::GRAY),
    ("lightgray", Color::LIGHT_GRAY),
    ("lightgrey", Color::LIGHT_GRAY),
    ("darkgray", Color::DARK_GRAY),
    ("darkgrey", Color::DARK_GRAY),
    ("silver", Color::rgb(192, 192, 192)),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 128, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("orange", Color::rgb(255, 165, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("brown", Color::rgb(165, 42, 42)),
    ("pink", Color::rgb(255, 192, 203)),
    ("clear", Color::CLEAR),
];

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ColorError::Empty);
        }
        if let Some(digits) = input.strip_prefix('#') {
            return Color::parse_hex(input, digits);
        }
        Color::named(input).ok_or_else(|| {
            let lower = input.to_ascii_lowercase();
            let suggestion = NAMED
                .iter()
                .map(|(known, _)| *known)
                .find(|known| known.contains(lower.as_str()) || lower.contains(known))
                .map(|known| format!("did you mean `{known}`?"));
            ColorError::UnknownName {
                name: input.to_string(),
                suggestion,
            }
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({},{},{})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}
