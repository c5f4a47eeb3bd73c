//! Fonts and text measurement.
//!
//! Real text shaping belongs to the host toolkit; [`TextMetrics`] is the seam
//! through which a node asks for the natural size of its label, detail and
//! ordinal number. [`ProportionalMetrics`] is a deterministic stand-in that is
//! good enough for layout intent and for tests.

use crate::types::{Length, Size};

/// Font role description: size plus the two traits that change advances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: Length,
    pub bold: bool,
    pub mono: bool,
}

impl Font {
    pub const fn regular(size: Length) -> Self {
        Font { size, bold: false, mono: false }
    }

    pub const fn bold(size: Length) -> Self {
        Font { size, bold: true, mono: false }
    }

    pub const fn mono(size: Length) -> Self {
        Font { size, bold: false, mono: true }
    }
}

/// Host text measurement.
pub trait TextMetrics {
    /// Natural (unconstrained) size of `text` set in `font`.
    fn measure(&self, text: &str, font: &Font) -> Size<Length>;
}

/// Proportional character widths in hundredths of an advance unit, for
/// printable ASCII starting at `' '`.
#[rustfmt::skip]
const ADVANCES: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Advance for characters outside printable ASCII
const WIDE_ADVANCE: u32 = 100;
const MONO_ADVANCE: u32 = 82;
/// One advance unit as a fraction of the font size
const UNIT_PER_EM: f64 = 0.5;
const BOLD_FACTOR: f64 = 1.1;
pub const LINE_HEIGHT: f64 = 1.2;

/// Table-driven metrics: per-character advances, fixed line height.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProportionalMetrics;

impl ProportionalMetrics {
    /// Total advance of a single line, in hundredths of a unit.
    pub fn line_advance(line: &str, mono: bool) -> u32 {
        if mono {
            return line.chars().count() as u32 * MONO_ADVANCE;
        }
        line.chars()
            .map(|c| match c {
                ' '..='~' => ADVANCES[c as usize - 0x20] as u32,
                _ => WIDE_ADVANCE,
            })
            .sum()
    }
}

impl TextMetrics for ProportionalMetrics {
    fn measure(&self, text: &str, font: &Font) -> Size<Length> {
        if text.is_empty() {
            return Size::ZERO;
        }
        let mut widest = 0;
        let mut lines = 0;
        for line in text.lines() {
            widest = widest.max(Self::line_advance(line, font.mono));
            lines += 1;
        }
        let mut width = font.size * (widest as f64 * UNIT_PER_EM * 0.01);
        if font.bold && !font.mono {
            width = width * BOLD_FACTOR;
        }
        Size::new(width, font.size * (lines as f64 * LINE_HEIGHT))
    }
}
