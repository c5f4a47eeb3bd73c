//! Color configuration and its resolution into per-class bundles.
//!
//! Past and future colors are always explicit. Current-step colors may be
//! left unset and resolve through a fallback chain:
//!
//! - text: override, else the host tint, else black
//! - detail, stroke, number: override, else the resolved current text color
//! - fill: explicit, no fallback
//! - connector line: always the future line color, since the segment after
//!   the current step has not been traversed yet

use crate::classify::StepClass;
use crate::color::Color;
use crate::defaults;

/// Fully resolved colors for the six painted sub-elements of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorBundle {
    /// Label text
    pub text: Color,
    /// Detail text
    pub detail: Color,
    /// Shape outline
    pub stroke: Color,
    /// Shape interior
    pub fill: Color,
    /// Connector to the next step
    pub line: Color,
    /// Ordinal number inside the shape
    pub number: Color,
}

impl ColorBundle {
    /// Same color everywhere except a separate fill
    pub const fn uniform(color: Color, fill: Color) -> Self {
        ColorBundle {
            text: color,
            detail: color,
            stroke: color,
            fill,
            line: color,
            number: color,
        }
    }
}

/// Current-step colors; `None` means "fall back"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrentColors {
    pub text: Option<Color>,
    pub detail: Option<Color>,
    pub stroke: Option<Color>,
    pub fill: Color,
    pub number: Option<Color>,
}

impl Default for CurrentColors {
    fn default() -> Self {
        CurrentColors {
            text: None,
            detail: None,
            stroke: None,
            fill: defaults::FILL_COLOR,
            number: None,
        }
    }
}

/// Color configuration of a step progress container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepPalette {
    pub past: ColorBundle,
    pub current: CurrentColors,
    pub future: ColorBundle,
}

impl Default for StepPalette {
    fn default() -> Self {
        StepPalette {
            past: ColorBundle::uniform(defaults::PAST_COLOR, defaults::FILL_COLOR),
            current: CurrentColors::default(),
            future: ColorBundle::uniform(defaults::FUTURE_COLOR, defaults::FILL_COLOR),
        }
    }
}

impl StepPalette {
    /// Resolve the current-step fallbacks against the ambient `tint`.
    pub fn resolve(&self, tint: Option<Color>) -> ResolvedPalette {
        let c = &self.current;
        let text = c.text.or(tint).unwrap_or(defaults::CURRENT_FALLBACK);
        let current = ColorBundle {
            text,
            detail: c.detail.unwrap_or(text),
            stroke: c.stroke.unwrap_or(text),
            fill: c.fill,
            line: self.future.line,
            number: c.number.unwrap_or(text),
        };
        ResolvedPalette {
            past: self.past,
            current,
            future: self.future,
        }
    }
}

/// Bundles for each class, with every fallback applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedPalette {
    pub past: ColorBundle,
    pub current: ColorBundle,
    pub future: ColorBundle,
}

impl ResolvedPalette {
    pub fn bundle(&self, class: StepClass) -> &ColorBundle {
        match class {
            StepClass::Past => &self.past,
            StepClass::Current => &self.current,
            StepClass::Future => &self.future,
        }
    }
}
