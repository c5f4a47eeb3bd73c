//! Container configuration and the change vocabulary.
//!
//! Every host mutation is a [`Change`]. A change knows which pass it
//! invalidates: anything that alters node structure or geometry needs a
//! rebuild, anything that only alters colors (including the current step)
//! needs a recolor.

use std::collections::BTreeMap;

use crate::color::Color;
use crate::defaults;
use crate::palette::StepPalette;
use crate::scheduler::Pass;
use crate::shape::ShapeKind;
use crate::text::Font;
use crate::types::Length;

/// Structural and geometric configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepLayout {
    /// Shape of interior steps
    pub step_shape: ShapeKind,
    pub first_step_shape: ShapeKind,
    pub last_step_shape: ShapeKind,
    pub line_width: Length,
    /// Multiplier on the label-font-derived shape size
    pub shape_scale: f64,
    /// `0` means "half the shape size", resolved on the next rebuild
    pub horizontal_padding: Length,
    /// `0` means "the shape size", resolved on the next rebuild
    pub vertical_padding: Length,
    pub label_font: Font,
    pub detail_font: Font,
    pub number_font: Font,
    pub show_numbers: bool,
}

impl Default for StepLayout {
    fn default() -> Self {
        StepLayout {
            step_shape: defaults::STEP_SHAPE,
            first_step_shape: defaults::FIRST_STEP_SHAPE,
            last_step_shape: defaults::LAST_STEP_SHAPE,
            line_width: defaults::LINE_WIDTH,
            shape_scale: defaults::SHAPE_SCALE,
            horizontal_padding: Length::ZERO,
            vertical_padding: Length::ZERO,
            label_font: defaults::LABEL_FONT,
            detail_font: defaults::DETAIL_FONT,
            number_font: defaults::NUMBER_FONT,
            show_numbers: false,
        }
    }
}

impl StepLayout {
    /// Side of every step's shape square
    pub fn shape_size(&self) -> Length {
        self.label_font.size * (defaults::SHAPE_FONT_RATIO * self.shape_scale)
    }

    /// Shape for step `index` of `count`. The first-step rule wins over the
    /// last-step rule, so a lone step uses `first_step_shape`.
    pub fn shape_for(&self, index: usize, count: usize) -> ShapeKind {
        if index == 0 {
            self.first_step_shape
        } else if index + 1 == count {
            self.last_step_shape
        } else {
            self.step_shape
        }
    }
}

/// A single configuration mutation
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Steps(Vec<String>),
    /// Replace the whole detail map. Keys may lie outside the step range;
    /// such details are kept but never shown.
    Details(BTreeMap<i64, String>),
    /// Set or clear one detail
    Detail(i64, Option<String>),
    Layout(StepLayout),
    StepShape(ShapeKind),
    FirstStepShape(ShapeKind),
    LastStepShape(ShapeKind),
    LineWidth(Length),
    ShapeScale(f64),
    Paddings { horizontal: Length, vertical: Length },
    LabelFont(Font),
    DetailFont(Font),
    NumberFont(Font),
    ShowNumbers(bool),
    CurrentStep(i64),
    Palette(StepPalette),
    TintColor(Option<Color>),
}

impl Change {
    /// The pass this change makes stale
    pub fn invalidates(&self) -> Pass {
        match self {
            Change::CurrentStep(_) | Change::Palette(_) | Change::TintColor(_) => Pass::Recolor,
            _ => Pass::Rebuild,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_size_follows_label_font_and_scale() {
        let mut layout = StepLayout::default();
        layout.label_font = Font::regular(Length(10.0));
        assert_eq!(layout.shape_size(), Length(12.0));
        layout.shape_scale = 0.5;
        assert_eq!(layout.shape_size(), Length(6.0));
    }

    #[test]
    fn first_rule_beats_last_rule() {
        let layout = StepLayout {
            step_shape: ShapeKind::Rhombus,
            first_step_shape: ShapeKind::Circle,
            last_step_shape: ShapeKind::Square,
            ..StepLayout::default()
        };
        assert_eq!(layout.shape_for(0, 1), ShapeKind::Circle);
        assert_eq!(layout.shape_for(0, 3), ShapeKind::Circle);
        assert_eq!(layout.shape_for(1, 3), ShapeKind::Rhombus);
        assert_eq!(layout.shape_for(2, 3), ShapeKind::Square);
    }

    #[test]
    fn changes_pick_their_pass() {
        assert_eq!(Change::CurrentStep(2).invalidates(), Pass::Recolor);
        assert_eq!(Change::TintColor(None).invalidates(), Pass::Recolor);
        assert_eq!(Change::Palette(StepPalette::default()).invalidates(), Pass::Recolor);
        assert_eq!(Change::Steps(vec![]).invalidates(), Pass::Rebuild);
        assert_eq!(Change::Detail(0, None).invalidates(), Pass::Rebuild);
        assert_eq!(Change::ShowNumbers(true).invalidates(), Pass::Rebuild);
        assert_eq!(Change::ShapeScale(2.0).invalidates(), Pass::Rebuild);
    }
}
