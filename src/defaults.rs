//! Default geometry and appearance (layout points)

use crate::color::Color;
use crate::shape::ShapeKind;
use crate::text::Font;
use crate::types::Length;

pub const LINE_WIDTH: Length = Length::pt(1.0);
pub const SHAPE_SCALE: f64 = 1.0;
/// Shape side = label font size * SHAPE_FONT_RATIO * shape scale
pub const SHAPE_FONT_RATIO: f64 = 1.2;

pub const LABEL_FONT: Font = Font::regular(Length::pt(17.0));
pub const DETAIL_FONT: Font = Font::regular(Length::pt(13.0));
pub const NUMBER_FONT: Font = Font::regular(Length::pt(12.0));

pub const STEP_SHAPE: ShapeKind = ShapeKind::Circle;
pub const FIRST_STEP_SHAPE: ShapeKind = ShapeKind::Circle;
pub const LAST_STEP_SHAPE: ShapeKind = ShapeKind::Square;

/// Last resort for current-step text when neither an override nor a tint is set
pub const CURRENT_FALLBACK: Color = Color::BLACK;
pub const PAST_COLOR: Color = Color::GRAY;
pub const FUTURE_COLOR: Color = Color::LIGHT_GRAY;
pub const FILL_COLOR: Color = Color::CLEAR;

/// `currentStep` before anything has started
pub const NOT_STARTED: i64 = -1;
