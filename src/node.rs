//! A single step: shape, ordinal number, label, detail and connector.
//!
//! Geometry and texts are measured once, when the container builds the node;
//! a text change in the container rebuilds every node. Colors are the only
//! thing that changes during a node's lifetime. All sub-element rects are
//! node-local (origin at the node's top-left corner); [`StepNode::frame`]
//! places the node in container coordinates.
//!
//! ```text
//!  lw/2   size    lw/2  h-pad
//! |----|========|----|-------|label........
//!      | shape  |            detail.......
//!      |========|
//!          ||   connector                    } v-pad
//! ```

use crate::palette::ColorBundle;
use crate::shape::{self, ShapeKind, ShapeOutline, StepShape};
use crate::text::{Font, TextMetrics};
use crate::types::{Length, Offset, Point, PtIn, Rect, Size, pt};

/// Geometry shared by every node of one rebuild pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    /// Side of the shape's bounding square
    pub shape_size: Length,
    pub line_width: Length,
    pub horizontal_padding: Length,
    pub vertical_padding: Length,
    pub label_font: Font,
    pub detail_font: Font,
    pub number_font: Font,
    pub show_number: bool,
}

impl NodeStyle {
    /// Horizontal space in front of the label
    pub fn leading_space(&self) -> Length {
        self.horizontal_padding + self.shape_size + self.line_width
    }

    /// Shape bounding square, node-local
    pub fn shape_square(&self) -> Rect {
        Rect::square(pt(self.line_width.raw() / 2.0, 0.0), self.shape_size)
    }
}

/// Node-local rects of every sub-element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeLayout {
    pub shape: Rect,
    pub number: Option<Rect>,
    pub label: Rect,
    pub detail: Option<Rect>,
    pub connector: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepNode {
    index: usize,
    style: NodeStyle,
    outline: ShapeOutline,
    label: String,
    label_size: Size<Length>,
    detail: Option<String>,
    detail_size: Size<Length>,
    number: Option<String>,
    number_size: Size<Length>,
    connector_hidden: bool,
    colors: Option<ColorBundle>,
    origin: PtIn,
}

impl StepNode {
    pub fn new(
        index: usize,
        kind: ShapeKind,
        label: impl Into<String>,
        detail: Option<String>,
        style: NodeStyle,
        metrics: &dyn TextMetrics,
    ) -> Self {
        let label = label.into();
        let number = style.show_number.then(|| (index + 1).to_string());
        StepNode {
            index,
            outline: shape::generate(kind, style.shape_square()),
            label_size: metrics.measure(&label, &style.label_font),
            detail_size: measure_opt(metrics, detail.as_deref(), &style.detail_font),
            number_size: measure_opt(metrics, number.as_deref(), &style.number_font),
            label,
            detail,
            number,
            style,
            connector_hidden: false,
            colors: None,
            origin: Point::default(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn style(&self) -> &NodeStyle {
        &self.style
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.outline.kind()
    }

    /// Shape outline in node-local coordinates
    pub fn outline(&self) -> &ShapeOutline {
        &self.outline
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Ordinal number text ("1", "2", ...) when numbers are shown
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    pub fn is_connector_hidden(&self) -> bool {
        self.connector_hidden
    }

    pub(crate) fn hide_connector(&mut self) {
        self.connector_hidden = true;
    }

    /// Paint the six sub-elements. Layout is untouched.
    pub fn apply_colors(&mut self, colors: &ColorBundle) {
        self.colors = Some(*colors);
    }

    /// Colors from the last recolor pass; `None` before the first one
    pub fn colors(&self) -> Option<&ColorBundle> {
        self.colors.as_ref()
    }

    /// Natural size: label plus leading space wide, label plus detail plus
    /// vertical padding tall.
    pub fn preferred_size(&self) -> Size<Length> {
        Size::new(
            self.label_size.w + self.style.leading_space(),
            self.label_size.h + self.detail_size.h + self.style.vertical_padding,
        )
    }

    pub(crate) fn place(&mut self, origin: PtIn) {
        self.origin = origin;
    }

    /// Frame in container coordinates
    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.preferred_size())
    }

    pub fn layout(&self) -> NodeLayout {
        let style = &self.style;
        let shape = style.shape_square();
        let leading = style.leading_space();
        let height = self.preferred_size().h;

        let number = self.number.as_ref().map(|_| {
            let c = shape.center();
            let half = Offset::new(-self.number_size.w / 2.0, -self.number_size.h / 2.0);
            Rect::from_origin_size(c + half, self.number_size)
        });
        let label = Rect::from_origin_size(Point::new(leading, Length::ZERO), self.label_size);
        let detail = self
            .detail
            .as_ref()
            .map(|_| Rect::from_origin_size(Point::new(leading, self.label_size.h), self.detail_size));
        let connector = (!self.connector_hidden).then(|| {
            let cx = shape.center().x;
            let half_width = style.line_width / 2.0;
            Rect {
                min: Point::new(cx - half_width, shape.max.y),
                max: Point::new(cx + half_width, height.max(shape.max.y)),
            }
        });

        NodeLayout { shape, number, label, detail, connector }
    }
}

fn measure_opt(metrics: &dyn TextMetrics, text: Option<&str>, font: &Font) -> Size<Length> {
    text.map_or(Size::ZERO, |t| metrics.measure(t, font))
}
