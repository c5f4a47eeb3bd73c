//! Step shape outlines.
//!
//! [`generate`] turns a [`ShapeKind`] and a bounding square into a closed
//! outline. Every outline is inscribed in the square it was generated from:
//!
//! - circle: the inscribed ellipse, touching all four sides
//! - square: the square itself
//! - triangle: apex at top-center, base along the bottom edge
//! - down triangle: apex at bottom-center, base along the top edge
//! - rhombus: the four edge midpoints
//!
//! Coordinates are y-down. A zero-size square yields a degenerate outline
//! with no area, which is still a valid outline.

pub mod geometry;

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

pub use geometry::{PathCommand, PathData};

use crate::types::{Point, Rect};

/// Shape drawn for a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Circle,
    Square,
    Triangle,
    DownTriangle,
    Rhombus,
}

/// Common behavior of generated outlines
#[enum_dispatch]
pub trait StepShape {
    /// The kind this outline was generated for
    fn kind(&self) -> ShapeKind;

    /// Axis-aligned bounds of the outline
    fn bounds(&self) -> Rect;

    /// Polygon vertices in drawing order; empty for curved outlines
    fn vertices(&self) -> &[DVec2];

    /// Closed SVG path for hosts that stroke/fill vector paths
    fn path_data(&self) -> PathData;

    /// Hit test; points on the outline count as inside
    fn contains(&self, p: DVec2) -> bool;

    /// Polygon approximation. Curved outlines are sampled with `segments`
    /// points, polygons are returned as-is.
    fn flatten(&self, segments: usize) -> Vec<DVec2>;
}

/// Inscribed ellipse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleOutline {
    pub center: DVec2,
    pub radii: DVec2,
}

impl StepShape for CircleOutline {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn bounds(&self) -> Rect {
        Rect {
            min: Point::from_vec(self.center - self.radii),
            max: Point::from_vec(self.center + self.radii),
        }
    }

    fn vertices(&self) -> &[DVec2] {
        &[]
    }

    fn path_data(&self) -> PathData {
        let (c, r) = (self.center, self.radii);
        // Two half arcs: left -> right -> left
        PathData::new()
            .m(c.x - r.x, c.y)
            .a(r.x, r.y, c.x + r.x, c.y)
            .a(r.x, r.y, c.x - r.x, c.y)
            .z()
    }

    fn contains(&self, p: DVec2) -> bool {
        if self.radii.x <= 0.0 || self.radii.y <= 0.0 {
            return p == self.center;
        }
        ((p - self.center) / self.radii).length_squared() <= 1.0
    }

    fn flatten(&self, segments: usize) -> Vec<DVec2> {
        geometry::ellipse_points(self.center, self.radii, segments)
    }
}

/// Closed polygon (square, triangles, rhombus)
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonOutline {
    pub kind: ShapeKind,
    pub points: Vec<DVec2>,
}

impl StepShape for PolygonOutline {
    fn kind(&self) -> ShapeKind {
        self.kind
    }

    fn bounds(&self) -> Rect {
        let (min, max) = self
            .points
            .iter()
            .fold((DVec2::splat(f64::MAX), DVec2::splat(f64::MIN)), |(lo, hi), p| {
                (lo.min(*p), hi.max(*p))
            });
        Rect { min: Point::from_vec(min), max: Point::from_vec(max) }
    }

    fn vertices(&self) -> &[DVec2] {
        &self.points
    }

    fn path_data(&self) -> PathData {
        PathData::polygon(&self.points)
    }

    fn contains(&self, p: DVec2) -> bool {
        geometry::polygon_contains(&self.points, p)
    }

    fn flatten(&self, _segments: usize) -> Vec<DVec2> {
        self.points.clone()
    }
}

/// A generated step outline
#[enum_dispatch(StepShape)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeOutline {
    Circle(CircleOutline),
    Polygon(PolygonOutline),
}

/// Generate the outline of `kind` inscribed in `square`.
pub fn generate(kind: ShapeKind, square: Rect) -> ShapeOutline {
    let (x0, y0) = (square.min.x.raw(), square.min.y.raw());
    let (x1, y1) = (square.max.x.raw(), square.max.y.raw());
    let mid = square.center().to_vec();

    let polygon = |points: Vec<DVec2>| ShapeOutline::from(PolygonOutline { kind, points });

    match kind {
        ShapeKind::Circle => CircleOutline {
            center: mid,
            radii: dvec2(x1 - x0, y1 - y0) / 2.0,
        }
        .into(),
        ShapeKind::Square => polygon(vec![dvec2(x0, y0), dvec2(x1, y0), dvec2(x1, y1), dvec2(x0, y1)]),
        ShapeKind::Triangle => polygon(vec![dvec2(mid.x, y0), dvec2(x1, y1), dvec2(x0, y1)]),
        ShapeKind::DownTriangle => polygon(vec![dvec2(mid.x, y1), dvec2(x1, y0), dvec2(x0, y0)]),
        ShapeKind::Rhombus => polygon(vec![
            dvec2(mid.x, y0),
            dvec2(x1, mid.y),
            dvec2(mid.x, y1),
            dvec2(x0, mid.y),
        ]),
    }
}
