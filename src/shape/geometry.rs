//! Geometry helpers: SVG path data and ellipse/polygon math

use std::fmt;

use glam::{DVec2, dvec2};

/// One drawing command in a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    /// Elliptical arc with no rotation, small-arc, clockwise sweep (y-down)
    ArcTo { radii: DVec2, to: DVec2 },
    Close,
}

/// Fluent builder for SVG path data (`d` attribute syntax).
///
/// ```
/// use stepkit::shape::PathData;
///
/// let d = PathData::new().m(0.0, 0.0).l(4.0, 0.0).l(4.0, 3.0).z();
/// assert_eq!(d.to_string(), "M0,0 L4,0 L4,3 Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(dvec2(x, y)));
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(dvec2(x, y)));
        self
    }

    pub fn a(mut self, rx: f64, ry: f64, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::ArcTo {
            radii: dvec2(rx, ry),
            to: dvec2(x, y),
        });
        self
    }

    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Closed polygon through `points` in order
    pub fn polygon(points: &[DVec2]) -> Self {
        let mut path = Self::new();
        for (i, p) in points.iter().enumerate() {
            path = if i == 0 { path.m(p.x, p.y) } else { path.l(p.x, p.y) };
        }
        if points.is_empty() { path } else { path.z() }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M{},{}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L{},{}", p.x, p.y)?,
                PathCommand::ArcTo { radii, to } => {
                    write!(f, "A{},{} 0 0 1 {},{}", radii.x, radii.y, to.x, to.y)?
                }
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Sample `segments` points on an axis-aligned ellipse, starting at the
/// leftmost point and sweeping clockwise on screen.
pub fn ellipse_points(center: DVec2, radii: DVec2, segments: usize) -> Vec<DVec2> {
    let segments = segments.max(3);
    (0..segments)
        .map(|i| {
            let t = std::f64::consts::PI + std::f64::consts::TAU * i as f64 / segments as f64;
            center + radii * dvec2(t.cos(), t.sin())
        })
        .collect()
}

/// Even-odd point-in-polygon test. Points on an edge count as inside.
pub fn polygon_contains(vertices: &[DVec2], p: DVec2) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (a, b) = (vertices[i], vertices[j]);
        if on_segment(a, b, p) {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn on_segment(a: DVec2, b: DVec2, p: DVec2) -> bool {
    let ab = b - a;
    let ap = p - a;
    if ab.perp_dot(ap).abs() > 1e-9 {
        return false;
    }
    let t = ap.dot(ab);
    t >= 0.0 && t <= ab.length_squared()
}
