//! Layout primitives in host points.
//!
//! Lengths are a newtype over `f64` so a font size can't be passed where a
//! step index or a scale factor is expected. Shapes switch to `glam`
//! vectors through [`Point::to_vec`] and [`Point::from_vec`].

use glam::{DVec2, dvec2};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// Why a host-supplied number was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    NaN,
    Infinite,
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NumericError::NaN => "not a number",
            NumericError::Infinite => "not finite",
            NumericError::Negative => "below zero",
        })
    }
}

impl std::error::Error for NumericError {}

/// Distance in layout points
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Unchecked; for constants.
    pub const fn pt(points: f64) -> Length {
        Length(points)
    }

    /// Finite values only.
    pub fn try_new(points: f64) -> Result<Length, NumericError> {
        match points {
            p if p.is_nan() => Err(NumericError::NaN),
            p if p.is_infinite() => Err(NumericError::Infinite),
            p => Ok(Length(p)),
        }
    }

    /// Finite, non-negative values only.
    pub fn try_non_negative(points: f64) -> Result<Length, NumericError> {
        match Self::try_new(points)? {
            Length(p) if p < 0.0 => Err(NumericError::Negative),
            len => Ok(len),
        }
    }

    pub fn max(self, other: Length) -> Length {
        Length(self.0.max(other.0))
    }

    pub fn raw(self) -> f64 {
        self.0
    }

    /// Exactly zero, sign ignored. Zero paddings mean "pick a default".
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

macro_rules! length_op {
    ($trait:ident, $method:ident, $rhs:ty, $rhs_val:ident => $raw:expr, $op:tt) => {
        impl $trait<$rhs> for Length {
            type Output = Length;
            fn $method(self, $rhs_val: $rhs) -> Length {
                Length(self.0 $op $raw)
            }
        }
    };
}

length_op!(Add, add, Length, rhs => rhs.0, +);
length_op!(Sub, sub, Length, rhs => rhs.0, -);
length_op!(Mul, mul, f64, rhs => rhs, *);
length_op!(Div, div, f64, rhs => rhs, /);

impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length {
        Length(-self.0)
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

impl Point<Length> {
    pub fn to_vec(self) -> DVec2 {
        dvec2(self.x.0, self.y.0)
    }

    pub fn from_vec(v: DVec2) -> Self {
        pt(v.x, v.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T> Size<T> {
    pub fn new(w: T, h: T) -> Self {
        Size { w, h }
    }
}

impl Size<Length> {
    pub const ZERO: Size<Length> = Size { w: Length::ZERO, h: Length::ZERO };
}

/// Relative displacement, as opposed to a [`Point`]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset<T> {
    pub dx: T,
    pub dy: T,
}

impl<T> Offset<T> {
    pub fn new(dx: T, dy: T) -> Self {
        Offset { dx, dy }
    }
}

impl Add<Offset<Length>> for Point<Length> {
    type Output = Point<Length>;
    fn add(self, by: Offset<Length>) -> Point<Length> {
        Point::new(self.x + by.dx, self.y + by.dy)
    }
}

/// Axis-aligned box; `min` is the top-left corner (y grows downward)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox<T> {
    pub min: Point<T>,
    pub max: Point<T>,
}

impl BBox<Length> {
    pub fn from_origin_size(origin: Point<Length>, size: Size<Length>) -> Self {
        BBox { min: origin, max: Point::new(origin.x + size.w, origin.y + size.h) }
    }

    pub fn square(top_left: Point<Length>, side: Length) -> Self {
        Self::from_origin_size(top_left, Size::new(side, side))
    }

    pub fn width(&self) -> Length {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> Length {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point<Length> {
        Point::new((self.min.x + self.max.x) / 2.0, (self.min.y + self.max.y) / 2.0)
    }

    /// Edges included
    pub fn contains(&self, p: Point<Length>) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }
}

pub type PtIn = Point<Length>;
pub type Rect = BBox<Length>;

pub fn pt(x: f64, y: f64) -> PtIn {
    Point::new(Length(x), Length(y))
}
