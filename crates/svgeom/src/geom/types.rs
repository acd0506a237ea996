//! Value types and tolerances for the 2D geometry helpers.
//!
//! - `GeomCfg`: centralizes epsilons for parallelism, collinearity, coincidence
//!   and axis classification.
//! - `Line`, `Ellipse`: plain immutable records; no validation beyond what each
//!   consumer needs (a degenerate `Line` with `p1 == p2` is the caller's problem).

use nalgebra::Vector2;

use crate::num::angle_of_deg;

/// Build a point.
#[inline]
pub fn pt(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// `|perp(a)·b| <= eps_parallel` means the lines are parallel.
    pub eps_parallel: f64,
    /// Cross-product threshold of the collinearity test.
    pub eps_collinear: f64,
    /// Two points closer than this are the same point.
    pub eps_coincide: f64,
    /// A line whose `dx` (or `dy`) is below this is vertical (or horizontal).
    pub eps_axis: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_parallel: 1e-6,
            eps_collinear: 1e-3,
            eps_coincide: 1e-7,
            eps_axis: 1e-7,
        }
    }
}

/// Ordered pair of points: an infinite line through both, or the segment
/// between them where a function says so.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
}

impl Line {
    #[inline]
    pub fn new(p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        Self { p1, p2 }
    }

    /// Direction `p1 → p2` in degrees, in `[0, 360)`.
    #[inline]
    pub fn angle_deg(&self) -> f64 {
        angle_of_deg(self.p2 - self.p1)
    }

    /// Classify the line and extract its equation parameters.
    pub fn equation(&self, eps_axis: f64) -> LineEquation {
        let d = self.p2 - self.p1;
        if d.x.abs() < eps_axis {
            LineEquation::Vertical { x: self.p1.x }
        } else if d.y.abs() < eps_axis {
            LineEquation::Horizontal { y: self.p1.y }
        } else {
            let m = d.y / d.x;
            LineEquation::Oblique {
                m,
                c: self.p1.y - m * self.p1.x,
            }
        }
    }
}

/// Equation form of a line: `x = x0`, `y = y0`, or `y = m x + c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineEquation {
    Vertical { x: f64 },
    Horizontal { y: f64 },
    Oblique { m: f64, c: f64 },
}

/// Ellipse with its own axes rotated by `rotation_deg` about `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    pub center: Vector2<f64>,
    pub rx: f64,
    pub ry: f64,
    pub rotation_deg: f64,
}

impl Ellipse {
    #[inline]
    pub fn new(center: Vector2<f64>, rx: f64, ry: f64, rotation_deg: f64) -> Self {
        Self {
            center,
            rx,
            ry,
            rotation_deg,
        }
    }

    #[inline]
    pub fn circle(center: Vector2<f64>, r: f64) -> Self {
        Self::new(center, r, r, 0.0)
    }
}

/// Intersection of two infinite lines `a1a2` and `b1b2`.
///
/// `t_a`, `t_b` are parametric positions along each line (0 at the first
/// point, 1 at the second); `point = a1 + t_a (a2 - a1) = b1 + t_b (b2 - b1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineIntersection {
    pub t_a: f64,
    pub t_b: f64,
    pub point: Vector2<f64>,
}

/// Center parameterization of an SVG elliptical arc (angles in degrees).
///
/// `rx`, `ry` are the radii after out-of-range correction; `sweep_deg` is
/// signed (positive follows increasing angle, i.e. `sweep-flag = 1`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcCenter {
    pub center: Vector2<f64>,
    pub rx: f64,
    pub ry: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
}
