//! Vector algebra over points: perp-dot line intersection, rotation,
//! collinearity and signed areas.
//!
//! Conventions
//! - Points and free vectors are both `Vector2<f64>`.
//! - Angles are in degrees, positive counterclockwise in a y-up frame
//!   (clockwise on a y-down SVG canvas), matching `transform="rotate(..)"`.

use nalgebra::{Matrix2, Vector2};

use super::types::{GeomCfg, LineIntersection};

/// 90° counterclockwise rotation of `v`: `(-v.y, v.x)`.
#[inline]
pub fn perpendicular(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

#[inline]
pub fn dot(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.x + a.y * b.y
}

/// 2D cross product (determinant of `[a b]`): `a.x*b.y - a.y*b.x`.
#[inline]
pub fn cross_det(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Squared distance between `a` and `b`.
#[inline]
pub fn length_sq(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let d = b - a;
    dot(d, d)
}

/// Twice the signed area of the polygon `points` (shoelace formula).
///
/// Positive for counterclockwise order in a y-up frame. Callers compare the
/// sign for triangles `(p0, candidate, p1)` to pick one of two candidates.
pub fn area2(points: &[Vector2<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for k in 0..points.len() {
        let p = points[k];
        let q = points[(k + 1) % points.len()];
        acc += cross_det(p, q);
    }
    acc
}

#[inline]
pub fn points_coincide(a: Vector2<f64>, b: Vector2<f64>, eps: f64) -> bool {
    (a - b).norm() <= eps
}

/// Intersection of the infinite lines through `(a1, a2)` and `(b1, b2)`.
///
/// `None` when the lines are parallel or coincident (`|perp(a)·b|` at or
/// below `GeomCfg::eps_parallel`).
#[inline]
pub fn line_intersect(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
) -> Option<LineIntersection> {
    line_intersect_eps(a1, a2, b1, b2, GeomCfg::default().eps_parallel)
}

/// `line_intersect` with an explicit parallelism threshold.
pub fn line_intersect_eps(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
    eps: f64,
) -> Option<LineIntersection> {
    let vec_a = a2 - a1;
    let vec_b = b2 - b1;
    let sep = a1 - b1;
    let perp_a = perpendicular(vec_a);
    let perp_b = perpendicular(vec_b);
    let denom = dot(perp_a, vec_b);
    if denom.abs() <= eps {
        return None;
    }
    let t_b = dot(perp_a, sep) / denom;
    let t_a = dot(perp_b, sep) / denom;
    Some(LineIntersection {
        t_a,
        t_b,
        point: b1 + vec_b * t_b,
    })
}

/// Intersection point of the closed segments `a1a2` and `b1b2`.
///
/// Touching at an endpoint (`t = 0` or `t = 1`) counts as intersecting.
#[inline]
pub fn segment_intersect(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
) -> Option<Vector2<f64>> {
    segment_intersect_eps(a1, a2, b1, b2, GeomCfg::default().eps_parallel)
}

pub fn segment_intersect_eps(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
    eps: f64,
) -> Option<Vector2<f64>> {
    let hit = line_intersect_eps(a1, a2, b1, b2, eps)?;
    let unit = 0.0..=1.0;
    if unit.contains(&hit.t_a) && unit.contains(&hit.t_b) {
        Some(hit.point)
    } else {
        None
    }
}

/// `(sin, cos)` of an angle in degrees; exact at multiples of 90°.
pub(crate) fn sin_cos_deg(angle_deg: f64) -> (f64, f64) {
    let r = angle_deg.rem_euclid(360.0);
    if r == 0.0 {
        (0.0, 1.0)
    } else if r == 90.0 {
        (1.0, 0.0)
    } else if r == 180.0 {
        (0.0, -1.0)
    } else if r == 270.0 {
        (-1.0, 0.0)
    } else {
        angle_deg.to_radians().sin_cos()
    }
}

/// Rotation matrix `[[cos, -sin], [sin, cos]]` for `angle_deg`.
#[inline]
pub fn rotation_matrix(angle_deg: f64) -> Matrix2<f64> {
    let (s, c) = sin_cos_deg(angle_deg);
    Matrix2::new(c, -s, s, c)
}

/// Rotate `p` by `angle_deg` about `center` (origin when `None`).
///
/// Translate to the origin, apply `rotation_matrix`, translate back.
pub fn rotate(p: Vector2<f64>, angle_deg: f64, center: Option<Vector2<f64>>) -> Vector2<f64> {
    let c = center.unwrap_or_else(Vector2::zeros);
    c + rotation_matrix(angle_deg) * (p - c)
}

/// Collinearity of `p1, p2, p3` with default tolerance.
///
/// With `inside_segment`, additionally requires `p3` to project inside the
/// segment `p1 → p2`.
#[inline]
pub fn are_collinear(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    inside_segment: bool,
) -> bool {
    are_collinear_eps(p1, p2, p3, GeomCfg::default().eps_collinear, inside_segment)
}

pub fn are_collinear_eps(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    eps: f64,
    inside_segment: bool,
) -> bool {
    let v = p2 - p1;
    let w = p3 - p1;
    if cross_det(v, w).abs() >= eps {
        return false;
    }
    if !inside_segment {
        return true;
    }
    let proj = dot(v, w);
    proj >= -eps && proj <= dot(v, v) + eps
}
