//! Ellipse/line intersection and SVG elliptical-arc center parameterization.
//!
//! Ellipse/line
//! - Closed-form solution for an axis-aligned ellipse centered at `(h, k)`,
//!   one branch per line class (vertical, horizontal, oblique). Rotation is
//!   handled by rotating the two solutions about the center afterwards.
//! - Radicands go through `abs()`, so two points come back even when the
//!   line misses the ellipse. Callers that need a particular point pick it
//!   themselves (e.g. by `area2` sign against reference points); the order
//!   follows the `±` branch of the formula and carries no geometric meaning.
//!
//! Arcs
//! - Endpoint-to-center conversion from SVG 1.1 implementation notes (F.6.5,
//!   F.6.6): out-of-range radii are scaled up uniformly, and a negative
//!   radicand from rounding at tangency is clamped to zero.

use nalgebra::Vector2;

use super::types::{ArcCenter, Ellipse, GeomCfg, Line, LineEquation};
use super::vector::{cross_det, dot, points_coincide, rotate, sin_cos_deg};

/// The two intersections of `line` with `ellipse`.
///
/// `line` is expressed in the ellipse's unrotated frame: the solutions are
/// computed against the axis-aligned ellipse and then rotated by
/// `ellipse.rotation_deg` about its center, so a figure drawn axis-aligned and
/// rotated as a whole keeps its intersections. For a line given in world
/// coordinates use `ellipse_world_line_intersections`.
pub fn ellipse_line_intersections(line: &Line, ellipse: &Ellipse) -> [Vector2<f64>; 2] {
    let [pa, pb] = axis_aligned_intersections(line, ellipse, GeomCfg::default().eps_axis);
    if ellipse.rotation_deg != 0.0 {
        let c = Some(ellipse.center);
        [
            rotate(pa, ellipse.rotation_deg, c),
            rotate(pb, ellipse.rotation_deg, c),
        ]
    } else {
        [pa, pb]
    }
}

/// Intersections of a world-space `line` with the rotated `ellipse`.
///
/// The line is first mapped into the ellipse frame, so both returned points
/// lie on `line` (when it actually meets the ellipse).
pub fn ellipse_world_line_intersections(line: &Line, ellipse: &Ellipse) -> [Vector2<f64>; 2] {
    if ellipse.rotation_deg == 0.0 {
        return ellipse_line_intersections(line, ellipse);
    }
    let c = Some(ellipse.center);
    let local = Line::new(
        rotate(line.p1, -ellipse.rotation_deg, c),
        rotate(line.p2, -ellipse.rotation_deg, c),
    );
    ellipse_line_intersections(&local, ellipse)
}

fn axis_aligned_intersections(line: &Line, ellipse: &Ellipse, eps_axis: f64) -> [Vector2<f64>; 2] {
    let a = ellipse.rx;
    let b = ellipse.ry;
    let a2 = a * a;
    let b2 = b * b;
    let h = ellipse.center.x;
    let k = ellipse.center.y;
    match line.equation(eps_axis) {
        LineEquation::Vertical { x } => {
            let u = x - h;
            let p = (b / a) * (a2 - u * u).abs().sqrt();
            [Vector2::new(x, k + p), Vector2::new(x, k - p)]
        }
        LineEquation::Horizontal { y } => {
            let v = y - k;
            let p = (a / b) * (b2 - v * v).abs().sqrt();
            [Vector2::new(h + p, y), Vector2::new(h - p, y)]
        }
        LineEquation::Oblique { m, c } => {
            // y - k = m (x - h) + d  with  d = c - k + m h
            let phi = c - k;
            let d = phi + m * h;
            let denom = b2 + a2 * m * m;
            let p1 = b2 * h - a2 * m * phi;
            let p2 = a * b * (denom - d * d).abs().sqrt();
            let xa = (p1 + p2) / denom;
            let xb = (p1 - p2) / denom;
            [Vector2::new(xa, m * xa + c), Vector2::new(xb, m * xb + c)]
        }
    }
}

/// Center of the SVG arc from `p0` to `p1` (see `arc_endpoint_to_center`).
#[inline]
pub fn elliptical_arc_center(
    p0: Vector2<f64>,
    p1: Vector2<f64>,
    rx: f64,
    ry: f64,
    large_arc: bool,
    sweep: bool,
    rotation_deg: f64,
) -> Option<Vector2<f64>> {
    arc_endpoint_to_center(p0, p1, rx, ry, large_arc, sweep, rotation_deg).map(|arc| arc.center)
}

/// Endpoint-to-center parameterization of an SVG elliptical arc.
///
/// Returns `None` for a zero-length arc (`p0 == p1`) or a zero radius; SVG
/// renders the former as nothing and the latter as a straight line.
pub fn arc_endpoint_to_center(
    p0: Vector2<f64>,
    p1: Vector2<f64>,
    rx: f64,
    ry: f64,
    large_arc: bool,
    sweep: bool,
    rotation_deg: f64,
) -> Option<ArcCenter> {
    let mut rx = rx.abs();
    let mut ry = ry.abs();
    if rx == 0.0 || ry == 0.0 || points_coincide(p0, p1, GeomCfg::default().eps_coincide) {
        return None;
    }
    let (sin, cos) = sin_cos_deg(rotation_deg);

    // Step 1: midpoint difference in the ellipse frame.
    let half = (p0 - p1) * 0.5;
    let x1 = cos * half.x + sin * half.y;
    let y1 = -sin * half.x + cos * half.y;

    // Step 2: radius correction.
    let lambda = (x1 * x1) / (rx * rx) + (y1 * y1) / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        tracing::debug!(rx, ry, scale, "arc radii scaled up to reach end point");
        rx *= scale;
        ry *= scale;
    }

    // Step 3: center in the ellipse frame.
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let num = rx2 * ry2 - rx2 * y1 * y1 - ry2 * x1 * x1;
    let den = rx2 * y1 * y1 + ry2 * x1 * x1;
    let radicand = (num / den).max(0.0);
    let sign = if large_arc == sweep { -1.0 } else { 1.0 };
    let coef = sign * radicand.sqrt();
    let cx1 = coef * (rx * y1 / ry);
    let cy1 = coef * -(ry * x1 / rx);

    // Step 4: back to user space.
    let mid = (p0 + p1) * 0.5;
    let center = Vector2::new(cos * cx1 - sin * cy1 + mid.x, sin * cx1 + cos * cy1 + mid.y);

    let u = Vector2::new((x1 - cx1) / rx, (y1 - cy1) / ry);
    let v = Vector2::new((-x1 - cx1) / rx, (-y1 - cy1) / ry);
    let start_deg = signed_angle_deg(Vector2::new(1.0, 0.0), u);
    let mut sweep_deg = signed_angle_deg(u, v);
    if !sweep && sweep_deg > 0.0 {
        sweep_deg -= 360.0;
    } else if sweep && sweep_deg < 0.0 {
        sweep_deg += 360.0;
    }
    Some(ArcCenter {
        center,
        rx,
        ry,
        start_deg,
        sweep_deg,
    })
}

#[inline]
fn signed_angle_deg(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    cross_det(u, v).atan2(dot(u, v)).to_degrees()
}
