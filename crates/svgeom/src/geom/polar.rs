//! Polar helpers used by radial symbol generators (asterisks, sights, dials).

use nalgebra::Vector2;

use super::types::GeomCfg;
use super::vector::{points_coincide, sin_cos_deg};

/// Point at `radius` from the origin in direction `angle_deg`.
#[inline]
pub fn polar_to_rect_deg(angle_deg: f64, radius: f64) -> Vector2<f64> {
    let (s, c) = sin_cos_deg(angle_deg);
    Vector2::new(c * radius, s * radius)
}

/// Point at `distance` from `from`, heading towards `toward`.
///
/// Returns `from` when the two points coincide (no direction).
pub fn point_along(from: Vector2<f64>, toward: Vector2<f64>, distance: f64) -> Vector2<f64> {
    if points_coincide(from, toward, GeomCfg::default().eps_coincide) {
        return from;
    }
    let dir = (toward - from).normalize();
    from + dir * distance
}

/// `divisions` equally spaced points on a circle, starting at `start_deg`
/// and advancing counterclockwise.
pub fn circle_dividers(
    center: Vector2<f64>,
    radius: f64,
    divisions: usize,
    start_deg: f64,
) -> Vec<Vector2<f64>> {
    if divisions == 0 {
        return Vec::new();
    }
    let step = 360.0 / divisions as f64;
    (0..divisions)
        .map(|i| center + polar_to_rect_deg(start_deg + step * i as f64, radius))
        .collect()
}
