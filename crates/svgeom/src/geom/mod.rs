//! 2D vector geometry for shape generators.
//!
//! Purpose
//! - Pure numeric functions over points (`Vector2<f64>`): no shared state,
//!   every call returns a point, scalar, boolean, or `None` for "no result".
//! - Tolerances are explicit (`GeomCfg`); the plain functions use defaults and
//!   `_eps` variants take them as arguments.
//!
//! Layout
//! - `types`: `Line`, `Ellipse`, `LineEquation`, `GeomCfg`, result records.
//! - `vector`: perp-dot intersections, rotation, collinearity, areas.
//! - `ellipse`: ellipse/line intersection and endpoint-to-center arc math.
//! - `polar`: polar conversion and circle subdivision.

mod ellipse;
mod polar;
mod types;
mod vector;

pub use ellipse::{
    arc_endpoint_to_center, ellipse_line_intersections, ellipse_world_line_intersections,
    elliptical_arc_center,
};
pub use polar::{circle_dividers, point_along, polar_to_rect_deg};
pub use types::{pt, ArcCenter, Ellipse, GeomCfg, Line, LineEquation, LineIntersection};
pub use vector::{
    area2, are_collinear, are_collinear_eps, cross_det, dot, length_sq, line_intersect,
    line_intersect_eps, perpendicular, points_coincide, rotate, rotation_matrix, segment_intersect,
    segment_intersect_eps,
};
