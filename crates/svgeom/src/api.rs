//! Curated surface for shape generators (symbol library, diagramming helpers).
//!
//! Everything a generator needs to turn points into path data, in one import.
//! The module tree stays the source of truth; this only re-exports.

// Vector algebra
pub use crate::geom::{
    area2, are_collinear, are_collinear_eps, cross_det, dot, length_sq, line_intersect,
    line_intersect_eps, perpendicular, points_coincide, rotate, rotation_matrix, segment_intersect,
    segment_intersect_eps, LineIntersection,
};
// Ellipses and arcs
pub use crate::geom::{
    arc_endpoint_to_center, ellipse_line_intersections, ellipse_world_line_intersections,
    elliptical_arc_center, ArcCenter, Ellipse, LineEquation,
};
// Polar helpers
pub use crate::geom::{circle_dividers, point_along, polar_to_rect_deg};
// Path data
pub use crate::num::{angle_of_deg, format_number, RoundCfg};
pub use crate::path::{AnalyticalPath, CommandKind, PathCommand, PathError};
