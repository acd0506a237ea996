//! Geometry and path-data core for building SVG documents.
//!
//! Two cooperating parts:
//! - `geom`: stateless 2D vector algebra (line/segment intersection, rotation,
//!   collinearity, ellipse/line intersection, elliptical-arc center).
//! - `path`: `PathCommand` records and `AnalyticalPath`, which compacts a
//!   command sequence into the shortest correct SVG `d` string.
//!
//! Numeric output goes through `num::RoundCfg`, an explicit rounding policy
//! owned by each path (no process-wide state).

pub mod api;
pub mod geom;
pub mod num;
pub mod path;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{pt, Ellipse, GeomCfg, Line};
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
pub use num::RoundCfg;
pub use path::{AnalyticalPath, PathCommand, PathError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        are_collinear, circle_dividers, ellipse_line_intersections, elliptical_arc_center,
        line_intersect, polar_to_rect_deg, pt, rotate, segment_intersect, Ellipse, GeomCfg, Line,
    };
    pub use crate::num::RoundCfg;
    pub use crate::path::{AnalyticalPath, CommandKind, PathCommand, PathError};
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
