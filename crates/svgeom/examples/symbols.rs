//! Build a few decorative symbols from the geometry helpers and print their
//! path data.
//!
//! Usage:
//!   cargo run -p svgeom --example symbols
//!   cargo run -p svgeom --example symbols -- star
//!
//! Each symbol is centered on the origin (SVG y-down canvas).

use svgeom::geom::{circle_dividers, point_along, polar_to_rect_deg};
use svgeom::num::strip_decimal_separator;
use svgeom::{pt, AnalyticalPath, PathCommand, PathError, Vec2};

fn main() -> Result<(), PathError> {
    let only = std::env::args().nth(1);
    let symbols: [(&str, fn() -> Result<AnalyticalPath, PathError>); 5] = [
        ("xsight", || x_sight(20.0, 20.0, 4.0)),
        ("asterisk", || asterisk(10.0, Some(3.0))),
        ("circ-asterisk", || circ_asterisk(10.0, 12.0)),
        ("star", || star(12.0, 7.0, 5, 0.0)),
        ("hexagon", || Ok(regular_polygon(10.0, 6))),
    ];
    for (name, build) in symbols {
        if only.as_deref().is_some_and(|o| o != name) {
            continue;
        }
        println!("{name:>14}: {}", build()?.d());
    }
    Ok(())
}

/// Four diagonal strokes, stopping `separation` short of the center.
fn x_sight(width: f64, height: f64, separation: f64) -> Result<AnalyticalPath, PathError> {
    let (mw, mh) = (width / 2.0, height / 2.0);
    let origin = pt(0.0, 0.0);
    let mut path = AnalyticalPath::new();
    for corner in [pt(-mw, -mh), pt(-mw, mh), pt(mw, -mh), pt(mw, mh)] {
        let inner = point_along(origin, corner, separation);
        path.push(PathCommand::move_to(corner.x, corner.y))?
            .push(PathCommand::line_to(inner.x, inner.y))?;
    }
    path.refresh();
    Ok(path)
}

fn snap(p: Vec2<f64>) -> Vec2<f64> {
    pt(strip_decimal_separator(p.x), strip_decimal_separator(p.y))
}

/// Twelve spokes every 30°; without `separation`, six full diameters.
fn asterisk(radius: f64, separation: Option<f64>) -> Result<AnalyticalPath, PathError> {
    let mut path = AnalyticalPath::new();
    match separation {
        None => {
            for k in 0..6 {
                let p = snap(polar_to_rect_deg(30.0 * f64::from(k), radius));
                path.push(PathCommand::move_to(p.x, p.y))?
                    .push(PathCommand::line_to(-p.x, -p.y))?;
            }
        }
        Some(sep) => {
            for k in 0..12 {
                let ang = 30.0 * f64::from(k);
                let outer = snap(polar_to_rect_deg(ang, radius));
                let inner = snap(polar_to_rect_deg(ang, sep));
                path.push(PathCommand::move_to(outer.x, outer.y))?
                    .push(PathCommand::line_to(inner.x, inner.y))?;
            }
        }
    }
    path.refresh();
    Ok(path)
}

/// Asterisk inside a circle drawn as two half arcs.
fn circ_asterisk(radius: f64, circle_radius: f64) -> Result<AnalyticalPath, PathError> {
    let mut path = asterisk(radius, None)?;
    let r = circle_radius;
    path.push(PathCommand::move_to(-r, 0.0))?
        .push(PathCommand::arc_to(r, r, 0.0, true, false, r, 0.0))?
        .append_refresh(PathCommand::arc_to(r, r, 0.0, true, false, -r, 0.0))?;
    Ok(path)
}

/// Star with `spikes` points; rotation 0 puts the first spike straight up.
fn star(outer: f64, inner: f64, spikes: usize, rotation: f64) -> Result<AnalyticalPath, PathError> {
    let step = 360.0 / spikes as f64;
    let rot = rotation - 90.0;
    let center = pt(0.0, 0.0);
    let tips = circle_dividers(center, outer, spikes, rot);
    let valleys = circle_dividers(center, inner, spikes, rot + step / 2.0);
    let mut path = AnalyticalPath::new();
    for (i, (tip, valley)) in tips.iter().zip(&valleys).enumerate() {
        let head = if i == 0 {
            PathCommand::move_to(tip.x, tip.y)
        } else {
            PathCommand::line_to(tip.x, tip.y)
        };
        path.push(head)?.push(PathCommand::line_to(valley.x, valley.y))?;
    }
    if !tips.is_empty() {
        path.push(PathCommand::close())?;
    }
    Ok(path)
}

/// Closed regular polygon through `add_polyline`.
fn regular_polygon(radius: f64, sides: usize) -> AnalyticalPath {
    let mut pts = circle_dividers(pt(0.0, 0.0), radius, sides, -90.0);
    if let Some(first) = pts.first().copied() {
        pts.push(first);
    }
    let mut path = AnalyticalPath::new();
    path.add_polyline(&pts);
    path
}
