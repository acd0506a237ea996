//! Text inputs to library values: point lists and SVG path data.

use anyhow::{bail, Context, Result};
use svgeom::{pt, AnalyticalPath, PathCommand, RoundCfg, Vec2};
use svgtypes::{PathParser, PathSegment};

/// Parse `"x,y"`.
pub fn parse_point(s: &str) -> Result<Vec2<f64>> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("point {:?} is not of the form x,y", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("bad x coordinate in {:?}", s))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("bad y coordinate in {:?}", s))?;
    Ok(pt(x, y))
}

/// Parse whitespace-separated `"x,y x,y ..."`.
pub fn parse_points(s: &str) -> Result<Vec<Vec2<f64>>> {
    s.split_whitespace().map(parse_point).collect()
}

/// Parse exactly two points (a line or segment).
pub fn parse_pair(s: &str) -> Result<(Vec2<f64>, Vec2<f64>)> {
    let pts = parse_points(s)?;
    match pts.as_slice() {
        [a, b] => Ok((*a, *b)),
        _ => bail!("expected two points \"x1,y1 x2,y2\", got {}", pts.len()),
    }
}

/// Map one parsed segment onto a command, keeping its relativity.
pub fn segment_to_command(seg: PathSegment) -> PathCommand {
    match seg {
        PathSegment::MoveTo { abs, x, y } => PathCommand::MoveTo { x, y, relative: !abs },
        PathSegment::LineTo { abs, x, y } => PathCommand::LineTo { x, y, relative: !abs },
        PathSegment::HorizontalLineTo { abs, x } => {
            PathCommand::HorizontalLineTo { x, relative: !abs }
        }
        PathSegment::VerticalLineTo { abs, y } => PathCommand::VerticalLineTo { y, relative: !abs },
        PathSegment::CurveTo {
            abs,
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        } => PathCommand::CubicBezier {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
            relative: !abs,
        },
        PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => PathCommand::SmoothCubicBezier {
            x2,
            y2,
            x,
            y,
            relative: !abs,
        },
        PathSegment::Quadratic { abs, x1, y1, x, y } => PathCommand::QuadraticBezier {
            x1,
            y1,
            x,
            y,
            relative: !abs,
        },
        PathSegment::SmoothQuadratic { abs, x, y } => PathCommand::SmoothQuadraticBezier {
            x,
            y,
            relative: !abs,
        },
        PathSegment::EllipticalArc {
            abs,
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
        } => PathCommand::EllipticalArc {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
            relative: !abs,
        },
        PathSegment::ClosePath { .. } => PathCommand::ClosePath,
    }
}

/// Rebuild SVG path data as an `AnalyticalPath` under `cfg` (refreshed).
pub fn path_from_data(d: &str, cfg: RoundCfg) -> Result<AnalyticalPath> {
    let mut path = AnalyticalPath::with_round_cfg(cfg);
    for (i, seg) in PathParser::from(d).enumerate() {
        let seg = seg.with_context(|| format!("invalid path data after {} segments", i))?;
        path.push(segment_to_command(seg))?;
    }
    path.refresh();
    Ok(path)
}

/// Build a path from serde-encoded commands (refreshed).
pub fn path_from_commands(cmds: Vec<PathCommand>, cfg: RoundCfg) -> Result<AnalyticalPath> {
    let mut path = AnalyticalPath::with_round_cfg(cfg);
    for (i, cmd) in cmds.into_iter().enumerate() {
        path.push(cmd)
            .with_context(|| format!("command #{} rejected", i))?;
    }
    path.refresh();
    Ok(path)
}
