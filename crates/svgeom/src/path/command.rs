//! Path command records.
//!
//! One closed enum over the SVG path letters. Each variant knows its letter,
//! its parameter order and the SVG attribute names of its fields, so the
//! serializer is a single exhaustive match and dynamic construction
//! (`from_params`) can name the field that is missing.
//!
//! Conventions
//! - `relative: true` means the coordinates are deltas from the current point
//!   and the letter prints lowercase.
//! - `ClosePath` has no relative flag and always prints `Z`.
//! - Arc flags are booleans and print as `0`/`1`.

use std::fmt;

use nalgebra::Vector2;

use super::error::PathError;
use crate::num::{write_number, RoundCfg};

/// Variant tag of a `PathCommand`, without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicBezier,
    SmoothCubicBezier,
    QuadraticBezier,
    SmoothQuadraticBezier,
    EllipticalArc,
    ClosePath,
}

impl CommandKind {
    /// Resolve an SVG path letter; the case gives the relativity.
    pub fn from_letter(letter: char) -> Option<(CommandKind, bool)> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::HorizontalLineTo,
            'V' => CommandKind::VerticalLineTo,
            'C' => CommandKind::CubicBezier,
            'S' => CommandKind::SmoothCubicBezier,
            'Q' => CommandKind::QuadraticBezier,
            'T' => CommandKind::SmoothQuadraticBezier,
            'A' => CommandKind::EllipticalArc,
            'Z' => CommandKind::ClosePath,
            _ => return None,
        };
        Some((kind, letter.is_ascii_lowercase()))
    }

    /// Absolute (uppercase) letter.
    pub fn letter(self) -> char {
        match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HorizontalLineTo => 'H',
            CommandKind::VerticalLineTo => 'V',
            CommandKind::CubicBezier => 'C',
            CommandKind::SmoothCubicBezier => 'S',
            CommandKind::QuadraticBezier => 'Q',
            CommandKind::SmoothQuadraticBezier => 'T',
            CommandKind::EllipticalArc => 'A',
            CommandKind::ClosePath => 'Z',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::MoveTo => "MoveTo",
            CommandKind::LineTo => "LineTo",
            CommandKind::HorizontalLineTo => "HorizontalLineTo",
            CommandKind::VerticalLineTo => "VerticalLineTo",
            CommandKind::CubicBezier => "CubicBezier",
            CommandKind::SmoothCubicBezier => "SmoothCubicBezier",
            CommandKind::QuadraticBezier => "QuadraticBezier",
            CommandKind::SmoothQuadraticBezier => "SmoothQuadraticBezier",
            CommandKind::EllipticalArc => "EllipticalArc",
            CommandKind::ClosePath => "ClosePath",
        }
    }

    /// Parameter names in serialization order (SVG attribute spelling).
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            CommandKind::MoveTo
            | CommandKind::LineTo
            | CommandKind::SmoothQuadraticBezier => &["x", "y"],
            CommandKind::HorizontalLineTo => &["x"],
            CommandKind::VerticalLineTo => &["y"],
            CommandKind::CubicBezier => &["x1", "y1", "x2", "y2", "x", "y"],
            CommandKind::SmoothCubicBezier => &["x2", "y2", "x", "y"],
            CommandKind::QuadraticBezier => &["x1", "y1", "x", "y"],
            CommandKind::EllipticalArc => &[
                "rx",
                "ry",
                "x-axis-rotation",
                "large-arc-flag",
                "sweep-flag",
                "x",
                "y",
            ],
            CommandKind::ClosePath => &[],
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One SVG path command.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "cmd"))]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        relative: bool,
    },
    LineTo {
        x: f64,
        y: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        relative: bool,
    },
    HorizontalLineTo {
        x: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        relative: bool,
    },
    VerticalLineTo {
        y: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        relative: bool,
    },
    CubicBezier {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        relative: bool,
    },
    SmoothCubicBezier {
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        relative: bool,
    },
    QuadraticBezier {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        relative: bool,
    },
    SmoothQuadraticBezier {
        x: f64,
        y: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        relative: bool,
    },
    EllipticalArc {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        relative: bool,
    },
    ClosePath,
}

/// Upper bound on parameters per command (`EllipticalArc`).
const MAX_PARAMS: usize = 7;

#[inline]
fn flag(v: bool) -> f64 {
    if v {
        1.0
    } else {
        0.0
    }
}

impl PathCommand {
    #[inline]
    pub fn move_to(x: f64, y: f64) -> Self {
        PathCommand::MoveTo { x, y, relative: false }
    }

    #[inline]
    pub fn line_to(x: f64, y: f64) -> Self {
        PathCommand::LineTo { x, y, relative: false }
    }

    #[inline]
    pub fn horizontal_to(x: f64) -> Self {
        PathCommand::HorizontalLineTo { x, relative: false }
    }

    #[inline]
    pub fn vertical_to(y: f64) -> Self {
        PathCommand::VerticalLineTo { y, relative: false }
    }

    #[inline]
    pub fn cubic_to(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        PathCommand::CubicBezier {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
            relative: false,
        }
    }

    #[inline]
    pub fn smooth_cubic_to(x2: f64, y2: f64, x: f64, y: f64) -> Self {
        PathCommand::SmoothCubicBezier {
            x2,
            y2,
            x,
            y,
            relative: false,
        }
    }

    #[inline]
    pub fn quadratic_to(x1: f64, y1: f64, x: f64, y: f64) -> Self {
        PathCommand::QuadraticBezier {
            x1,
            y1,
            x,
            y,
            relative: false,
        }
    }

    #[inline]
    pub fn smooth_quadratic_to(x: f64, y: f64) -> Self {
        PathCommand::SmoothQuadraticBezier { x, y, relative: false }
    }

    #[inline]
    pub fn arc_to(
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        PathCommand::EllipticalArc {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
            relative: false,
        }
    }

    #[inline]
    pub fn close() -> Self {
        PathCommand::ClosePath
    }

    /// Builder form of `set_relative(true)`.
    #[inline]
    pub fn relative(mut self) -> Self {
        self.set_relative(true);
        self
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            PathCommand::MoveTo { .. } => CommandKind::MoveTo,
            PathCommand::LineTo { .. } => CommandKind::LineTo,
            PathCommand::HorizontalLineTo { .. } => CommandKind::HorizontalLineTo,
            PathCommand::VerticalLineTo { .. } => CommandKind::VerticalLineTo,
            PathCommand::CubicBezier { .. } => CommandKind::CubicBezier,
            PathCommand::SmoothCubicBezier { .. } => CommandKind::SmoothCubicBezier,
            PathCommand::QuadraticBezier { .. } => CommandKind::QuadraticBezier,
            PathCommand::SmoothQuadraticBezier { .. } => CommandKind::SmoothQuadraticBezier,
            PathCommand::EllipticalArc { .. } => CommandKind::EllipticalArc,
            PathCommand::ClosePath => CommandKind::ClosePath,
        }
    }

    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, PathCommand::MoveTo { .. })
    }

    pub fn is_relative(&self) -> bool {
        match *self {
            PathCommand::MoveTo { relative, .. }
            | PathCommand::LineTo { relative, .. }
            | PathCommand::HorizontalLineTo { relative, .. }
            | PathCommand::VerticalLineTo { relative, .. }
            | PathCommand::CubicBezier { relative, .. }
            | PathCommand::SmoothCubicBezier { relative, .. }
            | PathCommand::QuadraticBezier { relative, .. }
            | PathCommand::SmoothQuadraticBezier { relative, .. }
            | PathCommand::EllipticalArc { relative, .. } => relative,
            PathCommand::ClosePath => false,
        }
    }

    /// Change the relativity flag (and with it the letter case). The numeric
    /// fields are left as they are. No-op on `ClosePath`.
    pub fn set_relative(&mut self, value: bool) {
        match self {
            PathCommand::MoveTo { relative, .. }
            | PathCommand::LineTo { relative, .. }
            | PathCommand::HorizontalLineTo { relative, .. }
            | PathCommand::VerticalLineTo { relative, .. }
            | PathCommand::CubicBezier { relative, .. }
            | PathCommand::SmoothCubicBezier { relative, .. }
            | PathCommand::QuadraticBezier { relative, .. }
            | PathCommand::SmoothQuadraticBezier { relative, .. }
            | PathCommand::EllipticalArc { relative, .. } => *relative = value,
            PathCommand::ClosePath => {}
        }
    }

    /// Rendered letter: lowercase when relative, `Z` for `ClosePath`.
    pub fn letter(&self) -> char {
        let upper = self.kind().letter();
        if self.is_relative() {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }

    fn raw_params(&self) -> ([f64; MAX_PARAMS], usize) {
        let mut buf = [0.0; MAX_PARAMS];
        let n = {
            let mut put = |vals: &[f64]| {
                buf[..vals.len()].copy_from_slice(vals);
                vals.len()
            };
            match *self {
                PathCommand::MoveTo { x, y, .. }
                | PathCommand::LineTo { x, y, .. }
                | PathCommand::SmoothQuadraticBezier { x, y, .. } => put(&[x, y]),
                PathCommand::HorizontalLineTo { x, .. } => put(&[x]),
                PathCommand::VerticalLineTo { y, .. } => put(&[y]),
                PathCommand::CubicBezier {
                    x1, y1, x2, y2, x, y, ..
                } => put(&[x1, y1, x2, y2, x, y]),
                PathCommand::SmoothCubicBezier { x2, y2, x, y, .. } => put(&[x2, y2, x, y]),
                PathCommand::QuadraticBezier { x1, y1, x, y, .. } => put(&[x1, y1, x, y]),
                PathCommand::EllipticalArc {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                    ..
                } => put(&[rx, ry, x_axis_rotation, flag(large_arc), flag(sweep), x, y]),
                PathCommand::ClosePath => 0,
            }
        };
        (buf, n)
    }

    /// Parameters in serialization order; arc flags come out as `0.0`/`1.0`.
    pub fn params(&self) -> Vec<f64> {
        let (buf, n) = self.raw_params();
        buf[..n].to_vec()
    }

    /// Build a command from an SVG letter and its parameters.
    ///
    /// Arc flags are true for any non-zero value.
    pub fn from_params(letter: char, params: &[f64]) -> Result<PathCommand, PathError> {
        let (kind, relative) =
            CommandKind::from_letter(letter).ok_or(PathError::UnknownCommand { letter })?;
        let fields = kind.fields();
        if params.len() < fields.len() {
            return Err(PathError::MissingField {
                kind,
                field: fields[params.len()],
            });
        }
        if params.len() > fields.len() {
            return Err(PathError::TooManyParams {
                kind,
                expected: fields.len(),
                got: params.len(),
            });
        }
        let p = params;
        let cmd = match kind {
            CommandKind::MoveTo => PathCommand::MoveTo {
                x: p[0],
                y: p[1],
                relative,
            },
            CommandKind::LineTo => PathCommand::LineTo {
                x: p[0],
                y: p[1],
                relative,
            },
            CommandKind::HorizontalLineTo => PathCommand::HorizontalLineTo { x: p[0], relative },
            CommandKind::VerticalLineTo => PathCommand::VerticalLineTo { y: p[0], relative },
            CommandKind::CubicBezier => PathCommand::CubicBezier {
                x1: p[0],
                y1: p[1],
                x2: p[2],
                y2: p[3],
                x: p[4],
                y: p[5],
                relative,
            },
            CommandKind::SmoothCubicBezier => PathCommand::SmoothCubicBezier {
                x2: p[0],
                y2: p[1],
                x: p[2],
                y: p[3],
                relative,
            },
            CommandKind::QuadraticBezier => PathCommand::QuadraticBezier {
                x1: p[0],
                y1: p[1],
                x: p[2],
                y: p[3],
                relative,
            },
            CommandKind::SmoothQuadraticBezier => PathCommand::SmoothQuadraticBezier {
                x: p[0],
                y: p[1],
                relative,
            },
            CommandKind::EllipticalArc => PathCommand::EllipticalArc {
                rx: p[0],
                ry: p[1],
                x_axis_rotation: p[2],
                large_arc: p[3] != 0.0,
                sweep: p[4] != 0.0,
                x: p[5],
                y: p[6],
                relative,
            },
            CommandKind::ClosePath => PathCommand::ClosePath,
        };
        Ok(cmd)
    }

    /// Copy with every numeric field passed through `cfg` (flags untouched).
    pub fn rounded(&self, cfg: &RoundCfg) -> PathCommand {
        let r = |v: f64| cfg.apply(v);
        match *self {
            PathCommand::MoveTo { x, y, relative } => PathCommand::MoveTo {
                x: r(x),
                y: r(y),
                relative,
            },
            PathCommand::LineTo { x, y, relative } => PathCommand::LineTo {
                x: r(x),
                y: r(y),
                relative,
            },
            PathCommand::HorizontalLineTo { x, relative } => {
                PathCommand::HorizontalLineTo { x: r(x), relative }
            }
            PathCommand::VerticalLineTo { y, relative } => {
                PathCommand::VerticalLineTo { y: r(y), relative }
            }
            PathCommand::CubicBezier {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
                relative,
            } => PathCommand::CubicBezier {
                x1: r(x1),
                y1: r(y1),
                x2: r(x2),
                y2: r(y2),
                x: r(x),
                y: r(y),
                relative,
            },
            PathCommand::SmoothCubicBezier {
                x2,
                y2,
                x,
                y,
                relative,
            } => PathCommand::SmoothCubicBezier {
                x2: r(x2),
                y2: r(y2),
                x: r(x),
                y: r(y),
                relative,
            },
            PathCommand::QuadraticBezier {
                x1,
                y1,
                x,
                y,
                relative,
            } => PathCommand::QuadraticBezier {
                x1: r(x1),
                y1: r(y1),
                x: r(x),
                y: r(y),
                relative,
            },
            PathCommand::SmoothQuadraticBezier { x, y, relative } => {
                PathCommand::SmoothQuadraticBezier {
                    x: r(x),
                    y: r(y),
                    relative,
                }
            }
            PathCommand::EllipticalArc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
                relative,
            } => PathCommand::EllipticalArc {
                rx: r(rx),
                ry: r(ry),
                x_axis_rotation: r(x_axis_rotation),
                large_arc,
                sweep,
                x: r(x),
                y: r(y),
                relative,
            },
            PathCommand::ClosePath => PathCommand::ClosePath,
        }
    }

    /// Absolute end point of the command drawn from `current`.
    ///
    /// `subpath_start` is where the current subpath began (the target of
    /// `ClosePath`).
    pub fn end_point(&self, current: Vector2<f64>, subpath_start: Vector2<f64>) -> Vector2<f64> {
        let rel = self.is_relative();
        let at = |x: f64, y: f64| {
            if rel {
                current + Vector2::new(x, y)
            } else {
                Vector2::new(x, y)
            }
        };
        match *self {
            PathCommand::MoveTo { x, y, .. }
            | PathCommand::LineTo { x, y, .. }
            | PathCommand::CubicBezier { x, y, .. }
            | PathCommand::SmoothCubicBezier { x, y, .. }
            | PathCommand::QuadraticBezier { x, y, .. }
            | PathCommand::SmoothQuadraticBezier { x, y, .. }
            | PathCommand::EllipticalArc { x, y, .. } => at(x, y),
            PathCommand::HorizontalLineTo { x, .. } => {
                Vector2::new(if rel { current.x + x } else { x }, current.y)
            }
            PathCommand::VerticalLineTo { y, .. } => {
                Vector2::new(current.x, if rel { current.y + y } else { y })
            }
            PathCommand::ClosePath => subpath_start,
        }
    }

    /// Append this command's path-data fragment to `out`.
    ///
    /// Values are separated by a space except before a minus sign. With
    /// `omit_letter` the fragment continues the previous command's parameter
    /// list, so its first value is separated the same way.
    pub fn write_fragment(&self, out: &mut String, omit_letter: bool, cfg: &RoundCfg) {
        if !omit_letter {
            out.push(self.letter());
        }
        let (buf, n) = self.raw_params();
        let mut num = String::new();
        for (i, v) in buf[..n].iter().enumerate() {
            num.clear();
            write_number(&mut num, *v, cfg);
            let needs_sep = (i > 0 || omit_letter) && !num.starts_with('-');
            if needs_sep {
                out.push(' ');
            }
            out.push_str(&num);
        }
    }

    /// Fragment with its letter, e.g. `L10 -2`.
    pub fn to_fragment(&self, cfg: &RoundCfg) -> String {
        let mut out = String::new();
        self.write_fragment(&mut out, false, cfg);
        out
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fragment(&RoundCfg::default()))
    }
}
