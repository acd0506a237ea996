//! `AnalyticalPath`: an owned command list and its compacted `d` string.
//!
//! Compaction rules (left to right, against the previous command)
//! - The first command is an absolute `MoveTo` and always prints its letter.
//! - `LineTo` drops its letter after a `LineTo` of the same relativity, or
//!   after a later `MoveTo` of the same relativity (SVG treats extra pairs
//!   after `M`/`m` as `L`/`l`). The leading `MoveTo` keeps the following
//!   `L` explicit: `M0 0L10 0 10 10`.
//! - Any other command except `MoveTo` and `ClosePath` drops its letter when
//!   it repeats the previous letter exactly (same kind, same case).
//!
//! The cached `d` is rebuilt by `refresh`, on structural edits and when a
//! `ClosePath` is appended; plain appends may batch.

use std::fmt;

use nalgebra::Vector2;
use tracing::{debug, trace};

use super::command::{CommandKind, PathCommand};
use super::error::PathError;
use crate::geom::{points_coincide, GeomCfg};
use crate::num::{format_number, strip_decimal_separator, RoundCfg};

#[derive(Clone, Debug, Default)]
pub struct AnalyticalPath {
    cmds: Vec<PathCommand>,
    cfg: RoundCfg,
    d: String,
}

/// Whether `cur` may continue the parameter list of `prev` without a letter.
fn omits_letter(prev: &PathCommand, prev_is_head: bool, cur: &PathCommand) -> bool {
    match cur.kind() {
        CommandKind::MoveTo | CommandKind::ClosePath => false,
        CommandKind::LineTo => {
            let merges = match prev.kind() {
                CommandKind::LineTo => true,
                CommandKind::MoveTo => !prev_is_head,
                _ => false,
            };
            merges && prev.is_relative() == cur.is_relative()
        }
        _ => cur.letter() == prev.letter(),
    }
}

impl AnalyticalPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_round_cfg(cfg: RoundCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    #[inline]
    pub fn round_cfg(&self) -> &RoundCfg {
        &self.cfg
    }

    /// Replace the rounding policy. Stored commands are re-rounded under the
    /// new policy (precision already dropped is not recovered) and the path
    /// is refreshed.
    pub fn set_round_cfg(&mut self, cfg: RoundCfg) {
        self.cfg = cfg;
        for cmd in &mut self.cmds {
            *cmd = cmd.rounded(&cfg);
        }
        self.refresh();
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.cmds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Serialized path data as of the last refresh.
    #[inline]
    pub fn d(&self) -> &str {
        &self.d
    }

    /// Round for storage; a command landing in front becomes absolute.
    fn prepare(&self, cmd: PathCommand, at_head: bool) -> Result<PathCommand, PathError> {
        if at_head && !cmd.is_move() {
            return Err(PathError::FirstNotMove { kind: cmd.kind() });
        }
        if cmd.params().iter().any(|v| !v.is_finite()) {
            return Err(PathError::NonFinite { kind: cmd.kind() });
        }
        let mut cmd = cmd.rounded(&self.cfg);
        if at_head {
            cmd.set_relative(false);
        }
        Ok(cmd)
    }

    /// Add `cmd` at the end, or at the front with `to_start`.
    ///
    /// Refreshes when `cmd` is a `ClosePath`. Fails with `FirstNotMove` if a
    /// non-`MoveTo` would become the first command.
    pub fn append(&mut self, cmd: PathCommand, to_start: bool) -> Result<&mut Self, PathError> {
        let at_head = to_start || self.cmds.is_empty();
        let cmd = self.prepare(cmd, at_head)?;
        if to_start {
            self.cmds.insert(0, cmd);
        } else {
            self.cmds.push(cmd);
        }
        trace!(kind = %cmd.kind(), to_start, count = self.cmds.len(), "path command appended");
        if matches!(cmd, PathCommand::ClosePath) {
            self.refresh();
        }
        Ok(self)
    }

    #[inline]
    pub fn push(&mut self, cmd: PathCommand) -> Result<&mut Self, PathError> {
        self.append(cmd, false)
    }

    /// `push` followed by an unconditional refresh.
    pub fn append_refresh(&mut self, cmd: PathCommand) -> Result<&mut Self, PathError> {
        self.append(cmd, false)?;
        self.refresh();
        Ok(self)
    }

    /// Insert `cmd` before position `index` (`index == len` appends).
    pub fn insert(&mut self, index: usize, cmd: PathCommand) -> Result<&mut Self, PathError> {
        if index > self.cmds.len() {
            return Err(PathError::IndexOutOfRange {
                index,
                len: self.cmds.len(),
            });
        }
        let cmd = self.prepare(cmd, index == 0)?;
        self.cmds.insert(index, cmd);
        trace!(kind = %cmd.kind(), index, count = self.cmds.len(), "path command inserted");
        self.refresh();
        Ok(self)
    }

    /// Remove and return the command at `index`.
    ///
    /// Removing the head is refused when the next command is not a `MoveTo`;
    /// a relative `m` moving to the front becomes absolute.
    pub fn delete(&mut self, index: usize) -> Result<PathCommand, PathError> {
        if index >= self.cmds.len() {
            return Err(PathError::IndexOutOfRange {
                index,
                len: self.cmds.len(),
            });
        }
        if index == 0 {
            if let Some(next) = self.cmds.get(1) {
                if !next.is_move() {
                    return Err(PathError::FirstNotMove { kind: next.kind() });
                }
            }
        }
        let removed = self.cmds.remove(index);
        if let Some(head) = self.cmds.first_mut() {
            head.set_relative(false);
        }
        trace!(kind = %removed.kind(), index, count = self.cmds.len(), "path command deleted");
        self.refresh();
        Ok(removed)
    }

    /// Drop every command; with `refresh` the cached `d` is emptied too.
    pub fn clear(&mut self, refresh: bool) {
        self.cmds.clear();
        if refresh {
            self.refresh();
        }
    }

    /// Lower a polyline into `M` / `h` `v` `l` (or `H` `V` `L`) / `Z`.
    ///
    /// Points are rounded first and points with a NaN or infinite coordinate
    /// are dropped. Repeated points are skipped, a last point coinciding with
    /// the first (within `GeomCfg::eps_coincide`) closes the figure, and each
    /// segment takes whichever of the relative or absolute form has the
    /// shorter numerals (relative on a tie).
    pub fn add_polyline(&mut self, points: &[Vector2<f64>]) -> &mut Self {
        let cfg = self.cfg;
        let pts: Vec<Vector2<f64>> = points
            .iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .map(|p| Vector2::new(cfg.apply(p.x), cfg.apply(p.y)))
            .collect();
        if pts.len() < points.len() {
            debug!(dropped = points.len() - pts.len(), "non-finite polyline points dropped");
        }
        let Some(&first) = pts.first() else {
            return self;
        };
        let eps = GeomCfg::default().eps_coincide;
        self.cmds.push(PathCommand::move_to(first.x, first.y));
        let last = pts.len() - 1;
        for i in 1..pts.len() {
            let p = pts[i];
            if i == last && points_coincide(p, first, eps) {
                self.cmds.push(PathCommand::ClosePath);
                break;
            }
            let dx = cfg.apply(strip_decimal_separator(p.x - pts[i - 1].x));
            let dy = cfg.apply(strip_decimal_separator(p.y - pts[i - 1].y));
            if dx == 0.0 && dy == 0.0 {
                continue;
            }
            let (rel, abs) = if dx == 0.0 {
                (
                    PathCommand::vertical_to(dy).relative(),
                    PathCommand::vertical_to(p.y),
                )
            } else if dy == 0.0 {
                (
                    PathCommand::horizontal_to(dx).relative(),
                    PathCommand::horizontal_to(p.x),
                )
            } else {
                (
                    PathCommand::line_to(dx, dy).relative(),
                    PathCommand::line_to(p.x, p.y),
                )
            };
            let cmd = if self.numeral_len(&rel) <= self.numeral_len(&abs) {
                rel
            } else {
                abs
            };
            self.cmds.push(cmd);
        }
        debug!(points = points.len(), count = self.cmds.len(), "polyline lowered");
        self.refresh();
        self
    }

    fn numeral_len(&self, cmd: &PathCommand) -> usize {
        cmd.params()
            .iter()
            .map(|v| format_number(*v, &self.cfg).len())
            .sum()
    }

    /// Write the compacted path data for the current command list.
    pub fn write_path_data(&self, out: &mut String) {
        for (i, cmd) in self.cmds.iter().enumerate() {
            let omit = i > 0 && omits_letter(&self.cmds[i - 1], i == 1, cmd);
            cmd.write_fragment(out, omit, &self.cfg);
        }
    }

    /// Fresh serialization; the cached `d` is left alone.
    pub fn to_path_data(&self) -> String {
        let mut out = String::with_capacity(self.cmds.len() * 8);
        self.write_path_data(&mut out);
        out
    }

    /// Rebuild the cached `d` from the stored commands. Idempotent.
    pub fn refresh(&mut self) -> &str {
        let mut d = std::mem::take(&mut self.d);
        d.clear();
        self.write_path_data(&mut d);
        self.d = d;
        debug!(commands = self.cmds.len(), bytes = self.d.len(), "path data refreshed");
        &self.d
    }

    /// Absolute end point of every command, in order.
    pub fn end_points(&self) -> Vec<Vector2<f64>> {
        let mut out = Vec::with_capacity(self.cmds.len());
        let mut current = Vector2::zeros();
        let mut start = Vector2::zeros();
        for cmd in &self.cmds {
            current = cmd.end_point(current, start);
            if cmd.is_move() {
                start = current;
            }
            out.push(current);
        }
        out
    }
}

impl fmt::Display for AnalyticalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_data())
    }
}
