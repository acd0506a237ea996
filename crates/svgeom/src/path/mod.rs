//! Path data: command records and the compacting `AnalyticalPath`.
//!
//! Purpose
//! - Turn a sequence of drawing commands into the shortest correct SVG `d`
//!   attribute, keeping the first command an absolute `MoveTo` and eliding
//!   repeated command letters.
//!
//! Layout
//! - `command`: `PathCommand`, `CommandKind`, per-command formatting.
//! - `analytical`: `AnalyticalPath` (mutation, polyline lowering, refresh).
//! - `error`: `PathError`.

mod analytical;
mod command;
mod error;

pub use analytical::AnalyticalPath;
pub use command::{CommandKind, PathCommand};
pub use error::PathError;

#[cfg(test)]
mod tests;
