use std::fmt;

use super::command::CommandKind;

/// Errors surfaced by command construction and path mutation.
///
/// All of them are caller mistakes detected at the point of misuse; a failed
/// operation leaves the path as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// A non-`MoveTo` command would become the first command of a path.
    FirstNotMove { kind: CommandKind },
    /// Dynamic construction ran out of parameters before `field`.
    MissingField {
        kind: CommandKind,
        field: &'static str,
    },
    /// Dynamic construction was given more parameters than the command takes.
    TooManyParams {
        kind: CommandKind,
        expected: usize,
        got: usize,
    },
    /// Not an SVG path command letter.
    UnknownCommand { letter: char },
    /// A parameter is NaN or infinite and has no path-data spelling.
    NonFinite { kind: CommandKind },
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::FirstNotMove { kind } => {
                write!(f, "first path command must be MoveTo, got {}", kind)
            }
            PathError::MissingField { kind, field } => {
                write!(f, "{} command is missing required field `{}`", kind, field)
            }
            PathError::TooManyParams {
                kind,
                expected,
                got,
            } => write!(
                f,
                "{} command takes {} parameters, got {}",
                kind, expected, got
            ),
            PathError::UnknownCommand { letter } => {
                write!(f, "unknown path command letter {:?}", letter)
            }
            PathError::NonFinite { kind } => {
                write!(f, "{} command has a non-finite parameter", kind)
            }
            PathError::IndexOutOfRange { index, len } => {
                write!(f, "command index {} out of range for path of {} commands", index, len)
            }
        }
    }
}

impl std::error::Error for PathError {}
