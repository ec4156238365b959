//! Generator errors

use thiserror::Error;

/// Errors surfaced by the generator and the finished board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// The configuration cannot produce a grid with a usable interior
    #[error("invalid generator configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A random passable cell was requested from a board without floor
    #[error("board has no passable cell")]
    NoPassableCell,

    /// A textual map could not be parsed into a board
    #[error("invalid map at line {line}: {reason}")]
    InvalidMap { line: usize, reason: String },
}

impl GenError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        GenError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
