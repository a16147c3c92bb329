//! Crate-wide error type.
//!
//! A plain enum, a manual `Display`, and a blanket `std::error::Error`
//! impl. No `anyhow`/`thiserror` dependency.

use std::fmt;

/// Every failure mode named in the engine's error-handling design.
#[derive(Debug, Clone, PartialEq)]
pub enum HexError {
    /// Target cell was out of bounds or already occupied.
    InvalidMove { row: i32, col: i32 },
    /// `undo()` was called with an empty history.
    NothingToUndo,
    /// A configuration value violates an invariant (non-positive board
    /// size, a negative weight where one is forbidden, a missing
    /// required heuristic component). Always fatal at construction time.
    InvalidConfiguration(String),
    /// The backing predictor errored or returned malformed output.
    PredictorFailure(String),
    /// A composition heuristic was built with a required component
    /// missing, and `score()` was invoked anyway.
    NullComponent,
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexError::InvalidMove { row, col } => {
                write!(f, "invalid move at ({row}, {col})")
            }
            HexError::NothingToUndo => write!(f, "no move to undo"),
            HexError::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
            HexError::PredictorFailure(msg) => write!(f, "predictor failure: {msg}"),
            HexError::NullComponent => {
                write!(f, "heuristic composition is missing a required component")
            }
        }
    }
}

impl std::error::Error for HexError {}

pub type HexResult<T> = Result<T, HexError>;
