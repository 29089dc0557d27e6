//! Error types for grid construction and route planning.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell symbol {symbol:?} at line {line}, column {column}")]
    UnknownCell {
        symbol: char,
        line: usize,
        column: usize,
    },
}

/// Configuration errors detected before a route is planned.
///
/// The `Display` output is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("no depot is marked on the grid")]
    MissingDepot,
    #[error("no drop point is marked on the grid")]
    MissingDropPoint,
    #[error("only one depot may be marked, found {count}")]
    MultipleDepots { count: usize },
    #[error("capacity must be a whole number greater than 0, got {input:?}")]
    InvalidCapacity { input: String },
}
