use std::collections::TryReserveError;
use thiserror::Error;

/// Invalid parameters rejected before a grid is built.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be at least 1, got {0}")]
    InvalidSize(usize),
    #[error("a {0}x{0} grid does not fit in memory")]
    TooLarge(usize),
    #[error("live probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),
    #[error("a {size}x{size} grid needs {expected} cells, got {actual}")]
    BufferLength {
        size: usize,
        expected: usize,
        actual: usize,
    },
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unknown cell symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

/// A step that could not run. The engine state is unchanged when this is returned.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("could not allocate the next generation buffer ({cells} cells)")]
    Allocation {
        cells: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Malformed `B.../S...` rule notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleParseError {
    #[error("rule must look like B3/S23, got {0:?}")]
    Malformed(String),
    #[error("neighbor count {0:?} is not a digit between 0 and 8")]
    InvalidCount(char),
}
