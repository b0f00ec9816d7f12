use thiserror::Error;

use crate::point::Point;

/// Errors raised by [`Grid`](crate::grid::Grid) construction, indexing and parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyDimension { rows: usize, columns: usize },

    #[error("cell ({row}, {column}) is outside a {rows}x{columns} grid")]
    OutOfBounds {
        row: i32,
        column: i32,
        rows: usize,
        columns: usize,
    },

    #[error("illegal symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol {
        symbol: char,
        line: usize,
        column: usize,
    },

    #[error("shape text has no rows")]
    NoRows,

    #[error("shape text has an empty row at line {line}")]
    NoColumns { line: usize },

    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRows {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Reasons a shape could not be stamped onto a base grid.
///
/// Both are expected during expansion and are skipped there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("target {0:?} is outside the base grid")]
    OutOfBounds(Point),

    #[error("target {0:?} is already occupied")]
    Overlap(Point),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("reference field must be at least 1x1, got {0}")]
    FieldTooSmall(usize),
}

/// Failures of a batch run over many shape pairs
#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("writing batch output: {0}")]
    Io(#[from] std::io::Error),
}
