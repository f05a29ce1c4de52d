//! Errors raised by the maze library

use thiserror::Error;

/// Errors that can occur while building or parsing a maze grid
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Grid size cannot hold distinct start and exit squares
    #[error(
        "Cannot build a {rows}x{cols} maze: both dimensions must be positive \
         and the area must be greater than 1"
    )]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Unexpected character `{symbol}` at y={row}, x={col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("Row {row} has {found} squares, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}
