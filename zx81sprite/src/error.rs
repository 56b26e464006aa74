use std::path::PathBuf;

use thiserror::Error;

/// The input grid does not have the shape needed for 2x2 blocks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("input contains no pixels")]
    Empty,

    #[error("row {row} has {found} characters, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row width {0} is not even")]
    OddWidth(usize),

    #[error("row count {0} is not even")]
    OddHeight(usize),
}

/// A 2x2 cell whose signature is not in the pattern table.
///
/// `row` and `column` locate the cell's top-left pixel in the input text
/// (0-based line and character index).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pattern '{signature}' at row {row}, column {column}")]
pub struct UnknownPatternError {
    pub row: usize,
    pub column: usize,
    pub signature: String,
}

#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid sprite shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("{0} cell(s) did not match any block pattern")]
    UnknownPatterns(usize),
}
