//! Common types for the game: construction errors and move validation results.

/// Errors returned while generating column labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// Labels were requested from an alphabet with no symbols.
    #[error("cannot generate {count} labels from an empty alphabet")]
    EmptyAlphabet { count: usize },
    /// The alphabet lists the same symbol twice, so labels would collide.
    #[error("alphabet contains symbol {0:?} more than once")]
    DuplicateSymbol(char),
}

/// Errors returned by board and configuration constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Rows or columns set to zero.
    #[error("board must have at least one row and one column, got {rows}x{columns}")]
    ZeroDimension { rows: usize, columns: usize },
    /// More cells than can be addressed.
    #[error("board of {rows}x{columns} cells is too large")]
    TooLarge { rows: usize, columns: usize },
    /// Win length set to zero.
    #[error("win length must be at least 1")]
    ZeroWinLength,
    /// A seeded board does not match the configured dimensions.
    #[error("board is {actual_rows}x{actual_columns}, expected {rows}x{columns}")]
    DimensionMismatch {
        rows: usize,
        columns: usize,
        actual_rows: usize,
        actual_columns: usize,
    },
    /// A row of a textual board has a different width than the first row.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// Unrecognised glyph in a textual board.
    #[error("unknown cell {glyph:?} at row {row}, column {col}")]
    UnknownCell { glyph: char, row: usize, col: usize },
    /// Column labels could not be built.
    #[error("column labels: {0}")]
    Labels(#[from] LabelError),
}

/// Validated target of a move in 0-based board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveToken {
    pub row: usize,
    pub col: usize,
}

/// Result of validating a raw move token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    /// Token names an empty cell on the board.
    Success(MoveToken),
    /// Token is malformed, names an unknown column, row zero, or lies off the board.
    InvalidField,
    /// Token names a cell that already holds a mark.
    TakenField,
}

impl MoveStatus {
    /// Coordinates of the validated move, if any.
    pub fn token(&self) -> Option<MoveToken> {
        match self {
            MoveStatus::Success(token) => Some(*token),
            _ => None,
        }
    }
}
