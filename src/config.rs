use crate::common::BoardError;

pub const DEFAULT_ROWS: usize = 3;
pub const DEFAULT_COLUMNS: usize = 3;
pub const DEFAULT_WIN_LENGTH: usize = 3;

/// Symbols column labels are drawn from, in label order.
pub const COLUMN_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Board dimensions and the run length needed to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameConfig {
    rows: usize,
    columns: usize,
    win_length: usize,
}

impl GameConfig {
    /// Validate and build a configuration. A win length longer than both
    /// dimensions is accepted; such a game can only end in a draw.
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::ZeroDimension { rows, columns });
        }
        if rows.checked_mul(columns).is_none() {
            return Err(BoardError::TooLarge { rows, columns });
        }
        if win_length == 0 {
            return Err(BoardError::ZeroWinLength);
        }
        Ok(Self {
            rows,
            columns,
            win_length,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}
