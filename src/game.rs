use crate::{
    board::{Board, Cell},
    common::{BoardError, MoveStatus, MoveToken},
    config::{GameConfig, COLUMN_ALPHABET},
    labels::ColumnLabels,
    runs::{longest_runs, merge_max, RunLengths},
};

/// Which player moves next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Turn {
    PlayerA,
    PlayerB,
}

impl Turn {
    /// The opponent.
    pub fn other(self) -> Turn {
        match self {
            Turn::PlayerA => Turn::PlayerB,
            Turn::PlayerB => Turn::PlayerA,
        }
    }

    /// Mark this player places.
    pub fn mark(self) -> Cell {
        match self {
            Turn::PlayerA => Cell::MarkA,
            Turn::PlayerB => Cell::MarkB,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Outcome {
    Continue,
    Draw,
    WinnerA,
    WinnerB,
}

impl Outcome {
    /// Winning side, if the game was won.
    pub fn winner(self) -> Option<Turn> {
        match self {
            Outcome::WinnerA => Some(Turn::PlayerA),
            Outcome::WinnerB => Some(Turn::PlayerB),
            Outcome::Continue | Outcome::Draw => None,
        }
    }

    pub fn is_over(self) -> bool {
        self != Outcome::Continue
    }
}

/// Core game logic holding the board, column labels and whose turn it is.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    labels: ColumnLabels,
    turn: Turn,
}

impl GameEngine {
    /// Create an engine with an empty board and player A to move.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let board = Board::new(config.rows(), config.columns())?;
        Self::with_board(config, board)
    }

    /// Create an engine over a pre-filled board, player A to move.
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self, BoardError> {
        if board.rows() != config.rows() || board.columns() != config.columns() {
            return Err(BoardError::DimensionMismatch {
                rows: config.rows(),
                columns: config.columns(),
                actual_rows: board.rows(),
                actual_columns: board.columns(),
            });
        }
        let labels = ColumnLabels::new(config.columns(), COLUMN_ALPHABET)?;
        Ok(Self {
            config,
            board,
            labels,
            turn: Turn::PlayerA,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn labels(&self) -> &ColumnLabels {
        &self.labels
    }

    /// Player whose mark the next `apply_move` places.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Hand the move to the other player.
    pub fn pass_turn(&mut self) {
        self.turn = self.turn.other();
    }

    /// Parse and check a move token such as `2b` or `10aa`.
    ///
    /// The token is a 1-based row number followed by a column label. Row
    /// zero, unknown labels, anything off the board and anything not of the
    /// form `digits` + `lowercase letters` is [`MoveStatus::InvalidField`].
    pub fn validate_move(&self, token: &str) -> MoveStatus {
        let Some((number, label)) = split_token(token) else {
            log::trace!("rejected malformed token {:?}", token);
            return MoveStatus::InvalidField;
        };
        // Digit strings too long for usize are off any board anyway.
        let Ok(number) = number.parse::<usize>() else {
            return MoveStatus::InvalidField;
        };
        if number == 0 {
            return MoveStatus::InvalidField;
        }
        let Some(col) = self.labels.index_of(label) else {
            log::trace!("rejected unknown column {:?}", label);
            return MoveStatus::InvalidField;
        };
        let row = number - 1;
        match self.board.get(row, col) {
            Some(Cell::Empty) => MoveStatus::Success(MoveToken { row, col }),
            Some(_) => MoveStatus::TakenField,
            None => MoveStatus::InvalidField,
        }
    }

    /// Place the current player's mark at (row, col).
    ///
    /// The cell must be on the board and empty, as guaranteed by a
    /// [`MoveStatus::Success`] from [`validate_move`](Self::validate_move).
    /// No check is made in release builds; debug builds panic on an occupied
    /// cell, and every build panics on an off-board cell.
    pub fn apply_move(&mut self, row: usize, col: usize) {
        debug_assert_eq!(
            self.board.get(row, col),
            Some(Cell::Empty),
            "apply_move on occupied or off-board cell ({}, {})",
            row,
            col
        );
        let mark = self.turn.mark();
        self.board.set(row, col, mark);
        log::debug!("{:?} placed {:?} at ({}, {})", self.turn, mark, row, col);
    }

    /// Longest run of every cell state over all rows, columns and diagonals.
    pub fn longest_runs(&self) -> RunLengths<Cell> {
        self.board
            .all_lines()
            .map(longest_runs)
            .fold(RunLengths::new(), merge_max)
    }

    /// Evaluate the board from scratch.
    ///
    /// Mark A is tested first, so a board on which both marks have a winning
    /// run is a win for player A.
    pub fn check_outcome(&self) -> Outcome {
        let runs = self.longest_runs();
        let longest = |cell: Cell| runs.get(&cell).copied().unwrap_or(0);
        let win = self.config.win_length();
        if longest(Cell::MarkA) >= win {
            Outcome::WinnerA
        } else if longest(Cell::MarkB) >= win {
            Outcome::WinnerB
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            Outcome::Continue
        }
    }
}

/// Split `^(\d+)([a-z]+)$` into its number and label parts.
fn split_token(token: &str) -> Option<(&str, &str)> {
    let split = token.find(|c: char| !c.is_ascii_digit())?;
    let (number, label) = token.split_at(split);
    if number.is_empty() || !label.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    Some((number, label))
}
