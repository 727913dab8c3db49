//! Game board state: an N×M grid of cells and the lines that run across it.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Cell {
    Empty,
    MarkA,
    MarkB,
}

impl Cell {
    /// Glyph used by the textual board format.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::MarkA => 'X',
            Cell::MarkB => 'O',
        }
    }

    fn from_symbol(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::MarkA),
            'O' | 'o' => Some(Cell::MarkB),
            _ => None,
        }
    }
}

/// Orientation of a family of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right along a row.
    Row,
    /// Top to bottom along a column.
    Column,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Row,
        Direction::Column,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];
}

/// Row-major grid of cells. Dimensions never change after construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::ZeroDimension { rows, columns });
        }
        let size = rows
            .checked_mul(columns)
            .ok_or(BoardError::TooLarge { rows, columns })?;
        Ok(Board {
            rows,
            columns,
            cells: vec![Cell::Empty; size],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether (row, col) lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    /// Cell at (row, col), or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.contains(row, col) {
            Some(self.cells[row * self.columns + col])
        } else {
            None
        }
    }

    /// Overwrite the cell at (row, col). Panics when off the board.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(
            self.contains(row, col),
            "cell ({}, {}) is outside a {}x{} board",
            row,
            col,
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + col] = cell;
    }

    /// Returns `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Number of cells holding a mark.
    pub fn marked(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Cells of row `row`, left to right, or `None` when off the board.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row < self.rows {
            Some(&self.cells[row * self.columns..(row + 1) * self.columns])
        } else {
            None
        }
    }

    /// Every row, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.columns)
    }

    /// All lines of one orientation. Rows and columns yield `rows` and
    /// `columns` lines; each diagonal family yields `rows + columns - 1`.
    pub fn lines(&self, direction: Direction) -> impl Iterator<Item = Line<'_>> + '_ {
        let last_col = self.columns - 1;
        let starts: Vec<(usize, usize)> = match direction {
            Direction::Row => (0..self.rows).map(|r| (r, 0)).collect(),
            Direction::Column => (0..self.columns).map(|c| (0, c)).collect(),
            Direction::Diagonal => (0..self.columns)
                .rev()
                .map(|c| (0, c))
                .chain((1..self.rows).map(|r| (r, 0)))
                .collect(),
            Direction::AntiDiagonal => (0..self.columns)
                .map(|c| (0, c))
                .chain((1..self.rows).map(move |r| (r, last_col)))
                .collect(),
        };
        starts.into_iter().map(move |start| Line {
            board: self,
            next: Some(start),
            direction,
        })
    }

    /// Every row, column and diagonal of the board.
    pub fn all_lines(&self) -> impl Iterator<Item = Line<'_>> + '_ {
        Direction::ALL.into_iter().flat_map(move |d| self.lines(d))
    }
}

/// Cells along one line, from its first cell to the board edge.
#[derive(Clone)]
pub struct Line<'a> {
    board: &'a Board,
    next: Option<(usize, usize)>,
    direction: Direction,
}

impl Iterator for Line<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let (row, col) = self.next?;
        let cell = self.board.get(row, col)?;
        let step = match self.direction {
            Direction::Row => Some((row, col + 1)),
            Direction::Column => Some((row + 1, col)),
            Direction::Diagonal => Some((row + 1, col + 1)),
            Direction::AntiDiagonal => col.checked_sub(1).map(|c| (row + 1, c)),
        };
        self.next = step.filter(|&(r, c)| self.board.contains(r, c));
        Some(cell)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.rows, self.columns)?;
        for row in self.iter_rows() {
            write!(f, "  ")?;
            for &cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

/// Parses one row per line: `.` empty, `X` mark A, `O` mark B (either case).
/// Blank lines and surrounding whitespace are ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut columns = 0;
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let start = cells.len();
            for (col, glyph) in line.chars().enumerate() {
                let cell = Cell::from_symbol(glyph).ok_or(BoardError::UnknownCell {
                    glyph,
                    row: rows,
                    col,
                })?;
                cells.push(cell);
            }
            let width = cells.len() - start;
            if rows == 0 {
                columns = width;
            } else if width != columns {
                return Err(BoardError::RaggedRow {
                    row: rows,
                    expected: columns,
                    actual: width,
                });
            }
            rows += 1;
        }
        if rows == 0 || columns == 0 {
            return Err(BoardError::ZeroDimension { rows, columns });
        }
        Ok(Board {
            rows,
            columns,
            cells,
        })
    }
}
