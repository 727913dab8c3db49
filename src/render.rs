//! Box-drawn text rendering of a board.
//!
//! ```text
//!   ┌───┬───┬───┐
//! 1 │ × ┆   ┆   │
//!   ├┄┄┄┼┄┄┄┼┄┄┄┤
//! 2 │   ┆ ○ ┆   │
//!   ├┄┄┄┼┄┄┄┼┄┄┄┤
//! 3 │   ┆   ┆ × │
//!   └───┴───┴───┘
//!     a   b   c
//! ```

use alloc::string::String;
use core::fmt::Write;

use crate::board::{Board, Cell};
use crate::labels::ColumnLabels;

const ANSI_GREEN: &str = "\x1b[92m";
const ANSI_RED: &str = "\x1b[91m";
const ANSI_RESET: &str = "\x1b[0m";

/// Glyphs used to draw a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStyle {
    pub mark_a: char,
    pub mark_b: char,
    pub empty: char,
    pub horizontal: char,
    pub vertical: char,
    /// Separator between cells of the same row.
    pub cell_separator: char,
    /// Separator between rows.
    pub row_separator: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub top_tee: char,
    pub bottom_tee: char,
    pub left_tee: char,
    pub right_tee: char,
    pub cross: char,
    /// Wrap marks in ANSI colour codes.
    pub colored: bool,
}

impl BoardStyle {
    /// Unicode box-drawing glyphs, uncoloured.
    pub const fn unicode() -> Self {
        Self {
            mark_a: '×',
            mark_b: '○',
            empty: ' ',
            horizontal: '─',
            vertical: '│',
            cell_separator: '┆',
            row_separator: '┄',
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            top_tee: '┬',
            bottom_tee: '┴',
            left_tee: '├',
            right_tee: '┤',
            cross: '┼',
            colored: false,
        }
    }

    /// Plain ASCII glyphs for terminals without box drawing.
    pub const fn ascii() -> Self {
        Self {
            mark_a: 'X',
            mark_b: 'O',
            empty: ' ',
            horizontal: '-',
            vertical: '|',
            cell_separator: '|',
            row_separator: '-',
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            top_tee: '+',
            bottom_tee: '+',
            left_tee: '+',
            right_tee: '+',
            cross: '+',
            colored: false,
        }
    }

    pub const fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn write_cell(&self, out: &mut String, cell: Cell) {
        let (glyph, color) = match cell {
            Cell::Empty => (self.empty, None),
            Cell::MarkA => (self.mark_a, Some(ANSI_GREEN)),
            Cell::MarkB => (self.mark_b, Some(ANSI_RED)),
        };
        match color.filter(|_| self.colored) {
            Some(code) => {
                out.push_str(code);
                out.push(glyph);
                out.push_str(ANSI_RESET);
            }
            None => out.push(glyph),
        }
    }
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Optional decorations around the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix each board row with its 1-based number.
    pub row_numbers: bool,
    /// Append a footer naming each column.
    pub column_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            row_numbers: true,
            column_labels: true,
        }
    }
}

/// Draw `board` as text: a border line, then one line per board row with
/// separator lines between rows, then a border line and the optional label
/// footer. Lines are joined with `\n` without a trailing newline.
pub fn render(
    board: &Board,
    labels: &ColumnLabels,
    style: &BoardStyle,
    options: RenderOptions,
) -> String {
    let width = if options.row_numbers {
        count_digits(board.rows())
    } else {
        0
    };
    let mut out = String::new();

    let margin = |out: &mut String, number: Option<usize>| {
        if !options.row_numbers {
            return;
        }
        match number {
            Some(n) => {
                let _ = write!(out, "{:>width$} ", n, width = width);
            }
            None => {
                let _ = write!(out, "{:width$} ", "", width = width);
            }
        }
    };

    margin(&mut out, None);
    rule(
        &mut out,
        board.columns(),
        style.horizontal,
        [style.top_left, style.top_tee, style.top_right],
    );
    for (r, row) in board.iter_rows().enumerate() {
        if r > 0 {
            out.push('\n');
            margin(&mut out, None);
            rule(
                &mut out,
                board.columns(),
                style.row_separator,
                [style.left_tee, style.cross, style.right_tee],
            );
        }
        out.push('\n');
        margin(&mut out, Some(r + 1));
        out.push(style.vertical);
        for (c, &cell) in row.iter().enumerate() {
            out.push(' ');
            style.write_cell(&mut out, cell);
            out.push(' ');
            out.push(if c + 1 == board.columns() {
                style.vertical
            } else {
                style.cell_separator
            });
        }
    }
    out.push('\n');
    margin(&mut out, None);
    rule(
        &mut out,
        board.columns(),
        style.horizontal,
        [style.bottom_left, style.bottom_tee, style.bottom_right],
    );

    if options.column_labels {
        out.push('\n');
        margin(&mut out, None);
        out.push(' ');
        for (c, label) in labels.iter().enumerate() {
            if c > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{:^3}", label);
        }
    }
    out
}

/// Horizontal rule: `[left, junction, right]` corners around `columns` cells.
fn rule(out: &mut String, columns: usize, fill: char, [left, junction, right]: [char; 3]) {
    out.push(left);
    for c in 0..columns {
        for _ in 0..3 {
            out.push(fill);
        }
        out.push(if c + 1 == columns { right } else { junction });
    }
}

fn count_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
