//! The game grid and its gravity, occupancy and line queries

use std::fmt;

use thiserror::Error;

use crate::{HEIGHT, WIDTH};

/// The number of contiguous pieces needed to win
pub const LINE_LENGTH: usize = 4;

// (row step, column step) for horizontal, vertical, ascending and descending runs
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// One of the two markers a player drops into the grid
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Piece {
    X,
    O,
}

impl Piece {
    pub fn symbol(self) -> char {
        match self {
            Piece::X => 'X',
            Piece::O => 'O',
        }
    }

    pub fn other(self) -> Self {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error("column {column} out of range, the board has {columns} columns")]
    ColumnOutOfRange { column: usize, columns: usize },
    #[error("invalid board dimensions {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
}

/// A Connect 4 grid
///
/// Pieces only ever enter the grid through [`Board::drop_piece`], which fills
/// each column from the bottom up, so there is never an empty cell below an
/// occupied one. Row 0 is the bottom row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>, // cells are stored left-to-right, bottom-to-top
    heights: Vec<usize>,
    num_moves: usize,
}

impl Board {
    /// Create an empty board of the default `HEIGHT` x `WIDTH` size
    pub fn new() -> Self {
        Self {
            rows: HEIGHT,
            columns: WIDTH,
            cells: vec![Cell::Empty; WIDTH * HEIGHT],
            heights: vec![0; WIDTH],
            num_moves: 0,
        }
    }

    /// Create an empty board with a custom number of rows and columns
    pub fn with_size(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
            heights: vec![0; columns],
            num_moves: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// The contents of a single cell
    ///
    /// # Panics
    /// Panics if `row` or `column` lie outside the board.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({}, {}) outside a {}x{} board",
            row,
            column,
            self.rows,
            self.columns
        );
        self.cells[column + self.columns * row]
    }

    /// The number of pieces stacked in `column`, or `None` if it doesn't exist
    pub fn column_height(&self, column: usize) -> Option<usize> {
        self.heights.get(column).copied()
    }

    /// Drop `piece` into `column`, returning the row it came to rest on
    pub fn drop_piece(&mut self, column: usize, piece: Piece) -> Result<usize, BoardError> {
        if column >= self.columns {
            return Err(BoardError::ColumnOutOfRange {
                column,
                columns: self.columns,
            });
        }
        let row = self.heights[column];
        if row >= self.rows {
            return Err(BoardError::ColumnFull(column));
        }
        self.cells[column + self.columns * row] = Cell::Occupied(piece);
        self.heights[column] += 1;
        self.num_moves += 1;
        Ok(row)
    }

    /// Whether `column` exists and still has room at the top
    pub fn is_valid_column(&self, column: usize) -> bool {
        column < self.columns && self.cell(self.rows - 1, column).is_empty()
    }

    pub fn has_winning_line(&self, piece: Piece) -> bool {
        self.winning_line(piece).is_some()
    }

    /// Find `LINE_LENGTH` contiguous cells holding `piece` in any row, column
    /// or diagonal, returned as `(row, column)` pairs
    pub fn winning_line(&self, piece: Piece) -> Option<[(usize, usize); LINE_LENGTH]> {
        let target = Cell::Occupied(piece);

        for row in 0..self.rows {
            for column in 0..self.columns {
                for &(row_step, column_step) in DIRECTIONS.iter() {
                    let mut line = [(0, 0); LINE_LENGTH];
                    let complete = (0..LINE_LENGTH).all(|step| {
                        let step = step as isize;
                        match self.offset(row, column, row_step * step, column_step * step) {
                            Some(pos) if self.cell(pos.0, pos.1) == target => {
                                line[step as usize] = pos;
                                true
                            }
                            // the run is broken by an empty cell, the opponent or the edge
                            _ => false,
                        }
                    });
                    if complete {
                        return Some(line);
                    }
                }
            }
        }
        None
    }

    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|column| !self.cell(self.rows - 1, column).is_empty())
    }

    /// Empty every cell, keeping the dimensions
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Empty);
        self.heights.iter_mut().for_each(|height| *height = 0);
        self.num_moves = 0;
    }

    fn offset(
        &self,
        row: usize,
        column: usize,
        row_delta: isize,
        column_delta: isize,
    ) -> Option<(usize, usize)> {
        let row = row as isize + row_delta;
        let column = column as isize + column_delta;
        if row < 0 || column < 0 || row >= self.rows as isize || column >= self.columns as isize {
            None
        } else {
            Some((row as usize, column as usize))
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// plain text grid, top row first, for logs and non-terminal output
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for column in 0..self.columns {
                let symbol = match self.cell(row, column) {
                    Cell::Occupied(piece) => piece.symbol(),
                    Cell::Empty => '-',
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
