//! Move sources for the two seats of a session

use anyhow::{anyhow, Context, Result};

use std::collections::VecDeque;
use std::io::{stdin, stdout, BufRead, Write};

use crate::board::{Board, Piece};

/// Anything that can choose a column when it is its turn to move
///
/// The returned column is zero-based. No range or occupancy guarantees are
/// expected from implementors, the session validates every move itself.
pub trait Player {
    fn name(&self) -> &str;

    fn piece(&self) -> Piece;

    fn request_move(&mut self, board: &Board) -> Result<usize>;
}

/// A player typing 1-based column numbers into a terminal
pub struct HumanPlayer {
    name: String,
    piece: Piece,
}

impl HumanPlayer {
    pub fn new<S: Into<String>>(name: S, piece: Piece) -> Self {
        Self {
            name: name.into(),
            piece,
        }
    }

    /// Keep prompting on `input` until a column number is given
    pub fn read_move<R: BufRead, W: Write>(
        &self,
        board: &Board,
        input: &mut R,
        output: &mut W,
    ) -> Result<usize> {
        loop {
            write!(
                output,
                "{}, choose a column (1-{}): ",
                self.name,
                board.columns()
            )?;
            output.flush()?;

            let mut buffer = String::new();
            if input
                .read_line(&mut buffer)
                .context("failed to read move input")?
                == 0
            {
                return Err(anyhow!("input closed while waiting for {}'s move", self.name));
            }

            match parse_column(&buffer) {
                Some(column) => return Ok(column),
                None => writeln!(output, "Invalid number: {}", buffer.trim())?,
            }
        }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn piece(&self) -> Piece {
        self.piece
    }

    fn request_move(&mut self, board: &Board) -> Result<usize> {
        let stdin = stdin();
        let mut input = stdin.lock();
        self.read_move(board, &mut input, &mut stdout())
    }
}

/// Convert a 1-based column typed by a human into a zero-based index
///
/// Anything that isn't a positive integer is rejected here. Columns beyond
/// the board are passed through so the session can refuse them.
pub fn parse_column(input: &str) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(column @ 1..=usize::MAX) => Some(column - 1),
        _ => None,
    }
}

/// A player replaying a fixed list of columns, mostly for tests and demos
pub struct ScriptedPlayer {
    name: String,
    piece: Piece,
    moves: VecDeque<usize>,
}

impl ScriptedPlayer {
    pub fn new<S: Into<String>, I: IntoIterator<Item = usize>>(
        name: S,
        piece: Piece,
        moves: I,
    ) -> Self {
        Self {
            name: name.into(),
            piece,
            moves: moves.into_iter().collect(),
        }
    }

    /// Queue more columns after the current script
    pub fn extend<I: IntoIterator<Item = usize>>(&mut self, moves: I) {
        self.moves.extend(moves);
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn piece(&self) -> Piece {
        self.piece
    }

    fn request_move(&mut self, _board: &Board) -> Result<usize> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow!("{} has run out of scripted moves", self.name))
    }
}
