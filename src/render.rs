//! Presentation collaborators the session reports to

use anyhow::{anyhow, Context, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, BufRead, Write};

use crate::board::{Board, Cell, Piece};

/// Shows the game to whoever is playing it
pub trait Renderer {
    fn draw(&mut self, board: &Board) -> Result<()>;

    fn reject_move(&mut self, name: &str, column: usize) -> Result<()>;

    fn announce_winner(&mut self, name: &str, piece: Piece) -> Result<()>;

    fn announce_draw(&mut self) -> Result<()>;
}

/// Asked once a game has ended whether another one should start
pub trait RematchPrompt {
    fn play_again(&mut self) -> Result<bool>;
}

/// Coloured terminal output, answers to the rematch question come from stdin
pub struct Terminal<W: Write> {
    output: W,
}

impl<W: Write> Terminal<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn piece_color(piece: Piece) -> Color {
        match piece {
            Piece::X => Color::Red,
            Piece::O => Color::Green,
        }
    }

    /// Ask on `input` whether to play again
    pub fn ask_play_again<R: BufRead>(&mut self, input: &mut R) -> Result<bool> {
        write!(self.output, "Do you want to play again? (Y/N): ")?;
        self.output.flush()?;

        let mut buffer = String::new();
        if input
            .read_line(&mut buffer)
            .context("failed to read rematch answer")?
            == 0
        {
            return Err(anyhow!("input closed while waiting for a rematch answer"));
        }
        Ok(parse_answer(&buffer))
    }
}

impl<W: Write> Renderer for Terminal<W> {
    fn draw(&mut self, board: &Board) -> Result<()> {
        // a finished game shows its winning four in bold
        let highlight = board
            .winning_line(Piece::X)
            .or_else(|| board.winning_line(Piece::O));

        let header: String = (1..=board.columns()).map(|x| format!("{} ", x)).collect();
        self.output
            .queue(PrintStyledContent(style(header + "\n").attribute(Attribute::Dim)))?;

        for row in (0..board.rows()).rev() {
            for column in 0..board.columns() {
                let content = match board.cell(row, column) {
                    Cell::Occupied(piece) => {
                        let content = style(format!("{}", piece.symbol()))
                            .with(Self::piece_color(piece));
                        if highlight.map_or(false, |line| line.contains(&(row, column))) {
                            content.attribute(Attribute::Bold)
                        } else {
                            content
                        }
                    }
                    Cell::Empty => style("-".to_string()),
                };
                self.output
                    .queue(PrintStyledContent(content))?
                    .queue(PrintStyledContent(style(" ".to_string())))?;
            }
            self.output.queue(PrintStyledContent(style("\n".to_string())))?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn reject_move(&mut self, name: &str, column: usize) -> Result<()> {
        writeln!(
            self.output,
            "Invalid move by {}, column {} is out of range or full",
            name,
            column.saturating_add(1)
        )?;
        Ok(())
    }

    fn announce_winner(&mut self, name: &str, piece: Piece) -> Result<()> {
        self.output
            .queue(PrintStyledContent(
                style(format!("{} wins!\n", name))
                    .with(Self::piece_color(piece))
                    .attribute(Attribute::Bold),
            ))?
            .flush()?;
        Ok(())
    }

    fn announce_draw(&mut self) -> Result<()> {
        writeln!(self.output, "The board is full, it's a draw!")?;
        Ok(())
    }
}

impl<W: Write> RematchPrompt for Terminal<W> {
    fn play_again(&mut self) -> Result<bool> {
        let stdin = stdin();
        let mut input = stdin.lock();
        self.ask_play_again(&mut input)
    }
}

/// `y` or `yes` in any case accepts, anything else declines
pub fn parse_answer(input: &str) -> bool {
    match input.trim().to_uppercase().as_str() {
        "Y" | "YES" => true,
        _ => false,
    }
}
