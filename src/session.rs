//! Turn sequencing, win and draw detection, and rematches

use anyhow::{anyhow, ensure, Context, Result};
use log::{debug, info, trace};

use crate::board::Board;
use crate::player::Player;
use crate::render::{RematchPrompt, Renderer};

/// One of the two places at the table
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SessionState {
    InProgress,
    Won(Seat),
    Drawn,
    Resetting,
    Finished,
}

/// What a single call to [`GameSession::play_turn`] did
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TurnOutcome {
    /// The column was out of range or full, the same seat is still to move
    Rejected(usize),
    Placed { column: usize, row: usize },
    Won(Seat),
    Drawn,
}

#[derive(Copy, Clone, Debug)]
pub struct SessionConfig {
    /// The seat that moves first in every game of the session
    pub first_to_move: Seat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            first_to_move: Seat::First,
        }
    }
}

/// A series of games between two players on one board
///
/// The session owns the board but only borrows the players, so they can be
/// handed to another session once this one is dropped.
pub struct GameSession<'p> {
    board: Board,
    players: [&'p mut dyn Player; 2],
    first_to_move: Seat,
    to_move: Seat,
    state: SessionState,
}

impl<'p> GameSession<'p> {
    /// Create a session on a default sized board, `first` moves first
    pub fn new(first: &'p mut dyn Player, second: &'p mut dyn Player) -> Result<Self> {
        Self::with_config(first, second, Board::new(), SessionConfig::default())
    }

    pub fn with_config(
        first: &'p mut dyn Player,
        second: &'p mut dyn Player,
        mut board: Board,
        config: SessionConfig,
    ) -> Result<Self> {
        ensure!(
            first.piece() != second.piece(),
            "{} and {} cannot both play {}",
            first.name(),
            second.name(),
            first.piece()
        );
        board.reset();

        info!(
            "new session: {} ({}) vs {} ({}), {:?} seat moves first",
            first.name(),
            first.piece(),
            second.name(),
            second.piece(),
            config.first_to_move
        );
        Ok(Self {
            board,
            players: [first, second],
            first_to_move: config.first_to_move,
            to_move: config.first_to_move,
            state: SessionState::InProgress,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn to_move(&self) -> Seat {
        self.to_move
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    pub fn player(&self, seat: Seat) -> &dyn Player {
        &*self.players[seat.index()]
    }

    pub fn current_player(&self) -> &dyn Player {
        self.player(self.to_move)
    }

    /// Ask the seat to move for a column and apply it
    ///
    /// An invalid column leaves the board and the seat to move untouched; the
    /// next call asks the same player again.
    pub fn play_turn(&mut self) -> Result<TurnOutcome> {
        if self.state != SessionState::InProgress {
            return Err(anyhow!("no game in progress, session is {:?}", self.state));
        }

        let seat = self.to_move;
        let player = &mut *self.players[seat.index()];
        let column = player.request_move(&self.board)?;
        let piece = player.piece();

        if !self.board.is_valid_column(column) {
            debug!("{} chose invalid column {}", player.name(), column);
            return Ok(TurnOutcome::Rejected(column));
        }

        let row = self
            .board
            .drop_piece(column, piece)
            .context("drop into a column that passed validation")?;
        debug!(
            "{} drops {} into column {}, row {}",
            player.name(),
            piece,
            column,
            row
        );
        trace!("board after move {}:\n{}", self.board.num_moves(), self.board);

        if self.board.has_winning_line(piece) {
            info!("{} wins after {} moves", player.name(), self.board.num_moves());
            self.state = SessionState::Won(seat);
            return Ok(TurnOutcome::Won(seat));
        }
        if self.board.is_full() {
            info!("board full after {} moves, draw", self.board.num_moves());
            self.state = SessionState::Drawn;
            return Ok(TurnOutcome::Drawn);
        }

        self.to_move = seat.other();
        Ok(TurnOutcome::Placed { column, row })
    }

    /// Clear the board after a finished game and give the first move back to
    /// the designated first seat
    pub fn rematch(&mut self) -> Result<()> {
        match self.state {
            SessionState::Won(_) | SessionState::Drawn => {}
            state => return Err(anyhow!("cannot start a rematch while {:?}", state)),
        }

        self.state = SessionState::Resetting;
        self.board.reset();
        self.to_move = self.first_to_move;
        self.state = SessionState::InProgress;
        info!("rematch started");
        Ok(())
    }

    /// Play games until the rematch prompt declines
    pub fn play<U: Renderer + RematchPrompt + ?Sized>(&mut self, ui: &mut U) -> Result<()> {
        ui.draw(&self.board)?;

        while !self.is_finished() {
            match self.play_turn()? {
                TurnOutcome::Rejected(column) => {
                    ui.reject_move(self.current_player().name(), column)?;
                }
                TurnOutcome::Placed { .. } => ui.draw(&self.board)?,
                TurnOutcome::Won(seat) => {
                    ui.draw(&self.board)?;
                    let winner = self.player(seat);
                    ui.announce_winner(winner.name(), winner.piece())?;
                    self.conclude(ui)?;
                }
                TurnOutcome::Drawn => {
                    ui.draw(&self.board)?;
                    ui.announce_draw()?;
                    self.conclude(ui)?;
                }
            }
        }
        Ok(())
    }

    fn conclude<U: Renderer + RematchPrompt + ?Sized>(&mut self, ui: &mut U) -> Result<()> {
        if ui.play_again()? {
            self.rematch()?;
            ui.draw(&self.board)?;
        } else {
            info!("session finished");
            self.state = SessionState::Finished;
        }
        Ok(())
    }
}
