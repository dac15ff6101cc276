//! A rules engine and turn loop for the board game 'Connect 4'
//!
//! Two players take turns dropping pieces into the columns of an upright
//! grid. The first to line up four of their pieces in a row, column or
//! diagonal wins; a full board with no line is a draw.
//!
//! # Basic Usage
//!
//! ```
//! use connect_four::{GameSession, Piece, ScriptedPlayer, Seat, SessionState};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut one = ScriptedPlayer::new("Player 1", Piece::X, vec![0, 0, 0, 0]);
//! let mut two = ScriptedPlayer::new("Player 2", Piece::O, vec![1, 1, 1]);
//! let mut session = GameSession::new(&mut one, &mut two)?;
//!
//! while session.state() == SessionState::InProgress {
//!     session.play_turn()?;
//! }
//! assert_eq!(session.state(), SessionState::Won(Seat::First));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod player;

pub mod render;

pub mod session;


pub use board::{Board, BoardError, Cell, Piece, LINE_LENGTH};
pub use player::{HumanPlayer, Player, ScriptedPlayer};
pub use render::{RematchPrompt, Renderer, Terminal};
pub use session::{GameSession, Seat, SessionConfig, SessionState, TurnOutcome};

/// The width of the default game board in tiles
pub const WIDTH: usize = 7;

/// The height of the default game board in tiles
pub const HEIGHT: usize = 6;

// a default board must be able to hold a line in every direction
const_assert!(WIDTH >= LINE_LENGTH && HEIGHT >= LINE_LENGTH);
