use anyhow::Result;
use env_logger::Env;

use std::io::stdout;

use connect_four::*;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // optional player names, everything else about the session is fixed
    let mut names = std::env::args().skip(1);
    let mut player_one = HumanPlayer::new(
        names.next().unwrap_or_else(|| "Player 1".to_string()),
        Piece::X,
    );
    let mut player_two = HumanPlayer::new(
        names.next().unwrap_or_else(|| "Player 2".to_string()),
        Piece::O,
    );

    println!("Welcome to Connect 4\n");

    let mut terminal = Terminal::new(stdout());
    let mut session = GameSession::new(&mut player_one, &mut player_two)?;
    session.play(&mut terminal)?;

    println!("Thanks for playing!");
    Ok(())
}
