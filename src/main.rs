//! Terminal Gomoku
//!
//! Plays five-in-a-row in the terminal with any mix of human and engine
//! participants per color.

use std::io;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

use gomoku::{Board, EnginePlayer, Game, HumanPlayer, Outcome, Player, Stone};

/// Who controls a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Control {
    /// Moves typed at the terminal as `row col`
    Human,
    /// The minimax engine
    Engine,
}

#[derive(Parser)]
#[command(name = "gomoku", version, about = "Play Gomoku in the terminal against a minimax engine")]
struct Cli {
    /// Board side length
    #[arg(long, default_value_t = 15)]
    size: usize,

    /// Engine search depth in plies
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Who plays Black (moves first)
    #[arg(long, value_enum, default_value = "human")]
    black: Control,

    /// Who plays White
    #[arg(long, value_enum, default_value = "engine")]
    white: Control,
}

fn make_player(control: Control, stone: Stone, depth: u32) -> Box<dyn Player> {
    match control {
        Control::Human => Box::new(HumanPlayer::new(stone, io::stdin().lock())),
        Control::Engine => Box::new(EnginePlayer::new(stone, depth)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.size < 5 || cli.size > 25 {
        bail!("board size must be between 5 and 25, got {}", cli.size);
    }

    let board = Board::new(cli.size);
    let black = make_player(cli.black, Stone::Black, cli.depth);
    let white = make_player(cli.white, Stone::White, cli.depth);

    let mut game = Game::new(board, black, white);
    match game.run() {
        Outcome::Win(stone) => println!("Game over: {} wins.", stone.name()),
        Outcome::Draw => println!("Game over: draw."),
        Outcome::Abandoned(stone) => println!("Game over: {} quit.", stone.name()),
    }

    Ok(())
}
