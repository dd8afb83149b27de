//! Turn loop: alternate two participants until the game ends

use crate::board::{Board, Stone};
use crate::player::Player;
use crate::rules::find_five_line;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given color made five in a row.
    Win(Stone),
    /// The board filled up with no five on it.
    Draw,
    /// The given color stopped supplying moves.
    Abandoned(Stone),
}

/// A full game between two participants.
///
/// The first participant moves first; by convention that is Black. Each
/// turn the board is printed and the current participant is asked for a
/// move; once the move is applied, the win and draw conditions are
/// checked before play passes over.
pub struct Game {
    board: Board,
    players: [Box<dyn Player>; 2],
}

impl Game {
    /// Set up a game on `board`; `first` moves first.
    pub fn new(board: Board, first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self {
            board,
            players: [first, second],
        }
    }

    /// Play until the game ends and report how it finished.
    pub fn run(&mut self) -> Outcome {
        let mut current = 0;
        loop {
            println!("{}", self.board);

            let stone = self.players[current].stone();
            let pos = match self.players[current].next_move(&mut self.board) {
                Some(pos) => pos,
                None => {
                    println!("{} has no move to make.", stone.name());
                    return Outcome::Abandoned(stone);
                }
            };

            if !self.board.place(pos, stone) {
                // Players are asked for legal moves; ask this one again.
                println!("{} {} is not playable.", pos.row, pos.col);
                continue;
            }

            if let Some(line) = find_five_line(&self.board, stone) {
                println!("{}", self.board);
                println!(
                    "{} wins with five from {} {} to {} {}.",
                    stone.name(),
                    line[0].row,
                    line[0].col,
                    line[4].row,
                    line[4].col
                );
                return Outcome::Win(stone);
            }

            if self.board.is_full() {
                println!("{}", self.board);
                println!("Draw: the board is full.");
                return Outcome::Draw;
            }

            current = 1 - current;
        }
    }

    /// The board, final once [`run`](Game::run) has returned.
    pub fn board(&self) -> &Board {
        &self.board
    }
}
