//! Game participants: a human at the terminal and the search engine
//!
//! Both implement [`Player`], the one capability the turn loop needs:
//! produce the next move for your color given the current board.

use std::io::{self, BufRead, Write};

use crate::board::{Board, Pos, Stone};
use crate::search::Searcher;

/// A participant that picks moves for one color.
pub trait Player {
    /// The color this participant plays.
    fn stone(&self) -> Stone;

    /// Pick the next move.
    ///
    /// `None` means no move will come (input closed, or nothing left to
    /// play); the game loop treats it as abandonment. The board is
    /// mutable so search-backed players can probe it in place, but it
    /// must come back unchanged.
    fn next_move(&mut self, board: &mut Board) -> Option<Pos>;
}

/// Terminal-input participant.
///
/// Reads one `row col` pair per line and keeps prompting until the line
/// parses and names a legal cell. Generic over the reader so tests can
/// script the input; the binary passes a stdin lock.
pub struct HumanPlayer<R> {
    stone: Stone,
    input: R,
}

impl<R: BufRead> HumanPlayer<R> {
    pub fn new(stone: Stone, input: R) -> Self {
        Self { stone, input }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn stone(&self) -> Stone {
        self.stone
    }

    fn next_move(&mut self, board: &mut Board) -> Option<Pos> {
        loop {
            print!(
                "{} ({}) move, as row col: ",
                self.stone.name(),
                self.stone.symbol()
            );
            let _ = io::stdout().flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }

            match parse_move(&line) {
                Some(pos) if board.is_legal(pos) => return Some(pos),
                Some(_) => println!("That cell is taken or off the board."),
                None => println!("Enter two numbers, e.g. 7 7."),
            }
        }
    }
}

/// Search-backed participant.
pub struct EnginePlayer {
    stone: Stone,
    searcher: Searcher,
}

impl EnginePlayer {
    /// Engine with the default evaluator at the given depth.
    pub fn new(stone: Stone, max_depth: u32) -> Self {
        Self::with_searcher(stone, Searcher::new(max_depth))
    }

    /// Engine driven by a preconfigured searcher.
    pub fn with_searcher(stone: Stone, searcher: Searcher) -> Self {
        Self { stone, searcher }
    }
}

impl Player for EnginePlayer {
    fn stone(&self) -> Stone {
        self.stone
    }

    fn next_move(&mut self, board: &mut Board) -> Option<Pos> {
        let pos = self.searcher.decide_move(board, self.stone)?;
        println!(
            "{} ({}) plays {} {}",
            self.stone.name(),
            self.stone.symbol(),
            pos.row,
            pos.col
        );
        Some(pos)
    }
}

/// Parse a `row col` pair from one input line.
fn parse_move(line: &str) -> Option<Pos> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Pos::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_move_valid() {
        assert_eq!(parse_move("7 7\n"), Some(Pos::new(7, 7)));
        assert_eq!(parse_move("  0   14  "), Some(Pos::new(0, 14)));
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        assert_eq!(parse_move(""), None);
        assert_eq!(parse_move("banana"), None);
        assert_eq!(parse_move("3"), None);
        assert_eq!(parse_move("3 x"), None);
        assert_eq!(parse_move("-1 4"), None);
        assert_eq!(parse_move("1 2 3"), None);
    }

    #[test]
    fn test_human_retries_until_legal() {
        let mut board = Board::new(15);
        board.place(Pos::new(0, 0), Stone::Black);

        let input = Cursor::new(&b"banana\n99 99\n0 0\n0 1\n"[..]);
        let mut player = HumanPlayer::new(Stone::White, input);
        assert_eq!(player.next_move(&mut board), Some(Pos::new(0, 1)));
    }

    #[test]
    fn test_human_eof_gives_up() {
        let mut board = Board::new(15);

        let mut player = HumanPlayer::new(Stone::Black, Cursor::new(&b""[..]));
        assert_eq!(player.next_move(&mut board), None);

        let mut noisy = HumanPlayer::new(Stone::Black, Cursor::new(&b"oops\n"[..]));
        assert_eq!(noisy.next_move(&mut board), None);
    }

    #[test]
    fn test_human_does_not_place() {
        let mut board = Board::new(15);
        let input = Cursor::new(&b"3 4\n"[..]);
        let mut player = HumanPlayer::new(Stone::Black, input);

        let pos = player.next_move(&mut board);
        assert_eq!(pos, Some(Pos::new(3, 4)));
        assert_eq!(board.stone_at(Pos::new(3, 4)), Some(Stone::Empty));
    }

    #[test]
    fn test_engine_player_answers_and_restores() {
        let mut board = Board::new(5);
        board.place(Pos::new(2, 2), Stone::Black);
        let snapshot = board.clone();

        let mut player = EnginePlayer::new(Stone::White, 2);
        assert_eq!(player.stone(), Stone::White);

        let pos = player.next_move(&mut board);
        assert!(pos.is_some());
        assert_eq!(board, snapshot);
    }
}
