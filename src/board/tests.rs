use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_symbol_and_name() {
    assert_eq!(Stone::Black.symbol(), 'X');
    assert_eq!(Stone::White.symbol(), 'O');
    assert_eq!(Stone::Empty.symbol(), '.');
    assert_eq!(Stone::Black.name(), "Black");
    assert_eq!(Stone::White.name(), "White");
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 9);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 9);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(15);
    assert_eq!(board.size(), 15);
    assert!(!board.is_full());
    assert_eq!(board.stone_count(Stone::Black), 0);
    assert_eq!(board.stone_count(Stone::White), 0);
    assert_eq!(board.stone_count(Stone::Empty), 225);
    for row in 0..15 {
        for col in 0..15 {
            assert_eq!(board.stone_at(Pos::new(row, col)), Some(Stone::Empty));
            assert!(board.is_legal(Pos::new(row, col)));
        }
    }
}

#[test]
fn test_place_and_stone_at() {
    let mut board = Board::new(15);
    let pos = Pos::new(7, 7);

    assert!(board.place(pos, Stone::Black));
    assert_eq!(board.stone_at(pos), Some(Stone::Black));
    assert!(!board.is_legal(pos));
    assert_eq!(board.stone_count(Stone::Black), 1);
}

#[test]
fn test_place_retract_round_trip() {
    let mut board = Board::new(15);
    let pos = Pos::new(3, 11);

    assert!(board.is_legal(pos));
    assert!(board.place(pos, Stone::White));
    assert_eq!(board.stone_at(pos), Some(Stone::White));
    assert!(!board.is_legal(pos));

    board.retract(pos);
    assert_eq!(board.stone_at(pos), Some(Stone::Empty));
    assert!(board.is_legal(pos));
    assert_eq!(board.stone_count(Stone::White), 0);
}

#[test]
fn test_place_out_of_range_fails() {
    let mut board = Board::new(15);
    let before = board.clone();

    assert!(!board.place(Pos::new(15, 0), Stone::Black));
    assert!(!board.place(Pos::new(0, 15), Stone::Black));
    assert!(!board.place(Pos::new(99, 99), Stone::White));
    assert_eq!(board, before);
}

#[test]
fn test_place_occupied_fails() {
    let mut board = Board::new(15);
    let pos = Pos::new(5, 5);

    assert!(board.place(pos, Stone::Black));
    let before = board.clone();

    assert!(!board.place(pos, Stone::White));
    assert!(!board.place(pos, Stone::Black));
    assert_eq!(board, before);
    assert_eq!(board.stone_at(pos), Some(Stone::Black));
}

#[test]
fn test_place_empty_stone_rejected() {
    let mut board = Board::new(15);
    let before = board.clone();

    assert!(!board.place(Pos::new(4, 4), Stone::Empty));
    assert_eq!(board, before);
}

#[test]
fn test_is_legal_out_of_range() {
    let board = Board::new(15);
    assert!(!board.is_legal(Pos::new(15, 7)));
    assert!(!board.is_legal(Pos::new(7, 15)));
    assert!(board.is_legal(Pos::new(14, 14)));
}

#[test]
fn test_stone_at_out_of_range() {
    let board = Board::new(15);
    assert_eq!(board.stone_at(Pos::new(15, 0)), None);
    assert_eq!(board.stone_at(Pos::new(0, 15)), None);
    assert_eq!(board.stone_at(Pos::new(14, 14)), Some(Stone::Empty));
}

#[test]
fn test_retract_out_of_range_is_noop() {
    let mut board = Board::new(15);
    board.place(Pos::new(0, 0), Stone::Black);
    let before = board.clone();

    board.retract(Pos::new(15, 15));
    board.retract(Pos::new(0, 99));
    assert_eq!(board, before);
}

#[test]
fn test_retract_empty_cell_keeps_counts() {
    let mut board = Board::new(15);
    board.place(Pos::new(2, 2), Stone::Black);

    board.retract(Pos::new(8, 8));
    assert_eq!(board.stone_count(Stone::Black), 1);
    assert_eq!(board.stone_count(Stone::Empty), 224);
}

#[test]
fn test_is_full_transitions() {
    let mut board = Board::new(3);
    for row in 0..3 {
        for col in 0..3 {
            assert!(!board.is_full());
            let stone = if (row + col) % 2 == 0 {
                Stone::Black
            } else {
                Stone::White
            };
            assert!(board.place(Pos::new(row, col), stone));
        }
    }
    assert!(board.is_full());

    board.retract(Pos::new(1, 1));
    assert!(!board.is_full());
}

#[test]
fn test_stone_count_tracks_mutation() {
    let mut board = Board::new(9);
    board.place(Pos::new(0, 0), Stone::Black);
    board.place(Pos::new(0, 1), Stone::White);
    board.place(Pos::new(0, 2), Stone::Black);

    assert_eq!(board.stone_count(Stone::Black), 2);
    assert_eq!(board.stone_count(Stone::White), 1);
    assert_eq!(board.stone_count(Stone::Empty), 78);

    board.retract(Pos::new(0, 0));
    assert_eq!(board.stone_count(Stone::Black), 1);
    assert_eq!(board.stone_count(Stone::Empty), 79);
}

#[test]
fn test_display_grid() {
    let mut board = Board::new(3);
    board.place(Pos::new(0, 0), Stone::Black);
    board.place(Pos::new(1, 1), Stone::White);

    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains('X'));
    assert!(lines[2].contains('O'));
    assert!(lines[3].ends_with(" . . ."));
}
