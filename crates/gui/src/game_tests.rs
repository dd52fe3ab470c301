use super::*;
use corners_core::sq;

#[test]
fn new_game_starts_with_red_to_move() {
    let game = GameState::new();
    assert_eq!(game.board, Board::startpos());
    assert_eq!(game.turn, Color::Red);
    assert_eq!(game.result, GameResult::InProgress);
    assert!(game.selected.is_none());
}

#[test]
fn clicking_own_piece_selects_it_and_lists_moves() {
    let mut game = GameState::new();
    let red_corner = sq(4, 4).unwrap();

    game.select_square(red_corner);

    assert_eq!(game.selected.map(|p| p.square()), Some(red_corner));
    assert!(game.moves_for_selected.contains_key(&sq(3, 4).unwrap()));
    assert!(game.moves_for_selected.contains_key(&sq(4, 3).unwrap()));
}

#[test]
fn clicking_an_opponent_piece_does_nothing() {
    let mut game = GameState::new();

    game.select_square(sq(0, 0).unwrap()); // white piece, red to move

    assert!(game.selected.is_none());
    assert!(game.moves_for_selected.is_empty());
}

#[test]
fn step_move_applies_and_swaps_the_turn() {
    let mut game = GameState::new();
    let from = sq(4, 4).unwrap();
    let to = sq(3, 4).unwrap();

    game.select_square(from);
    game.select_square(to);

    assert!(game.board.piece_at(from).is_none());
    assert_eq!(game.board.piece_at(to).map(|p| p.color), Some(Color::Red));
    assert_eq!(game.turn, Color::White);
    assert_eq!(game.last_move, Some((from, to)));
    assert_eq!(game.moves.last().unwrap().notation, "e5-e4");
}

#[test]
fn jump_move_notation_lists_the_chain() {
    let mut game = GameState::new();
    game.board = Board::from_layout(
        "........
         ........
         ...w....
         ..w.....
         ..r.....
         ........
         ........
         ........",
    );

    let from = sq(4, 2).unwrap();
    game.select_square(from);
    // Up over (3,2) to (2,2), then right over (2,3) to (2,4).
    let dest = sq(2, 4).unwrap();
    assert!(game.moves_for_selected.contains_key(&dest));

    game.select_square(dest);

    assert_eq!(game.moves.last().unwrap().notation, "c5xc3xe3");
    assert_eq!(game.board.piece_at(dest).map(|p| p.color), Some(Color::Red));
}

#[test]
fn engine_board_is_applied_via_diffing() {
    let mut game = GameState::new();
    game.turn = Color::White;

    let from = sq(3, 3).unwrap();
    let to = sq(3, 4).unwrap();
    let mut next = game.board.clone();
    next.move_piece(game.board.piece_at(from).unwrap(), 3, 4);

    game.apply_engine_board(next.clone());

    assert_eq!(game.board, next);
    assert_eq!(game.last_move, Some((from, to)));
    assert_eq!(game.turn, Color::Red);
    assert_eq!(game.moves.last().unwrap().notation, "d4-e4");
}

#[test]
fn blocked_opponent_halts_the_game() {
    let mut game = GameState::new();
    // White is boxed into the corner; red still has a free piece.
    game.board = Board::from_layout(
        "wrr.....
         r.......
         r.......
         ........
         ........
         .....r..
         ........
         ........",
    );

    game.select_square(sq(5, 5).unwrap());
    game.select_square(sq(5, 6).unwrap());

    assert_eq!(game.result, GameResult::Blocked(Color::White));
}

#[test]
fn finished_game_ignores_further_clicks() {
    let mut game = GameState::new();
    game.result = GameResult::RedWins;
    let before = game.board.clone();

    game.select_square(sq(4, 4).unwrap());
    game.select_square(sq(3, 4).unwrap());

    assert_eq!(game.board, before);
    assert!(game.selected.is_none());
}
