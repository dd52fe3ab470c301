use super::*;
use crate::types::Color;

#[test]
fn startpos_has_sixteen_pieces_per_side_in_opposite_quadrants() {
    let b = Board::startpos();

    assert_eq!(b.all_pieces(Color::Red).len(), 16);
    assert_eq!(b.all_pieces(Color::White).len(), 16);

    for row in 0..8u8 {
        for col in 0..8u8 {
            let cell = b.piece_at(row * 8 + col);
            if row < 4 && col < 4 {
                assert_eq!(cell.map(|p| p.color), Some(Color::White));
            } else if row >= 4 && col >= 4 {
                assert_eq!(cell.map(|p| p.color), Some(Color::Red));
            } else {
                assert!(cell.is_none(), "cell ({row},{col}) should start empty");
            }
        }
    }
}

#[test]
fn piece_coordinates_match_their_cells() {
    let b = Board::startpos();
    for sq in 0..64u8 {
        if let Some(p) = b.piece_at(sq) {
            assert_eq!(p.square(), sq);
        }
    }
}

#[test]
fn from_layout_matches_startpos() {
    let b = Board::from_layout(
        "wwww....
         wwww....
         wwww....
         wwww....
         ....rrrr
         ....rrrr
         ....rrrr
         ....rrrr",
    );
    assert_eq!(b, Board::startpos());
}

#[test]
#[should_panic(expected = "expected 8 rows")]
fn from_layout_rejects_wrong_row_count() {
    Board::from_layout("........ ........");
}

#[test]
#[should_panic(expected = "invalid cell char")]
fn from_layout_rejects_unknown_chars() {
    Board::from_layout(
        "........
         ........
         ........
         ...x....
         ........
         ........
         ........
         ........",
    );
}

#[test]
fn move_piece_relocates_and_updates_coordinates() {
    let mut b = Board::startpos();
    let piece = b.piece_at(3 * 8 + 3).unwrap(); // white at (3,3)

    b.move_piece(piece, 3, 4);

    assert!(b.piece_at(3 * 8 + 3).is_none());
    let moved = b.piece_at(3 * 8 + 4).unwrap();
    assert_eq!((moved.row, moved.col), (3, 4));
    assert_eq!(moved.color, Color::White);
}

#[test]
fn move_piece_never_disturbs_other_cells() {
    let before = Board::startpos();
    let piece = before.piece_at(3 * 8 + 3).unwrap();

    let mut after = before.clone();
    after.move_piece(piece, 4, 3);

    assert_eq!(after.all_pieces(Color::Red).len(), 16);
    assert_eq!(after.all_pieces(Color::White).len(), 16);
    for sq in 0..64u8 {
        if sq == 3 * 8 + 3 || sq == 4 * 8 + 3 {
            continue;
        }
        assert_eq!(before.piece_at(sq), after.piece_at(sq));
    }
}

#[test]
fn red_wins_with_full_top_left_quadrant() {
    let b = Board::from_layout(
        "rrrr....
         rrrr....
         rrrr....
         rrrr....
         ....wwww
         ....wwww
         ....wwww
         ....wwww",
    );
    assert_eq!(b.winner(), Some(Color::Red));
}

#[test]
fn white_wins_with_full_bottom_right_quadrant() {
    let b = Board::from_layout(
        "........
         ........
         ........
         ........
         ....wwww
         ....wwww
         ....wwww
         ....wwww",
    );
    assert_eq!(b.winner(), Some(Color::White));
}

#[test]
fn one_missing_quadrant_cell_means_no_winner() {
    let b = Board::from_layout(
        "rrrr....
         rrrr....
         rrrr....
         rrr.....
         ........
         ........
         ........
         ........",
    );
    assert_eq!(b.winner(), None);
}

#[test]
fn mixed_quadrant_means_no_winner() {
    // Quadrant fully occupied but one cell holds the wrong color.
    let b = Board::from_layout(
        "rrrr....
         rrrr....
         rrrr....
         rrrw....
         ........
         ........
         ........
         ........",
    );
    assert_eq!(b.winner(), None);
}

#[test]
fn startpos_has_no_winner() {
    // Each side starts on the other side's goal quadrant; neither wins.
    assert_eq!(Board::startpos().winner(), None);
}

#[test]
fn structural_equality_and_hash_agree() {
    use std::collections::HashSet;

    let a = Board::startpos();
    let b = Board::startpos();
    assert_eq!(a, b);

    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
    assert!(!set.contains(&Board::empty()));
}
