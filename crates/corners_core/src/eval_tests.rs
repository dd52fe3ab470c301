use super::*;
use crate::board::Board;
use crate::piece::Piece;

fn color_swapped(board: &Board) -> Board {
    let mut out = Board::empty();
    for p in board.cells.iter().flatten() {
        out.set_piece(p.square(), Some(Piece::at(p.row, p.col, p.color.other())));
    }
    out
}

#[test]
fn swapping_colors_negates_the_score() {
    for board in [
        Board::startpos(),
        Board::from_layout(
            "r..w....
             ........
             ..r.....
             ....w...
             .w......
             ......r.
             ........
             ...r...w",
        ),
    ] {
        assert_eq!(evaluate(&color_swapped(&board)), -evaluate(&board));
    }
}

#[test]
fn red_progress_toward_top_left_raises_the_score() {
    let before = Board::from_layout(
        "........
         ........
         ........
         ........
         ....r...
         ........
         ........
         ........",
    );
    let mut after = before.clone();
    after.move_piece(before.piece_at(4 * 8 + 4).unwrap(), 3, 4);

    assert!(evaluate(&after) > evaluate(&before));
}

#[test]
fn white_progress_toward_bottom_right_raises_the_score() {
    let before = Board::from_layout(
        "w.......
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    );
    let mut after = before.clone();
    after.move_piece(before.piece_at(0).unwrap(), 0, 1);

    assert!(evaluate(&after) > evaluate(&before));
}

#[test]
fn startpos_score_is_the_table_constant() {
    // Pins the weight table: Red opens on the cheap bottom-right cells,
    // White on the expensive top-left ones.
    assert_eq!(evaluate(&Board::startpos()), 32 - 662);
}

#[test]
fn empty_board_scores_zero() {
    assert_eq!(evaluate(&Board::empty()), 0);
}
