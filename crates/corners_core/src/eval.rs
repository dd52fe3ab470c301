use crate::board::Board;
use crate::types::Color;

/// Positional weights, indexed `WEIGHTS[col][row]`. The table is a fixed
/// constant: values fall off monotonically away from the top-left corner,
/// and the column axis falls faster than the row axis, so the gradient is
/// deliberately asymmetric.
///
/// Red is rewarded for standing on high cells (its goal is the top-left
/// quadrant); White's sum is subtracted, so White gains by leaving high
/// cells behind on its way to the bottom-right.
const WEIGHTS: [[i32; 8]; 8] = [
    [60, 52, 44, 36, 26, 17, 9, 2],
    [55, 48, 40, 32, 23, 15, 8, 1],
    [50, 43, 36, 28, 20, 12, 6, 1],
    [45, 38, 31, 24, 16, 9, 4, 0],
    [33, 27, 21, 16, 10, 6, 2, 0],
    [22, 18, 14, 10, 6, 3, 1, 0],
    [12, 9, 7, 5, 3, 1, 0, 0],
    [4, 3, 2, 1, 0, 0, 0, 0],
];

/// Static evaluation: sum of weights under Red pieces minus the sum under
/// White pieces. Whichever color a search maximizes for is pushed toward
/// its own goal quadrant: Red by growing its sum, White by shrinking the
/// subtracted one.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0i32;
    for piece in board.cells.iter().flatten() {
        let w = WEIGHTS[piece.col as usize][piece.row as usize];
        score += if piece.color == Color::Red { w } else { -w };
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
