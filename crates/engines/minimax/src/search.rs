//! Fixed-depth minimax over successor boards.

use corners_core::{evaluate, successor_boards, Board, Color};

/// Initial running-best scores. These double as the "no move available"
/// sentinel: a node whose side to move has no successors returns its
/// initialized score and no board, and the caller sees `best_board: None`.
const NO_MOVE_MAX: i32 = i32::MIN + 1;
const NO_MOVE_MIN: i32 = i32::MAX - 1;

/// Searches `depth` plies ahead with `maximizing` to move and returns the
/// score of the chosen line together with the successor board to play into.
///
/// The board coming back is a full position, not a move description; the
/// caller replaces its own board with it. `None` means the side to move has
/// no legal move at the root: an explicit sentinel, not a defeat.
pub fn best_board(
    board: &Board,
    depth: u8,
    maximizing: Color,
    nodes: &mut u64,
) -> (i32, Option<Board>) {
    minimax(board, depth, maximizing, maximizing, nodes)
}

fn minimax(
    board: &Board,
    depth: u8,
    to_move: Color,
    maximizing: Color,
    nodes: &mut u64,
) -> (i32, Option<Board>) {
    *nodes += 1;

    if depth == 0 || board.winner().is_some() {
        return (evaluate(board), Some(board.clone()));
    }

    if to_move == maximizing {
        let mut best = NO_MOVE_MAX;
        let mut chosen = None;
        for succ in successor_boards(board, to_move) {
            let (score, _) = minimax(&succ, depth - 1, to_move.other(), maximizing, nodes);
            // >= so equal scores overwrite: the last best seen wins ties.
            if score >= best {
                best = score;
                chosen = Some(succ);
            }
        }
        (best, chosen)
    } else {
        let mut best = NO_MOVE_MIN;
        let mut chosen = None;
        for succ in successor_boards(board, to_move) {
            let (score, _) = minimax(&succ, depth - 1, to_move.other(), maximizing, nodes);
            if score <= best {
                best = score;
                chosen = Some(succ);
            }
        }
        (best, chosen)
    }
}

/// Alpha-beta variant of the same search. Kept alongside minimax for
/// experiments and cross-checks; `MinimaxEngine` does not call it.
pub fn alphabeta(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    to_move: Color,
    maximizing: Color,
    nodes: &mut u64,
) -> (i32, Option<Board>) {
    *nodes += 1;

    if depth == 0 || board.winner().is_some() {
        return (evaluate(board), Some(board.clone()));
    }

    if to_move == maximizing {
        let mut best = NO_MOVE_MAX;
        let mut chosen = None;
        for succ in successor_boards(board, to_move) {
            let (score, _) = alphabeta(
                &succ,
                depth - 1,
                alpha,
                beta,
                to_move.other(),
                maximizing,
                nodes,
            );
            if score >= best {
                best = score;
                chosen = Some(succ);
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break; // beta cutoff
            }
        }
        (best, chosen)
    } else {
        let mut best = NO_MOVE_MIN;
        let mut chosen = None;
        for succ in successor_boards(board, to_move) {
            let (score, _) = alphabeta(
                &succ,
                depth - 1,
                alpha,
                beta,
                to_move.other(),
                maximizing,
                nodes,
            );
            if score <= best {
                best = score;
                chosen = Some(succ);
            }
            if best < beta {
                beta = best;
            }
            if beta <= alpha {
                break; // alpha cutoff
            }
        }
        (best, chosen)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
