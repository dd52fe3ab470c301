use std::collections::{BTreeMap, HashSet};

use crate::board::Board;
use crate::piece::Piece;
use crate::types::*;

/// Destination square → intermediate landing squares of the jump chain that
/// reaches it. Plain steps and single jumps have an empty path; origin and
/// destination are never listed. A `BTreeMap` keeps iteration order
/// deterministic (ascending destination square) for search and tests.
pub type MoveMap = BTreeMap<u8, Vec<u8>>;

/// All legal moves for one piece.
///
/// Two move shapes exist:
/// - a single step to an orthogonally adjacent empty cell, and
/// - a jump chain: hop over any adjacent piece (either color) onto the
///   empty cell two away, then keep chaining in any orthogonal direction.
///
/// Jumped-over pieces stay on the board; there are no captures. A chain
/// never revisits a cell on its own path, and anything off the 8×8 grid is
/// rejected. When several chains end on the same square, the first one
/// found is kept.
pub fn valid_moves(board: &Board, piece: Piece) -> MoveMap {
    let mut moves = MoveMap::new();
    let row = piece.row as i8;
    let col = piece.col as i8;

    for (dr, dc) in ORTHOGONAL {
        if let Some(to) = sq(row + dr, col + dc) {
            if board.piece_at(to).is_none() {
                moves.insert(to, Vec::new());
            }
        }
    }

    let from = sq(row, col).expect("piece is on the board");
    jump_chains(board, from, &[from], &mut moves);
    moves
}

/// Recursively extends jump chains from `from`. `path` holds every cell the
/// chain has occupied so far (origin first) and is never mutated in place;
/// each branch gets its own extension, so sibling branches cannot alias one
/// another's history.
fn jump_chains(board: &Board, from: u8, path: &[u8], moves: &mut MoveMap) {
    let row = row_of(from);
    let col = col_of(from);

    for (dr, dc) in ORTHOGONAL {
        let over = match sq(row + dr, col + dc) {
            Some(s) => s,
            None => continue,
        };
        let land = match sq(row + 2 * dr, col + 2 * dc) {
            Some(s) => s,
            None => continue,
        };
        if board.piece_at(over).is_none() || board.piece_at(land).is_some() {
            continue;
        }
        if path.contains(&land) {
            continue; // cycle within this chain
        }

        // First chain to reach a square wins; later chains may still pass
        // through it on the way to squares not yet discovered.
        moves.entry(land).or_insert_with(|| path[1..].to_vec());

        let mut extended = path.to_vec();
        extended.push(land);
        jump_chains(board, land, &extended, moves);
    }
}

/// Every board reachable by `color` making exactly one move (a step or a
/// complete jump chain). One successor per distinct (piece, destination)
/// pair, de-duplicated by structural board equality: transpositions that
/// produce the same position collapse to a single entry. Order is
/// deterministic: pieces row-major, destinations ascending.
pub fn successor_boards(board: &Board, color: Color) -> Vec<Board> {
    let mut seen: HashSet<Board> = HashSet::new();
    let mut out = Vec::new();

    for piece in board.all_pieces(color) {
        for &dest in valid_moves(board, piece).keys() {
            let mut next = board.clone();
            next.move_piece(piece, row_of(dest), col_of(dest));
            if seen.insert(next.clone()) {
                out.push(next);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
