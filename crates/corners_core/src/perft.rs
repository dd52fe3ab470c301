use crate::board::Board;
use crate::movegen::successor_boards;
use crate::types::Color;

/// Counts positions reachable in exactly `depth` plies with the sides
/// alternating, starting with `to_move`. Successors are de-duplicated per
/// node just like in search, so this counts what a full-width search would
/// actually visit. Depth 0 counts the position itself.
pub fn perft(board: &Board, to_move: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for succ in successor_boards(board, to_move) {
        nodes += perft(&succ, to_move.other(), depth - 1);
    }
    nodes
}
