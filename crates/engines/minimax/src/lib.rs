//! Minimax Corners Engine
//!
//! Fixed-depth full-width minimax over successor boards with the positional
//! weight-table evaluation from `corners_core`. No pruning, no transposition
//! table, no iterative deepening: the search visits every successor chain
//! down to the configured depth and returns the board it wants to play into.

mod search;

use corners_core::{Board, Color, Engine, SearchResult};

/// The shipped engine: plain minimax at a caller-chosen depth.
///
/// An alpha-beta variant exists in [`search`] for experiments but is not
/// wired into this engine.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, to_move: Color, depth: u8) -> SearchResult {
        self.nodes = 0;

        let (score, best_board) = search::best_board(board, depth, to_move, &mut self.nodes);

        SearchResult {
            best_board,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use search::{alphabeta, best_board};
