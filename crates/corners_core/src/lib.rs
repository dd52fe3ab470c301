pub mod board;
pub mod eval;
pub mod movegen;
pub mod perft;
pub mod piece;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use eval::evaluate;
pub use movegen::*;
pub use perft::perft;
pub use piece::Piece;
pub use types::*;

// =============================================================================
// Engine trait, implemented by all Corners engines (minimax, random, etc.)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen successor board (None if the side to move has no legal
    /// moves). The caller replaces its board with this one; engines report
    /// resulting positions, not move descriptions.
    pub best_board: Option<Board>,
    /// Evaluation score of the chosen line, from the searched side's
    /// maximizing perspective
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    /// Number of nodes visited (for stats)
    pub nodes: u64,
}

/// Trait that all Corners engines must implement.
///
/// This allows swapping between the minimax engine, the random baseline,
/// and anything built later without touching the GUI.
pub trait Engine: Send {
    /// Search the position to the given depth for the side `to_move` and
    /// return the successor board it should play into.
    ///
    /// Search runs to completion; there is no time limit or cancellation.
    fn search(&mut self, board: &Board, to_move: Color, depth: u8) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
