//! Random Move Corners Engine
//!
//! A simple engine that plays into a uniformly random successor board.
//! Useful for:
//! - Testing GUI and engine plumbing
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use corners_core::{successor_boards, Board, Color, Engine, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// An engine that picks a random legal successor position.
///
/// No evaluation, no look-ahead: it enumerates every board reachable in
/// one move and chooses one at random. The weakest possible opponent and
/// therefore the most honest smoke test.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, to_move: Color, _depth: u8) -> SearchResult {
        let successors = successor_boards(board, to_move);
        self.nodes = successors.len() as u64;

        let best_board = successors.choose(&mut thread_rng()).cloned();

        SearchResult {
            best_board,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
