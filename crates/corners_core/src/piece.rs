use crate::types::Color;

/// A single game piece. Pieces are never captured in Corners; they only
/// relocate, so the full population is fixed at board setup.
///
/// Invariant: `(row, col)` always matches the board cell holding the piece.
/// `Board::move_piece` is the only mutation path and keeps this in sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub row: u8,
    pub col: u8,
    pub color: Color,
}

impl Piece {
    pub fn at(row: u8, col: u8, color: Color) -> Self {
        Self { row, col, color }
    }

    pub fn square(&self) -> u8 {
        self.row * 8 + self.col
    }
}
