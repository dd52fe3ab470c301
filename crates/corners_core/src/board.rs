use crate::piece::Piece;
use crate::types::*;

/// The 8×8 playing field. Each cell holds at most one piece and the board
/// exclusively owns every piece placed on it.
///
/// Equality and hashing are structural over the full grid: the search layer
/// de-duplicates successor positions by inserting boards into a `HashSet`,
/// so two boards with identical piece placement must compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [Option<Piece>; 64],
}

impl Board {
    /// Empty board, no pieces. Mostly useful for building test positions.
    pub fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// The fixed starting layout: White fills the top-left 4×4 quadrant,
    /// Red fills the bottom-right 4×4 quadrant, 16 pieces per side.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for row in 0..4u8 {
            for col in 0..4u8 {
                b.cells[(row * 8 + col) as usize] = Some(Piece::at(row, col, Color::White));
                b.cells[((row + 4) * 8 + col + 4) as usize] =
                    Some(Piece::at(row + 4, col + 4, Color::Red));
            }
        }
        b
    }

    /// Parses a board from eight whitespace-separated rows of eight
    /// characters: `.` empty, `r`/`R` Red, `w`/`W` White. Rows are listed
    /// top to bottom. Panics on malformed input; this is a test and
    /// diagnostics constructor, not a user-facing parser.
    pub fn from_layout(layout: &str) -> Self {
        let rows: Vec<&str> = layout.split_whitespace().collect();
        assert!(rows.len() == 8, "expected 8 rows, got {}", rows.len());

        let mut b = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            assert!(
                row_str.len() == 8,
                "row {} has {} cells, expected 8",
                row,
                row_str.len()
            );
            for (col, ch) in row_str.chars().enumerate() {
                let color = match ch {
                    '.' => continue,
                    'r' | 'R' => Color::Red,
                    'w' | 'W' => Color::White,
                    _ => panic!("invalid cell char {:?} at row {} col {}", ch, row, col),
                };
                b.cells[row * 8 + col] = Some(Piece::at(row as u8, col as u8, color));
            }
        }
        b
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.cells[sq as usize]
    }

    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.cells[sq as usize] = pc;
    }

    /// All pieces of one color in row-major scan order. Search enumerates
    /// pieces in this order, so it also fixes tie-breaking between moves
    /// that evaluate equally.
    pub fn all_pieces(&self, color: Color) -> Vec<Piece> {
        self.cells
            .iter()
            .flatten()
            .filter(|p| p.color == color)
            .copied()
            .collect()
    }

    /// Relocates `piece` to `(row, col)` and refreshes its stored
    /// coordinates. The destination must be an empty cell taken from
    /// `valid_moves`; this is the caller's contract and is only checked in
    /// debug builds.
    pub fn move_piece(&mut self, piece: Piece, row: i8, col: i8) {
        let from = sq(piece.row as i8, piece.col as i8).expect("piece is on the board") as usize;
        let to = sq(row, col).expect("destination is on the board") as usize;
        debug_assert!(self.cells[to].is_none(), "destination cell is occupied");
        debug_assert_eq!(self.cells[from], Some(piece), "piece does not match its cell");

        self.cells.swap(from, to);
        if let Some(p) = &mut self.cells[to] {
            p.row = row as u8;
            p.col = col as u8;
        }
    }

    /// Red wins by filling the entire top-left 4×4 quadrant; White wins by
    /// filling the bottom-right one. Both quadrants are scanned on every
    /// call; a quadrant with any empty cell cannot produce a winner.
    pub fn winner(&self) -> Option<Color> {
        if self.quadrant_filled_by(0, 0, Color::Red) {
            return Some(Color::Red);
        }
        if self.quadrant_filled_by(4, 4, Color::White) {
            return Some(Color::White);
        }
        None
    }

    fn quadrant_filled_by(&self, row0: u8, col0: u8, color: Color) -> bool {
        for row in row0..row0 + 4 {
            for col in col0..col0 + 4 {
                match self.cells[(row * 8 + col) as usize] {
                    Some(p) if p.color == color => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
