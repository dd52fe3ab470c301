//! Game state management: turn handling, selection, move application

use corners_core::{col_of, row_of, sq_to_coord, valid_moves, Board, Color, MoveMap, Piece};

/// Represents the current state of a Corners game
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current board
    pub board: Board,
    /// Side to move
    pub turn: Color,
    /// Currently selected piece (for move input)
    pub selected: Option<Piece>,
    /// Valid destinations (with jump paths) of the selected piece
    pub moves_for_selected: MoveMap,
    /// Last move endpoints (for highlighting)
    pub last_move: Option<(u8, u8)>,
    /// Game result
    pub result: GameResult,
    /// Is an engine thinking?
    pub engine_thinking: bool,
    /// Move history in simple coordinate notation
    pub moves: Vec<MoveRecord>,
}

/// A recorded move: `c5-c6` for a step, `c5xc7xe7` for a jump chain.
#[derive(Debug, Clone)]
pub struct MoveRecord {
    pub notation: String,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    RedWins,
    WhiteWins,
    /// The side to move has no legal move. The rules don't define a pass,
    /// so the game halts here with a message instead of inferring a loss.
    Blocked(Color),
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::startpos(),
            turn: Color::Red,
            selected: None,
            moves_for_selected: MoveMap::new(),
            last_move: None,
            result: GameResult::InProgress,
            engine_thinking: false,
            moves: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Handle a click on a board cell.
    pub fn select_square(&mut self, sq: u8) {
        if self.result != GameResult::InProgress {
            return;
        }

        // Clicking a piece of the side to move selects it
        if let Some(piece) = self.board.piece_at(sq) {
            if piece.color == self.turn {
                self.selected = Some(piece);
                self.moves_for_selected = valid_moves(&self.board, piece);
                return;
            }
        }

        // Clicking a valid destination of the selected piece plays the move
        if let Some(piece) = self.selected {
            if self.moves_for_selected.contains_key(&sq) {
                self.apply_human_move(piece, sq);
            }
        }

        self.selected = None;
        self.moves_for_selected.clear();
    }

    fn apply_human_move(&mut self, piece: Piece, dest: u8) {
        let path = self.moves_for_selected.get(&dest).cloned().unwrap_or_default();
        let notation = move_notation(piece.square(), dest, &path);

        self.board.move_piece(piece, row_of(dest), col_of(dest));
        self.finish_move(piece.square(), dest, notation);
    }

    /// Apply an engine move. Engines return the successor board, not a move
    /// description, so the played move is recovered by diffing the boards.
    pub fn apply_engine_board(&mut self, new_board: Board) {
        let mut from = None;
        let mut to = None;
        for sq in 0..64u8 {
            match (self.board.piece_at(sq), new_board.piece_at(sq)) {
                (Some(_), None) => from = Some(sq),
                (None, Some(_)) => to = Some(sq),
                _ => {}
            }
        }

        self.board = new_board;
        if let (Some(from), Some(to)) = (from, to) {
            // The chain's waypoints are not recoverable from the diff; a
            // step shows as `-`, anything longer as a single `x`.
            let sep = if (row_of(from) - row_of(to)).abs() + (col_of(from) - col_of(to)).abs() == 1
            {
                '-'
            } else {
                'x'
            };
            let notation = format!("{}{}{}", sq_to_coord(from), sep, sq_to_coord(to));
            self.finish_move(from, to, notation);
        }
    }

    fn finish_move(&mut self, from: u8, to: u8, notation: String) {
        self.moves.push(MoveRecord { notation });
        self.last_move = Some((from, to));
        self.selected = None;
        self.moves_for_selected.clear();
        self.turn = self.turn.other();
        self.check_game_end();
    }

    /// True if the side to move has at least one legal move.
    pub fn side_to_move_can_move(&self) -> bool {
        self.board
            .all_pieces(self.turn)
            .iter()
            .any(|&p| !valid_moves(&self.board, p).is_empty())
    }

    fn check_game_end(&mut self) {
        match self.board.winner() {
            Some(Color::Red) => self.result = GameResult::RedWins,
            Some(Color::White) => self.result = GameResult::WhiteWins,
            None => {
                if !self.side_to_move_can_move() {
                    self.result = GameResult::Blocked(self.turn);
                }
            }
        }
    }
}

fn move_notation(from: u8, dest: u8, path: &[u8]) -> String {
    let step = (row_of(from) - row_of(dest)).abs() + (col_of(from) - col_of(dest)).abs() == 1;
    if step {
        return format!("{}-{}", sq_to_coord(from), sq_to_coord(dest));
    }
    let mut s = sq_to_coord(from);
    for &mid in path {
        s.push('x');
        s.push_str(&sq_to_coord(mid));
    }
    s.push('x');
    s.push_str(&sq_to_coord(dest));
    s
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
