//! Core board state representation.
//!
//! `Position` is the central model for the engine. It stores the twelve
//! piece bitboards, occupancy caches, side to move, castling rights, an
//! incrementally maintained Zobrist key and the append-only key history used
//! for repetition counting. Search and legality probes work on independent
//! clones; nothing here is shared between copies.

use crate::errors::ChessError;
use crate::game_state::chess_rules::STARTING_PLACEMENT;
use crate::game_state::chess_types::*;
use crate::game_state::terminal_state::{self, GameStatus};
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves_for_piece;
use crate::move_generation::legal_move_shared::piece_on_square_any;
use crate::search::zobrist::{castling_key, compute_zobrist_key, piece_square_key, side_to_move_key};

/// `(row, col)` pair as supplied by the presentation layer. Signed so that
/// off-board requests can be represented and rejected.
pub type BoardLocation = (i32, i32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    // --- Bitboard representation ---
    // [color][piece_kind]
    pub pieces: [[u64; 6]; 2],

    // Occupancy caches.
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,

    pub zobrist_key: u64,
    pub ply: u16,

    /// Keys of previously recorded positions, oldest first.
    pub repetition_history: Vec<u64>,
}

impl Default for Position {
    fn default() -> Self {
        let mut position = Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
            side_to_move: Color::White,
            castling_rights: 0,
            zobrist_key: 0,
            ply: 0,
            repetition_history: Vec::new(),
        };
        position.zobrist_key = compute_zobrist_key(&position);
        position
    }
}

impl Position {
    /// Empty board, White to move, no castling rights.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard opening array, White to move, all castling rights. The
    /// opening key is already in the history.
    pub fn new_game() -> Self {
        let mut position = Self::empty();
        position.load_placement(STARTING_PLACEMENT);
        position.set_castling_rights(CASTLE_ALL);
        position.record_position();
        position
    }

    fn load_placement(&mut self, placement: &str) {
        let mut row = 0i32;
        let mut col = 0i32;
        for c in placement.chars() {
            match c {
                '/' => {
                    row += 1;
                    col = 0;
                }
                '1'..='8' => col += c as i32 - '0' as i32,
                _ => {
                    let Some(kind) = PieceKind::from_symbol(c) else {
                        continue;
                    };
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if is_on_board(row, col) {
                        self.set_piece(color, kind, square_at(row, col));
                    }
                    col += 1;
                }
            }
        }
    }

    /// Copy of the board without the repetition history, for legality probes.
    #[inline]
    pub fn snapshot(&self) -> Self {
        Self {
            pieces: self.pieces,
            occupancy_by_color: self.occupancy_by_color,
            occupancy_all: self.occupancy_all,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            zobrist_key: self.zobrist_key,
            ply: self.ply,
            repetition_history: Vec::new(),
        }
    }

    // --- Setup ---

    /// Place a piece, replacing whatever stood on the square.
    pub fn put_piece(
        &mut self,
        row: i32,
        col: i32,
        color: Color,
        kind: PieceKind,
    ) -> Result<(), ChessError> {
        if !is_on_board(row, col) {
            return Err(ChessError::OutOfBounds { row, col });
        }
        let square = square_at(row, col);
        self.clear_square(square);
        self.set_piece(color, kind, square);
        Ok(())
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        if self.side_to_move != color {
            self.side_to_move = color;
            self.zobrist_key ^= side_to_move_key();
        }
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.zobrist_key ^= castling_key(self.castling_rights);
        self.castling_rights = rights & CASTLE_ALL;
        self.zobrist_key ^= castling_key(self.castling_rights);
    }

    // --- Bit maintenance (keeps occupancy and hash in sync) ---

    #[inline]
    pub(crate) fn set_piece(&mut self, color: Color, kind: PieceKind, square: Square) {
        let mask = 1u64 << square;
        self.pieces[color.index()][kind.index()] |= mask;
        self.occupancy_by_color[color.index()] |= mask;
        self.occupancy_all |= mask;
        self.zobrist_key ^= piece_square_key(color, kind, square);
    }

    #[inline]
    pub(crate) fn clear_piece(&mut self, color: Color, kind: PieceKind, square: Square) {
        let mask = 1u64 << square;
        if self.pieces[color.index()][kind.index()] & mask == 0 {
            return;
        }
        self.pieces[color.index()][kind.index()] &= !mask;
        self.occupancy_by_color[color.index()] &= !mask;
        self.occupancy_all = self.occupancy_by_color[0] | self.occupancy_by_color[1];
        self.zobrist_key ^= piece_square_key(color, kind, square);
    }

    fn clear_square(&mut self, square: Square) {
        if let Some((color, kind)) = piece_on_square_any(self, square) {
            self.clear_piece(color, kind, square);
        }
    }

    // --- Queries ---

    /// Occupant of `(row, col)` as `(kind, color)`, `None` if empty or off board.
    pub fn piece_at(&self, row: i32, col: i32) -> Option<(PieceKind, Color)> {
        if !is_on_board(row, col) {
            return None;
        }
        piece_on_square_any(self, square_at(row, col)).map(|(color, kind)| (kind, color))
    }

    /// True for an on-board square with no occupant.
    pub fn is_empty_square(&self, row: i32, col: i32) -> bool {
        is_on_board(row, col) && self.occupancy_all & (1u64 << square_at(row, col)) == 0
    }

    #[inline]
    pub fn is_on_board(row: i32, col: i32) -> bool {
        is_on_board(row, col)
    }

    pub fn piece_count(&self, color: Color) -> u32 {
        self.occupancy_by_color[color.index()].count_ones()
    }

    /// Clear every one of `color`'s bitboards at `(row, col)`.
    pub fn remove_piece(&mut self, row: i32, col: i32, color: Color) {
        if !is_on_board(row, col) {
            return;
        }
        let square = square_at(row, col);
        for kind in ALL_PIECE_KINDS {
            self.clear_piece(color, kind, square);
        }
    }

    // --- Moves ---

    /// Whether `src -> dest` is a legal move for the side to move.
    pub fn is_valid_move(&self, src: BoardLocation, dest: BoardLocation) -> bool {
        self.find_legal_move(src, dest, None).is_ok()
    }

    /// Play `src -> dest`; returns false and leaves the board untouched when
    /// the request is not legal. A promotion without an explicit piece
    /// becomes a queen.
    pub fn make_move(
        &mut self,
        src: BoardLocation,
        dest: BoardLocation,
        promotion: Option<PieceKind>,
    ) -> bool {
        self.try_make_move(src, dest, promotion).is_ok()
    }

    pub fn try_make_move(
        &mut self,
        src: BoardLocation,
        dest: BoardLocation,
        promotion: Option<PieceKind>,
    ) -> Result<Move, ChessError> {
        let mv = self.find_legal_move(src, dest, promotion)?;
        apply_move_unchecked(self, &mv);
        Ok(mv)
    }

    /// Re-validate a generated move and apply it in place. Moves of the side
    /// not on move are rejected.
    pub fn apply_move(&mut self, mv: &Move) -> bool {
        match piece_on_square_any(self, mv.from()) {
            Some((color, _)) if color == self.side_to_move => {}
            _ => return false,
        }
        let legal = generate_legal_moves_for_piece(self, i32::from(mv.src_row), i32::from(mv.src_col));
        if !legal.contains(mv) {
            return false;
        }
        apply_move_unchecked(self, mv);
        true
    }

    fn find_legal_move(
        &self,
        src: BoardLocation,
        dest: BoardLocation,
        promotion: Option<PieceKind>,
    ) -> Result<Move, ChessError> {
        let (src_row, src_col) = src;
        let (dest_row, dest_col) = dest;
        if !is_on_board(src_row, src_col) {
            return Err(ChessError::OutOfBounds { row: src_row, col: src_col });
        }
        if !is_on_board(dest_row, dest_col) {
            return Err(ChessError::OutOfBounds { row: dest_row, col: dest_col });
        }
        let Some((_, color)) = self.piece_at(src_row, src_col) else {
            return Err(ChessError::EmptySquare { row: src_row, col: src_col });
        };
        if color != self.side_to_move {
            return Err(ChessError::WrongSideToMove { row: src_row, col: src_col });
        }

        let wanted_promotion = promotion.unwrap_or(PieceKind::Queen);
        let to = square_at(dest_row, dest_col);
        generate_legal_moves_for_piece(self, src_row, src_col)
            .into_iter()
            .find(|mv| {
                mv.to() == to && mv.promotion.map_or(true, |promo| promo == wanted_promotion)
            })
            .ok_or_else(|| {
                ChessError::IllegalMove(format!("({src_row},{src_col})->({dest_row},{dest_col})"))
            })
    }

    // --- Repetition bookkeeping ---

    /// Append the current key to the history.
    #[inline]
    pub fn record_position(&mut self) {
        self.repetition_history.push(self.zobrist_key);
    }

    /// Consecutive trailing history entries equal to the current key.
    pub fn repetition_count(&self) -> usize {
        self.repetition_history
            .iter()
            .rev()
            .take_while(|&&key| key == self.zobrist_key)
            .count()
    }

    pub fn record_and_count_repetition(&mut self) -> usize {
        self.record_position();
        self.repetition_count()
    }

    /// Total history entries equal to the current key.
    pub fn occurrence_count(&self) -> usize {
        self.repetition_history
            .iter()
            .filter(|&&key| key == self.zobrist_key)
            .count()
    }

    // --- Terminal-state shortcuts for the presentation layer ---

    #[inline]
    pub fn is_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    #[inline]
    pub fn is_checkmate(&self, color: Color) -> bool {
        terminal_state::is_checkmate(self, color)
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        terminal_state::is_stalemate(self)
    }

    #[inline]
    pub fn is_insufficient_material(&self) -> bool {
        terminal_state::is_insufficient_material(self)
    }

    #[inline]
    pub fn is_threefold_repetition(&self) -> bool {
        terminal_state::is_threefold_repetition(self)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        terminal_state::is_game_over(self)
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        terminal_state::status(self)
    }
}
