//! Canonical chess-rule constants.
//!
//! Starting arrangement, back-rank geometry for castling and the pawn ranks
//! used by move generation. Rows follow the placement string: row 0 is
//! Black's back rank, row 7 is White's.

use crate::game_state::chess_types::*;

/// Standard starting arrangement, read row 0 first.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub const WHITE_KING_HOME: Square = 60;
pub const BLACK_KING_HOME: Square = 4;

/// Geometry of one castling option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingPath {
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub between: &'static [Square],
    /// Squares the king stands on or crosses; none may be attacked.
    pub king_path: &'static [Square],
}

pub const CASTLING_PATHS: [CastlingPath; 4] = [
    CastlingPath {
        right: CASTLE_WHITE_KINGSIDE,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
        between: &[61, 62],
        king_path: &[60, 61, 62],
    },
    CastlingPath {
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
        between: &[57, 58, 59],
        king_path: &[60, 59, 58],
    },
    CastlingPath {
        right: CASTLE_BLACK_KINGSIDE,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
        between: &[5, 6],
        king_path: &[4, 5, 6],
    },
    CastlingPath {
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
        between: &[1, 2, 3],
        king_path: &[4, 3, 2],
    },
];

#[inline]
pub fn castling_paths_for(color: Color) -> &'static [CastlingPath] {
    match color {
        Color::White => &CASTLING_PATHS[0..2],
        Color::Black => &CASTLING_PATHS[2..4],
    }
}

/// Castling entry whose king hop matches `from -> to`, if any.
#[inline]
pub fn castling_path_for_king_move(from: Square, to: Square) -> Option<&'static CastlingPath> {
    CASTLING_PATHS
        .iter()
        .find(|path| path.king_from == from && path.king_to == to)
}

/// Rights lost when a piece leaves or lands on `square`.
#[inline]
pub const fn rights_touching_square(square: Square) -> CastlingRights {
    match square {
        60 => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        63 => CASTLE_WHITE_KINGSIDE,
        56 => CASTLE_WHITE_QUEENSIDE,
        4 => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
        7 => CASTLE_BLACK_KINGSIDE,
        0 => CASTLE_BLACK_QUEENSIDE,
        _ => 0,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> i32 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

#[inline]
pub const fn promotion_row(color: Color) -> i32 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}
