//! Core value types shared across the engine: colors, piece kinds, squares,
//! castling-rights bits and the `Move` record produced by move generation.

use std::fmt;

pub use crate::game_state::game_state::Position;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn push for this color.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

/// Piece kind (color is represented separately for cache-friendly layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase letter used by the placement string and move notation.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Board square index `row * 8 + col` (`0..=63`), row 0 being the eighth rank.
pub type Square = u8;

pub const BOARD_SIZE: i32 = 8;

#[inline]
pub const fn is_on_board(row: i32, col: i32) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}

/// Caller must have checked `is_on_board`.
#[inline]
pub const fn square_at(row: i32, col: i32) -> Square {
    (row * BOARD_SIZE + col) as Square
}

#[inline]
pub const fn row_of(square: Square) -> i32 {
    (square / 8) as i32
}

#[inline]
pub const fn col_of(square: Square) -> i32 {
    (square % 8) as i32
}

/// Castling rights bitmask.
pub type CastlingRights = u8;
pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = 0x0F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    Capture,
    Castling,
}

/// Immutable move record produced by the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub src_row: u8,
    pub src_col: u8,
    pub dest_row: u8,
    pub dest_col: u8,
    pub kind: MoveKind,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind, promotion: Option<PieceKind>) -> Self {
        Self {
            src_row: from / 8,
            src_col: from % 8,
            dest_row: to / 8,
            dest_col: to % 8,
            kind,
            promotion,
        }
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.src_row * 8 + self.src_col
    }

    #[inline]
    pub const fn to(&self) -> Square {
        self.dest_row * 8 + self.dest_col
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Capture)
    }

    #[inline]
    pub const fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castling)
    }
}

/// Coordinate notation, e.g. `e2e4` or `a7a8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = |col: u8| char::from(b'a' + col);
        let rank = |row: u8| char::from(b'8' - row);
        write!(
            f,
            "{}{}{}{}",
            file(self.src_col),
            rank(self.src_row),
            file(self.dest_col),
            rank(self.dest_row)
        )?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.symbol())?;
        }
        Ok(())
    }
}
