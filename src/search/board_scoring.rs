//! Static evaluation.
//!
//! Search delegates position scoring to `BoardScorer`, so alternate heuristics
//! can be swapped in without touching the search code. Scores are always
//! reported from an explicitly supplied perspective.

use crate::game_state::{chess_types::*, game_state::Position};

/// Magnitude of a mate score before ply adjustment.
pub const MATE_SCORE: i32 = 30000;

pub trait BoardScorer: Send + Sync {
    /// Score from `perspective`'s point of view; positive favours it.
    fn score(&self, position: &Position, perspective: Color) -> i32;
}

/// Centre-favouring placement bonus, indexed `[row][col]` from White's side.
/// Black pieces read it mirrored vertically.
const PLACEMENT_BONUS: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

/// Material plus placement bonus. The king carries no material value but
/// does collect the placement bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }

    #[inline]
    fn placement_bonus(color: Color, square: Square) -> i32 {
        let row = row_of(square) as usize;
        let col = col_of(square) as usize;
        match color {
            Color::White => PLACEMENT_BONUS[row][col],
            Color::Black => PLACEMENT_BONUS[7 - row][col],
        }
    }

    fn side_total(position: &Position, color: Color) -> i32 {
        let mut total = 0i32;
        for piece in ALL_PIECE_KINDS {
            let mut bb = position.pieces[color.index()][piece.index()];
            while bb != 0 {
                let sq = bb.trailing_zeros() as Square;
                total += Self::piece_value(piece) + Self::placement_bonus(color, sq);
                bb &= bb - 1;
            }
        }
        total
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, position: &Position, perspective: Color) -> i32 {
        Self::side_total(position, perspective) - Self::side_total(position, perspective.opposite())
    }
}

/// `PositionalScorer` evaluation from `color`'s perspective.
#[inline]
pub fn evaluate(position: &Position, color: Color) -> i32 {
    PositionalScorer.score(position, color)
}
