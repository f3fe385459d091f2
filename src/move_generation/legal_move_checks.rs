//! Attack detection and check queries.

use crate::game_state::{chess_types::*, game_state::Position};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn king_square(position: &Position, color: Color) -> Option<Square> {
    let kings = position.pieces[color.index()][PieceKind::King.index()];
    if kings == 0 {
        None
    } else {
        Some(kings.trailing_zeros() as Square)
    }
}

/// A missing king is reported as "not in check".
#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = king_square(position, color) else {
        return false;
    };
    is_square_attacked(position, king_sq, color.opposite())
}

/// Whether any `attacker_color` piece attacks `square`.
///
/// Step attackers are found by looking outward from the target with the
/// attacker's own pattern; sliders by casting rays from the target and
/// checking whether the first blocker moves along that ray's orientation.
pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    is_square_attacked_with_occupancy(position, square, attacker_color, position.occupancy_all)
}

/// `is_square_attacked` with sliders traced through `occupancy` instead of
/// the board's own occupancy.
pub fn is_square_attacked_with_occupancy(
    position: &Position,
    square: Square,
    attacker_color: Color,
    occupancy: u64,
) -> bool {
    let attacker = &position.pieces[attacker_color.index()];

    // A pawn of `attacker_color` hits `square` iff a defender pawn standing
    // on `square` would hit the pawn's square.
    if pawn_attacks(attacker_color.opposite(), square) & attacker[PieceKind::Pawn.index()] != 0 {
        return true;
    }

    if knight_attacks(square) & attacker[PieceKind::Knight.index()] != 0 {
        return true;
    }

    if king_attacks(square) & attacker[PieceKind::King.index()] != 0 {
        return true;
    }

    let bishops_queens = attacker[PieceKind::Bishop.index()] | attacker[PieceKind::Queen.index()];
    if bishop_attacks(square, occupancy) & bishops_queens != 0 {
        return true;
    }

    let rooks_queens = attacker[PieceKind::Rook.index()] | attacker[PieceKind::Queen.index()];
    if rook_attacks(square, occupancy) & rooks_queens != 0 {
        return true;
    }

    false
}
