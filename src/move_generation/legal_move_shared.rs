//! Occupant lookups and target-to-move expansion shared by the per-piece
//! generators.

use crate::game_state::{chess_types::*, game_state::Position};

#[inline]
pub fn piece_on_square_for_color(
    position: &Position,
    color: Color,
    square: Square,
) -> Option<PieceKind> {
    let mask = 1u64 << square;
    if position.occupancy_by_color[color.index()] & mask == 0 {
        return None;
    }
    ALL_PIECE_KINDS
        .into_iter()
        .find(|piece| position.pieces[color.index()][piece.index()] & mask != 0)
}

#[inline]
pub fn piece_on_square_any(position: &Position, square: Square) -> Option<(Color, PieceKind)> {
    if let Some(piece) = piece_on_square_for_color(position, Color::White, square) {
        return Some((Color::White, piece));
    }
    if let Some(piece) = piece_on_square_for_color(position, Color::Black, square) {
        return Some((Color::Black, piece));
    }
    None
}

/// Turn a target bitboard into moves, tagging squares held by the enemy of
/// `color` as captures. Friendly squares must already be masked out.
#[inline]
pub fn push_target_moves(
    position: &Position,
    from: Square,
    color: Color,
    mut targets: u64,
    out: &mut Vec<Move>,
) {
    let enemy_occ = position.occupancy_by_color[color.opposite().index()];
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        let kind = if enemy_occ & (1u64 << to) != 0 {
            MoveKind::Capture
        } else {
            MoveKind::Quiet
        };
        out.push(Move::new(from, to, kind, None));
        targets &= targets - 1;
    }
}
