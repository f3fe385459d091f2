//! Rook move generation.
//!
//! Rays stop at the first occupied square; that square is kept as a capture
//! when it holds an enemy piece and dropped when it holds a friendly one.

use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let own_occ = position.occupancy_by_color[color.index()];
    let targets = rook_attacks(from, position.occupancy_all) & !own_occ;
    push_target_moves(position, from, color, targets, out);
}
