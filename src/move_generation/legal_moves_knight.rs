use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let own_occ = position.occupancy_by_color[color.index()];
    push_target_moves(position, from, color, knight_attacks(from) & !own_occ, out);
}
