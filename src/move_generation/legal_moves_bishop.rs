use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::bishop_moves::bishop_attacks;

pub fn generate_bishop_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let own_occ = position.occupancy_by_color[color.index()];
    let targets = bishop_attacks(from, position.occupancy_all) & !own_occ;
    push_target_moves(position, from, color, targets, out);
}
