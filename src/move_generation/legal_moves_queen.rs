use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Union of the rook and bishop rays from `from`.
pub fn generate_queen_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    generate_rook_moves(position, from, color, out);
    generate_bishop_moves(position, from, color, out);
}
