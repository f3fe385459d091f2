//! King move generation.
//!
//! Single steps skip squares the opponent currently attacks. Castling is
//! layered on top: it needs the matching right, the rook on its corner, an
//! empty gap, and an unattacked start, path and destination for the king.

use crate::game_state::chess_rules::castling_paths_for;
use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_checks::{is_square_attacked, is_square_attacked_with_occupancy};
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let enemy = color.opposite();
    let own_occ = position.occupancy_by_color[color.index()];

    // The king's own square is treated as empty so a slider checking along a
    // line still covers the square behind the king.
    let occupancy_without_king = position.occupancy_all & !(1u64 << from);
    let mut safe_targets = 0u64;
    let mut steps = king_attacks(from) & !own_occ;
    while steps != 0 {
        let to = steps.trailing_zeros() as Square;
        if !is_square_attacked_with_occupancy(position, to, enemy, occupancy_without_king) {
            safe_targets |= 1u64 << to;
        }
        steps &= steps - 1;
    }
    push_target_moves(position, from, color, safe_targets, out);

    generate_castling_moves(position, from, color, out);
}

fn generate_castling_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let enemy = color.opposite();
    let rooks = position.pieces[color.index()][PieceKind::Rook.index()];

    for path in castling_paths_for(color) {
        if path.king_from != from || position.castling_rights & path.right == 0 {
            continue;
        }
        if rooks & (1u64 << path.rook_from) == 0 {
            continue;
        }
        if path
            .between
            .iter()
            .any(|&sq| position.occupancy_all & (1u64 << sq) != 0)
        {
            continue;
        }
        if path
            .king_path
            .iter()
            .any(|&sq| is_square_attacked(position, sq, enemy))
        {
            continue;
        }
        out.push(Move::new(path.king_from, path.king_to, MoveKind::Castling, None));
    }
}
