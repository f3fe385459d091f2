//! Move application.
//!
//! `apply_move_unchecked` performs the bit bookkeeping for a generated move
//! without re-validating it; `apply_move` does the same on an independent
//! copy. Validation lives in `Position::apply_move` / `Position::make_move`.

use crate::game_state::chess_rules::{castling_path_for_king_move, promotion_row, rights_touching_square};
use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_shared::piece_on_square_any;

/// What-if copy: the original is left untouched.
pub fn apply_move(position: &Position, mv: &Move) -> Position {
    let mut next = position.clone();
    apply_move_unchecked(&mut next, mv);
    next
}

/// Apply `mv` in place. Returns false (and changes nothing) if the source
/// square is empty.
pub fn apply_move_unchecked(position: &mut Position, mv: &Move) -> bool {
    let from = mv.from();
    let to = mv.to();
    let Some((moving_color, moved_piece)) = piece_on_square_any(position, from) else {
        return false;
    };
    let enemy_color = moving_color.opposite();

    // Remove moved piece from origin.
    position.clear_piece(moving_color, moved_piece, from);

    // Capture bookkeeping.
    for piece in ALL_PIECE_KINDS {
        position.clear_piece(enemy_color, piece, to);
    }

    // Place moved/promoted piece on destination.
    let placed = match mv.promotion {
        Some(promo) if moved_piece == PieceKind::Pawn && row_of(to) == promotion_row(moving_color) => {
            promo
        }
        _ => moved_piece,
    };
    position.set_piece(moving_color, placed, to);

    // Castling rook move.
    if mv.is_castling() && moved_piece == PieceKind::King {
        if let Some(path) = castling_path_for_king_move(from, to) {
            position.clear_piece(moving_color, PieceKind::Rook, path.rook_from);
            position.set_piece(moving_color, PieceKind::Rook, path.rook_to);
        }
    }

    let rights = position.castling_rights & !(rights_touching_square(from) | rights_touching_square(to));
    if rights != position.castling_rights {
        position.set_castling_rights(rights);
    }

    position.set_side_to_move(enemy_color);
    position.ply = position.ply.saturating_add(1);
    position.record_position();

    true
}

#[cfg(test)]
mod tests {
    use super::{apply_move, apply_move_unchecked};
    use crate::game_state::{chess_types::*, game_state::Position};
    use crate::search::zobrist::compute_zobrist_key;

    #[test]
    fn copy_apply_leaves_original_untouched() {
        let game = Position::new_game();
        let mv = Move::new(square_at(6, 4), square_at(4, 4), MoveKind::Quiet, None);
        let next = apply_move(&game, &mv);
        assert_eq!(game, Position::new_game());
        assert_eq!(next.piece_at(4, 4), Some((PieceKind::Pawn, Color::White)));
        assert_eq!(next.zobrist_key, compute_zobrist_key(&next));
    }

    #[test]
    fn castling_relocates_rook_and_drops_rights() {
        let mut game = Position::empty();
        game.put_piece(0, 4, Color::Black, PieceKind::King).expect("e8");
        game.put_piece(0, 0, Color::Black, PieceKind::Rook).expect("a8");
        game.set_castling_rights(CASTLE_BLACK_QUEENSIDE);
        game.set_side_to_move(Color::Black);

        let mv = Move::new(square_at(0, 4), square_at(0, 2), MoveKind::Castling, None);
        assert!(apply_move_unchecked(&mut game, &mv));
        assert_eq!(game.piece_at(0, 2), Some((PieceKind::King, Color::Black)));
        assert_eq!(game.piece_at(0, 3), Some((PieceKind::Rook, Color::Black)));
        assert_eq!(game.piece_at(0, 0), None);
        assert_eq!(game.castling_rights, 0);
        assert_eq!(game.zobrist_key, compute_zobrist_key(&game));
    }

    #[test]
    fn capturing_a_home_rook_removes_that_right() {
        let mut game = Position::empty();
        game.put_piece(7, 7, Color::White, PieceKind::Rook).expect("h1");
        game.put_piece(7, 4, Color::White, PieceKind::King).expect("e1");
        game.put_piece(2, 7, Color::Black, PieceKind::Rook).expect("h6");
        game.set_castling_rights(CASTLE_WHITE_KINGSIDE);
        game.set_side_to_move(Color::Black);

        let mv = Move::new(square_at(2, 7), square_at(7, 7), MoveKind::Capture, None);
        assert!(apply_move_unchecked(&mut game, &mv));
        assert_eq!(game.castling_rights & CASTLE_WHITE_KINGSIDE, 0);
        assert_eq!(game.piece_count(Color::White), 1);
    }

    #[test]
    fn empty_source_is_a_no_op() {
        let mut game = Position::new_game();
        let before = game.clone();
        let mv = Move::new(square_at(4, 4), square_at(3, 4), MoveKind::Quiet, None);
        assert!(!apply_move_unchecked(&mut game, &mv));
        assert_eq!(game, before);
    }
}
