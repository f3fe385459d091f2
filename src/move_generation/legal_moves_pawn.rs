//! Pawn move generation: single and double pushes, diagonal captures and
//! promotions. En passant is not part of this rule set.

use crate::game_state::chess_rules::{pawn_start_row, promotion_row};
use crate::game_state::{chess_types::*, game_state::Position};

pub fn generate_pawn_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let row = row_of(from);
    let col = col_of(from);
    let forward = color.forward();
    let enemy_occ = position.occupancy_by_color[color.opposite().index()];

    let one_row = row + forward;
    if position.is_empty_square(one_row, col) {
        push_pawn_move(from, square_at(one_row, col), MoveKind::Quiet, color, out);

        let two_row = row + 2 * forward;
        if row == pawn_start_row(color) && position.is_empty_square(two_row, col) {
            out.push(Move::new(from, square_at(two_row, col), MoveKind::Quiet, None));
        }
    }

    for col_delta in [-1, 1] {
        let target_col = col + col_delta;
        if !is_on_board(one_row, target_col) {
            continue;
        }
        let to = square_at(one_row, target_col);
        if enemy_occ & (1u64 << to) != 0 {
            push_pawn_move(from, to, MoveKind::Capture, color, out);
        }
    }
}

fn push_pawn_move(from: Square, to: Square, kind: MoveKind, color: Color, out: &mut Vec<Move>) {
    if row_of(to) == promotion_row(color) {
        for promo in PROMOTION_KINDS {
            out.push(Move::new(from, to, kind, Some(promo)));
        }
    } else {
        out.push(Move::new(from, to, kind, None));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::{chess_types::*, game_state::Position};

    #[test]
    fn blocked_pawn_has_no_pushes() {
        let mut game = Position::empty();
        game.put_piece(6, 4, Color::White, PieceKind::Pawn).expect("e2");
        game.put_piece(5, 4, Color::Black, PieceKind::Knight).expect("e3");
        let mut out = Vec::new();
        generate_pawn_moves(&game, square_at(6, 4), Color::White, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let mut game = Position::empty();
        game.put_piece(1, 3, Color::Black, PieceKind::Pawn).expect("d7");
        game.put_piece(3, 3, Color::White, PieceKind::Bishop).expect("d5");
        let mut out = Vec::new();
        generate_pawn_moves(&game, square_at(1, 3), Color::Black, &mut out);
        assert_eq!(out, vec![Move::new(square_at(1, 3), square_at(2, 3), MoveKind::Quiet, None)]);
    }

    #[test]
    fn captures_only_onto_enemy_pieces() {
        let mut game = Position::empty();
        game.put_piece(4, 4, Color::White, PieceKind::Pawn).expect("e4");
        game.put_piece(3, 3, Color::Black, PieceKind::Pawn).expect("d5");
        game.put_piece(3, 5, Color::White, PieceKind::Knight).expect("f5");
        let mut out = Vec::new();
        generate_pawn_moves(&game, square_at(4, 4), Color::White, &mut out);

        let captures: Vec<_> = out.iter().filter(|mv| mv.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to(), square_at(3, 3));
        assert_eq!(out.len(), 2, "push to e5 plus the capture");
    }

    #[test]
    fn promotion_emits_four_pieces() {
        let mut game = Position::empty();
        game.put_piece(6, 0, Color::Black, PieceKind::Pawn).expect("a2");
        game.put_piece(7, 1, Color::White, PieceKind::Rook).expect("b1");
        let mut out = Vec::new();
        generate_pawn_moves(&game, square_at(6, 0), Color::Black, &mut out);
        assert_eq!(out.len(), 8);
        assert!(out.iter().all(|mv| mv.promotion.is_some()));
        assert_eq!(out.iter().filter(|mv| mv.is_capture()).count(), 4);
    }
}
