//! Move generation entry points.
//!
//! `generate_moves_for_piece` / `generate_moves_for_color` produce
//! pseudo-legal candidates by dispatching on the occupant's kind. The
//! `generate_legal_*` family then drops every candidate that leaves the
//! mover's own king attacked, probing each one on a disposable copy.

use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::piece_on_square_any;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Pseudo-legal moves of whatever piece stands on `(row, col)`.
pub fn generate_moves_for_piece(position: &Position, row: i32, col: i32) -> Vec<Move> {
    let mut out = Vec::new();
    if is_on_board(row, col) {
        generate_moves_for_square(position, square_at(row, col), &mut out);
    }
    out
}

fn generate_moves_for_square(position: &Position, from: Square, out: &mut Vec<Move>) {
    let Some((color, piece)) = piece_on_square_any(position, from) else {
        return;
    };
    match piece {
        PieceKind::Pawn => generate_pawn_moves(position, from, color, out),
        PieceKind::Knight => generate_knight_moves(position, from, color, out),
        PieceKind::Bishop => generate_bishop_moves(position, from, color, out),
        PieceKind::Rook => generate_rook_moves(position, from, color, out),
        PieceKind::Queen => generate_queen_moves(position, from, color, out),
        PieceKind::King => generate_king_moves(position, from, color, out),
    }
}

/// Pseudo-legal moves for every `color` piece, in square order.
pub fn generate_moves_for_color(position: &Position, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    let mut own = position.occupancy_by_color[color.index()];
    while own != 0 {
        let from = own.trailing_zeros() as Square;
        generate_moves_for_square(position, from, &mut out);
        own &= own - 1;
    }
    out
}

/// Whether playing `mv` keeps the mover's king out of check.
pub fn leaves_king_safe(position: &Position, mv: &Move) -> bool {
    let Some((color, _)) = piece_on_square_any(position, mv.from()) else {
        return false;
    };
    let mut probe = position.snapshot();
    apply_move_unchecked(&mut probe, mv);
    !is_king_in_check(&probe, color)
}

pub fn generate_legal_moves_for_color(position: &Position, color: Color) -> Vec<Move> {
    let mut moves = generate_moves_for_color(position, color);
    moves.retain(|mv| leaves_king_safe(position, mv));
    moves
}

/// Legal moves for the side to move.
#[inline]
pub fn generate_legal_moves(position: &Position) -> Vec<Move> {
    generate_legal_moves_for_color(position, position.side_to_move)
}

pub fn generate_legal_moves_for_piece(position: &Position, row: i32, col: i32) -> Vec<Move> {
    let mut moves = generate_moves_for_piece(position, row, col);
    moves.retain(|mv| leaves_king_safe(position, mv));
    moves
}

/// Short-circuiting "does `color` have any legal move".
pub fn has_legal_move(position: &Position, color: Color) -> bool {
    generate_moves_for_color(position, color)
        .iter()
        .any(|mv| leaves_king_safe(position, mv))
}
