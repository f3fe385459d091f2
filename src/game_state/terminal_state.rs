//! Terminal-state oracle.
//!
//! Checkmate and stalemate both fall out of the same question ("does the
//! side have a legal move?"), answered once and split on whether its king is
//! attacked, so the two can never hold for the same position.

use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    Repetition,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Result from `color`'s point of view: 1.0 win, 0.5 draw, 0.0 loss.
    /// Ongoing games score as a draw.
    pub fn score_for(self, color: Color) -> f64 {
        match self {
            GameStatus::Checkmate { winner } if winner == color => 1.0,
            GameStatus::Checkmate { .. } => 0.0,
            _ => 0.5,
        }
    }
}

/// `color` is in check and has no legal reply.
pub fn is_checkmate(position: &Position, color: Color) -> bool {
    is_king_in_check(position, color) && !has_legal_move(position, color)
}

/// Side to move is not in check and has no legal move.
pub fn is_stalemate(position: &Position) -> bool {
    let color = position.side_to_move;
    !is_king_in_check(position, color) && !has_legal_move(position, color)
}

/// Only the two kings (or fewer) remain.
#[inline]
pub fn is_insufficient_material(position: &Position) -> bool {
    position.occupancy_all.count_ones() <= 2
}

/// Pure check on the consecutive-repeat counter; never appends history.
#[inline]
pub fn is_threefold_repetition(position: &Position) -> bool {
    position.repetition_count() >= 3
}

pub fn is_game_over(position: &Position) -> bool {
    is_checkmate(position, Color::White)
        || is_checkmate(position, Color::Black)
        || is_stalemate(position)
}

pub fn status(position: &Position) -> GameStatus {
    let color = position.side_to_move;
    if !has_legal_move(position, color) {
        return if is_king_in_check(position, color) {
            GameStatus::Checkmate {
                winner: color.opposite(),
            }
        } else {
            GameStatus::Stalemate
        };
    }
    if is_insufficient_material(position) {
        return GameStatus::InsufficientMaterial;
    }
    if position.occurrence_count() >= 3 || is_threefold_repetition(position) {
        return GameStatus::Repetition;
    }
    GameStatus::Ongoing
}
