//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The root side is the maximiser for the whole tree; every node scores the
//! position from that side's perspective and alternates between maximising
//! and minimising. Each child is searched on its own copy of the position.

use std::time::Instant;

use log::{debug, warn};

use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// Best move for the side to move, searched `depth` plies deep (at least
/// one). Ties keep the first move generated.
pub fn alpha_beta_search<S: BoardScorer>(
    position: &Position,
    depth: u8,
    scorer: &S,
) -> SearchResult {
    let started = Instant::now();
    let depth = depth.max(1);
    let maximizer = position.side_to_move;
    let mut nodes = 1u64;

    let moves = generate_legal_moves(position);
    if moves.is_empty() {
        warn!("alpha-beta called on a position with no legal moves");
        return SearchResult {
            best_move: None,
            best_score: terminal_score(position, maximizer, 0),
            nodes,
            elapsed_ms: elapsed_ms(started),
        };
    }

    let mut alpha = -MATE_SCORE - 1;
    let beta = MATE_SCORE + 1;
    let mut best_move = None;
    let mut best_score = -MATE_SCORE - 1;

    for mv in moves {
        let child = child_position(position, &mv);
        let score = alpha_beta(&child, depth - 1, alpha, beta, maximizer, 1, scorer, &mut nodes);
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if score > alpha {
            alpha = score;
        }
    }

    let result = SearchResult {
        best_move,
        best_score,
        nodes,
        elapsed_ms: elapsed_ms(started),
    };
    debug!(
        "alpha-beta depth {depth}: score {} nodes {} in {} ms",
        result.best_score, result.nodes, result.elapsed_ms
    );
    result
}

/// Minimax value of `position` for `maximizer`.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta<S: BoardScorer>(
    position: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizer: Color,
    ply: u8,
    scorer: &S,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    // Terminal positions are resolved before the horizon so mates found at
    // the last ply still outrank material.
    let moves = generate_legal_moves(position);
    if moves.is_empty() {
        return terminal_score(position, maximizer, ply);
    }
    if depth == 0 {
        return scorer.score(position, maximizer);
    }

    let maximizing = position.side_to_move == maximizer;
    let mut best = if maximizing {
        -MATE_SCORE - 1
    } else {
        MATE_SCORE + 1
    };

    for mv in moves {
        let child = child_position(position, &mv);
        let score = alpha_beta(
            &child,
            depth - 1,
            alpha,
            beta,
            maximizer,
            ply.saturating_add(1),
            scorer,
            nodes,
        );

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

/// Score of a node whose side to move has no legal move.
fn terminal_score(position: &Position, maximizer: Color, ply: u8) -> i32 {
    let side = position.side_to_move;
    if !is_king_in_check(position, side) {
        return 0;
    }
    if side == maximizer {
        -MATE_SCORE + i32::from(ply)
    } else {
        MATE_SCORE - i32::from(ply)
    }
}

#[inline]
fn child_position(position: &Position, mv: &Move) -> Position {
    let mut child = position.snapshot();
    apply_move_unchecked(&mut child, mv);
    child
}

#[inline]
fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::PositionalScorer;

    fn back_rank_mate_setup() -> Position {
        let mut game = Position::empty();
        game.put_piece(0, 6, Color::Black, PieceKind::King).expect("g8");
        for col in 5..8 {
            game.put_piece(1, col, Color::Black, PieceKind::Pawn).expect("pawn");
        }
        game.put_piece(7, 0, Color::White, PieceKind::Rook).expect("a1");
        game.put_piece(7, 6, Color::White, PieceKind::King).expect("g1");
        game
    }

    #[test]
    fn depth_one_with_single_legal_move_returns_it() {
        let mut game = Position::empty();
        game.put_piece(7, 0, Color::White, PieceKind::King).expect("a1");
        game.put_piece(5, 4, Color::White, PieceKind::Pawn).expect("e3");
        game.put_piece(0, 1, Color::Black, PieceKind::Rook).expect("b8");
        game.put_piece(6, 7, Color::Black, PieceKind::Rook).expect("h2");
        game.put_piece(0, 7, Color::Black, PieceKind::King).expect("h8");

        let legal = generate_legal_moves(&game);
        assert_eq!(legal.len(), 1);

        let result = alpha_beta_search(&game, 1, &PositionalScorer);
        assert_eq!(result.best_move, Some(legal[0]));
    }

    #[test]
    fn finds_back_rank_mate_in_one() {
        let game = back_rank_mate_setup();
        for depth in 1..=2 {
            let result = alpha_beta_search(&game, depth, &PositionalScorer);
            let mv = result.best_move.expect("a move should be found");
            assert_eq!(mv.to_string(), "a1a8", "depth {depth}");
            assert_eq!(result.best_score, MATE_SCORE - 1);
        }
    }

    #[test]
    fn captures_hanging_queen() {
        let mut game = Position::empty();
        game.put_piece(7, 0, Color::White, PieceKind::Rook).expect("a1");
        game.put_piece(3, 0, Color::Black, PieceKind::Queen).expect("a5");
        game.put_piece(7, 7, Color::White, PieceKind::King).expect("h1");
        game.put_piece(0, 7, Color::Black, PieceKind::King).expect("h8");

        let result = alpha_beta_search(&game, 1, &PositionalScorer);
        let mv = result.best_move.expect("a move should be found");
        assert_eq!(mv.to_string(), "a1a5");
        assert!(mv.is_capture());
    }

    #[test]
    fn no_legal_moves_yields_no_move() {
        let mut game = Position::empty();
        game.put_piece(0, 0, Color::Black, PieceKind::King).expect("a8");
        game.put_piece(1, 2, Color::White, PieceKind::Queen).expect("c7");
        game.put_piece(7, 4, Color::White, PieceKind::King).expect("e1");
        game.set_side_to_move(Color::Black);

        let result = alpha_beta_search(&game, 3, &PositionalScorer);
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, 0);
    }

    #[test]
    fn depth_zero_is_clamped_to_one() {
        let game = Position::new_game();
        let result = alpha_beta_search(&game, 0, &PositionalScorer);
        assert!(result.best_move.is_some());
        assert_eq!(result.nodes, 21);
    }
}
