//! Perft: exhaustive legal-move tree walk used to validate move generation.

use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, has_legal_move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf statistics `depth` plies below `position`. Depth 0 counts the
/// position itself as one node.
pub fn perft(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(position) {
        let mut child = position.snapshot();
        apply_move_unchecked(&mut child, &mv);

        if depth == 1 {
            total.merge(leaf_counts(&child, &mv));
        } else {
            total.merge(perft(&child, depth - 1));
        }
    }
    total
}

fn leaf_counts(child: &Position, mv: &Move) -> PerftCounts {
    let defender = child.side_to_move;
    let gives_check = is_king_in_check(child, defender);
    PerftCounts {
        nodes: 1,
        captures: usize::from(mv.is_capture()),
        castles: usize::from(mv.is_castling()),
        promotions: usize::from(mv.promotion.is_some()),
        checks: usize::from(gives_check),
        checkmates: usize::from(gives_check && !has_legal_move(child, defender)),
    }
}

/// Per-root-move node counts, handy when bisecting a generator bug.
pub fn perft_divide(position: &Position, depth: u8) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }
    generate_legal_moves(position)
        .into_iter()
        .map(|mv| {
            let mut child = position.snapshot();
            apply_move_unchecked(&mut child, &mv);
            (mv, perft(&child, depth - 1).nodes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_node_counts() {
        let game = Position::new_game();
        assert_eq!(perft(&game, 0).nodes, 1);
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);
    }

    #[test]
    fn start_position_depth_three_tallies() {
        let counts = perft(&Position::new_game(), 3);
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.castles, 0);
        assert_eq!(counts.promotions, 0);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = Position::new_game();
        let divided = perft_divide(&game, 2);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 400);
    }

    #[test]
    fn promotion_fan_out_is_counted() {
        let mut game = Position::empty();
        game.put_piece(1, 0, Color::White, PieceKind::Pawn).expect("a7");
        game.put_piece(7, 7, Color::White, PieceKind::King).expect("h1");
        game.put_piece(0, 7, Color::Black, PieceKind::King).expect("h8");
        let counts = perft(&game, 1);
        assert_eq!(counts.promotions, 4);
        assert_eq!(counts.nodes, 4 + 3);
    }
}
