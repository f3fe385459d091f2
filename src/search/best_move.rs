//! Single entry point used by callers that just want "a move".

use log::info;

use crate::game_state::{chess_types::*, game_state::Position};
use crate::search::alpha_beta::alpha_beta_search;
use crate::search::board_scoring::PositionalScorer;
use crate::search::mcts::{mcts_search, MctsConfig};

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// A depth limit selects alpha-beta; a move-time budget selects MCTS.
/// When both are set depth wins; with neither, alpha-beta runs at
/// `DEFAULT_SEARCH_DEPTH`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
}

impl SearchLimits {
    pub const fn depth(depth: u8) -> Self {
        Self {
            depth: Some(depth),
            movetime_ms: None,
        }
    }

    pub const fn movetime(movetime_ms: u64) -> Self {
        Self {
            depth: None,
            movetime_ms: Some(movetime_ms),
        }
    }
}

pub fn find_best_move(position: &Position, limits: SearchLimits) -> Option<Move> {
    match (limits.depth, limits.movetime_ms) {
        (None, Some(movetime_ms)) => {
            let config = MctsConfig {
                timeout_ms: movetime_ms,
                ..MctsConfig::default()
            };
            mcts_search(position, config).best_move
        }
        (depth, _) => {
            let depth = depth.unwrap_or(DEFAULT_SEARCH_DEPTH);
            let result = alpha_beta_search(position, depth, &PositionalScorer);
            if let Some(mv) = result.best_move {
                info!(
                    "alpha-beta chose {mv} (score {}) in {} ms",
                    result.best_score, result.elapsed_ms
                );
            }
            result.best_move
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves;

    #[test]
    fn depth_limit_returns_a_legal_move() {
        let game = Position::new_game();
        let mv = find_best_move(&game, SearchLimits::depth(2)).expect("move");
        assert!(generate_legal_moves(&game).contains(&mv));
    }

    #[test]
    fn movetime_limit_runs_mcts() {
        let game = Position::new_game();
        let mv = find_best_move(&game, SearchLimits::movetime(50)).expect("move");
        assert!(generate_legal_moves(&game).contains(&mv));
    }

    #[test]
    fn finished_game_has_no_best_move() {
        let mut game = Position::new_game();
        for (src, dst) in [
            ((6, 5), (5, 5)),
            ((1, 4), (3, 4)),
            ((6, 6), (4, 6)),
            ((0, 3), (4, 7)),
        ] {
            assert!(game.make_move(src, dst, None));
        }
        assert_eq!(find_best_move(&game, SearchLimits::default()), None);
        assert_eq!(find_best_move(&game, SearchLimits::movetime(20)), None);
    }
}
