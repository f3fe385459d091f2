use crate::engines::engine_config::EngineConfig;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessError;
use crate::game_state::game_state::Position;
use crate::search::best_move::SearchLimits;
use crate::search::mcts::{MctsConfig, MonteCarloTreeSearch};

pub struct MctsEngine {
    config: EngineConfig,
}

impl MctsEngine {
    pub fn new(mcts: MctsConfig) -> Self {
        Self::with_config(EngineConfig {
            movetime_ms: mcts.timeout_ms,
            mcts,
            ..EngineConfig::default()
        })
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for MctsEngine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine for MctsEngine {
    fn name(&self) -> &str {
        "Copper MCTS"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        self.config.set_option(name, value)
    }

    fn choose_move(
        &mut self,
        position: &Position,
        limits: &SearchLimits,
    ) -> Result<EngineOutput, ChessError> {
        let mut mcts = self.config.mcts;
        if let Some(movetime_ms) = limits.movetime_ms {
            mcts.timeout_ms = movetime_ms;
        }

        let mut search = MonteCarloTreeSearch::new(mcts);
        let result = search.search(position);

        let mut out = EngineOutput {
            best_move: result.best_move,
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info nodes {} time {} iterations {}",
            result.root_visits, result.elapsed_ms, result.iterations
        ));
        if limits.depth.is_some() {
            out.info_lines
                .push("info string mcts ignoring depth".to_owned());
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves;

    #[test]
    fn seeded_engine_is_repeatable() {
        let game = Position::new_game();
        let config = MctsConfig {
            max_iterations: Some(25),
            max_playout_plies: 40,
            seed: Some(17),
            timeout_ms: 60_000,
            ..MctsConfig::default()
        };
        let mut a = MctsEngine::new(config);
        let mut b = MctsEngine::new(config);
        let first = a.choose_move(&game, &SearchLimits::default()).expect("a");
        let second = b.choose_move(&game, &SearchLimits::default()).expect("b");
        let mv = first.best_move.expect("move");
        assert_eq!(Some(mv), second.best_move);
        assert!(generate_legal_moves(&game).contains(&mv));
        assert!(first.info_lines[0].contains("iterations 25"));
    }

    #[test]
    fn options_reach_the_tree_search() {
        let mut engine = MctsEngine::default();
        engine.set_option("Exploration", "0.5").expect("exploration");
        engine.set_option("PlayoutPlies", "80").expect("plies");
        assert_eq!(engine.config().mcts.exploration, 0.5);
        assert_eq!(engine.config().mcts.max_playout_plies, 80);
    }
}
