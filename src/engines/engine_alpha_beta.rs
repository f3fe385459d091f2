use crate::engines::engine_config::EngineConfig;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessError;
use crate::game_state::game_state::Position;
use crate::search::alpha_beta::alpha_beta_search;
use crate::search::best_move::SearchLimits;
use crate::search::board_scoring::PositionalScorer;

pub struct AlphaBetaEngine {
    config: EngineConfig,
    scorer: PositionalScorer,
}

impl AlphaBetaEngine {
    pub fn new(default_depth: u8) -> Self {
        Self::with_config(EngineConfig {
            depth: default_depth.max(1),
            ..EngineConfig::default()
        })
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            scorer: PositionalScorer,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "Copper AlphaBeta"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        self.config.set_option(name, value)
    }

    fn choose_move(
        &mut self,
        position: &Position,
        limits: &SearchLimits,
    ) -> Result<EngineOutput, ChessError> {
        let depth = limits.depth.unwrap_or(self.config.depth).max(1);
        let result = alpha_beta_search(position, depth, &self.scorer);

        let mut out = EngineOutput {
            best_move: result.best_move,
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {} time {}",
            depth, result.best_score, result.nodes, result.elapsed_ms
        ));
        if limits.movetime_ms.is_some() {
            out.info_lines
                .push("info string alpha_beta ignoring movetime".to_owned());
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves;

    #[test]
    fn engine_returns_legal_move_with_info() {
        let game = Position::new_game();
        let mut engine = AlphaBetaEngine::new(2);
        let out = engine
            .choose_move(&game, &SearchLimits::default())
            .expect("engine should choose a move");
        let mv = out.best_move.expect("move");
        assert!(generate_legal_moves(&game).contains(&mv));
        assert!(out.info_lines[0].starts_with("info depth 2 "));
    }

    #[test]
    fn limits_depth_overrides_configured_depth() {
        let game = Position::new_game();
        let mut engine = AlphaBetaEngine::new(3);
        let out = engine
            .choose_move(&game, &SearchLimits::depth(1))
            .expect("engine should choose a move");
        assert!(out.info_lines[0].starts_with("info depth 1 "));
    }

    #[test]
    fn options_flow_through_to_config() {
        let mut engine = AlphaBetaEngine::default();
        engine.set_option("Depth", "4").expect("depth");
        assert_eq!(engine.config().depth, 4);
        assert!(engine.set_option("Depth", "deep").is_err());
    }
}
