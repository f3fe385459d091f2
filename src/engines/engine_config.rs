//! Engine tuning knobs shared by the alpha-beta and MCTS engines.
//!
//! Values can be changed by name through `set_option` (names are matched
//! case-insensitively) or seeded from `COPPER_*` environment variables.

use log::warn;

use crate::errors::ChessError;
use crate::search::best_move::DEFAULT_SEARCH_DEPTH;
use crate::search::mcts::MctsConfig;

pub const ENV_DEPTH: &str = "COPPER_DEPTH";
pub const ENV_MOVETIME_MS: &str = "COPPER_MOVETIME_MS";
pub const ENV_SEED: &str = "COPPER_SEED";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub depth: u8,
    pub movetime_ms: u64,
    pub mcts: MctsConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let mcts = MctsConfig::default();
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            movetime_ms: mcts.timeout_ms,
            mcts,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by whichever `COPPER_*` variables are set.
    /// Unparseable values are logged and skipped.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        for (var, option) in [(ENV_DEPTH, "Depth"), (ENV_MOVETIME_MS, "MoveTime"), (ENV_SEED, "Seed")] {
            let Some(value) = lookup(var) else {
                continue;
            };
            if let Err(err) = config.set_option(option, &value) {
                warn!("ignoring {var}: {err}");
            }
        }
        config
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        let invalid = || ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        let value = value.trim();

        match name.trim().to_ascii_lowercase().as_str() {
            "depth" => {
                let depth = value.parse::<u8>().map_err(|_| invalid())?;
                if depth == 0 {
                    return Err(invalid());
                }
                self.depth = depth;
            }
            "movetime" => {
                let movetime_ms = value.parse::<u64>().map_err(|_| invalid())?;
                self.movetime_ms = movetime_ms;
                self.mcts.timeout_ms = movetime_ms;
            }
            "exploration" => {
                let exploration = value.parse::<f64>().map_err(|_| invalid())?;
                if !exploration.is_finite() || exploration < 0.0 {
                    return Err(invalid());
                }
                self.mcts.exploration = exploration;
            }
            "playoutplies" => {
                self.mcts.max_playout_plies = value.parse::<u16>().map_err(|_| invalid())?;
            }
            "seed" => {
                self.mcts.seed = if value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(value.parse::<u64>().map_err(|_| invalid())?)
                };
            }
            "iterations" => {
                let iterations = value.parse::<u64>().map_err(|_| invalid())?;
                self.mcts.max_iterations = (iterations > 0).then_some(iterations);
            }
            _ => return Err(invalid()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_option_is_case_insensitive() {
        let mut config = EngineConfig::default();
        config.set_option("depth", "5").expect("depth");
        config.set_option("MOVETIME", "250").expect("movetime");
        config.set_option("Seed", "42").expect("seed");
        config.set_option("Iterations", "0").expect("iterations");
        assert_eq!(config.depth, 5);
        assert_eq!(config.movetime_ms, 250);
        assert_eq!(config.mcts.timeout_ms, 250);
        assert_eq!(config.mcts.seed, Some(42));
        assert_eq!(config.mcts.max_iterations, None);
    }

    #[test]
    fn bad_values_are_rejected_without_change() {
        let mut config = EngineConfig::default();
        let before = config;
        assert!(matches!(
            config.set_option("Depth", "0"),
            Err(ChessError::InvalidOption { .. })
        ));
        assert!(config.set_option("Exploration", "-1").is_err());
        assert!(config.set_option("Hash", "64").is_err());
        assert_eq!(config, before);
    }

    #[test]
    fn lookup_overrides_defaults_and_skips_garbage() {
        let config = EngineConfig::from_lookup(|key| match key {
            ENV_DEPTH => Some("4".to_owned()),
            ENV_MOVETIME_MS => Some("soon".to_owned()),
            ENV_SEED => Some("7".to_owned()),
            _ => None,
        });
        assert_eq!(config.depth, 4);
        assert_eq!(config.movetime_ms, EngineConfig::default().movetime_ms);
        assert_eq!(config.mcts.seed, Some(7));
    }
}
