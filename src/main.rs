//! Self-play runner: alpha-beta (White) against MCTS (Black).
//!
//! `cargo run --release -- --depth 3 --movetime 500 --max-plies 120`
//! Defaults come from `EngineConfig::from_env()`; set `RUST_LOG=info` for
//! per-move search logging.

use copper_chess::engines::engine_alpha_beta::AlphaBetaEngine;
use copper_chess::engines::engine_config::EngineConfig;
use copper_chess::engines::engine_mcts::MctsEngine;
use copper_chess::engines::engine_trait::Engine;
use copper_chess::errors::ChessError;
use copper_chess::utils::engine_match_harness::{play_match, render_transcript, MatchConfig};
use copper_chess::utils::render_game_state::render_position;

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|pair| pair[0] == flag)
        .and_then(|pair| pair[1].parse::<T>().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), ChessError> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut config = EngineConfig::from_env();
    config.depth = parse_flag(&args, "--depth", config.depth).max(1);
    let movetime_ms = parse_flag(&args, "--movetime", config.movetime_ms);
    config.set_option("MoveTime", &movetime_ms.to_string())?;
    let max_plies = parse_flag(&args, "--max-plies", 200u16);

    let mut white = AlphaBetaEngine::with_config(config);
    let mut black = MctsEngine::with_config(config);

    println!(
        "{} (depth {}) vs {} ({} ms/move), up to {} plies",
        white.name(),
        config.depth,
        black.name(),
        config.movetime_ms,
        max_plies
    );

    let match_config = MatchConfig {
        max_plies,
        ..MatchConfig::default()
    };
    let result = play_match(&mut white, &mut black, &match_config)?;

    println!("{}", render_position(&result.final_position));
    println!();
    println!("{}", render_transcript(&result, white.name(), black.name()));
    Ok(())
}
