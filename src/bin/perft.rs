//! Perft runner for the start position.
//!
//! Usage:
//! `cargo run --release --bin perft`
//! `cargo run --release --bin perft -- --depth 5 --divide`

use std::time::Instant;

use copper_chess::game_state::game_state::Position;
use copper_chess::move_generation::perft::{perft, perft_divide};

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn main() {
    env_logger::init();

    let depth = parse_arg_u8("--depth", 4);
    let divide = std::env::args().any(|a| a == "--divide");
    let game = Position::new_game();

    if divide {
        for (mv, nodes) in perft_divide(&game, depth) {
            println!("{mv}: {nodes}");
        }
    }

    let started = Instant::now();
    let counts = perft(&game, depth);
    let elapsed = started.elapsed();
    let nps = counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9);
    println!(
        "depth={depth} nodes={} captures={} castles={} promotions={} checks={} checkmates={} elapsed_ms={} nps={:.0}",
        counts.nodes,
        counts.captures,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates,
        elapsed.as_millis(),
        nps
    );
}
