//! Crate root module declarations for the Copper Chess engine.
//!
//! Exposes the board model, move generation, the terminal-state oracle,
//! both search strategies, the engine wrappers and utility helpers so
//! binaries, benches and tests can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod terminal_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod best_move;
    pub mod board_scoring;
    pub mod mcts;
    pub mod zobrist;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_config;
    pub mod engine_mcts;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod render_game_state;
}
