//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from the standard
//! opening array and reports the outcome plus a plain-text transcript.

use std::time::Instant;

use chrono::{DateTime, Local};
use log::info;

use crate::engines::engine_trait::Engine;
use crate::errors::ChessError;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Position;
use crate::game_state::terminal_state::GameStatus;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::best_move::SearchLimits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawInsufficientMaterial,
    DrawRepetition,
    DrawMaxPlies,
}

impl MatchOutcome {
    fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate {
                winner: Color::White,
            } => Some(MatchOutcome::WhiteWinCheckmate),
            GameStatus::Checkmate {
                winner: Color::Black,
            } => Some(MatchOutcome::BlackWinCheckmate),
            GameStatus::Stalemate => Some(MatchOutcome::DrawStalemate),
            GameStatus::InsufficientMaterial => Some(MatchOutcome::DrawInsufficientMaterial),
            GameStatus::Repetition => Some(MatchOutcome::DrawRepetition),
        }
    }

    pub const fn result_tag(self) -> &'static str {
        match self {
            MatchOutcome::WhiteWinCheckmate => "1-0",
            MatchOutcome::BlackWinCheckmate => "0-1",
            _ => "1/2-1/2",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub limits: SearchLimits,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            limits: SearchLimits::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_position: Position,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
    pub started_at: DateTime<Local>,
}

/// Play one game, `engine_white` moving first. An engine that returns no
/// move while legal moves exist plays the first legal move instead; an
/// engine that returns an illegal move aborts the match.
pub fn play_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, ChessError> {
    let started_at = Local::now();
    engine_white.new_game();
    engine_black.new_game();

    let mut state = Position::new_game();

    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;
    let mut outcome = MatchOutcome::DrawMaxPlies;

    for _ in 0..config.max_plies {
        if let Some(finished) = MatchOutcome::from_status(state.status()) {
            outcome = finished;
            break;
        }

        let legal_moves = generate_legal_moves(&state);
        let mover = state.side_to_move;
        let started = Instant::now();
        let out = match mover {
            Color::White => engine_white.choose_move(&state, &config.limits)?,
            Color::Black => engine_black.choose_move(&state, &config.limits)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let Some(chosen) = out.best_move.or_else(|| legal_moves.first().copied()) else {
            break;
        };
        if !legal_moves.contains(&chosen) || !state.apply_move(&chosen) {
            return Err(ChessError::IllegalMove(chosen.to_string()));
        }
        played_moves.push(chosen.to_string());
    }

    if outcome == MatchOutcome::DrawMaxPlies {
        if let Some(finished) = MatchOutcome::from_status(state.status()) {
            outcome = finished;
        }
    }

    info!(
        "{} vs {}: {:?} after {} plies",
        engine_white.name(),
        engine_black.name(),
        outcome,
        played_moves.len()
    );

    Ok(MatchResult {
        outcome,
        final_position: state,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
        started_at,
    })
}

/// Numbered move list with a header, e.g. `1. e2e4 e7e5`.
pub fn render_transcript(result: &MatchResult, white_name: &str, black_name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Date: {}\nWhite: {white_name}\nBlack: {black_name}\nResult: {} ({:?})\n",
        result.started_at.format("%Y-%m-%d %H:%M:%S"),
        result.outcome.result_tag(),
        result.outcome
    ));

    for (i, pair) in result.played_moves.chunks(2).enumerate() {
        out.push_str(&format!("{}. {}", i + 1, pair.join(" ")));
        out.push('\n');
    }

    let average_ms = |total_ns: u128, moves: u32| {
        if moves == 0 {
            0.0
        } else {
            total_ns as f64 / f64::from(moves) / 1_000_000.0
        }
    };
    out.push_str(&format!(
        "White moves: {} (avg {:.3} ms)\nBlack moves: {} (avg {:.3} ms)",
        result.white_move_count,
        average_ms(result.white_total_time_ns, result.white_move_count),
        result.black_move_count,
        average_ms(result.black_total_time_ns, result.black_move_count)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_alpha_beta::AlphaBetaEngine;
    use crate::engines::engine_trait::EngineOutput;
    use crate::utils::algebraic::parse_coordinate_move;

    struct ScriptedEngine {
        moves: Vec<&'static str>,
        next: usize,
    }

    impl ScriptedEngine {
        fn new(moves: Vec<&'static str>) -> Self {
            Self { moves, next: 0 }
        }
    }

    impl Engine for ScriptedEngine {
        fn name(&self) -> &str {
            "Scripted"
        }

        fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), ChessError> {
            Ok(())
        }

        fn choose_move(
            &mut self,
            position: &Position,
            _limits: &SearchLimits,
        ) -> Result<EngineOutput, ChessError> {
            let text = self.moves[self.next];
            self.next += 1;
            let (src, dest, _) = parse_coordinate_move(text)?;
            let best_move = generate_legal_moves(position).into_iter().find(|mv| {
                (i32::from(mv.src_row), i32::from(mv.src_col)) == src
                    && (i32::from(mv.dest_row), i32::from(mv.dest_col)) == dest
            });
            Ok(EngineOutput {
                best_move,
                info_lines: Vec::new(),
            })
        }
    }

    #[test]
    fn scripted_fools_mate_ends_in_black_win() {
        let mut white = ScriptedEngine::new(vec!["f2f3", "g2g4"]);
        let mut black = ScriptedEngine::new(vec!["e7e5", "d8h4"]);
        let result = play_match(&mut white, &mut black, &MatchConfig::default())
            .expect("match should complete");

        assert_eq!(result.outcome, MatchOutcome::BlackWinCheckmate);
        assert_eq!(result.played_moves, vec!["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(result.white_move_count, 2);
        assert_eq!(result.black_move_count, 2);

        let transcript = render_transcript(&result, "W", "B");
        assert!(transcript.contains("Result: 0-1"));
        assert!(transcript.contains("1. f2f3 e7e5\n2. g2g4 d8h4"));
    }

    #[test]
    fn ply_cap_ends_in_draw() {
        let mut white = AlphaBetaEngine::new(1);
        let mut black = AlphaBetaEngine::new(1);
        let config = MatchConfig {
            max_plies: 6,
            ..MatchConfig::default()
        };
        let result = play_match(&mut white, &mut black, &config).expect("match should complete");
        assert_eq!(result.outcome, MatchOutcome::DrawMaxPlies);
        assert_eq!(result.played_moves.len(), 6);
        assert_eq!(result.white_move_count, 3);
        assert_eq!(result.black_move_count, 3);
    }

    #[test]
    fn knight_shuffle_is_drawn_by_repetition() {
        let shuffle_white = vec!["g1f3", "f3g1", "g1f3", "f3g1", "g1f3"];
        let shuffle_black = vec!["g8f6", "f6g8", "g8f6", "f6g8", "g8f6"];
        let mut white = ScriptedEngine::new(shuffle_white);
        let mut black = ScriptedEngine::new(shuffle_black);
        let result = play_match(&mut white, &mut black, &MatchConfig::default())
            .expect("match should complete");
        assert_eq!(result.outcome, MatchOutcome::DrawRepetition);
        assert_eq!(result.played_moves.len(), 8);
    }
}
