//! Engine abstraction.
//!
//! Defines the common output payload so different search strategies can be
//! selected at runtime behind a single trait interface.

use crate::errors::ChessError;
use crate::game_state::{chess_types::Move, game_state::Position};
use crate::search::best_move::SearchLimits;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError>;

    fn choose_move(
        &mut self,
        position: &Position,
        limits: &SearchLimits,
    ) -> Result<EngineOutput, ChessError>;
}
