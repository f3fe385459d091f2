//! Error types shared by the position, move-application and engine layers.

use thiserror::Error;

/// Reasons a request against the board or an engine can be rejected.
///
/// Callers that only need a yes/no answer use the boolean APIs
/// (`Position::make_move`, `Position::is_valid_move`); the `try_*` variants
/// surface one of these instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Coordinates outside the 8x8 board.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    /// No piece stands on the requested source square.
    #[error("no piece on square ({row}, {col})")]
    EmptySquare { row: i32, col: i32 },
    /// The source piece belongs to the side that is not on move.
    #[error("piece on ({row}, {col}) does not belong to the side to move")]
    WrongSideToMove { row: i32, col: i32 },
    /// The move does not appear in the legal move list.
    #[error("illegal move {0}")]
    IllegalMove(String),
    /// A coordinate string such as `e4` could not be parsed.
    #[error("invalid algebraic square '{0}'")]
    InvalidAlgebraic(String),
    /// An engine option name or value was not understood.
    #[error("invalid option {name}={value}")]
    InvalidOption { name: String, value: String },
}
