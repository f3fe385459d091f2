//! Conversions between algebraic coordinates (`e4`) and board locations.
//!
//! Board locations are `(row, col)` with row 0 on the eighth rank, so `a8`
//! is `(0, 0)` and `h1` is `(7, 7)`.

use crate::errors::ChessError;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::BoardLocation;

/// Convert a coordinate such as "e4" to a `(row, col)` location.
#[inline]
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Ok((i32::from(b'8' - rank), i32::from(file - b'a')))
}

#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessError> {
    let (row, col) = algebraic_to_location(square)?;
    Ok(square_at(row, col))
}

/// Convert an on-board `(row, col)` back to its coordinate string.
pub fn location_to_algebraic(location: BoardLocation) -> Result<String, ChessError> {
    let (row, col) = location;
    if !is_on_board(row, col) {
        return Err(ChessError::OutOfBounds { row, col });
    }
    let file = char::from(b'a' + col as u8);
    let rank = char::from(b'8' - row as u8);
    Ok(format!("{file}{rank}"))
}

/// Parse coordinate notation (`e2e4`, `a7a8q`) into source, destination and
/// optional promotion piece.
pub fn parse_coordinate_move(
    text: &str,
) -> Result<(BoardLocation, BoardLocation, Option<PieceKind>), ChessError> {
    let text = text.trim();
    if !(text.len() == 4 || text.len() == 5) || !text.is_ascii() {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }
    let src = algebraic_to_location(&text[0..2])?;
    let dest = algebraic_to_location(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(symbol) => match PieceKind::from_symbol(symbol) {
            Some(kind) if PROMOTION_KINDS.contains(&kind) => Some(kind),
            _ => return Err(ChessError::InvalidAlgebraic(text.to_owned())),
        },
    };
    Ok((src, dest, promotion))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_expected_locations() {
        assert_eq!(algebraic_to_location("a8"), Ok((0, 0)));
        assert_eq!(algebraic_to_location("h1"), Ok((7, 7)));
        assert_eq!(algebraic_to_location("e2"), Ok((6, 4)));
        assert_eq!(algebraic_to_square("e1"), Ok(60));
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        for bad in ["", "e", "i1", "a0", "a9", "e44"] {
            assert_eq!(
                algebraic_to_location(bad),
                Err(ChessError::InvalidAlgebraic(bad.to_owned()))
            );
        }
        assert!(location_to_algebraic((8, 0)).is_err());
    }

    #[test]
    fn location_round_trips_through_text() {
        for square in ["a1", "d5", "h8"] {
            let location = algebraic_to_location(square).expect("parse");
            assert_eq!(location_to_algebraic(location).as_deref(), Ok(square));
        }
    }

    #[test]
    fn coordinate_moves_parse_with_optional_promotion() {
        assert_eq!(parse_coordinate_move("e2e4"), Ok(((6, 4), (4, 4), None)));
        assert_eq!(
            parse_coordinate_move("a7a8n"),
            Ok(((1, 0), (0, 0), Some(PieceKind::Knight)))
        );
        assert!(parse_coordinate_move("a7a8k").is_err());
        assert!(parse_coordinate_move("e2").is_err());
    }
}
