//! Pawn capture tables. White pawns advance toward row 0, Black toward row 7,
//! so a White pawn on square `s` attacks `s - 9` and `s - 7`.

use crate::game_state::chess_types::Color;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_white_pawn_attacks();
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_black_pawn_attacks();

/// Squares a `color` pawn standing on `square` attacks.
#[inline]
pub const fn pawn_attacks(color: Color, square: u8) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_white_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = sq % 8;
        let row = sq / 8;
        let mut attacks = 0u64;

        if row > 0 {
            if col > 0 {
                attacks |= 1u64 << (sq - 9);
            }
            if col < 7 {
                attacks |= 1u64 << (sq - 7);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_black_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = sq % 8;
        let row = sq / 8;
        let mut attacks = 0u64;

        if row < 7 {
            if col > 0 {
                attacks |= 1u64 << (sq + 7);
            }
            if col < 7 {
                attacks |= 1u64 << (sq + 9);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
