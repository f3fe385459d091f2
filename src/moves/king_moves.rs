//! King step tables: the eight neighbouring squares of every square.

use crate::moves::knight_moves::set_if_valid;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: u8) -> u64 {
    KING_ATTACKS[square as usize]
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;
        let mut dr = -1;

        while dr <= 1 {
            let mut dc = -1;
            while dc <= 1 {
                if dr != 0 || dc != 0 {
                    attacks |= set_if_valid(row + dr, col + dc);
                }
                dc += 1;
            }
            dr += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
