//! Bishop attack maps: ray casts along both diagonals.

use crate::moves::rays::{trace_rays, DIAGONAL_DIRECTIONS};

#[inline]
pub fn bishop_attacks(square: u8, occupancy: u64) -> u64 {
    trace_rays(square, &DIAGONAL_DIRECTIONS, occupancy)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;

    #[test]
    fn bishop_from_corner_sees_long_diagonal() {
        let a1 = 56u8;
        let attacks = bishop_attacks(a1, 0);
        assert_eq!(attacks.count_ones(), 7);
        assert_ne!(attacks & (1u64 << 7), 0, "h8 is on the long diagonal");
    }

    #[test]
    fn bishop_stops_at_first_blocker() {
        let c1 = 58u8;
        let e3 = 1u64 << 44;
        let attacks = bishop_attacks(c1, e3);
        assert_ne!(attacks & e3, 0);
        assert_eq!(attacks & (1u64 << 37), 0, "f4 lies behind the blocker");
    }
}
