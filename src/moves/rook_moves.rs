//! Rook attack maps: ray casts along ranks and files.

use crate::moves::rays::{trace_rays, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn rook_attacks(square: u8, occupancy: u64) -> u64 {
    trace_rays(square, &ORTHOGONAL_DIRECTIONS, occupancy)
}
