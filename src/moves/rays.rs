//! Occupancy-aware ray casting shared by the sliding pieces.
//!
//! A ray walks one `(row, col)` direction from a square and stops at the
//! first occupied square, which is included in the result. Callers mask out
//! friendly blockers themselves.

pub const ORTHOGONAL_DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn trace_ray(square: u8, row_step: i32, col_step: i32, occupancy: u64) -> u64 {
    let mut row = (square / 8) as i32 + row_step;
    let mut col = (square % 8) as i32 + col_step;
    let mut attacks = 0u64;

    while (0..8).contains(&row) && (0..8).contains(&col) {
        let bit = 1u64 << (row * 8 + col);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        row += row_step;
        col += col_step;
    }

    attacks
}

#[inline]
pub fn trace_rays(square: u8, directions: &[(i32, i32)], occupancy: u64) -> u64 {
    directions
        .iter()
        .fold(0u64, |acc, &(dr, dc)| acc | trace_ray(square, dr, dc, occupancy))
}
