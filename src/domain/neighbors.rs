use super::Grid;

/// The eight Moore-neighborhood offsets as `(dr, dc)`
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live neighbors using toroidal wrapping (grid wraps like a torus).
///
/// Reads only `grid`. On grids smaller than 3x3 several offsets wrap onto
/// the same cell and each one is counted.
pub fn count_live_neighbors(grid: &Grid, r: isize, c: isize) -> u8 {
    MOORE_OFFSETS
        .iter()
        .map(|&(dr, dc)| grid.get_offset(r, c, dr, dc))
        .filter(|cell| cell.is_alive())
        .count() as u8
}
