//! Chebyshev (8-directional) neighborhood on a bounded grid.

/// Offsets of the eight neighbors, row above first.
pub const DIRS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Returns the in-bounds 8-neighbors of `(x, y)`.
///
/// Cells on the border simply have fewer neighbors; the grid does not wrap.
pub fn neighbors_8(
    width: usize,
    height: usize,
    x: usize,
    y: usize,
) -> impl Iterator<Item = (usize, usize)> {
    DIRS_8.iter().filter_map(move |&(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < width && ny < height).then_some((nx, ny))
    })
}
