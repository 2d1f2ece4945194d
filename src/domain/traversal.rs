//! Row-major traversal over a grid.
//!
//! Each call to [`Grid::cells`] hands out a new [`Cells`] cursor, so
//! traversals never interfere with one another.

use std::iter::FusedIterator;

use super::{Cell, Grid};

/// Iterator over `(row, column, cell)` in row-major order.
#[derive(Clone, Debug)]
pub struct Cells<'a> {
    size: usize,
    cells: &'a [Cell],
    next: usize,
}

impl Iterator for Cells<'_> {
    type Item = (usize, usize, Cell);

    fn next(&mut self) -> Option<Self::Item> {
        let cell = *self.cells.get(self.next)?;
        let idx = self.next;
        self.next += 1;
        Some((idx / self.size, idx % self.size, cell))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells<'_> {}

impl FusedIterator for Cells<'_> {}

impl Grid {
    /// Visit every cell exactly once, rows ascending then columns ascending.
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            size: self.size(),
            cells: self.as_slice(),
            next: 0,
        }
    }

    /// Coordinates of the live cells, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(r, c, _)| (r, c))
    }
}

/// Row-major coordinates of a `size` x `size` grid
pub fn row_major(size: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..size).flat_map(move |r| (0..size).map(move |c| (r, c)))
}

/// Column-major coordinates of a `size` x `size` grid
pub fn column_major(size: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..size).flat_map(move |c| (0..size).map(move |r| (r, c)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_row_major_order() {
        let grid = Grid::from_rows(&["#.", ".#"]).unwrap();
        let visited: Vec<_> = grid.cells().collect();
        assert_eq!(
            visited,
            vec![
                (0, 0, Cell::Alive),
                (0, 1, Cell::Dead),
                (1, 0, Cell::Dead),
                (1, 1, Cell::Alive),
            ]
        );
    }

    #[test]
    fn test_traversals_are_independent() {
        let grid = Grid::from_rows(&["#..", ".#.", "..#"]).unwrap();
        let mut first = grid.cells();
        first.by_ref().take(4).for_each(drop);

        // A fresh traversal starts from the top regardless of `first`.
        let second: Vec<_> = grid.cells().collect();
        assert_eq!(second.len(), 9);
        assert_eq!(second[0], (0, 0, Cell::Alive));

        assert_eq!(first.len(), 5);
        assert_eq!(first.next(), Some((1, 1, Cell::Alive)));

        let exhausted: Vec<_> = grid.cells().collect();
        assert_eq!(exhausted, second);
    }

    #[test]
    fn test_exhausted_traversal_stays_exhausted() {
        let grid = Grid::new(1).unwrap();
        let mut cells = grid.cells();
        assert!(cells.next().is_some());
        assert!(cells.next().is_none());
        assert!(cells.next().is_none());
    }

    #[test]
    fn test_live_cells() {
        let grid = Grid::from_rows(&["..#", "...", "#.."]).unwrap();
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 2), (2, 0)]);
    }

    #[test]
    fn test_column_major_covers_same_coordinates() {
        let a: HashSet<_> = row_major(4).collect();
        let b: HashSet<_> = column_major(4).collect();
        assert_eq!(a, b);
        assert_eq!(column_major(4).nth(1), Some((1, 0)));
    }

    proptest! {
        #[test]
        fn traversal_visits_every_coordinate_once(size in 1usize..24) {
            let grid = Grid::new(size).unwrap();
            let cells = grid.cells();
            prop_assert_eq!(cells.len(), size * size);

            let coords: Vec<_> = cells.map(|(r, c, _)| (r, c)).collect();
            let unique: HashSet<_> = coords.iter().copied().collect();
            prop_assert_eq!(unique.len(), size * size);
            prop_assert_eq!(coords, row_major(size).collect::<Vec<_>>());
        }
    }
}
