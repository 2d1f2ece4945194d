use std::fmt;

use super::{Cell, ConfigError};

/// Grid is a square, toroidal board of cells stored row-major.
/// `(r, c)` lives at index `r * size + c`; signed coordinates wrap around
/// both axes so every lookup succeeds.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `size` x `size` grid with all cells dead
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        let len = Self::buffer_len(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Wrap an existing row-major buffer of `size * size` cells
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, ConfigError> {
        let expected = Self::buffer_len(size)?;
        if cells.len() != expected {
            return Err(ConfigError::BufferLength {
                size,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Build a grid from text rows, one character per cell (`#`/`O`/`1` alive,
    /// `.`/`0` dead). There must be as many rows as columns.
    ///
    /// ```
    /// use torus_life::{Cell, Grid};
    ///
    /// let grid = Grid::from_rows(&["...", "###", "..."]).unwrap();
    /// assert_eq!(grid.get(1, 0), Cell::Alive);
    /// assert_eq!(grid.population(), 3);
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ConfigError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(Self::buffer_len(size)?);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let before = cells.len();
            for (column, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(ConfigError::UnknownSymbol {
                    symbol,
                    row,
                    column,
                })?;
                cells.push(cell);
            }
            let actual = cells.len() - before;
            if actual != size {
                return Err(ConfigError::RaggedRow {
                    row,
                    expected: size,
                    actual,
                });
            }
        }
        Ok(Self { size, cells })
    }

    fn buffer_len(size: usize) -> Result<usize, ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidSize(size));
        }
        size.checked_mul(size)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(ConfigError::TooLarge(size))
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Reduce a signed coordinate to `[0, size)` with floor modulo
    #[inline]
    fn wrap(&self, i: isize) -> usize {
        i.rem_euclid(self.size as isize) as usize
    }

    /// Wrap `i + d` without forming the unwrapped sum. Both terms are
    /// below `size`, so adding them cannot overflow.
    #[inline]
    fn wrap_offset(&self, i: isize, d: isize) -> usize {
        (self.wrap(i) + self.wrap(d)) % self.size
    }

    #[inline]
    fn index(&self, r: isize, c: isize) -> usize {
        self.wrap(r) * self.size + self.wrap(c)
    }

    /// Cell at `(r, c)` after wrapping both coordinates
    #[inline]
    pub fn get(&self, r: isize, c: isize) -> Cell {
        self.cells[self.index(r, c)]
    }

    /// Set cell at `(r, c)` after wrapping both coordinates
    pub fn set(&mut self, r: isize, c: isize, cell: Cell) {
        let idx = self.index(r, c);
        self.cells[idx] = cell;
    }

    /// Cell at `(r + dr, c + dc)` after wrapping, for any `isize` inputs
    #[inline]
    pub fn get_offset(&self, r: isize, c: isize, dr: isize, dc: isize) -> Cell {
        self.cells[self.wrap_offset(r, dr) * self.size + self.wrap_offset(c, dc)]
    }

    /// Set cell at `(r + dr, c + dc)` after wrapping, for any `isize` inputs
    pub fn set_offset(&mut self, r: isize, c: isize, dr: isize, dc: isize, cell: Cell) {
        let idx = self.wrap_offset(r, dr) * self.size + self.wrap_offset(c, dc);
        self.cells[idx] = cell;
    }

    /// Unwrapped lookup; `None` when `(r, c)` lies outside the grid.
    pub fn try_get(&self, r: usize, c: usize) -> Option<Cell> {
        (r < self.size && c < self.size).then(|| self.cells[r * self.size + c])
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True when no cell is alive
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_alive())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Row-major view of the buffer
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Row `r` (unwrapped) as a slice
    pub fn row(&self, r: usize) -> Option<&[Cell]> {
        (r < self.size).then(|| &self.cells[r * self.size..(r + 1) * self.size])
    }

    /// Exchange the buffer wholesale. The caller guarantees `buffer` has
    /// `size * size` cells.
    pub(crate) fn swap_buffer(&mut self, buffer: &mut Vec<Cell>) {
        debug_assert_eq!(buffer.len(), self.cells.len());
        std::mem::swap(&mut self.cells, buffer);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.size).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.size, self.size)?;
        write!(f, "{self}")
    }
}
