/// Cell is the state of one grid position: Dead or Alive.
/// Cells carry no identity; their position in the buffer is their coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Life's transition for a cell with `neighbors` live neighbors:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// Text symbol used by `Grid`'s `Display` impl.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Alive => '#',
            Cell::Dead => '.',
        }
    }

    /// Inverse of `symbol`, also accepting `O`/`1` for alive and `0` for dead.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' | 'O' | 'o' | '1' => Some(Cell::Alive),
            '.' | '0' => Some(Cell::Dead),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell::Alive.evolve(4), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(8), Cell::Dead);
    }

    #[test]
    fn test_birth_needs_exactly_three() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
        assert_eq!(Cell::Dead.evolve(2), Cell::Dead);
        assert_eq!(Cell::Dead.evolve(4), Cell::Dead);
    }

    #[test]
    fn test_symbols_round_trip() {
        for cell in [Cell::Dead, Cell::Alive] {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
        assert_eq!(Cell::from_symbol('x'), None);
    }
}
