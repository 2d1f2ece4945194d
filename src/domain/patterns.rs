use super::{Cell, ConfigError, Grid};

/// A named set of live cells that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, column) of live cells
}

impl Pattern {
    /// Create a new pattern from live cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self {
            name,
            description,
            height,
            width,
            cells,
        }
    }

    /// Set the pattern's cells alive with its top-left corner at `(r, c)`.
    /// Cells past the edge wrap around.
    pub fn place_on(&self, grid: &mut Grid, r: isize, c: isize) {
        for &(dr, dc) in &self.cells {
            grid.set_offset(r, c, dr as isize, dc as isize, Cell::Alive);
        }
    }

    /// Place the pattern centred on an otherwise empty `size` x `size` grid
    pub fn centered(&self, size: usize) -> Result<Grid, ConfigError> {
        let mut grid = Grid::new(size)?;
        let r = (size as isize - self.height as isize) / 2;
        let c = (size as isize - self.width as isize) / 2;
        self.place_on(&mut grid, r, c);
        Ok(grid)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves one cell down and right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        let mut cells = Vec::with_capacity(48);
        for &line in &[0, 5, 7, 12] {
            for &span in &[2, 3, 4, 8, 9, 10] {
                cells.push((line, span));
                cells.push((span, line));
            }
        }
        Pattern::new("Pulsar", "Oscillator (period 3)", cells)
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (0, 1),
                (1, 3),
                (2, 0), (2, 1), (2, 4), (2, 5), (2, 6),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }

    /// Look a pattern up by name, ignoring case
    pub fn by_name(name: &str) -> Result<Pattern, ConfigError> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ConfigError::UnknownPattern(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StepEngine;

    fn evolve(grid: Grid, generations: u64) -> Grid {
        let mut engine = StepEngine::new(grid);
        engine.run(generations).unwrap();
        engine.into_grid()
    }

    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.height, glider.width), (3, 3));
        let lwss = presets::lwss();
        assert_eq!((lwss.height, lwss.width), (4, 5));
        assert_eq!(presets::pulsar().cells.len(), 48);
    }

    #[test]
    fn test_place_on_wraps() {
        let mut grid = Grid::new(4).unwrap();
        presets::block().place_on(&mut grid, 3, 3);
        assert_eq!(grid.population(), 4);
        for (r, c) in [(3, 3), (3, 0), (0, 3), (0, 0)] {
            assert_eq!(grid.get(r, c), Cell::Alive);
        }
    }

    #[test]
    fn test_place_on_at_extreme_coordinates() {
        let mut grid = Grid::new(6).unwrap();
        presets::block().place_on(&mut grid, isize::MAX, isize::MIN);

        let mut expected = Grid::new(6).unwrap();
        let (r, c) = (isize::MAX.rem_euclid(6), isize::MIN.rem_euclid(6));
        presets::block().place_on(&mut expected, r, c);
        assert_eq!(grid, expected);
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn test_oscillator_periods() {
        for (pattern, period) in [
            (presets::blinker(), 2),
            (presets::toad(), 2),
            (presets::beacon(), 2),
            (presets::pulsar(), 3),
        ] {
            let start = pattern.centered(20).unwrap();
            let once = evolve(start.clone(), 1);
            assert_ne!(once, start, "{} should change", pattern.name);
            assert_eq!(evolve(start.clone(), period), start, "{}", pattern.name);
        }
    }

    #[test]
    fn test_block_is_still() {
        let start = presets::block().centered(6).unwrap();
        assert_eq!(evolve(start.clone(), 5), start);
    }

    #[test]
    fn test_lwss_moves_two_columns_every_four_generations() {
        let mut start = Grid::new(16).unwrap();
        presets::lwss().place_on(&mut start, 6, 8);
        let mut expected = Grid::new(16).unwrap();
        presets::lwss().place_on(&mut expected, 6, 6);
        assert_eq!(evolve(start, 4), expected);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(presets::by_name("glider").unwrap().name, "Glider");
        assert_eq!(presets::by_name("R-PENTOMINO").unwrap().cells.len(), 5);
        assert!(matches!(
            presets::by_name("gun"),
            Err(ConfigError::UnknownPattern(_))
        ));
    }
}
