use rand::distr::{Bernoulli, Distribution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Cell, ConfigError, Grid};

/// Size and live-cell probability for a random starting grid.
/// Built through [`LifeConfig::new`], so a value of this type is always valid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LifeConfig {
    size: usize,
    live_probability: f64,
}

impl LifeConfig {
    pub fn new(size: usize, live_probability: f64) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidSize(size));
        }
        if size.checked_mul(size).is_none_or(|len| len > isize::MAX as usize) {
            return Err(ConfigError::TooLarge(size));
        }
        // Also rejects NaN.
        if !(0.0..=1.0).contains(&live_probability) {
            return Err(ConfigError::InvalidProbability(live_probability));
        }
        Ok(Self {
            size,
            live_probability,
        })
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn live_probability(&self) -> f64 {
        self.live_probability
    }
}

/// Fill a grid with independent Bernoulli(`live_probability`) cells drawn
/// from `rng` in row-major order.
pub fn generate<R: Rng + ?Sized>(config: &LifeConfig, rng: &mut R) -> Result<Grid, ConfigError> {
    let trial = Bernoulli::new(config.live_probability)
        .map_err(|_| ConfigError::InvalidProbability(config.live_probability))?;
    let cells = trial
        .sample_iter(rng)
        .take(config.size * config.size)
        .map(Cell::from)
        .collect();
    Grid::from_cells(config.size, cells)
}

/// Validate `size` and `live_probability`, then generate a grid from a
/// `StdRng` seeded with `seed`. Equal arguments always give equal grids.
pub fn new_grid(size: usize, live_probability: f64, seed: u64) -> Result<Grid, ConfigError> {
    let config = LifeConfig::new(size, live_probability)?;
    let mut rng = StdRng::seed_from_u64(seed);
    generate(&config, &mut rng)
}
