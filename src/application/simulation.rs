use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{
    Algorithm, ConfigError, ConwayRule, Grid, LifeConfig, LifeLikeRule, Rule, StepEngine,
    StepError, generate, presets,
};

/// Everything needed to start a run. Each simulation owns its own copy.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub size: usize,
    pub live_probability: f64,
    /// Seed for the random start; a fresh one is drawn (and logged) when `None`
    pub seed: Option<u64>,
    pub rule: LifeLikeRule,
    pub algorithm: Algorithm,
    /// Start from this named preset, centred on an empty grid, instead of noise
    pub pattern: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: 10,
            live_probability: 0.5,
            seed: None,
            rule: LifeLikeRule::conway(),
            algorithm: Algorithm::default(),
            pattern: None,
        }
    }
}

/// Simulation coordinates a configured grid and its engine.
/// This is the application layer that drivers and renderers talk to.
pub struct Simulation {
    engine: StepEngine,
    seed: u64,
}

impl Simulation {
    /// Validate `config` and build the starting grid
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        let life = LifeConfig::new(config.size, config.live_probability)?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());

        let grid = match &config.pattern {
            Some(name) => presets::by_name(name)?.centered(life.size())?,
            None => generate(&life, &mut StdRng::seed_from_u64(seed))?,
        };

        let rule: Box<dyn Rule> = if config.rule.is_conway() {
            Box::new(ConwayRule)
        } else {
            Box::new(config.rule)
        };

        info!(
            "{}x{} grid, p={}, seed={}, rule={} ({}), algorithm={}, population={}",
            life.size(),
            life.size(),
            life.live_probability(),
            seed,
            config.rule,
            rule.name(),
            config.algorithm,
            grid.population()
        );

        let engine = StepEngine::new(grid)
            .with_rule(rule)
            .with_algorithm(config.algorithm);
        Ok(Self { engine, seed })
    }

    /// Seed the random start was drawn from
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        self.engine.current_grid()
    }

    pub const fn generation(&self) -> u64 {
        self.engine.generation()
    }

    pub fn engine(&self) -> &StepEngine {
        &self.engine
    }

    pub fn step(&mut self) -> Result<u64, StepError> {
        self.engine.step()
    }

    /// Step `generations` times, handing each committed generation to
    /// `observer`. Pacing between calls is up to the caller.
    pub fn run_for<F>(&mut self, generations: u64, mut observer: F) -> Result<u64, StepError>
    where
        F: FnMut(u64, &Grid),
    {
        for _ in 0..generations {
            let generation = self.engine.step()?;
            observer(generation, self.engine.current_grid());
        }
        if self.engine.current_grid().is_empty() {
            info!("population died out by generation {}", self.generation());
        }
        Ok(self.generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, new_grid};

    fn seeded(seed: u64) -> SimulationConfig {
        SimulationConfig {
            size: 24,
            live_probability: 0.35,
            seed: Some(seed),
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.size, 10);
        assert_eq!(config.live_probability, 0.5);
        assert_eq!(config.algorithm, Algorithm::Parallel);
        assert!(config.rule.is_conway());
    }

    #[test]
    fn test_seeded_start_matches_new_grid() {
        let simulation = Simulation::new(&seeded(11)).unwrap();
        assert_eq!(simulation.seed(), 11);
        assert_eq!(simulation.grid(), &new_grid(24, 0.35, 11).unwrap());
        assert_eq!(simulation.generation(), 0);
    }

    #[test]
    fn test_same_seed_same_history() {
        let mut a = Simulation::new(&seeded(5)).unwrap();
        let mut b = Simulation::new(&SimulationConfig {
            algorithm: Algorithm::Serial,
            ..seeded(5)
        })
        .unwrap();
        let mut history_a = Vec::new();
        let mut history_b = Vec::new();
        a.run_for(10, |_, grid| history_a.push(grid.clone())).unwrap();
        b.run_for(10, |_, grid| history_b.push(grid.clone())).unwrap();
        assert_eq!(history_a, history_b);
    }

    #[test]
    fn test_observer_sees_every_generation() {
        let mut simulation = Simulation::new(&seeded(2)).unwrap();
        let mut seen = Vec::new();
        let last = simulation.run_for(5, |generation, _| seen.push(generation)).unwrap();
        assert_eq!(last, 5);
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_pattern_start() {
        let config = SimulationConfig {
            size: 9,
            pattern: Some("blinker".into()),
            ..SimulationConfig::default()
        };
        let mut simulation = Simulation::new(&config).unwrap();
        let start = simulation.grid().clone();
        assert_eq!(start.population(), 3);
        assert_eq!(start.get(4, 3), Cell::Alive);
        simulation.run_for(2, |_, _| {}).unwrap();
        assert_eq!(simulation.grid(), &start);
    }

    #[test]
    fn test_invalid_config() {
        let bad_size = SimulationConfig {
            size: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(Simulation::new(&bad_size).err(), Some(ConfigError::InvalidSize(0)));

        let bad_p = SimulationConfig {
            live_probability: 2.0,
            ..SimulationConfig::default()
        };
        assert_eq!(
            Simulation::new(&bad_p).err(),
            Some(ConfigError::InvalidProbability(2.0))
        );

        let bad_pattern = SimulationConfig {
            pattern: Some("spaceship".into()),
            ..SimulationConfig::default()
        };
        assert!(matches!(
            Simulation::new(&bad_pattern),
            Err(ConfigError::UnknownPattern(_))
        ));
    }

    #[test]
    fn test_custom_rule_is_used() {
        let config = SimulationConfig {
            rule: LifeLikeRule::seeds(),
            ..seeded(3)
        };
        let simulation = Simulation::new(&config).unwrap();
        assert_eq!(simulation.engine().rule().name(), "Seeds");
    }
}
