// Domain layer - grid, rules, stepping
pub mod domain;

// Application layer - configuration and run coordination
pub mod application;

// Re-exports for convenience
pub use domain::{
    Algorithm, Cell, ConfigError, ConwayRule, Grid, LifeConfig, LifeLikeRule, Pattern, Rule,
    RuleParseError, StepEngine, StepError, generate, new_grid, presets,
};
pub use application::{Simulation, SimulationConfig};
