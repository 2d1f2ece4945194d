mod algorithm;
mod cell;
mod error;
mod grid;
mod initializer;
mod patterns;
mod rules;
pub mod engine;
pub mod neighbors;
pub mod traversal;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use engine::StepEngine;
pub use error::{ConfigError, RuleParseError, StepError};
pub use grid::Grid;
pub use initializer::{LifeConfig, generate, new_grid};
pub use neighbors::count_live_neighbors;
pub use patterns::{Pattern, presets};
pub use rules::{ConwayRule, LifeLikeRule, Rule, all_rules, default_rule};
pub use traversal::Cells;
