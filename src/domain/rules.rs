use std::fmt;
use std::str::FromStr;

use super::{Cell, RuleParseError};

/// Trait for cellular automaton rules.
/// The engine only talks to this boundary, so other life-like rules plug in
/// without touching the grid or the step logic.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &str {
        "Conway"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        current.evolve(neighbors)
    }
}

/// Any outer-totalistic Moore rule, written in B/S notation.
/// Bit `n` of `birth`/`survival` is set when `n` live neighbors cause a
/// birth/survival.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LifeLikeRule {
    birth: u16,
    survival: u16,
}

impl LifeLikeRule {
    /// Build a rule from the neighbor counts that cause birth and survival.
    /// Counts above 8 are ignored.
    pub fn new(birth: &[u8], survival: &[u8]) -> Self {
        let mask = |counts: &[u8]| {
            counts
                .iter()
                .filter(|&&n| n <= 8)
                .fold(0u16, |acc, &n| acc | 1 << n)
        };
        Self {
            birth: mask(birth),
            survival: mask(survival),
        }
    }

    /// B3/S23
    pub fn conway() -> Self {
        Self::new(&[3], &[2, 3])
    }

    /// B36/S23 - like Life, plus replicators
    pub fn highlife() -> Self {
        Self::new(&[3, 6], &[2, 3])
    }

    /// B2/S - every live cell dies each generation
    pub fn seeds() -> Self {
        Self::new(&[2], &[])
    }

    /// B3678/S34678 - symmetric under inverting live and dead
    pub fn day_and_night() -> Self {
        Self::new(&[3, 6, 7, 8], &[3, 4, 6, 7, 8])
    }

    pub fn is_conway(&self) -> bool {
        *self == Self::conway()
    }

    fn digits(mask: u16) -> String {
        (0..=8u8)
            .filter(|n| mask & (1 << n) != 0)
            .map(|n| char::from(b'0' + n))
            .collect()
    }
}

impl Default for LifeLikeRule {
    fn default() -> Self {
        Self::conway()
    }
}

impl Rule for LifeLikeRule {
    fn name(&self) -> &str {
        match *self {
            r if r == Self::conway() => "Conway",
            r if r == Self::highlife() => "HighLife",
            r if r == Self::seeds() => "Seeds",
            r if r == Self::day_and_night() => "Day&Night",
            _ => "Life-like",
        }
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        let mask = match current {
            Cell::Alive => self.survival,
            Cell::Dead => self.birth,
        };
        Cell::from(neighbors <= 8 && mask & (1 << neighbors) != 0)
    }
}

impl fmt::Display for LifeLikeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", Self::digits(self.birth), Self::digits(self.survival))
    }
}

impl FromStr for LifeLikeRule {
    type Err = RuleParseError;

    /// Parses `B3/S23` (case-insensitive). The bare preset names
    /// `conway`, `highlife`, `seeds` and `daynight` are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "conway" | "life" => return Ok(Self::conway()),
            "highlife" => return Ok(Self::highlife()),
            "seeds" => return Ok(Self::seeds()),
            "daynight" | "day&night" | "day-and-night" => return Ok(Self::day_and_night()),
            _ => {}
        }

        let malformed = || RuleParseError::Malformed(s.to_owned());
        let (birth, survival) = trimmed.split_once('/').ok_or_else(malformed)?;
        let birth = birth
            .strip_prefix(['B', 'b'])
            .ok_or_else(malformed)?;
        let survival = survival
            .strip_prefix(['S', 's'])
            .ok_or_else(malformed)?;

        let parse = |digits: &str| -> Result<u16, RuleParseError> {
            digits.chars().try_fold(0u16, |acc, ch| match ch.to_digit(10) {
                Some(n) if n <= 8 => Ok(acc | 1 << n),
                _ => Err(RuleParseError::InvalidCount(ch)),
            })
        };
        Ok(Self {
            birth: parse(birth)?,
            survival: parse(survival)?,
        })
    }
}

/// Get all preset rules
pub fn all_rules() -> Vec<LifeLikeRule> {
    vec![
        LifeLikeRule::conway(),
        LifeLikeRule::highlife(),
        LifeLikeRule::seeds(),
        LifeLikeRule::day_and_night(),
    ]
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}
