//! Algorithm enum for selecting how a step visits the grid.
//!
//! Both strategies read only the committed generation and write only the
//! spare buffer, so they produce identical results.

use std::fmt;
use std::str::FromStr;

/// Available step algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Row-major, one cell at a time on the calling thread
    Serial,
    /// Rows of the next buffer handed to rayon workers
    #[default]
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
        }
    }

    /// Short description for help output
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "row-major scan on one thread",
            Algorithm::Parallel => "one rayon task per row, joined before commit",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown algorithm {s:?}, expected serial or parallel"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_parallel() {
        assert_eq!(Algorithm::default(), Algorithm::Parallel);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_parse_by_name() {
        for algorithm in Algorithm::all() {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("Serial".parse::<Algorithm>(), Ok(Algorithm::Serial));
        assert!("simd".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let descriptions: Vec<_> = Algorithm::all().iter().map(|a| a.description()).collect();
        assert!(descriptions.iter().all(|d| !d.is_empty()));
        assert_ne!(descriptions[0], descriptions[1]);
    }
}
