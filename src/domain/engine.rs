//! Synchronous, double-buffered stepping.
//!
//! The engine owns the committed [`Grid`] and one spare buffer. A step fills
//! the spare from the committed generation only, then swaps the two; the
//! old generation becomes the spare for the following step.

use std::collections::TryReserveError;

use log::{Level, debug, log_enabled, trace};
use rayon::prelude::*;

use super::neighbors::count_live_neighbors;
use super::traversal::row_major;
use super::{Algorithm, Cell, Grid, Rule, StepError, default_rule};

/// Next state of `(r, c)`, read from `current` only
#[inline]
fn next_cell(current: &Grid, rule: &dyn Rule, r: usize, c: usize) -> Cell {
    let (r, c) = (r as isize, c as isize);
    rule.evolve(current.get(r, c), count_live_neighbors(current, r, c))
}

/// Write the generation after `current` into `next`, visiting cells in
/// `order`. Each coordinate in `order` is computed from `current` alone, so
/// any permutation of the grid's coordinates fills `next` identically.
///
/// # Panics
///
/// Panics if `next` does not hold exactly `size * size` cells.
pub fn compute_next<I>(current: &Grid, rule: &dyn Rule, next: &mut [Cell], order: I)
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let size = current.size();
    assert_eq!(next.len(), size * size, "next buffer must hold one cell per grid cell");
    for (r, c) in order {
        next[r * size + c] = next_cell(current, rule, r, c);
    }
}

/// Parallel version of `compute_next`: every rayon task owns one row of `next`.
///
/// # Panics
///
/// Panics if `next` does not hold exactly `size * size` cells.
pub fn compute_next_parallel(current: &Grid, rule: &dyn Rule, next: &mut [Cell]) {
    let size = current.size();
    assert_eq!(next.len(), size * size, "next buffer must hold one cell per grid cell");
    next.par_chunks_mut(size).enumerate().for_each(|(r, row)| {
        for (c, slot) in row.iter_mut().enumerate() {
            *slot = next_cell(current, rule, r, c);
        }
    });
}

/// StepEngine advances a grid one generation at a time.
pub struct StepEngine {
    current: Grid,
    spare: Vec<Cell>,
    generation: u64,
    rule: Box<dyn Rule>,
    algorithm: Algorithm,
}

impl StepEngine {
    /// Engine at generation 0 running Conway's rule in parallel
    pub fn new(grid: Grid) -> Self {
        Self {
            current: grid,
            spare: Vec::new(),
            generation: 0,
            rule: default_rule(),
            algorithm: Algorithm::default(),
        }
    }

    /// Replace the rule (builder pattern)
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rule = rule;
        self
    }

    /// Replace the step algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// The committed generation
    pub fn current_grid(&self) -> &Grid {
        &self.current
    }

    /// Number of committed steps since construction or the last reset
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Start over from `grid` at generation 0
    pub fn reset(&mut self, grid: Grid) {
        if grid.size() != self.current.size() {
            self.spare = Vec::new();
        }
        self.current = grid;
        self.generation = 0;
    }

    /// Give up the committed grid
    pub fn into_grid(self) -> Grid {
        self.current
    }

    /// Make sure the spare buffer has one slot per cell, growing it with
    /// `reserve`. Only the first step after construction (or a resizing
    /// reset) allocates.
    fn prepare_spare<F>(&mut self, reserve: F) -> Result<(), StepError>
    where
        F: FnOnce(&mut Vec<Cell>, usize) -> Result<(), TryReserveError>,
    {
        let cells = self.current.as_slice().len();
        if self.spare.len() != cells {
            self.spare.clear();
            reserve(&mut self.spare, cells)
                .map_err(|source| StepError::Allocation { cells, source })?;
            self.spare.resize(cells, Cell::Dead);
        }
        Ok(())
    }

    /// Advance by exactly one generation and return the new generation number.
    /// On error the committed grid and the counter are left untouched.
    pub fn step(&mut self) -> Result<u64, StepError> {
        self.step_with(Vec::try_reserve_exact)
    }

    fn step_with<F>(&mut self, reserve: F) -> Result<u64, StepError>
    where
        F: FnOnce(&mut Vec<Cell>, usize) -> Result<(), TryReserveError>,
    {
        self.prepare_spare(reserve)?;

        match self.algorithm {
            Algorithm::Serial => {
                let order = row_major(self.current.size());
                compute_next(&self.current, self.rule.as_ref(), &mut self.spare, order);
            }
            Algorithm::Parallel => {
                compute_next_parallel(&self.current, self.rule.as_ref(), &mut self.spare);
            }
        }

        // Commit
        self.current.swap_buffer(&mut self.spare);
        self.generation += 1;

        debug!("committed generation {}", self.generation);
        if log_enabled!(Level::Trace) {
            trace!(
                "generation {} population {}",
                self.generation,
                self.current.population()
            );
        }
        Ok(self.generation)
    }

    /// Step `generations` times, stopping at the first error.
    /// Returns the final generation number.
    pub fn run(&mut self, generations: u64) -> Result<u64, StepError> {
        for _ in 0..generations {
            self.step()?;
        }
        Ok(self.generation)
    }
}
