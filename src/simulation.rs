//! Double-buffered generation stepping.
//!
//! Every next state is computed from the current grid and written into a
//! separate buffer; the buffers are swapped only once the whole buffer is
//! filled. All cells therefore update simultaneously, and a step that
//! panics part way leaves the visible grid untouched.
//!
//! Hosts that render from another thread must not read the grid while a
//! step is running; reading between steps is always safe.

use log::trace;
use rayon::prelude::*;

use crate::cell::CellState;
use crate::error::Result;
use crate::grid::Grid;
use crate::rule::RuleFn;

/// Compute the generation after `grid` into `out`. `out` must match `grid`'s size.
fn fill_next<T: CellState>(grid: &Grid<T>, rule: RuleFn<T>, out: &mut Grid<T>) {
    debug_assert!(grid.w == out.w && grid.h == out.h);
    for (i, cell) in out.data.iter_mut().enumerate() {
        *cell = rule(grid, (i % grid.w) as i32, (i / grid.w) as i32);
    }
}

/// Pure form of a step: returns the next generation, leaving `grid` as is.
pub fn next_generation<T: CellState>(grid: &Grid<T>, rule: RuleFn<T>) -> Result<Grid<T>> {
    let mut out = Grid::new(grid.w, grid.h)?;
    fill_next(grid, rule, &mut out);
    Ok(out)
}

/// A grid, its generation buffer and the rule that advances it.
#[derive(Clone, Debug)]
pub struct Simulation<T> {
    current: Grid<T>,
    next: Grid<T>,
    rule: RuleFn<T>,
    generation: u64,
}

impl<T: CellState> Simulation<T> {
    /// Take ownership of a seeded grid. Allocates the generation buffer.
    pub fn new(grid: Grid<T>, rule: RuleFn<T>) -> Result<Self> {
        let next = Grid::new(grid.w, grid.h)?;
        Ok(Self {
            current: grid,
            next,
            rule,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid<T> {
        &self.current
    }

    /// Wrapped read for renderers.
    pub fn get(&self, x: i32, y: i32) -> T {
        self.current.get(x, y)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.data.iter().filter(|c| c.is_alive()).count()
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        fill_next(&self.current, self.rule, &mut self.next);
        self.commit();
    }

    /// Advance one generation, computing rows in parallel.
    /// Produces exactly the same grid as [`Simulation::step`].
    pub fn step_par(&mut self) {
        let current = &self.current;
        let rule = self.rule;
        let w = current.w;
        self.next
            .data
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = rule(current, x as i32, y as i32);
                }
            });
        self.commit();
    }

    /// Advance `n` generations.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        trace!("generation {} committed", self.generation);
    }
}
