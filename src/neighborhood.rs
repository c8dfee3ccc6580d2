//! Aggregate statistics over the eight wrapped neighbors of a cell.
//!
//! The center cell is never included. All queries read through
//! [`neighbors8_wrap`], so edge cells see the opposite edge.

use crate::cell::{CellState, FloatPair};
use crate::grid::{Grid, neighbors8_wrap};

#[inline]
fn neighbors<T: Copy + Default>(grid: &Grid<T>, x: i32, y: i32) -> impl Iterator<Item = T> + '_ {
    neighbors8_wrap(x, y, grid.w, grid.h).map(move |(nx, ny)| grid.data[ny * grid.w + nx])
}

/// Number of alive neighbors, 0..=8.
pub fn alive_count<T: CellState>(grid: &Grid<T>, x: i32, y: i32) -> usize {
    neighbors(grid, x, y).filter(|c| c.is_alive()).count()
}

/// Per-channel mean over alive neighbors only.
/// Returns (0, 0) when no neighbor is alive.
pub fn average_of_alive(grid: &Grid<FloatPair>, x: i32, y: i32) -> FloatPair {
    let mut sum = FloatPair::ZERO;
    let mut n = 0u32;
    for c in neighbors(grid, x, y).filter(|c| c.is_alive()) {
        sum.blue += c.blue;
        sum.yellow += c.yellow;
        n += 1;
    }
    if n == 0 {
        return FloatPair::ZERO;
    }
    FloatPair::new(sum.blue / n as f32, sum.yellow / n as f32)
}

/// Per-channel maximum over all eight neighbors, starting from 0.0 rather
/// than the first neighbor. The result is never below zero.
pub fn max_of_neighbors(grid: &Grid<FloatPair>, x: i32, y: i32) -> FloatPair {
    neighbors(grid, x, y).fold(FloatPair::ZERO, |acc, c| {
        FloatPair::new(acc.blue.max(c.blue), acc.yellow.max(c.yellow))
    })
}

/// Per-channel minimum over all eight neighbors, starting from 0.0.
/// The result is never above zero.
pub fn min_of_neighbors(grid: &Grid<FloatPair>, x: i32, y: i32) -> FloatPair {
    neighbors(grid, x, y).fold(FloatPair::ZERO, |acc, c| {
        FloatPair::new(acc.blue.min(c.blue), acc.yellow.min(c.yellow))
    })
}
