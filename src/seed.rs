use log::debug;

use crate::cell::FloatPair;
use crate::error::Result;
use crate::grid::Grid;
use crate::rng::Rng;

/// Glider cells relative to its top-left corner, heading south-east.
pub const GLIDER: [(i32, i32); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

/// Glider cells shifted by `origin`.
pub fn glider(origin: (i32, i32)) -> Vec<(i32, i32)> {
    GLIDER
        .iter()
        .map(|&(x, y)| (x + origin.0, y + origin.1))
        .collect()
}

/// Life grid with the listed cells set alive. Coordinates wrap.
pub fn life_grid(w: usize, h: usize, alive: &[(i32, i32)]) -> Result<Grid<u32>> {
    let mut grid = Grid::new(w, h)?;
    for &(x, y) in alive {
        grid.set(x, y, 1);
    }
    debug!("seeded {}x{} life grid with {} cells", w, h, alive.len());
    Ok(grid)
}

/// Axis-aligned block of cells, origin at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub x: i32,
    pub y: i32,
    pub w: usize,
    pub h: usize,
}

/// Two-channel grid, all zero except `block`, whose cells receive random
/// channel values from `Rng::new(seed)`.
///
/// Draw order is row-major over the block (y outer, x inner), two draws per
/// cell: blue first, then yellow.
pub fn lifelike_grid(w: usize, h: usize, block: Block, seed: u64) -> Result<Grid<FloatPair>> {
    let mut grid = Grid::new(w, h)?;
    let mut rng = Rng::new(seed);
    for dy in 0..block.h as i32 {
        for dx in 0..block.w as i32 {
            let blue = rng.next_f32();
            let yellow = rng.next_f32();
            grid.set(block.x + dx, block.y + dy, FloatPair::new(blue, yellow));
        }
    }
    debug!(
        "seeded {}x{} lifelike grid, {}x{} block at ({}, {}), seed={}",
        w, h, block.w, block.h, block.x, block.y, seed
    );
    Ok(grid)
}
