use rayon::prelude::*;

use crate::cell::FloatPair;
use crate::grid::Grid;

const ALIVE: [u8; 4] = [0, 0, 0, 255];
const DEAD: [u8; 4] = [255, 255, 255, 255];

/// Blue channel color at full intensity.
const BLUE: [f32; 3] = [0.0, 0.0, 255.0];
/// Yellow channel color at full intensity.
const YELLOW: [f32; 3] = [255.0, 255.0, 0.0];

#[inline]
fn pair_color(c: FloatPair) -> [u8; 4] {
    let mix = |i: usize| (BLUE[i] * c.blue + YELLOW[i] * c.yellow).round().clamp(0.0, 255.0) as u8;
    [mix(0), mix(1), mix(2), 255]
}

/// Paint every cell as a `cell_size` square. Output is RGBA, row-major,
/// `(w * cell_size) x (h * cell_size)` pixels.
fn render_cells<T, F>(grid: &Grid<T>, cell_size: usize, color: F) -> Vec<u8>
where
    T: Copy + Sync,
    F: Fn(T) -> [u8; 4] + Sync,
{
    let cell_size = cell_size.max(1);
    let pw = grid.w * cell_size;
    let ph = grid.h * cell_size;
    let mut rgba = vec![0u8; pw * ph * 4];

    rgba.par_chunks_mut(pw * 4)
        .enumerate()
        .for_each(|(py, row)| {
            let y = py / cell_size;
            for x in 0..grid.w {
                let c = color(grid.data[y * grid.w + x]);
                for px in x * cell_size..(x + 1) * cell_size {
                    row[px * 4..px * 4 + 4].copy_from_slice(&c);
                }
            }
        });

    rgba
}

/// Black for alive, white for dead.
pub fn render_life(grid: &Grid<u32>, cell_size: usize) -> Vec<u8> {
    render_cells(grid, cell_size, |v| if v > 0 { ALIVE } else { DEAD })
}

/// Additive blue/yellow mix, black where both channels are zero.
pub fn render_lifelike(grid: &Grid<FloatPair>, cell_size: usize) -> Vec<u8> {
    render_cells(grid, cell_size, pair_color)
}
