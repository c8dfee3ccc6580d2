use std::fmt;

use crate::error::{Error, Result};

/// Row-major flat grid. No per-cell objects.
/// Toroidal: both axes wrap, so every integer coordinate addresses a cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    pub data: Vec<T>,
    pub w: usize,
    pub h: usize,
}

impl<T: Copy + Default> Grid<T> {
    /// Allocate a `w`x`h` grid filled with `T::default()`.
    pub fn new(w: usize, h: usize) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(Error::ZeroDimension { w, h });
        }
        let len = w
            .checked_mul(h)
            .filter(|_| w <= i32::MAX as usize && h <= i32::MAX as usize)
            .ok_or(Error::TooLarge { w, h })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize(len, T::default());
        Ok(Self { data, w, h })
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> usize {
        let (wx, wy) = wrap_xy(x, y, self.w, self.h);
        wy * self.w + wx
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> T {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// `(x, y, value)` for every cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let w = self.w;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i % w, i / w, v))
    }
}

/// Wrap both coordinates onto the torus.
#[inline]
pub fn wrap_xy(x: i32, y: i32, w: usize, h: usize) -> (usize, usize) {
    (wrap_axis(x as i64, w), wrap_axis(y as i64, h))
}

/// True modulo of `v` by `n`, done in i64 so no intermediate overflows.
#[inline]
fn wrap_axis(v: i64, n: usize) -> usize {
    v.rem_euclid(n as i64) as usize
}

/// Offsets of the Moore neighborhood, center excluded.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// 8-connected neighbors with wrapping on both axes.
/// Always yields exactly eight positions; on grids narrower than three cells
/// some positions repeat.
pub fn neighbors8_wrap(x: i32, y: i32, w: usize, h: usize) -> impl Iterator<Item = (usize, usize)> {
    // Wrap the center first so the offsets never leave the i32 range.
    let (cx, cy) = wrap_xy(x, y, w, h);
    NEIGHBOR_OFFSETS.into_iter().map(move |(dx, dy)| {
        (
            wrap_axis(cx as i64 + dx as i64, w),
            wrap_axis(cy as i64 + dy as i64, h),
        )
    })
}

impl fmt::Display for Grid<u32> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.w) {
            for &cell in row {
                f.write_str(if cell > 0 { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
