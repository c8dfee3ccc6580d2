use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell::{CellState, FloatPair};
use crate::error::Error;
use crate::grid::Grid;
use crate::neighborhood::{alive_count, average_of_alive, max_of_neighbors, min_of_neighbors};

/// Next-state function for one cell. Reads only; never writes the grid.
pub type RuleFn<T> = fn(&Grid<T>, i32, i32) -> T;

/// The two built-in update rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Conway's Game of Life on `u32` cells.
    #[default]
    Life,
    /// Hand-tuned two-channel rule on [`FloatPair`] cells.
    Lifelike,
}

impl RuleKind {
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Life => "life",
            RuleKind::Lifelike => "lifelike",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "life" => Ok(RuleKind::Life),
            "lifelike" => Ok(RuleKind::Lifelike),
            _ => Err(Error::UnknownRule(s.to_string())),
        }
    }
}

/// B3/S23: an alive cell survives with 2 or 3 alive neighbors, a dead cell
/// is born with exactly 3.
pub fn life(grid: &Grid<u32>, x: i32, y: i32) -> u32 {
    let n = alive_count(grid, x, y);
    let alive = grid.get(x, y).is_alive();
    match (alive, n) {
        (true, 2 | 3) | (false, 3) => 1,
        _ => 0,
    }
}

/// Spread below which a blue-dominant cell collapses toward the neighborhood minimum.
const FLAT_SPREAD: f32 = 0.2;
const BLUE_FLOOR: f32 = 0.1;
const DECAY: f32 = 0.4;
const NUDGE: f32 = 0.3;

/// Two-channel rule. Empirically tuned, not derived; the branch order matters.
///
/// Blue-dominant cells (blue > yellow and blue > 0.1):
/// - neighborhood spread < 0.2 on either channel: min of neighbors, blue - 0.4
/// - 3 or more alive neighbors: average of alive neighbors
/// - otherwise: own state, yellow - 0.4
///
/// All other cells:
/// - exactly 3 alive neighbors: own blue, max neighbor yellow
/// - no alive neighbors: (0, 0)
/// - otherwise: each channel moves 0.3 away from the alive-average of that
///   channel (down if the average is above 0.5, up if not)
///
/// The result is clamped into [0, 1]. Thresholds are compared as `f32`
/// literals, so the 0.1 floor is `0.1f32` (slightly above one tenth).
pub fn lifelike(grid: &Grid<FloatPair>, x: i32, y: i32) -> FloatPair {
    let cur = grid.get(x, y);
    let n = alive_count(grid, x, y);

    let next = if cur.blue > cur.yellow && cur.blue > BLUE_FLOOR {
        let max = max_of_neighbors(grid, x, y);
        let min = min_of_neighbors(grid, x, y);
        if max.blue - min.blue < FLAT_SPREAD || max.yellow - min.yellow < FLAT_SPREAD {
            FloatPair::new(min.blue - DECAY, min.yellow)
        } else if n >= 3 {
            average_of_alive(grid, x, y)
        } else {
            FloatPair::new(cur.blue, cur.yellow - DECAY)
        }
    } else if n == 3 {
        FloatPair::new(cur.blue, max_of_neighbors(grid, x, y).yellow)
    } else if n == 0 {
        FloatPair::ZERO
    } else {
        let avg = average_of_alive(grid, x, y);
        let nudge = |v: f32, a: f32| if a > 0.5 { v - NUDGE } else { v + NUDGE };
        FloatPair::new(nudge(cur.blue, avg.blue), nudge(cur.yellow, avg.yellow))
    };

    next.clamped()
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn approx(a: FloatPair, b: FloatPair) -> bool {
        (a.blue - b.blue).abs() < 1e-6 && (a.yellow - b.yellow).abs() < 1e-6
    }

    /// 5x5 grid with `center` at (2, 2) and the given neighbors.
    fn around(center: FloatPair, neighbors: &[((i32, i32), FloatPair)]) -> Grid<FloatPair> {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, center);
        for &((dx, dy), v) in neighbors {
            grid.set(2 + dx, 2 + dy, v);
        }
        grid
    }

    #[test]
    fn test_parse_rule_kind() {
        assert_eq!("life".parse::<RuleKind>().unwrap(), RuleKind::Life);
        assert_eq!("Lifelike".parse::<RuleKind>().unwrap(), RuleKind::Lifelike);
        assert!(matches!(
            "brain".parse::<RuleKind>(),
            Err(Error::UnknownRule(s)) if s == "brain"
        ));
    }

    #[test]
    fn test_life_transition_table() {
        for n in 0..=8usize {
            let mut grid = Grid::<u32>::new(5, 5).unwrap();
            for &(dx, dy) in crate::grid::NEIGHBOR_OFFSETS.iter().take(n) {
                grid.set(2 + dx, 2 + dy, 1);
            }
            assert_eq!(life(&grid, 2, 2), (n == 3) as u32, "dead with {n}");
            grid.set(2, 2, 1);
            assert_eq!(life(&grid, 2, 2), (n == 2 || n == 3) as u32, "alive with {n}");
        }
    }

    #[test]
    fn test_life_counts_any_positive_value_as_alive() {
        let mut grid = Grid::<u32>::new(5, 5).unwrap();
        grid.set(1, 1, 4);
        grid.set(2, 1, 9);
        grid.set(3, 1, 1);
        assert_eq!(life(&grid, 2, 2), 1);
    }

    #[test]
    fn test_blue_flat_neighborhood_collapses() {
        let grid = around(FloatPair::new(0.9, 0.0), &[]);
        assert_eq!(lifelike(&grid, 2, 2), FloatPair::ZERO);
    }

    #[test]
    fn test_blue_with_three_alive_takes_average() {
        let grid = around(
            FloatPair::new(0.9, 0.0),
            &[
                ((-1, -1), FloatPair::new(0.6, 0.2)),
                ((0, -1), FloatPair::new(0.8, 0.4)),
                ((1, -1), FloatPair::new(0.7, 0.3)),
            ],
        );
        assert!(approx(lifelike(&grid, 2, 2), FloatPair::new(0.7, 0.3)));
    }

    #[test]
    fn test_blue_with_few_alive_decays_yellow() {
        let grid = around(
            FloatPair::new(0.9, 0.5),
            &[
                ((-1, 0), FloatPair::new(0.6, 0.3)),
                ((1, 0), FloatPair::new(0.1, 0.2)),
            ],
        );
        assert!(approx(lifelike(&grid, 2, 2), FloatPair::new(0.9, 0.1)));
    }

    #[test]
    fn test_yellow_with_three_alive_takes_max_yellow() {
        let grid = around(
            FloatPair::new(0.2, 0.4),
            &[
                ((-1, 1), FloatPair::new(0.0, 0.6)),
                ((0, 1), FloatPair::new(0.0, 0.7)),
                ((1, 1), FloatPair::new(0.0, 0.9)),
            ],
        );
        assert!(approx(lifelike(&grid, 2, 2), FloatPair::new(0.2, 0.9)));
    }

    #[test]
    fn test_yellow_without_alive_dies() {
        let grid = around(
            FloatPair::new(0.2, 0.3),
            &[((0, 1), FloatPair::new(0.4, 0.4))],
        );
        assert_eq!(lifelike(&grid, 2, 2), FloatPair::ZERO);
    }

    #[test]
    fn test_flat_yellow_alone_collapses() {
        let neighbor = FloatPair::new(0.9, 0.1);
        let grid = around(
            FloatPair::new(0.9, 0.0),
            &[((-1, 0), neighbor), ((1, 0), neighbor), ((0, 1), neighbor)],
        );
        assert_eq!(lifelike(&grid, 2, 2), FloatPair::ZERO);
    }

    #[test]
    fn test_flat_blue_alone_collapses() {
        let neighbor = FloatPair::new(0.1, 0.6);
        let grid = around(
            FloatPair::new(0.9, 0.0),
            &[((-1, 0), neighbor), ((1, 0), neighbor), ((0, 1), neighbor)],
        );
        assert_eq!(lifelike(&grid, 2, 2), FloatPair::ZERO);
    }

    #[test]
    fn test_low_blue_takes_second_branch() {
        // blue > yellow but blue below the floor
        let grid = around(
            FloatPair::new(0.05, 0.01),
            &[
                ((-1, 1), FloatPair::new(0.0, 0.6)),
                ((0, 1), FloatPair::new(0.0, 0.7)),
                ((1, 1), FloatPair::new(0.0, 0.9)),
            ],
        );
        assert!(approx(lifelike(&grid, 2, 2), FloatPair::new(0.05, 0.9)));
    }

    #[test]
    fn test_yellow_nudged_away_from_alive_average() {
        let grid = around(
            FloatPair::new(0.2, 0.4),
            &[((1, 1), FloatPair::new(0.8, 0.1))],
        );
        assert!(approx(lifelike(&grid, 2, 2), FloatPair::new(0.0, 0.7)));
    }

    proptest! {
        #[test]
        fn test_lifelike_output_in_unit_square(
            cells in proptest::collection::vec((0.0f32..=1.0, 0.0f32..=1.0), 9),
        ) {
            let mut grid = Grid::new(3, 3).unwrap();
            for (v, (b, y)) in grid.data.iter_mut().zip(cells) {
                *v = FloatPair::new(b, y);
            }
            for y in 0..3 {
                for x in 0..3 {
                    let next = lifelike(&grid, x, y);
                    prop_assert!((0.0..=1.0).contains(&next.blue));
                    prop_assert!((0.0..=1.0).contains(&next.yellow));
                }
            }
        }

        #[test]
        fn test_isolated_second_branch_cell_dies(b in 0.0f32..=1.0, y in 0.0f32..=1.0) {
            prop_assume!(!(b > y && b > 0.1));
            let grid = around(FloatPair::new(b, y), &[]);
            prop_assert_eq!(lifelike(&grid, 2, 2), FloatPair::ZERO);
        }
    }
}
