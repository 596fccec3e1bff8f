//! Per-cell score multipliers.
//!
//! The grid is built once from the board dimension and never changes. The
//! layout is symmetric under rotation and reflection:
//!
//! - ×3 on the four corners and the edge midpoints,
//! - ×2 on both diagonals,
//! - ×1 everywhere else, the center included.
//!
//! Word scoring itself is done outside the engine; this table is what a
//! scorer and a renderer read.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Immutable `dimension × dimension` multiplier table.
///
/// ```
/// use rust_tileboard::board::ScoreMultipliers;
/// use rust_tileboard::core::Point;
///
/// let grid = ScoreMultipliers::new(15);
/// assert_eq!(grid.get(Point::new(0, 0)), Some(3));
/// assert_eq!(grid.get(Point::new(3, 3)), Some(2));
/// assert_eq!(grid.get(Point::new(7, 7)), Some(1));
/// assert_eq!(grid.get(Point::new(15, 0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreMultipliers {
    dimension: usize,
    grid: Vector<u32>,
}

impl ScoreMultipliers {
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        let grid = (0..dimension * dimension)
            .map(|index| multiplier_at(Point::from_index(index, dimension), dimension))
            .collect();
        Self { dimension, grid }
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Multiplier of a cell, `None` outside the board.
    #[must_use]
    pub fn get(&self, point: Point) -> Option<u32> {
        if point.in_bounds(self.dimension) {
            self.grid.get(point.index(self.dimension)).copied()
        } else {
            None
        }
    }
}

// Distances are doubled so even and odd dimensions share one formula.
fn multiplier_at(point: Point, dimension: usize) -> u32 {
    let twice = |x: usize| (2 * x + 1).abs_diff(dimension);
    let (row, col) = (twice(point.row), twice(point.col));
    let edge = dimension.saturating_sub(1);

    let corner = row == edge && col == edge;
    let edge_middle = (row == edge && col <= 1) || (col == edge && row <= 1);
    if corner || edge_middle {
        3
    } else if row == col && row > 0 {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_on_odd_board() {
        let grid = ScoreMultipliers::new(11);

        for corner in [(0, 0), (0, 10), (10, 0), (10, 10)] {
            assert_eq!(grid.get(Point::new(corner.0, corner.1)), Some(3));
        }
        for middle in [(0, 5), (5, 0), (10, 5), (5, 10)] {
            assert_eq!(grid.get(Point::new(middle.0, middle.1)), Some(3));
        }
        assert_eq!(grid.get(Point::new(2, 2)), Some(2));
        assert_eq!(grid.get(Point::new(2, 8)), Some(2));
        assert_eq!(grid.get(Point::new(5, 5)), Some(1));
        assert_eq!(grid.get(Point::new(1, 4)), Some(1));
    }

    #[test]
    fn test_symmetry() {
        for dimension in [4, 7, 15] {
            let grid = ScoreMultipliers::new(dimension);
            let last = dimension - 1;
            for row in 0..dimension {
                for col in 0..dimension {
                    let m = grid.get(Point::new(row, col));
                    assert_eq!(m, grid.get(Point::new(col, row)));
                    assert_eq!(m, grid.get(Point::new(last - row, col)));
                    assert_eq!(m, grid.get(Point::new(row, last - col)));
                }
            }
        }
    }

    #[test]
    fn test_every_cell_has_a_multiplier() {
        let grid = ScoreMultipliers::new(6);
        assert_eq!(grid.dimension(), 6);
        for index in 0..36 {
            let m = grid.get(Point::from_index(index, 6)).unwrap();
            assert!((1..=3).contains(&m));
        }
    }

    #[test]
    fn test_single_cell_board() {
        let grid = ScoreMultipliers::new(1);
        assert_eq!(grid.get(Point::new(0, 0)), Some(3));
    }
}
