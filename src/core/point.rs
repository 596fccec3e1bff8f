//! Grid coordinates.
//!
//! A `Point` is a plain `(row, col)` pair. It knows nothing about the board
//! it will be used on: range checks against a board's dimension are done by
//! `Board`, which is the only component that knows the dimension.
//!
//! ## Usage
//!
//! ```
//! use rust_tileboard::core::Point;
//!
//! let center = Point::new(5, 5);
//! assert!(center.in_bounds(11));
//! assert!(!Point::new(11, 0).in_bounds(11));
//!
//! assert_eq!(center.below(), Point::new(6, 5));
//! assert_eq!(format!("{}", center), "(5, 5)");
//! ```

use serde::{Deserialize, Serialize};

/// A cell coordinate on a square board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The center cell of a board with the given dimension.
    ///
    /// For even dimensions this is the lower-right of the four central cells.
    #[must_use]
    pub const fn center(dimension: usize) -> Self {
        Self::new(dimension / 2, dimension / 2)
    }

    /// Check whether this point lies on a `dimension × dimension` board.
    #[must_use]
    pub const fn in_bounds(self, dimension: usize) -> bool {
        self.row < dimension && self.col < dimension
    }

    /// The point one row down.
    #[must_use]
    pub const fn below(self) -> Self {
        Self::new(self.row + 1, self.col)
    }

    /// Row-major index of this point on a board of the given dimension.
    ///
    /// Only meaningful when `in_bounds(dimension)` holds.
    #[must_use]
    pub const fn index(self, dimension: usize) -> usize {
        self.row * dimension + self.col
    }

    /// Inverse of [`Point::index`].
    #[must_use]
    pub const fn from_index(index: usize, dimension: usize) -> Self {
        Self::new(index / dimension, index % dimension)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
