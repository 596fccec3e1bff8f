//! Game parameters.
//!
//! `GameParams` is fixed for the lifetime of a game and only ever read by the
//! engine. Front ends build it with the `with_*` methods and call
//! [`GameParams::validate`] before starting a game.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Board and tray sizing for one game.
///
/// ```
/// use rust_tileboard::core::GameParams;
///
/// let params = GameParams::new(11, 3).with_square_pixels(40);
/// assert_eq!(params.dimension, 11);
/// assert_eq!(params.tray_capacity, 3);
/// assert!(params.validate().is_ok());
///
/// assert!(GameParams::new(0, 3).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameParams {
    /// Number of rows (and columns) of the board.
    pub dimension: usize,

    /// Number of pieces a tray holds when full.
    pub tray_capacity: usize,

    /// Rendering size of one board square. Opaque to the engine.
    pub square_pixels: u32,
}

impl GameParams {
    pub const DEFAULT_DIMENSION: usize = 15;
    pub const DEFAULT_TRAY_CAPACITY: usize = 7;
    pub const DEFAULT_SQUARE_PIXELS: u32 = 33;

    /// Largest supported board.
    pub const MAX_DIMENSION: usize = 64;

    /// Create parameters with the default square size.
    #[must_use]
    pub fn new(dimension: usize, tray_capacity: usize) -> Self {
        Self {
            dimension,
            tray_capacity,
            square_pixels: Self::DEFAULT_SQUARE_PIXELS,
        }
    }

    #[must_use]
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    #[must_use]
    pub fn with_tray_capacity(mut self, tray_capacity: usize) -> Self {
        self.tray_capacity = tray_capacity;
        self
    }

    #[must_use]
    pub fn with_square_pixels(mut self, square_pixels: u32) -> Self {
        self.square_pixels = square_pixels;
        self
    }

    /// Check that the parameters describe a playable game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.dimension == 0 || self.dimension > Self::MAX_DIMENSION {
            return Err(GameError::InvalidParams(format!(
                "dimension must be in 1..={}, got {}",
                Self::MAX_DIMENSION,
                self.dimension
            )));
        }
        if self.tray_capacity == 0 {
            return Err(GameError::InvalidParams(
                "tray capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GameParams {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIMENSION, Self::DEFAULT_TRAY_CAPACITY)
    }
}
