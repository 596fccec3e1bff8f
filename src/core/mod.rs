//! Core value types: points, pieces, players, parameters, errors,
//! diagnostics and RNG.
//!
//! Everything here is a small immutable value shared by the board, tray and
//! game modules.

pub mod diagnostics;
pub mod error;
pub mod params;
pub mod piece;
pub mod player;
pub mod point;
pub mod rng;

pub use diagnostics::{CollectingDiagnostics, Diagnostic, Diagnostics, TracingDiagnostics};
pub use error::GameError;
pub use params::GameParams;
pub use piece::{Piece, PieceId};
pub use player::{Player, Score};
pub use point::Point;
pub use rng::GameRng;
