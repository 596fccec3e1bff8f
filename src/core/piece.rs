//! Tiles and their identities.
//!
//! A `Piece` is a letter plus a `PieceId`. The id names one physical tile for
//! its whole life in a game: two pieces with the same letter are still
//! different tiles, and engine lookups always go through the id.
//!
//! ## Dead Piece
//!
//! `Piece::dead()` is a sentinel that marks a board cell as permanently
//! unplayable. It has an empty id, so it can never be found by id lookup and
//! never enters a tray.
//!
//! ```
//! use rust_tileboard::core::{Piece, PieceId};
//!
//! let b = Piece::new('B', "1");
//! assert_eq!(b.id, PieceId::from("1"));
//! assert!(!b.is_dead());
//!
//! let dead = Piece::dead();
//! assert!(dead.is_dead());
//! assert!(dead.id.is_empty());
//! ```

use serde::{Deserialize, Serialize};

/// Identity token of a physical tile, unique within a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub String);

impl PieceId {
    /// Create a piece id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The empty id carried by the dead sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PieceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PieceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tile: its face value and its identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Letter or symbol shown on the tile.
    pub value: char,

    /// Identity of this tile instance.
    pub id: PieceId,
}

impl Piece {
    /// Face value of the dead sentinel.
    pub const DEAD_VALUE: char = '-';

    /// Create a piece.
    #[must_use]
    pub fn new(value: char, id: impl Into<PieceId>) -> Self {
        Self {
            value,
            id: id.into(),
        }
    }

    /// The sentinel occupying dead cells.
    #[must_use]
    pub fn dead() -> Self {
        Self {
            value: Self::DEAD_VALUE,
            id: PieceId::default(),
        }
    }

    /// Check whether this is the dead sentinel.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.id.is_empty()
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_dead() {
            write!(f, "{}[dead]", self.value)
        } else {
            write!(f, "{}[{}]", self.value, self.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_not_value() {
        let first = Piece::new('T', "3");
        let second = Piece::new('T', "5");
        assert_ne!(first, second);
        assert_ne!(first.id, second.id);
        assert_eq!(first.value, second.value);
    }

    #[test]
    fn test_dead_sentinel() {
        let dead = Piece::dead();
        assert!(dead.is_dead());
        assert_eq!(dead.value, Piece::DEAD_VALUE);
        assert_eq!(dead, Piece::dead());
        assert!(!Piece::new('A', "1").is_dead());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Piece::new('B', "1")), "B[1]");
        assert_eq!(format!("{}", Piece::dead()), "-[dead]");
        assert_eq!(format!("{}", PieceId::from("42")), "42");
    }

    #[test]
    fn test_serialization() {
        let piece = Piece::new('E', "2");
        let json = serde_json::to_string(&piece).unwrap();
        assert_eq!(json, r#"{"value":"E","id":"2"}"#);
        let deserialized: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, deserialized);
    }
}
