//! The two seats at the table and their scores.
//!
//! ## Player
//!
//! A game is always the user against the machine. `Player::index()` gives the
//! slot used by wire formats (`0` for the user, `1` for the machine).
//!
//! ## Score
//!
//! `Score` is a `Copy` pair indexed by `Player`. Reading a game's score hands
//! out a copy, so callers never hold a reference into a snapshot.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    User,
    Machine,
}

impl Player {
    /// Both players in slot order.
    pub const ALL: [Player; 2] = [Player::User, Player::Machine];

    /// Slot index of this player (user 0, machine 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::User => 0,
            Player::Machine => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::User => f.write_str("user"),
            Player::Machine => f.write_str("machine"),
        }
    }
}

/// Running totals for both players.
///
/// ```
/// use rust_tileboard::core::{Player, Score};
///
/// let score = Score::default().add(Player::User, 12).add(Player::Machine, 7);
/// assert_eq!(score[Player::User], 12);
/// assert_eq!(score.as_array(), [12, 7]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score([u32; 2]);

impl Score {
    /// Create a score from `[user, machine]`.
    #[must_use]
    pub const fn new(scores: [u32; 2]) -> Self {
        Self(scores)
    }

    /// Get a player's total.
    #[must_use]
    pub const fn get(self, player: Player) -> u32 {
        self.0[player.index()]
    }

    /// Return a new score with `delta` added to one player's total.
    #[must_use]
    pub fn add(self, player: Player, delta: u32) -> Self {
        let mut scores = self.0;
        scores[player.index()] = scores[player.index()].saturating_add(delta);
        Self(scores)
    }

    /// Return a new score with per-player deltas added.
    #[must_use]
    pub fn add_both(self, deltas: [u32; 2]) -> Self {
        Player::ALL
            .iter()
            .fold(self, |score, &player| score.add(player, deltas[player.index()]))
    }

    /// The totals as `[user, machine]`.
    #[must_use]
    pub const fn as_array(self) -> [u32; 2] {
        self.0
    }
}

impl Index<Player> for Score {
    type Output = u32;

    fn index(&self, player: Player) -> &Self::Output {
        &self.0[player.index()]
    }
}

impl From<[u32; 2]> for Score {
    fn from(scores: [u32; 2]) -> Self {
        Self(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_index() {
        assert_eq!(Player::User.index(), 0);
        assert_eq!(Player::Machine.index(), 1);
        assert_eq!(Player::ALL, [Player::User, Player::Machine]);
    }

    #[test]
    fn test_score_add_is_copy_out() {
        let before = Score::default();
        let after = before.add(Player::Machine, 5);

        assert_eq!(before.as_array(), [0, 0]);
        assert_eq!(after.as_array(), [0, 5]);
        assert_eq!(after.get(Player::Machine), 5);
    }

    #[test]
    fn test_score_add_both() {
        let score = Score::new([3, 4]).add_both([10, 1]);
        assert_eq!(score.as_array(), [13, 5]);
    }

    #[test]
    fn test_score_saturates() {
        let score = Score::new([u32::MAX, 0]).add(Player::User, 1);
        assert_eq!(score[Player::User], u32::MAX);
    }

    #[test]
    fn test_serialization() {
        let score = Score::new([10, 20]);
        let json = serde_json::to_string(&score).unwrap();
        assert_eq!(json, "[10,20]");
        let deserialized: Score = serde_json::from_str(&json).unwrap();
        assert_eq!(score, deserialized);

        assert_eq!(serde_json::to_string(&Player::Machine).unwrap(), r#""machine""#);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::User), "user");
    }
}
