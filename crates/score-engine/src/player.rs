//! Player identifiers

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// One of the two sides at the table.
///
/// Panels number them 1 and 2; the engine calls them A and B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Both players, left panel first.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// Panel number shown to users (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::A => 1,
            Player::B => 2,
        }
    }

    /// Display label, e.g. "Player 1".
    pub fn label(self) -> String {
        format!("Player {}", self.number())
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => write!(f, "A"),
            Player::B => write!(f, "B"),
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = ScoreError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Player::A),
            2 => Ok(Player::B),
            other => Err(ScoreError::PlayerOutOfRange(other)),
        }
    }
}

/// Accepts "A"/"B" or the panel numbers "1"/"2", ignoring case and
/// surrounding whitespace.
impl FromStr for Player {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" | "1" => Ok(Player::A),
            "B" | "b" | "2" => Ok(Player::B),
            _ => Err(ScoreError::UnknownPlayer(s.to_string())),
        }
    }
}
