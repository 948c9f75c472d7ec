//! Panel view model
//!
//! Everything a renderer needs to draw the two player panels, derived from a
//! [`MatchState`] snapshot. Nothing here feeds back into the engine.

use serde::{Deserialize, Serialize};

use crate::engine::MatchState;
use crate::player::Player;

/// One player's panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPanel {
    pub player: Player,
    pub label: String,
    pub score: u32,
    pub matches: u32,
    /// Serve marker. Hidden on both panels once a winner stands.
    pub is_serving: bool,
    pub is_winner: bool,
    /// Whether clicking the panel can still score a point.
    pub accepts_points: bool,
    /// Accessible name for the panel's click target.
    pub action_label: String,
}

impl PlayerPanel {
    pub fn new(state: &MatchState, player: Player) -> Self {
        let game_over = state.winner.is_some();
        Self {
            player,
            label: player.label(),
            score: state.score(player),
            matches: state.matches(player),
            is_serving: state.serving_player == player && !game_over,
            is_winner: state.winner == Some(player),
            accepts_points: !game_over,
            action_label: format!("Increment {} score", player.label()),
        }
    }
}

/// Both panels plus the celebration flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub left: PlayerPanel,
    pub right: PlayerPanel,
    /// True while a winner stands.
    pub celebrating: bool,
}

impl Scoreboard {
    pub fn new(state: &MatchState) -> Self {
        Self {
            left: PlayerPanel::new(state, Player::A),
            right: PlayerPanel::new(state, Player::B),
            celebrating: state.winner.is_some(),
        }
    }

    pub fn panel(&self, player: Player) -> &PlayerPanel {
        match player {
            Player::A => &self.left,
            Player::B => &self.right,
        }
    }
}

impl From<&MatchState> for Scoreboard {
    fn from(state: &MatchState) -> Self {
        Self::new(state)
    }
}
