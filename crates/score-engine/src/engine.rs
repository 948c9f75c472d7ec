//! Scoring state machine
//!
//! A game moves from `Playing` to `Won(player)` on the point that closes it
//! out and stays there until `reset_game` or `reset_match`. Serve and winner
//! are derived from the scores by `refresh`, which runs at the end of every
//! mutating operation.

use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::rules::{compute_server, evaluate_winner};

/// Snapshot of a match in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub score_a: u32,
    pub score_b: u32,
    /// Games won since the last match reset.
    pub matches_a: u32,
    pub matches_b: u32,
    pub serving_player: Player,
    pub winner: Option<Player>,
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            score_a: 0,
            score_b: 0,
            matches_a: 0,
            matches_b: 0,
            serving_player: Player::A,
            winner: None,
        }
    }

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::A => self.score_a,
            Player::B => self.score_b,
        }
    }

    pub fn matches(&self, player: Player) -> u32 {
        match player {
            Player::A => self.matches_a,
            Player::B => self.matches_b,
        }
    }

    pub fn phase(&self) -> GamePhase {
        match self.winner {
            Some(player) => GamePhase::Won(player),
            None => GamePhase::Playing,
        }
    }

    fn score_mut(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::A => &mut self.score_a,
            Player::B => &mut self.score_b,
        }
    }

    fn matches_mut(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::A => &mut self.matches_a,
            Player::B => &mut self.matches_b,
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the current game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Won(Player),
}

/// What a call to [`ScoreEngine::increment_score`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PointOutcome {
    /// Point recorded, game continues.
    Scored { player: Player },
    /// Point recorded and it closed out the game.
    GameWon { winner: Player },
    /// A winner already stands; nothing changed.
    Ignored,
}

/// Owns the match record and applies every state transition.
#[derive(Clone, Debug, Default)]
pub struct ScoreEngine {
    state: MatchState,
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self {
            state: MatchState::new(),
        }
    }

    /// Start from an arbitrary score line in a fresh match.
    ///
    /// Serve and winner are derived exactly as after a point, so a line that
    /// already closes out the game is credited to the winner's match count.
    pub fn from_scores(score_a: u32, score_b: u32) -> Self {
        let mut engine = Self::new();
        engine.state.score_a = score_a;
        engine.state.score_b = score_b;
        engine.refresh();
        engine
    }

    /// Award a point to `player`.
    ///
    /// Once a winner stands the call is silently ignored until a reset, so
    /// stray clicks after game point cannot drift the final score.
    pub fn increment_score(&mut self, player: Player) -> PointOutcome {
        if self.state.winner.is_some() {
            return PointOutcome::Ignored;
        }

        let score = self.state.score_mut(player);
        *score = score.saturating_add(1);

        let won = self.refresh();
        log::trace!(
            "point to {}: {}-{}, {} to serve",
            player,
            self.state.score_a,
            self.state.score_b,
            self.state.serving_player
        );

        match won {
            Some(winner) => PointOutcome::GameWon { winner },
            None => PointOutcome::Scored { player },
        }
    }

    /// Clear the current game. Match counters are kept.
    pub fn reset_game(&mut self) {
        self.state.score_a = 0;
        self.state.score_b = 0;
        self.state.winner = None;
        self.refresh();
        log::debug!(
            "game reset, match tally {}-{}",
            self.state.matches_a,
            self.state.matches_b
        );
    }

    /// Clear the current game and the match counters.
    pub fn reset_match(&mut self) {
        self.reset_game();
        self.state.matches_a = 0;
        self.state.matches_b = 0;
        log::debug!("match reset");
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Owned copy for handing to a renderer.
    pub fn snapshot(&self) -> MatchState {
        self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn score(&self, player: Player) -> u32 {
        self.state.score(player)
    }

    pub fn matches(&self, player: Player) -> u32 {
        self.state.matches(player)
    }

    pub fn serving_player(&self) -> Player {
        self.state.serving_player
    }

    pub fn winner(&self) -> Option<Player> {
        self.state.winner
    }

    pub fn is_serving(&self, player: Player) -> bool {
        self.state.serving_player == player
    }

    /// Re-derive serve and winner from the current scores.
    ///
    /// Returns the winner if this call is the one that set it. A standing
    /// winner is never re-evaluated.
    fn refresh(&mut self) -> Option<Player> {
        let (a, b) = (self.state.score_a, self.state.score_b);

        self.state.serving_player = if a == 0 && b == 0 {
            Player::A
        } else {
            compute_server(a, b)
        };

        if self.state.winner.is_some() {
            return None;
        }

        let winner = evaluate_winner(a, b)?;
        self.state.winner = Some(winner);
        let matches = self.state.matches_mut(winner);
        *matches = matches.saturating_add(1);

        log::info!(
            "{} wins the game {}-{}, match tally {}-{}",
            winner.label(),
            a,
            b,
            self.state.matches_a,
            self.state.matches_b
        );
        Some(winner)
    }
}
