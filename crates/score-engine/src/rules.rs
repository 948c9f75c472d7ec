//! House rules: serve rotation and game-win detection.
//!
//! Serve alternates every 5 total points rather than the official 2.
//! The rules are fixed; nothing here is configurable at runtime.

use crate::player::Player;

/// Points a player needs before a game can be won.
pub const POINTS_TO_WIN: u32 = 21;

/// Minimum lead required to close out a game.
pub const WIN_MARGIN: u32 = 2;

/// Total points played between serve changes.
pub const SERVE_INTERVAL: u32 = 5;

/// Server for a given score line.
///
/// Let `interval = (score_a + score_b) / SERVE_INTERVAL`; A serves on even
/// intervals, B on odd ones. A fresh game (0-0) always falls to A.
pub fn compute_server(score_a: u32, score_b: u32) -> Player {
    let total = u64::from(score_a) + u64::from(score_b);
    let interval = total / u64::from(SERVE_INTERVAL);
    if interval % 2 == 0 {
        Player::A
    } else {
        Player::B
    }
}

/// Winner for a given score line, if either side has closed out the game.
pub fn evaluate_winner(score_a: u32, score_b: u32) -> Option<Player> {
    if has_won(score_a, score_b) {
        Some(Player::A)
    } else if has_won(score_b, score_a) {
        Some(Player::B)
    } else {
        None
    }
}

fn has_won(own: u32, other: u32) -> bool {
    own >= POINTS_TO_WIN && u64::from(own) >= u64::from(other) + u64::from(WIN_MARGIN)
}
