//! Score Engine for a table tennis scoreboard
//!
//! Tracks two players' points and games won, decides who serves and when a
//! game is over. Rendering lives elsewhere; it reads snapshots and calls back
//! in on clicks. This crate is compiled to:
//! - Native (tests, embedding in other hosts)
//! - WASM (for the browser scoreboard)

mod error;
mod player;
mod rules;
mod engine;
mod view;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::ScoreError;
pub use player::Player;
pub use rules::{compute_server, evaluate_winner, POINTS_TO_WIN, SERVE_INTERVAL, WIN_MARGIN};
pub use engine::{GamePhase, MatchState, PointOutcome, ScoreEngine};
pub use view::{PlayerPanel, Scoreboard};
