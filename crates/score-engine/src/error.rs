//! Errors raised at the external call boundary.
//!
//! The scoring core itself is total; only identifiers arriving from a
//! renderer can be malformed.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("unknown player {0:?} (expected A, B, 1 or 2)")]
    UnknownPlayer(String),

    #[error("player number {0} out of range (expected 1 or 2)")]
    PlayerOutOfRange(u8),
}
