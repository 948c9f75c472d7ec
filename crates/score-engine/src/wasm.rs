//! WASM bindings for the browser scoreboard

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::error::ScoreError;
use crate::rules::{compute_server, evaluate_winner};
use crate::view::{self, PlayerPanel};
use crate::{Player, ScoreEngine};

fn parse_player(player: &str) -> Result<Player, JsError> {
    player
        .parse::<Player>()
        .map_err(|e: ScoreError| JsError::new(&format!("Invalid player: {}", e)))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Handle owning one match. The page keeps a single instance and re-renders
/// from `snapshot()`/`panels()` after every call.
#[wasm_bindgen]
pub struct Scoreboard {
    engine: ScoreEngine,
}

#[wasm_bindgen]
impl Scoreboard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Scoreboard {
        Scoreboard {
            engine: ScoreEngine::new(),
        }
    }

    /// Award a point. `player` is "A", "B", "1" or "2".
    ///
    /// Returns the serialized `PointOutcome`; `{kind: "GameWon"}` is the cue
    /// to start the celebration.
    pub fn increment(&mut self, player: &str) -> Result<JsValue, JsError> {
        let player = parse_player(player)?;
        let outcome = self.engine.increment_score(player);
        to_js(&outcome)
    }

    #[wasm_bindgen(js_name = resetGame)]
    pub fn reset_game(&mut self) {
        self.engine.reset_game();
    }

    #[wasm_bindgen(js_name = resetMatch)]
    pub fn reset_match(&mut self) {
        self.engine.reset_match();
    }

    /// Current `MatchState` as a plain object.
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js(self.engine.state())
    }

    /// Panels in display order, as an array of `PlayerPanel` objects.
    pub fn panels(&self) -> Result<js_sys::Array, JsError> {
        let board = view::Scoreboard::new(self.engine.state());
        let panels: [&PlayerPanel; 2] = [&board.left, &board.right];
        let array = js_sys::Array::new();
        for panel in panels {
            array.push(&to_js(panel)?);
        }
        Ok(array)
    }

    /// Whether a winner stands (drives the confetti overlay).
    #[wasm_bindgen(getter)]
    pub fn celebrating(&self) -> bool {
        self.engine.winner().is_some()
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Panel number (1 or 2) of the server for a score line.
#[wasm_bindgen(js_name = nextServer)]
pub fn next_server(score_a: u32, score_b: u32) -> u8 {
    compute_server(score_a, score_b).number()
}

/// Panel number of the winner for a score line, or 0 while the game is open.
#[wasm_bindgen(js_name = gameWinner)]
pub fn game_winner(score_a: u32, score_b: u32) -> u8 {
    evaluate_winner(score_a, score_b).map_or(0, Player::number)
}
