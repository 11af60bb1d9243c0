//! Browser bindings
//!
//! The page owns the canvas, audio and input polling. It calls
//! [`WebSession::step`] once per animation frame with the merged
//! keyboard/mouse/touch "held" level and renders the returned JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::sim::{GameState, InputEdges};
use crate::{Config, clock_seed};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Hill Hopper starting...");
}

/// One running game
#[wasm_bindgen]
pub struct WebSession {
    state: GameState,
    edges: InputEdges,
}

#[wasm_bindgen]
impl WebSession {
    /// New session seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebSession {
        Self::from_state(GameState::new(clock_seed()))
    }

    /// New session with a fixed seed and optional JSON config overrides
    pub fn with_seed(seed: f64, config_json: Option<String>) -> Result<WebSession, JsValue> {
        let config = match config_json {
            Some(json) => {
                Config::from_json_str(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => Config::default(),
        };
        let state = GameState::with_config(config, seed as u64)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_state(state))
    }

    /// Advance one frame and return the snapshot as JSON
    pub fn step(&mut self, held: bool) -> Result<String, JsValue> {
        let input = self.edges.sample(held);
        self.state
            .step(&input)
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `[height_record, length_record]`
    pub fn records(&self) -> Vec<f64> {
        vec![self.state.score.height_record, self.state.score.length_record]
    }

    pub fn seed(&self) -> f64 {
        self.state.rng_state.seed as f64
    }
}

impl WebSession {
    fn from_state(state: GameState) -> WebSession {
        WebSession {
            state,
            edges: InputEdges::default(),
        }
    }
}

impl Default for WebSession {
    fn default() -> Self {
        Self::new()
    }
}
