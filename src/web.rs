//! Browser bindings
//!
//! The page owns the canvas, the event listeners and the animation frame
//! loop. It forwards input to a `WebGame` and paints the JSON draw list that
//! `frame` returns.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::persistence::{KeyValueStore, LocalStore, MemoryStore};
use crate::platform;
use crate::platform::input::to_logical;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    platform::init_logging();
    log::info!("Space Riders (web) starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> WebGame {
        let store: Box<dyn KeyValueStore> = match LocalStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("{}; scores will not be kept", e);
                Box::new(MemoryStore::new())
            }
        };
        Self {
            game: Game::new(seed as u64, store),
        }
    }

    pub fn press_lift(&mut self) {
        self.game.press_lift();
    }

    pub fn release_lift(&mut self) {
        self.game.release_lift();
    }

    /// Pointer press at `(x, y)` relative to the canvas, where the canvas is
    /// shown at `displayed_width` x `displayed_height` CSS pixels
    pub fn activate_at(&mut self, x: f32, y: f32, displayed_width: f32, displayed_height: f32) {
        let pos = to_logical(
            Vec2::new(x, y),
            Vec2::new(displayed_width, displayed_height),
            self.game.state().screen,
        );
        self.game.activate_at(pos);
    }

    /// Advance to `now_ms` on a `width` x `height` drawing buffer and return
    /// `{ events, draws }` as JSON
    pub fn frame(&mut self, now_ms: f64, width: f32, height: f32) -> Result<String, JsValue> {
        self.game
            .frame_json(now_ms, Vec2::new(width, height))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn score(&self) -> u64 {
        self.game.score()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.game.state().fullscreen
    }
}
