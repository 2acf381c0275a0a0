//! Host-facing game driver
//!
//! Owns the simulation state, the leaderboard and the store they persist to.
//! Hosts feed it input as it arrives and call `frame` once per display
//! refresh with the current timestamp.

use glam::Vec2;
use serde::Serialize;

use crate::highscores::HighScores;
use crate::persistence::KeyValueStore;
use crate::platform::{ActionQueue, FrameClock};
use crate::renderer::{DrawCommand, Presenter, build_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// One frame's output in a form a script host can consume
#[derive(Debug, Serialize)]
pub struct FrameOutput {
    pub events: Vec<GameEvent>,
    pub draws: Vec<DrawCommand>,
}

pub struct Game {
    state: GameState,
    highscores: HighScores,
    settings: Settings,
    store: Box<dyn KeyValueStore>,
    actions: ActionQueue,
    clock: FrameClock,
}

impl Game {
    /// Create a game on the title screen, loading the leaderboard and
    /// settings from `store`
    pub fn new(seed: u64, store: Box<dyn KeyValueStore>) -> Self {
        Self::with_state(GameState::new(seed), store)
    }

    pub fn with_state(state: GameState, store: Box<dyn KeyValueStore>) -> Self {
        let highscores = HighScores::load(store.as_ref());
        let settings = Settings::load(store.as_ref());
        log::info!(
            "Game ready (seed {}, {} high scores)",
            state.seed,
            highscores.entries().len()
        );
        Self {
            state,
            highscores,
            settings,
            store,
            actions: ActionQueue::new(),
            clock: FrameClock::new(),
        }
    }

    /// Lift pressed (key down, pointer down). Repeats while held are ignored.
    pub fn press_lift(&mut self) {
        self.actions.press_lift();
    }

    /// Lift released
    pub fn release_lift(&mut self) {
        self.actions.release_lift();
    }

    /// Click or tap at a logical screen position
    pub fn activate_at(&mut self, pos: Vec2) {
        self.actions.activate_at(pos);
    }

    /// Run one frame: advance the simulation by the time since the previous
    /// frame, persist a finished run, then draw.
    pub fn frame(
        &mut self,
        now_ms: f64,
        screen: Vec2,
        presenter: &mut dyn Presenter,
    ) -> Vec<GameEvent> {
        let dt = self.clock.tick(now_ms);
        let input = TickInput {
            actions: self.actions.drain(),
            screen: Some(screen),
        };
        let events = tick(&mut self.state, &input, dt);

        for event in &events {
            if let GameEvent::RunEnded { cause, score } = event {
                log::info!("Run over ({:?}), score {}", cause, score);
                self.highscores.record_score(*score, self.store.as_mut());
            }
        }

        build_frame(&self.state, &self.highscores, &self.settings, presenter);
        events
    }

    /// `frame` with the draw list and events bundled as JSON
    pub fn frame_json(&mut self, now_ms: f64, screen: Vec2) -> Result<String, serde_json::Error> {
        let mut draws: Vec<DrawCommand> = Vec::new();
        let events = self.frame(now_ms, screen, &mut draws);
        serde_json::to_string(&FrameOutput { events, draws })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn highscores(&self) -> &HighScores {
        &self.highscores
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings and persist them
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.settings.save(self.store.as_mut());
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }
}
