//! Space Riders - A single-screen arcade flyer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `renderer`: Draw commands handed to the presentation layer
//! - `ui`: Menu layout derived from the screen size
//! - `platform`: Input queue, frame clock, logger setup
//! - `persistence`: Key-value stores backing highscores and settings
//! - `tuning`: Data-driven game balance
//! - `web`: `wasm-bindgen` entry point and `WebGame` (wasm32 only)

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::Game;
pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical screen size before any fullscreen resize
    pub const BASE_WIDTH: f32 = 360.0;
    pub const BASE_HEIGHT: f32 = 640.0;

    /// Player craft defaults
    pub const PLAYER_START_X: f32 = 80.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    /// Added to velocity every tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.61;
    /// Velocity set by a lift action (pixels/tick, negative is up)
    pub const LIFT: f32 = -11.0;
    /// Presentation tilt per unit of velocity (radians)
    pub const ROTATION_PER_VELOCITY: f32 = 0.035;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const GATE_GAP: f32 = 170.0;
    /// Leftward scroll per tick (pixels)
    pub const OBSTACLE_SPEED: f32 = 2.5;
    /// Seconds between spawns
    pub const SPAWN_INTERVAL: f32 = 1.4;
    /// Minimum height of either obstacle segment
    pub const GATE_MARGIN: f32 = 60.0;

    /// Player hitbox radius as a fraction of the smaller player dimension
    pub const PLAYER_HITBOX_RATIO: f32 = 0.35;
    /// Obstacle bodies are shortened to this fraction of their visual height
    pub const BODY_HITBOX_SCALE: f32 = 0.9;

    /// Background animation (ping-pong over the frames)
    pub const BACKGROUND_FRAMES: usize = 5;
    pub const BACKGROUND_FRAME_TIME: f32 = 0.070;

    /// Boost flame animation
    pub const BOOST_FRAMES: usize = 4;
    pub const BOOST_FRAME_TIME: f32 = 0.050;

    /// Highscore list capacity
    pub const MAX_HIGH_SCORES: usize = 3;
}
