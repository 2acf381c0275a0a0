//! Data-driven game balance
//!
//! Every gameplay constant lives here so a build can be re-tuned from JSON
//! without touching the simulation. Missing fields fall back to `consts`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Spawn position of the craft's top-left corner
    pub player_start: Vec2,
    pub player_size: Vec2,
    pub gravity: f32,
    pub lift: f32,
    pub rotation_per_velocity: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub gate_gap: f32,
    pub obstacle_speed: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
    pub gate_margin: f32,

    // === Hitboxes ===
    pub player_hitbox_ratio: f32,
    pub body_hitbox_scale: f32,

    // === Animation ===
    pub background_frames: usize,
    pub background_frame_time: f32,
    pub boost_frames: usize,
    pub boost_frame_time: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            gravity: GRAVITY,
            lift: LIFT,
            rotation_per_velocity: ROTATION_PER_VELOCITY,

            obstacle_width: OBSTACLE_WIDTH,
            gate_gap: GATE_GAP,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            gate_margin: GATE_MARGIN,

            player_hitbox_ratio: PLAYER_HITBOX_RATIO,
            body_hitbox_scale: BODY_HITBOX_SCALE,

            background_frames: BACKGROUND_FRAMES,
            background_frame_time: BACKGROUND_FRAME_TIME,
            boost_frames: BOOST_FRAMES,
            boost_frame_time: BOOST_FRAME_TIME,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning override
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        log::info!(
            "Loaded tuning: gravity={}, lift={}, spawn every {}s",
            tuning.gravity,
            tuning.lift,
            tuning.spawn_interval
        );
        Ok(tuning)
    }
}
