//! Obstacle generation and lifecycle
//!
//! Obstacles spawn at the right edge on a fixed cadence and scroll left at a
//! constant speed. Spawn order is screen order, so the oldest obstacle is
//! always at the front and is the only one that can leave the screen.

use std::collections::VecDeque;

use rand::Rng;

use super::collision::ObstacleHitbox;
use crate::tuning::Tuning;

/// A gated obstacle: a pillar from the top, a pillar from the bottom, and the
/// gap between them
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Height of the top pillar
    pub top: f32,
    /// Height of the bottom pillar
    pub bottom: f32,
    /// Already counted toward the score
    pub passed: bool,
}

impl Obstacle {
    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Fully scrolled past the left edge of the screen
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.x < -self.width
    }

    pub fn hitbox(&self, screen_height: f32, body_scale: f32) -> ObstacleHitbox {
        ObstacleHitbox::new(self, screen_height, body_scale)
    }
}

/// Live obstacles plus the spawn timer
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    obstacles: VecDeque<Obstacle>,
    /// Seconds since the last spawn
    spawn_timer: f32,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every obstacle and restart the spawn cadence
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0.0;
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Obstacles in spawn (left-to-right) order
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn front(&self) -> Option<&Obstacle> {
        self.obstacles.front()
    }

    /// Accumulate `dt` and spawn once the interval is exceeded.
    /// Returns the new obstacle, if any.
    pub fn update_spawn<R: Rng>(
        &mut self,
        dt: f32,
        rng: &mut R,
        screen_width: f32,
        screen_height: f32,
        tuning: &Tuning,
    ) -> Option<&Obstacle> {
        self.spawn_timer += dt;
        if self.spawn_timer <= tuning.spawn_interval {
            return None;
        }
        self.spawn_timer = 0.0;
        Some(self.spawn_at(screen_width, rng, screen_height, tuning))
    }

    /// Append an obstacle at `x` with a random gate
    pub fn spawn_at<R: Rng>(
        &mut self,
        x: f32,
        rng: &mut R,
        screen_height: f32,
        tuning: &Tuning,
    ) -> &Obstacle {
        let (top, bottom) = random_gate(rng, screen_height, tuning);
        log::debug!("Spawned obstacle at x={x}: top={top:.1}, bottom={bottom:.1}");
        self.obstacles.push_back(Obstacle {
            x,
            width: tuning.obstacle_width,
            top,
            bottom,
            passed: false,
        });
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Move every obstacle left by `speed`
    pub fn scroll(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
    }

    /// Mark obstacles whose trailing edge is behind `player_x`.
    /// Returns how many were newly passed.
    pub fn mark_passed(&mut self, player_x: f32) -> u32 {
        let mut newly_passed = 0;
        for obstacle in &mut self.obstacles {
            if !obstacle.passed && obstacle.right() < player_x {
                obstacle.passed = true;
                newly_passed += 1;
            }
        }
        newly_passed
    }

    /// Remove the front obstacle if it has left the screen
    pub fn despawn_front(&mut self) -> Option<Obstacle> {
        if self.obstacles.front().is_some_and(Obstacle::is_offscreen) {
            self.obstacles.pop_front()
        } else {
            None
        }
    }

    /// Insert a prepared obstacle at the back (tests and replays)
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push_back(obstacle);
    }
}

/// Pick pillar heights so `top + gap + bottom == screen_height` and neither
/// pillar is shorter than the gate margin. On a screen too short for the full
/// gap plus both margins the gap shrinks first, then the margins, so both
/// pillars keep a positive height.
pub fn random_gate<R: Rng>(rng: &mut R, screen_height: f32, tuning: &Tuning) -> (f32, f32) {
    let screen_height = screen_height.max(0.0);
    let margin = tuning.gate_margin.min(screen_height / 2.0);
    let gap = tuning.gate_gap.min(screen_height - 2.0 * margin);
    let span = (screen_height - gap - 2.0 * margin).max(0.0);
    let top = rng.random::<f32>() * span + margin;
    let bottom = (screen_height - top - gap).max(margin);
    (top, bottom)
}
