//! Game state and core simulation types
//!
//! `GameState` owns everything the tick mutates. Nothing here touches the
//! platform; the host threads it through `tick` once per frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::animation::{BackgroundAnimation, BoostAnimation};
use super::collision::player_hitbox;
use super::obstacles::ObstacleField;
use super::shapes::{Circle, Rect};
use crate::consts::{BASE_HEIGHT, BASE_WIDTH};
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for START
    Start,
    /// Active run
    Playing,
    /// Run ended, waiting for RESTART
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndCause {
    Collision,
    OutOfBounds,
}

/// Things that happened during a tick, for hosts that react to them
/// (persistence, audio, fullscreen requests)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    RunStarted,
    ObstacleSpawned { top: f32, bottom: f32 },
    ObstaclePassed { score: u64 },
    RunEnded { cause: EndCause, score: u64 },
    FullscreenRequested,
}

/// The player's craft
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner; x never changes during a run
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels/tick, positive is down)
    pub velocity: f32,
    pub gravity: f32,
    pub lift: f32,
    /// Lift held (between lift-start and lift-end)
    pub boosting: bool,
    start: Vec2,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.player_start,
            size: tuning.player_size,
            velocity: 0.0,
            gravity: tuning.gravity,
            lift: tuning.lift,
            boosting: false,
            start: tuning.player_start,
        }
    }

    /// Back to the start position, at rest
    pub fn reset(&mut self) {
        self.pos = self.start;
        self.velocity = 0.0;
        self.boosting = false;
    }

    /// One physics step: velocity first, then position
    #[inline]
    pub fn integrate(&mut self) {
        self.velocity += self.gravity;
        self.pos.y += self.velocity;
    }

    /// Overwrite velocity with the lift impulse (not additive)
    #[inline]
    pub fn apply_lift(&mut self) {
        self.velocity = self.lift;
    }

    /// Presentation tilt in radians
    #[inline]
    pub fn rotation(&self, per_velocity: f32) -> f32 {
        self.velocity * per_velocity
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn hitbox(&self, ratio: f32) -> Circle {
        player_hitbox(&self.bounds(), ratio)
    }

    /// Above the top edge or below the bottom edge of the screen
    pub fn out_of_bounds(&self, screen_height: f32) -> bool {
        self.pos.y < 0.0 || self.pos.y + self.size.y > screen_height
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the obstacle RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    pub player: Player,
    pub obstacles: ObstacleField,
    /// Logical screen size, refreshed by the host every tick
    pub screen: Vec2,
    /// Set once a fullscreen request has been issued
    pub fullscreen: bool,
    pub background: BackgroundAnimation,
    pub boost: BoostAnimation,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning),
            tuning,
            phase: GamePhase::Start,
            score: 0,
            obstacles: ObstacleField::new(),
            screen: Vec2::new(BASE_WIDTH, BASE_HEIGHT),
            fullscreen: false,
            background: BackgroundAnimation::default(),
            boost: BoostAnimation::default(),
        }
    }

    /// Reset the run and enter `Playing`
    pub fn start_run(&mut self) {
        self.player.reset();
        self.obstacles.reset();
        self.boost.reset();
        self.score = 0;
        self.phase = GamePhase::Playing;
        log::info!("Run started");
    }

    /// Leave `Playing` for `GameOver`
    pub fn end_run(&mut self, cause: EndCause) -> GameEvent {
        self.phase = GamePhase::GameOver;
        self.player.boosting = false;
        log::info!("Run ended ({:?}) with score {}", cause, self.score);
        GameEvent::RunEnded {
            cause,
            score: self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_integrate_velocity_then_position() {
        let mut player = Player::new(&Tuning::default());
        player.velocity = 2.0;
        let y_before = player.pos.y;
        player.integrate();
        assert_eq!(player.velocity, 2.0 + GRAVITY);
        assert_eq!(player.pos.y, y_before + 2.0 + GRAVITY);
    }

    #[test]
    fn test_lift_overwrites_velocity() {
        let mut player = Player::new(&Tuning::default());
        for prior in [-30.0, -11.0, 0.0, 4.2, 55.0] {
            player.velocity = prior;
            player.apply_lift();
            assert_eq!(player.velocity, LIFT);
        }
        // Repeated lifts do not stack
        player.apply_lift();
        player.apply_lift();
        assert_eq!(player.velocity, LIFT);
    }

    #[test]
    fn test_velocity_is_not_clamped() {
        let mut player = Player::new(&Tuning::default());
        for _ in 0..1000 {
            player.integrate();
        }
        assert!((player.velocity - 1000.0 * GRAVITY).abs() < 0.01);
    }

    #[test]
    fn test_rotation_follows_velocity() {
        let mut player = Player::new(&Tuning::default());
        player.velocity = 10.0;
        assert!((player.rotation(ROTATION_PER_VELOCITY) - 0.35).abs() < 1e-6);
        player.velocity = LIFT;
        assert!(player.rotation(ROTATION_PER_VELOCITY) < 0.0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut player = Player::new(&Tuning::default());
        assert!(!player.out_of_bounds(BASE_HEIGHT));
        player.pos.y = -0.1;
        assert!(player.out_of_bounds(BASE_HEIGHT));
        player.pos.y = BASE_HEIGHT - PLAYER_HEIGHT;
        assert!(!player.out_of_bounds(BASE_HEIGHT));
        player.pos.y += 0.5;
        assert!(player.out_of_bounds(BASE_HEIGHT));
    }

    #[test]
    fn test_start_run_resets_everything() {
        let mut state = GameState::new(7);
        state.phase = GamePhase::GameOver;
        state.score = 12;
        state.player.pos.y = 600.0;
        state.player.velocity = 9.0;
        state
            .obstacles
            .spawn_at(BASE_WIDTH, &mut state.rng, BASE_HEIGHT, &Tuning::default());

        state.start_run();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
        assert_eq!(state.player.velocity, 0.0);
    }
}
