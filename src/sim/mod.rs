//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or storage dependencies

pub mod animation;
pub mod autopilot;
pub mod collision;
pub mod obstacles;
pub mod shapes;
pub mod state;
pub mod tick;

pub use animation::{BackgroundAnimation, BoostAnimation};
pub use collision::{ObstacleHitbox, circle_circle_overlap, circle_rect_overlap, player_hitbox};
pub use obstacles::{Obstacle, ObstacleField, random_gate};
pub use shapes::{Circle, Rect};
pub use state::{EndCause, GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
