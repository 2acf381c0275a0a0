//! Demo pilot for attract mode and headless runs
//!
//! Steers toward the center of the next gate: lift whenever the craft is
//! falling and has sunk below the target band.

use super::state::{GamePhase, GameState};

/// Vertical target for the craft's center: the middle of the first gate not
/// yet behind the hitbox, or mid-screen when the sky is empty
pub fn target_y(state: &GameState) -> f32 {
    let hitbox = state.player.hitbox(state.tuning.player_hitbox_ratio);
    let trailing = hitbox.center.x - hitbox.radius;
    state
        .obstacles
        .iter()
        .find(|o| o.right() >= trailing)
        .map(|o| o.top + state.tuning.gate_gap / 2.0)
        .unwrap_or(state.screen.y / 2.0)
}

/// Should the pilot lift this tick?
pub fn wants_lift(state: &GameState) -> bool {
    if state.phase != GamePhase::Playing || state.player.velocity < 0.0 {
        return false;
    }
    let center_y = state.player.hitbox(state.tuning.player_hitbox_ratio).center.y;
    center_y > target_y(state) + state.tuning.gate_gap / 4.0
}
