//! Per-frame simulation tick
//!
//! Core game loop step. Time-based accumulators (spawn timer, animations)
//! advance by the frame delta; the player's physics advances one fixed step
//! per tick.

use glam::Vec2;

use super::state::{EndCause, GameEvent, GamePhase, GameState};
use crate::platform::Action;
use crate::ui::MenuLayout;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Actions queued since the previous tick, in arrival order
    pub actions: Vec<Action>,
    /// Logical screen size for this frame (None keeps the previous one)
    pub screen: Option<Vec2>,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(screen) = input.screen {
        state.screen = screen;
    }

    // Background animates in every phase
    state.background.advance(
        dt,
        state.tuning.background_frame_time,
        state.tuning.background_frames,
    );

    let layout = MenuLayout::for_screen(state.screen);
    for &action in &input.actions {
        handle_action(state, action, &layout, &mut events);
    }

    if state.phase == GamePhase::Playing {
        update_playing(state, dt, &mut events);
    }

    events
}

/// Apply one queued action. Actions are applied in order, so for latched
/// state (boosting) the last one in a tick wins.
fn handle_action(
    state: &mut GameState,
    action: Action,
    layout: &MenuLayout,
    events: &mut Vec<GameEvent>,
) {
    match action {
        Action::ActivateAt(pos) => {
            let start_hit = state.phase == GamePhase::Start && layout.start.contains(pos);
            let restart_hit = state.phase == GamePhase::GameOver && layout.restart.contains(pos);
            if start_hit || restart_hit {
                state.start_run();
                events.push(GameEvent::RunStarted);
                return;
            }

            // The fullscreen button only exists on the title screen
            if state.phase == GamePhase::Start
                && !state.fullscreen
                && layout.fullscreen.contains(pos)
            {
                state.fullscreen = true;
                log::info!("Fullscreen requested");
                events.push(GameEvent::FullscreenRequested);
                return;
            }

            // Anywhere else during a run, a tap is a lift
            if state.phase == GamePhase::Playing {
                lift(state);
            }
        }
        Action::LiftStart => {
            if state.phase == GamePhase::Playing {
                lift(state);
            }
        }
        Action::LiftEnd => {
            state.player.boosting = false;
        }
    }
}

fn lift(state: &mut GameState) {
    state.player.apply_lift();
    state.player.boosting = true;
}

/// Physics, obstacles, collisions, scoring, bounds
fn update_playing(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) {
    let GameState {
        tuning,
        player,
        obstacles,
        rng,
        boost,
        screen,
        score,
        ..
    } = state;

    player.integrate();
    boost.update(
        player.boosting,
        dt,
        tuning.boost_frame_time,
        tuning.boost_frames,
    );

    if let Some(spawned) = obstacles.update_spawn(dt, rng, screen.x, screen.y, tuning) {
        events.push(GameEvent::ObstacleSpawned {
            top: spawned.top,
            bottom: spawned.bottom,
        });
    }
    obstacles.scroll(tuning.obstacle_speed);

    let hitbox = player.hitbox(tuning.player_hitbox_ratio);
    let collided = obstacles
        .iter()
        .any(|o| o.hitbox(screen.y, tuning.body_hitbox_scale).overlaps(&hitbox));

    // Scoring runs alongside collision, not after it
    for _ in 0..obstacles.mark_passed(player.pos.x) {
        *score += 1;
        events.push(GameEvent::ObstaclePassed { score: *score });
    }

    obstacles.despawn_front();

    let out_of_bounds = player.out_of_bounds(screen.y);
    if collided {
        events.push(state.end_run(EndCause::Collision));
    } else if out_of_bounds {
        events.push(state.end_run(EndCause::OutOfBounds));
    }
}
