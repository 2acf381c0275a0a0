//! Space Riders entry point
//!
//! Natively this runs a headless demo: the autopilot flies one run at 60 Hz
//! against the on-disk leaderboard, then the result is logged. An optional
//! first argument names a tuning JSON file. The browser build starts from
//! `space_riders::web` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use space_riders::{Game, Tuning};
    use space_riders::consts::{BASE_HEIGHT, BASE_WIDTH};
    use space_riders::persistence::{FileStore, KeyValueStore, MemoryStore};
    use space_riders::platform;
    use space_riders::renderer::DrawCommand;
    use space_riders::sim::{GameEvent, GamePhase, GameState, autopilot};
    use space_riders::ui::MenuLayout;

    /// Give up after two minutes of simulated flight
    const MAX_FRAMES: u32 = 60 * 120;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    platform::init_logging();
    log::info!("Space Riders (headless) starting...");

    let store: Box<dyn KeyValueStore> = match FileStore::in_data_dir("space-riders") {
        Ok(store) => {
            log::info!("Saving to {}", store.dir().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!("{}; scores will not be kept", e);
            Box::new(MemoryStore::new())
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring tuning in {}: {}", path, e);
                Tuning::default()
            }),
            Err(e) => {
                log::warn!("Could not read {}: {}", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let screen = glam::Vec2::new(BASE_WIDTH, BASE_HEIGHT);
    let mut game = Game::with_state(GameState::with_tuning(seed, tuning), store);
    game.activate_at(MenuLayout::for_screen(screen).start.center());

    let mut draws: Vec<DrawCommand> = Vec::new();
    let mut frames = 0;
    while frames < MAX_FRAMES {
        if autopilot::wants_lift(game.state()) {
            game.press_lift();
        } else {
            game.release_lift();
        }

        draws.clear();
        let events = game.frame(frames as f64 * FRAME_MS, screen, &mut draws);
        for event in &events {
            if let GameEvent::ObstaclePassed { score } = event {
                log::debug!("Passed gate, score {}", score);
            }
        }

        frames += 1;
        if game.phase() == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "Run finished after {} frames with score {} (best: {:?})",
        frames,
        game.score(),
        game.highscores().top_score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // `web::wasm_main` is the browser entry point
}
