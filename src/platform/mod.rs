//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (queued as abstract actions)
//! - Time/ticks (frame deltas from host timestamps)
//! - Logger setup (env_logger natively, console on web)

pub mod input;
pub mod time;

pub use input::{Action, ActionQueue};
pub use time::FrameClock;

/// Install the logger for this platform. Safe to call more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Install the logger and panic hook for the browser
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
