//! Frame clock: turns host timestamps into tick deltas

/// Longest delta fed to the simulation in one tick (seconds)
pub const MAX_FRAME_DT: f32 = 0.25;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Last host timestamp in milliseconds
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a timestamp (milliseconds, monotonic) and return the elapsed
    /// seconds since the previous one. The first call returns 0.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt.min(MAX_FRAME_DT)
    }
}
