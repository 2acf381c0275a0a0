//! Frame timers for sprite animation
//!
//! Purely cosmetic, but driven by the same tick delta as the gameplay timers.

/// Background loop: steps through the frames and back again (0,1,2,..,n-1,n-2,..)
#[derive(Debug, Clone)]
pub struct BackgroundAnimation {
    pub frame: usize,
    forward: bool,
    timer: f32,
}

impl Default for BackgroundAnimation {
    fn default() -> Self {
        Self {
            frame: 0,
            forward: true,
            timer: 0.0,
        }
    }
}

impl BackgroundAnimation {
    pub fn advance(&mut self, dt: f32, frame_time: f32, frames: usize) {
        self.timer += dt;
        if self.timer <= frame_time {
            return;
        }
        self.timer = 0.0;

        if frames < 2 {
            self.frame = 0;
            return;
        }

        if self.forward {
            self.frame += 1;
        } else {
            self.frame = self.frame.saturating_sub(1);
        }
        if self.frame >= frames - 1 {
            self.frame = frames - 1;
            self.forward = false;
        }
        if self.frame == 0 {
            self.forward = true;
        }
    }
}

/// Boost flame: cycles while boosting, snaps back to the first frame otherwise
#[derive(Debug, Clone, Default)]
pub struct BoostAnimation {
    pub frame: usize,
    timer: f32,
}

impl BoostAnimation {
    pub fn update(&mut self, boosting: bool, dt: f32, frame_time: f32, frames: usize) {
        if !boosting {
            self.frame = 0;
            return;
        }
        self.timer += dt;
        if self.timer > frame_time {
            self.frame = (self.frame + 1) % frames.max(1);
            self.timer = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer = 0.0;
    }
}
