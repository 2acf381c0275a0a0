//! Logical draw commands, in screen coordinates

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Circle, Rect};

/// Which sprite the craft uses this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerSprite {
    Idle,
    /// Boost flame animation frame
    Boost(usize),
}

/// Which screen edge a pillar grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PillarAnchor {
    /// Hangs from the top edge (sprite drawn flipped)
    Top,
    /// Stands on the bottom edge
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    Left,
    Center,
}

/// Debug outline of a collision primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum HitboxShape {
    Player(Circle),
    Body(Rect),
    Cap(Circle),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Full-screen background image
    Background { frame: usize },
    /// Craft sprite; `rotation` is about the sprite's center
    Player {
        pos: Vec2,
        size: Vec2,
        rotation: f32,
        sprite: PlayerSprite,
    },
    Pillar {
        x: f32,
        width: f32,
        height: f32,
        anchor: PillarAnchor,
    },
    /// Outlined text; `pos` is the baseline anchor
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        align: TextAlign,
    },
    /// Outlined button with a centered label
    Button {
        rect: Rect,
        label: &'static str,
        size: f32,
    },
    /// In-run score overlay
    Score { value: u64, pos: Vec2, size: f32 },
    Hitbox(HitboxShape),
}

/// Consumer of draw commands
pub trait Presenter {
    fn draw(&mut self, command: DrawCommand);
}

/// Recording presenter
impl Presenter for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}
