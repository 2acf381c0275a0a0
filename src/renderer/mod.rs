//! Draw-command rendering
//!
//! The core never paints. Each frame it describes what to draw as a list of
//! `DrawCommand`s; a host presenter (canvas, GPU, terminal, test recorder)
//! turns them into pixels.

pub mod commands;
pub mod frame;

pub use commands::{DrawCommand, HitboxShape, PillarAnchor, PlayerSprite, Presenter, TextAlign};
pub use frame::build_frame;
