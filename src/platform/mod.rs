//! Host collaborator seams.
//!
//! The battle never touches a window, an audio device or asset files. Each
//! frame the host passes a `FrameInput` in, and the battle talks back
//! through a `Renderer` and an `AudioSink`.
//!
//! ## Key Types
//!
//! - `FrameInput`: elapsed time and pointer position for one tick
//! - `Renderer` / `DrawList`: textured-rectangle drawing
//! - `AudioSink` / `Sound`: sound-effect triggers

pub mod audio;
pub mod render;

pub use audio::{AudioSink, NullAudio, Sound};
pub use render::{DrawCommand, DrawList, Renderer, TextureId};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Per-tick input from the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Seconds since the previous tick.
    pub dt: f32,
    /// Pointer position in screen space.
    pub pointer: Vec2,
}

impl FrameInput {
    #[must_use]
    pub fn new(dt: f32, pointer: Vec2) -> Self {
        Self { dt, pointer }
    }
}
