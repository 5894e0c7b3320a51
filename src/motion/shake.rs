//! Attack shake: a decaying two-axis wobble applied to the attacking card.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::core::ShakeConfig;

/// Displacement of a shaking card `elapsed` seconds into a shake of
/// `duration` seconds. Falls off linearly to zero by the end.
#[must_use]
pub fn shake_offset(config: &ShakeConfig, elapsed: f32, duration: f32) -> Vec2 {
    let phase = elapsed * config.frequency * TAU;
    let progress = if duration > 0.0 {
        (elapsed / duration).min(1.0)
    } else {
        1.0
    };
    let falloff = (1.0 - progress).max(0.0);

    Vec2::new(
        phase.sin() * config.amplitude * falloff,
        (phase * 0.7 + 1.3).sin() * config.amplitude * falloff,
    )
}
