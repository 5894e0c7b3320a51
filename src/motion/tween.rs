//! Fixed-duration position tweens for the round's travel and exit moves.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized tween time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    /// Fast start, gentle landing (cards arriving).
    OutCubic,
    /// Gentle start, fast finish (cards leaving).
    InCubic,
}

impl Ease {
    /// Map `t` in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::OutCubic => 1.0 - (1.0 - t).powi(3),
            Ease::InCubic => t * t * t,
        }
    }
}

/// Interpolates a point from `from` to `to` over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub from: Vec2,
    pub to: Vec2,
    pub duration: f32,
    pub ease: Ease,
    elapsed: f32,
}

impl Tween {
    #[must_use]
    pub fn new(from: Vec2, to: Vec2, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            ease,
            elapsed: 0.0,
        }
    }

    /// A tween that is already finished at `at`.
    #[must_use]
    pub fn resting(at: Vec2) -> Self {
        Self::new(at, at, 0.0, Ease::Linear)
    }

    /// Advance by `dt` and return the new position.
    pub fn step(&mut self, dt: f32) -> Vec2 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    /// Current position without advancing.
    #[must_use]
    pub fn value(&self) -> Vec2 {
        self.from.lerp(self.to, self.ease.apply(self.progress()))
    }

    /// Normalized progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}
