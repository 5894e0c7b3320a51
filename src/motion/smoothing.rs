//! Frame-rate independent exponential smoothing.
//!
//! `value += (target - value) * (1 - e^(-speed * dt))` covers the same
//! fraction of the remaining distance per second regardless of how the
//! second is sliced into frames.

/// Blend factor for one step of exponential smoothing.
///
/// A non-positive speed jumps straight to the target.
#[inline]
#[must_use]
pub fn smoothing_alpha(speed: f32, dt: f32) -> f32 {
    if speed <= 0.0 {
        return 1.0;
    }
    1.0 - (-speed * dt.max(0.0)).exp()
}

/// One step of exponential smoothing from `current` toward `target`.
#[inline]
#[must_use]
pub fn exp_lerp(current: f32, target: f32, speed: f32, dt: f32) -> f32 {
    current + (target - current) * smoothing_alpha(speed, dt)
}

/// Exponential smoothing that snaps onto the target once within `epsilon`,
/// so progress values actually arrive instead of approaching forever.
#[inline]
#[must_use]
pub fn approach(current: f32, target: f32, speed: f32, dt: f32, epsilon: f32) -> f32 {
    let next = exp_lerp(current, target, speed, dt);
    if (target - next).abs() < epsilon {
        target
    } else {
        next
    }
}

/// Exponential decay toward zero: `value * e^(-damping * dt)`.
#[inline]
#[must_use]
pub fn damp(value: f32, damping: f32, dt: f32) -> f32 {
    value * (-damping.max(0.0) * dt.max(0.0)).exp()
}
