//! Continuous, time-based card animation.
//!
//! ## Key Types
//!
//! - `CardMotion`: per-card location plus hover/entry/drag state
//! - `Tween`: fixed-duration moves used by the round's travel and exit
//! - `shake_offset`: decaying wobble of an attacking card
//! - `hand_layout`: hand row placement, hover pick and draw order
//!
//! Everything advances by an explicit `dt` and smooths exponentially, so
//! motion looks the same at any frame rate.

pub mod card_motion;
pub mod hand_layout;
pub mod shake;
pub mod smoothing;
pub mod tween;

pub use card_motion::{CardLocation, CardMotion};
pub use hand_layout::{draw_order, hand_anchor, layout_hand, update_hand};
pub use shake::shake_offset;
pub use smoothing::{approach, damp, exp_lerp, smoothing_alpha};
pub use tween::{Ease, Tween};
