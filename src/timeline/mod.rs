//! Time-driven choreography.
//!
//! ## Key Types
//!
//! - `Frame`: action tags plus a duration
//! - `Sequencer`: plays frames against elapsed time, firing each frame's
//!   actions exactly once per run

pub mod sequencer;

pub use sequencer::{Fired, Frame, Sequencer};
