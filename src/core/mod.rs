//! Core building blocks: sides, RNG, configuration, geometry, errors.
//!
//! Everything else in the crate depends on these; they depend on nothing
//! else in the crate except `cards::CardId` for error reporting.

pub mod config;
pub mod error;
pub mod geometry;
pub mod rng;
pub mod side;

pub use config::{BattleConfig, MotionConfig, PhaseTimings, RuleConfig, ShakeConfig, TableLayout};
pub use error::ContentError;
pub use geometry::Rect;
pub use rng::GameRng;
pub use side::{Side, SideMap};
