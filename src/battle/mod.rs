//! The battle: rounds, damage and the win/loss decision.
//!
//! ## Key Types
//!
//! - `Battle`: owns the duel and runs rounds frame by frame
//! - `BattlePhase` / `BattleAction`: round phases and the timeline tags
//!   that enter them
//! - `Round`: the played cards and timeline of the round in flight
//! - `Participant`: one side's health, deck and hand
//! - `StatsView`: displayed counters
//! - `GameOutcome`: terminal result from the player's perspective
//!
//! ## Frame contract
//!
//! The host calls `update` once per frame, then `render`. Pointer events go
//! through `pointer_down`/`pointer_up` and the play button through `play`;
//! all three are ignored while a round runs or after the battle ended.

mod input;
pub mod orchestrator;
pub mod outcome;
pub mod participant;
pub mod phase;
mod render;
pub mod round;
pub mod stats;

pub use input::drop_target;
pub use orchestrator::Battle;
pub use outcome::{attack_damage, GameOutcome};
pub use participant::Participant;
pub use phase::{round_timeline, BattleAction, BattlePhase};
pub use round::Round;
pub use stats::StatsView;
