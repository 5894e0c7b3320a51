//! Fusion: combining two card identities into a stronger one.
//!
//! ## Key Types
//!
//! - `CombinationTable`: order-independent recipe lookup
//! - `FusionSlots`: the table's left/right slots
//! - `FusionPreview`: what the result position shows right now
//! - `try_auto_fusion`: the bot's in-deck fusion before drawing

pub mod auto_fusion;
pub mod slots;
pub mod table;

pub use auto_fusion::{find_deck_fusion, try_auto_fusion, DeckFusion};
pub use slots::{FusionPreview, FusionSlots, SlotSide};
pub use table::CombinationTable;
