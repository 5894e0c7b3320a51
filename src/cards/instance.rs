//! Card instances - runtime card state.
//!
//! A `Card` is one physical copy in play: its identity and stats copied from
//! the definition, the side that owns it, and its motion state. Cards still
//! in a deck are not instantiated; a `Card` is created when it is drawn or
//! produced by fusion and destroyed when it is consumed or leaves play.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use crate::core::{MotionConfig, Side};
use crate::motion::{CardLocation, CardMotion};

/// Arena key of a card instance.
///
/// Keys are never reused within one battle, so a stale key simply misses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardKey(pub u32);

impl CardKey {
    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CardKey({})", self.0)
    }
}

/// A card instance in a battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub key: CardKey,
    pub id: CardId,
    pub attack: i32,
    pub defense: i32,
    /// Back-reference to the side holding this card.
    pub owner: Side,
    pub motion: CardMotion,
}

impl Card {
    /// Instantiate a definition for `owner`.
    #[must_use]
    pub fn new(
        key: CardKey,
        def: &CardDefinition,
        owner: Side,
        size: Vec2,
        tuning: MotionConfig,
    ) -> Self {
        Self {
            key,
            id: def.id,
            attack: def.attack,
            defense: def.defense,
            owner,
            motion: CardMotion::new(size, tuning),
        }
    }

    #[must_use]
    pub fn location(&self) -> CardLocation {
        self.motion.location()
    }
}
