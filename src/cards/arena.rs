//! Card arena: single owner of every card instance in a battle.
//!
//! Hands, fusion slots and in-flight references all store `CardKey`s into
//! the arena. Moving a card between them is a key handoff plus a location
//! update on the card itself; the card data never moves or duplicates.

use glam::Vec2;
use rustc_hash::FxHashMap;

use super::definition::CardDefinition;
use super::instance::{Card, CardKey};
use crate::core::{MotionConfig, Side};

/// Indexed storage for live card instances.
///
/// ## Usage
///
/// ```
/// use fusion_duel::cards::{CardArena, CardDefinition, CardId};
/// use fusion_duel::core::{MotionConfig, Side};
/// use glam::Vec2;
///
/// let mut arena = CardArena::new(Vec2::new(120.0, 168.0), MotionConfig::default());
/// let def = CardDefinition::new(CardId::new(1), 3, 2);
///
/// let key = arena.spawn(&def, Side::Player);
/// assert_eq!(arena.get(key).unwrap().attack, 3);
///
/// arena.remove(key);
/// assert!(arena.get(key).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct CardArena {
    cards: FxHashMap<CardKey, Card>,
    next_key: u32,
    card_size: Vec2,
    tuning: MotionConfig,
}

impl CardArena {
    /// Create an empty arena whose cards share one size and motion tuning.
    #[must_use]
    pub fn new(card_size: Vec2, tuning: MotionConfig) -> Self {
        Self {
            cards: FxHashMap::default(),
            next_key: 0,
            card_size,
            tuning,
        }
    }

    /// Instantiate a card for `owner` and return its key.
    pub fn spawn(&mut self, def: &CardDefinition, owner: Side) -> CardKey {
        let key = CardKey(self.next_key);
        self.next_key += 1;
        self.cards
            .insert(key, Card::new(key, def, owner, self.card_size, self.tuning));
        key
    }

    #[must_use]
    pub fn get(&self, key: CardKey) -> Option<&Card> {
        self.cards.get(&key)
    }

    pub fn get_mut(&mut self, key: CardKey) -> Option<&mut Card> {
        self.cards.get_mut(&key)
    }

    /// Destroy a card. Returns it if it was live.
    pub fn remove(&mut self, key: CardKey) -> Option<Card> {
        self.cards.remove(&key)
    }

    #[must_use]
    pub fn contains(&self, key: CardKey) -> bool {
        self.cards.contains_key(&key)
    }

    /// Number of live cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Live cards owned by `side`, in no particular order.
    pub fn owned_by(&self, side: Side) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(move |c| c.owner == side)
    }

    #[must_use]
    pub fn card_size(&self) -> Vec2 {
        self.card_size
    }
}
