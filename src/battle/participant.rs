//! One side of the duel: health, deck and hand.

use crate::cards::{CardArena, CardId, CardKey, ContentRegistry};
use crate::core::Side;
use crate::zones::Deck;

/// A duelling side's resources.
///
/// The hand stores arena keys in draw order. A hand card may sit on a
/// fusion slot or be dragged; it stays in the hand until it is played.
#[derive(Clone, Debug)]
pub struct Participant {
    pub side: Side,
    /// Not clamped; may go below zero on the killing blow.
    pub health: i32,
    pub deck: Deck,
    pub hand: Vec<CardKey>,
}

impl Participant {
    #[must_use]
    pub fn new(side: Side, health: i32, deck: Deck) -> Self {
        Self {
            side,
            health,
            deck,
            hand: Vec::new(),
        }
    }

    /// Draw the top card into the hand. Returns `None` on an empty deck.
    pub fn draw(&mut self, arena: &mut CardArena, registry: &ContentRegistry) -> Option<CardKey> {
        let id = self.deck.draw()?;
        self.add_to_hand(id, arena, registry)
    }

    /// Instantiate `id` for this side and append it to the hand.
    pub fn add_to_hand(
        &mut self,
        id: CardId,
        arena: &mut CardArena,
        registry: &ContentRegistry,
    ) -> Option<CardKey> {
        let Some(def) = registry.get(id) else {
            log::warn!("{} got {} which is not in the content registry", self.side, id);
            return None;
        };
        let key = arena.spawn(def, self.side);
        self.hand.push(key);
        log::debug!("{} took {} into hand as {}", self.side, id, key);
        Some(key)
    }

    /// Remove `key` from the hand. Returns whether it was there.
    pub fn remove_from_hand(&mut self, key: CardKey) -> bool {
        let before = self.hand.len();
        self.hand.retain(|&k| k != key);
        self.hand.len() != before
    }

    #[must_use]
    pub fn holds(&self, key: CardKey) -> bool {
        self.hand.contains(&key)
    }

    /// Cards left to play: deck plus hand.
    #[must_use]
    pub fn remaining_cards(&self) -> usize {
        self.deck.len() + self.hand.len()
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}
