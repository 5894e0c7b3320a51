//! Decks: ordered stacks of card identities drawn from the top.
//!
//! Cards in a deck are not instantiated yet; a deck only records which
//! definitions remain and in what order. Backed by `im::Vector` so a deck
//! clones in O(1) with the rest of the battle.

use im::Vector;

use crate::cards::{CardId, ContentRegistry};
use crate::core::GameRng;

/// Ordered stack of undrawn cards. The top is the back of the vector.
///
/// ## Usage
///
/// ```
/// use fusion_duel::cards::CardId;
/// use fusion_duel::zones::Deck;
///
/// let mut deck = Deck::from_cards([CardId::new(1), CardId::new(2)]);
/// assert_eq!(deck.draw(), Some(CardId::new(2)));
/// assert_eq!(deck.draw(), Some(CardId::new(1)));
/// assert_eq!(deck.draw(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vector<CardId>,
}

impl Deck {
    /// An empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A deck with `cards` in order, the last one on top.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// `copies` of every base card in the registry, shuffled.
    #[must_use]
    pub fn build(registry: &ContentRegistry, copies: usize, rng: &mut GameRng) -> Self {
        let mut cards: Vec<CardId> = registry
            .base_cards()
            .flat_map(|def| std::iter::repeat(def.id).take(copies))
            .collect();
        rng.shuffle(&mut cards);
        Self::from_cards(cards)
    }

    /// Take the top card. An empty deck yields `None`.
    pub fn draw(&mut self) -> Option<CardId> {
        self.cards.pop_back()
    }

    /// Remove the card at `index` (0 = bottom).
    pub fn remove_at(&mut self, index: usize) -> Option<CardId> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }
}
