//! Displayed health and card counters.
//!
//! The counters are a snapshot refreshed at specific points of a round,
//! not a live view, so the display changes in step with the animation.

use serde::{Deserialize, Serialize};

use super::participant::Participant;
use crate::core::Side;

/// One side's displayed counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsView {
    pub health: i32,
    pub cards: usize,
}

impl StatsView {
    /// Snapshot of a participant. The player shows deck plus hand, the bot
    /// shows only its deck.
    #[must_use]
    pub fn of(participant: &Participant) -> Self {
        Self {
            health: participant.health,
            cards: Self::card_count(participant),
        }
    }

    /// Refresh just the health counter.
    pub fn refresh_health(&mut self, participant: &Participant) {
        self.health = participant.health;
    }

    /// Refresh just the card counter.
    pub fn refresh_cards(&mut self, participant: &Participant) {
        self.cards = Self::card_count(participant);
    }

    fn card_count(participant: &Participant) -> usize {
        match participant.side {
            Side::Player => participant.remaining_cards(),
            Side::Bot => participant.deck.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardKey};
    use crate::zones::Deck;

    #[test]
    fn test_counts_per_side() {
        let deck = Deck::from_cards([1, 2, 3].map(CardId::new));
        let mut player = Participant::new(Side::Player, 20, deck.clone());
        let mut bot = Participant::new(Side::Bot, 30, deck);
        player.hand.push(CardKey(0));
        bot.hand.push(CardKey(1));

        assert_eq!(StatsView::of(&player), StatsView { health: 20, cards: 4 });
        assert_eq!(StatsView::of(&bot), StatsView { health: 30, cards: 3 });
    }

    #[test]
    fn test_partial_refresh() {
        let mut player = Participant::new(Side::Player, 20, Deck::new());
        let mut view = StatsView::of(&player);
        player.take_damage(4);
        player.hand.push(CardKey(0));

        view.refresh_health(&player);
        assert_eq!(view, StatsView { health: 16, cards: 0 });
        view.refresh_cards(&player);
        assert_eq!(view.cards, 1);
    }
}
