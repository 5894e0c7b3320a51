//! State of the round in flight.

use glam::Vec2;

use super::phase::{round_timeline, BattleAction};
use crate::cards::CardKey;
use crate::core::{PhaseTimings, Rect, TableLayout};
use crate::motion::{Ease, Tween};
use crate::timeline::Sequencer;

/// Everything a running round owns: its timeline, the two played cards
/// and their position tweens.
#[derive(Clone, Debug)]
pub struct Round {
    pub(crate) timeline: Sequencer<BattleAction>,
    pub(crate) player_card: CardKey,
    /// `None` when the bot had nothing left to draw.
    pub(crate) bot_card: Option<CardKey>,
    /// Player cards used up by this play (1 solo, 2 fused).
    pub(crate) cards_consumed: usize,
    pub(crate) player_tween: Tween,
    pub(crate) bot_tween: Tween,
}

impl Round {
    /// A round waiting for its first tick. Both cards start where they
    /// appear: the player's on the result slot, the bot's just off-screen.
    #[must_use]
    pub fn new(
        timings: &PhaseTimings,
        layout: &TableLayout,
        player_card: CardKey,
        bot_card: Option<CardKey>,
        cards_consumed: usize,
    ) -> Self {
        let mut timeline = round_timeline(timings);
        timeline.reset();
        Self {
            timeline,
            player_card,
            bot_card,
            cards_consumed,
            player_tween: Tween::resting(layout.result_slot().pos),
            bot_tween: Tween::resting(bot_entry_point(layout)),
        }
    }

    #[must_use]
    pub fn player_card(&self) -> CardKey {
        self.player_card
    }

    #[must_use]
    pub fn bot_card(&self) -> Option<CardKey> {
        self.bot_card
    }

    #[must_use]
    pub fn cards_consumed(&self) -> usize {
        self.cards_consumed
    }

    /// Seconds since the current phase began.
    #[must_use]
    pub fn phase_elapsed(&self) -> f32 {
        self.timeline.frame_elapsed()
    }

    /// Fly both cards to their attack positions.
    pub(crate) fn start_travel(&mut self, timings: &PhaseTimings, layout: &TableLayout) {
        self.player_tween = Tween::new(
            layout.result_slot().pos,
            layout.left_slot().pos,
            timings.travel,
            Ease::OutCubic,
        );
        self.bot_tween = Tween::new(
            bot_entry_point(layout),
            layout.result_slot().pos,
            timings.travel,
            Ease::OutCubic,
        );
    }

    /// Send both cards off-screen: player left, bot right.
    pub(crate) fn start_exit(&mut self, timings: &PhaseTimings, layout: &TableLayout) {
        let width = layout.card_size.x;
        let player_from = self.player_tween.value();
        let bot_from = self.bot_tween.value();
        self.player_tween = Tween::new(
            player_from,
            Vec2::new(-1.5 * width, player_from.y),
            timings.exit,
            Ease::InCubic,
        );
        self.bot_tween = Tween::new(
            bot_from,
            Vec2::new(layout.screen_size.x + 1.5 * width, bot_from.y),
            timings.exit,
            Ease::InCubic,
        );
    }

    pub(crate) fn step(&mut self, dt: f32) {
        self.player_tween.step(dt);
        self.bot_tween.step(dt);
    }
}

/// Where the bot's card first appears: one card width past the right edge,
/// level with the result slot.
#[must_use]
pub fn bot_entry_point(layout: &TableLayout) -> Vec2 {
    Vec2::new(
        layout.screen_size.x + layout.card_size.x,
        layout.result_slot().pos.y,
    )
}

/// Rectangle of a played card at `pos`, before any shake.
#[must_use]
pub fn played_rect(layout: &TableLayout, pos: Vec2) -> Rect {
    Rect::new(pos, layout.card_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_lands_on_attack_positions() {
        let timings = PhaseTimings::default();
        let layout = TableLayout::default();
        let mut round = Round::new(&timings, &layout, CardKey(0), Some(CardKey(1)), 1);

        assert_eq!(round.player_tween.value(), layout.result_slot().pos);
        round.start_travel(&timings, &layout);
        round.step(timings.travel);
        assert!(round.player_tween.value().distance(layout.left_slot().pos) < 1e-3);
        assert!(round.bot_tween.value().distance(layout.result_slot().pos) < 1e-3);
    }

    #[test]
    fn test_exit_leaves_screen_in_opposite_directions() {
        let timings = PhaseTimings::default();
        let layout = TableLayout::default();
        let mut round = Round::new(&timings, &layout, CardKey(0), None, 2);
        round.start_travel(&timings, &layout);
        round.step(timings.travel);
        round.start_exit(&timings, &layout);
        round.step(timings.exit);

        assert!(round.player_tween.value().x + layout.card_size.x < 0.0);
        assert!(round.bot_tween.value().x > layout.screen_size.x);
    }
}
