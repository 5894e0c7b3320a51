//! Pointer handling: picking cards up and dropping them on the table.

use glam::Vec2;

use super::orchestrator::Battle;
use crate::cards::CardKey;
use crate::core::{Rect, Side, TableLayout};
use crate::fusion::SlotSide;
use crate::motion::CardLocation;
use crate::platform::{AudioSink, Sound};

impl Battle {
    /// Pointer pressed at `pos`. Picks up the first hand card under the
    /// pointer, else a card sitting on the left slot, else the right slot.
    ///
    /// Returns whether a drag started.
    pub fn pointer_down(&mut self, pos: Vec2) -> bool {
        if !self.is_interactive() || self.dragged.is_some() {
            return false;
        }
        let Some(key) = self.pick_card(pos) else {
            return false;
        };

        // Picking a card off a slot hands it back to the drag.
        if let Some(slot) = self.slots.find(key) {
            self.slots.take(slot);
        }
        if let Some(card) = self.arena.get_mut(key) {
            card.motion.start_drag(pos);
        }
        self.dragged = Some(key);
        log::debug!("Dragging {}", key);
        true
    }

    /// Pointer released at `pos`. Drops the dragged card on the nearer slot
    /// if it overlaps either, otherwise returns it to the hand.
    ///
    /// Returns `false` when nothing was being dragged.
    pub fn pointer_up(&mut self, pos: Vec2, audio: &mut impl AudioSink) -> bool {
        let Some(key) = self.dragged.take() else {
            return false;
        };
        let layout = self.config.layout;

        let Some(card) = self.arena.get_mut(key) else {
            return false;
        };
        card.motion.update_drag_position(pos, 0.0);

        let Some(slot) = drop_target(&layout, &card.motion.rect()) else {
            card.motion.return_to_hand();
            log::debug!("{} returned to hand", key);
            return true;
        };

        card.motion.place_in_slot(slot.rect(&layout));
        if let Some(displaced) = self.slots.set(slot, key) {
            if let Some(card) = self.arena.get_mut(displaced) {
                card.motion.return_to_hand();
            }
        }
        audio.play(Sound::CardPlace);
        log::debug!("{} dropped on {:?} slot", key, slot);
        true
    }

    fn pick_card(&self, pos: Vec2) -> Option<CardKey> {
        let hit = |key: &CardKey| {
            self.arena
                .get(*key)
                .is_some_and(|card| card.motion.contains_point(pos))
        };

        let in_hand = self.sides[Side::Player].hand.iter().copied().find(|key| {
            hit(key)
                && self
                    .arena
                    .get(*key)
                    .is_some_and(|card| card.location() == CardLocation::Hand)
        });

        in_hand.or_else(|| {
            SlotSide::ALL
                .into_iter()
                .filter_map(|slot| self.slots.get(slot))
                .find(hit)
        })
    }
}

/// Slot a card dropped with rectangle `rect` lands on.
///
/// The card must overlap at least one slot. It then goes to the slot whose
/// left edge is horizontally nearer; ties go right.
#[must_use]
pub fn drop_target(layout: &TableLayout, rect: &Rect) -> Option<SlotSide> {
    let left = layout.left_slot();
    let right = layout.right_slot();
    if !rect.overlaps(&left) && !rect.overlaps(&right) {
        return None;
    }

    let to_left = (rect.pos.x - left.pos.x).abs();
    let to_right = (rect.pos.x - right.pos.x).abs();
    Some(if to_left < to_right {
        SlotSide::Left
    } else {
        SlotSide::Right
    })
}
