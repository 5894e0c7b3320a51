//! Drawing a battle frame.
//!
//! Back to front: the fusion table (slot frames, slotted cards, result
//! preview), the played cards, then the hand in hover/drag order.

use super::orchestrator::Battle;
use crate::core::Side;
use crate::fusion::SlotSide;
use crate::motion::{draw_order, CardLocation};
use crate::platform::{Renderer, TextureId};

impl Battle {
    /// Emit this frame's draw calls.
    pub fn render(&self, renderer: &mut impl Renderer) {
        self.render_table(renderer);

        for side in Side::ALL {
            let (Some(card), Some(rect)) = (self.played_card(side), self.played_card_rect(side))
            else {
                continue;
            };
            renderer.draw(TextureId::Card(card.id), rect, 0.0);
        }

        for key in draw_order(&self.arena, &self.sides[Side::Player].hand) {
            if let Some(card) = self.arena.get(key) {
                renderer.draw(TextureId::Card(card.id), card.motion.rect(), card.motion.rotation());
            }
        }
    }

    fn render_table(&self, renderer: &mut impl Renderer) {
        let layout = &self.config.layout;
        let offset = self.table.value();
        let result = layout.result_slot().translated(offset);

        for slot in SlotSide::ALL {
            renderer.draw(TextureId::SlotFrame, slot.rect(layout).translated(offset), 0.0);
        }
        renderer.draw(TextureId::SlotFrame, result, 0.0);

        for slot in SlotSide::ALL {
            let Some(card) = self.slots.get(slot).and_then(|key| self.arena.get(key)) else {
                continue;
            };
            if card.location() == CardLocation::Slot {
                renderer.draw(TextureId::Card(card.id), card.motion.rect().translated(offset), 0.0);
            }
        }

        if self.round.is_none() {
            if let Some(id) = self.fusion_preview().display_id(&self.arena) {
                renderer.draw(TextureId::Card(id), result, 0.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId, ContentRegistry};
    use crate::core::BattleConfig;
    use crate::platform::{DrawList, FrameInput, NullAudio};
    use std::sync::Arc;

    fn battle() -> Battle {
        let registry = ContentRegistry::from_definitions([
            CardDefinition::new(CardId::new(1), 2, 1),
            CardDefinition::new(CardId::new(2), 1, 2),
            CardDefinition::new(CardId::new(9), 5, 5).with_fusion(CardId::new(1), CardId::new(2)),
        ])
        .unwrap();
        Battle::new(BattleConfig::default().with_auto_fusion_chance(0.0), Arc::new(registry))
    }

    #[test]
    fn test_idle_frame_draws_table_and_hand() {
        let b = battle();
        let mut list = DrawList::new();
        b.render(&mut list);

        let frames = list
            .commands()
            .iter()
            .filter(|cmd| cmd.texture == TextureId::SlotFrame)
            .count();
        assert_eq!(frames, 3);
        assert_eq!(list.len(), 3 + b.hand().len());
    }

    #[test]
    fn test_slotted_card_is_previewed_in_result() {
        let mut b = battle();
        let key = b.hand()[0];
        let id = b.card(key).unwrap().id;
        let grab = b.card(key).unwrap().motion.rect().center();
        let target = b.slot_rect(SlotSide::Left).center();
        b.pointer_down(grab);
        b.pointer_up(target, &mut NullAudio);

        let mut list = DrawList::new();
        b.render(&mut list);
        let result = b.config().layout.result_slot();
        assert!(list.cards(id).any(|cmd| cmd.dst == result));
    }

    #[test]
    fn test_dragged_card_draws_last() {
        let mut b = battle();
        let key = b.hand()[2];
        let grab = b.card(key).unwrap().motion.rect().center();
        b.pointer_down(grab);
        b.update(FrameInput::new(0.016, grab), &mut NullAudio);

        let mut list = DrawList::new();
        b.render(&mut list);
        let last = list.commands().last().unwrap();
        assert_eq!(last.dst, b.card(key).unwrap().motion.rect());
    }
}
