//! The fusion table's two slots and what its result position shows.

use serde::{Deserialize, Serialize};

use crate::cards::{CardArena, CardId, CardKey, ContentRegistry};
use crate::core::{Rect, TableLayout};

/// One of the two placement targets on the fusion table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotSide {
    Left,
    Right,
}

impl SlotSide {
    pub const ALL: [SlotSide; 2] = [SlotSide::Left, SlotSide::Right];

    /// Resting rectangle of this slot on the table.
    #[must_use]
    pub fn rect(self, layout: &TableLayout) -> Rect {
        match self {
            SlotSide::Left => layout.left_slot(),
            SlotSide::Right => layout.right_slot(),
        }
    }
}

/// What the result position of the table currently holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FusionPreview {
    /// Both slots empty.
    Empty,
    /// Exactly one slot filled; that card is played unfused.
    Solo(CardKey),
    /// Both slots filled and the pair fuses.
    Fused { result: CardId, sources: [CardKey; 2] },
    /// Both slots filled with a pair that does not fuse.
    NoMatch,
}

impl FusionPreview {
    /// Whether pressing play would start a round.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        matches!(self, FusionPreview::Solo(_) | FusionPreview::Fused { .. })
    }

    /// Card identity to draw at the result position, if any.
    #[must_use]
    pub fn display_id(&self, arena: &CardArena) -> Option<CardId> {
        match *self {
            FusionPreview::Solo(key) => arena.get(key).map(|c| c.id),
            FusionPreview::Fused { result, .. } => Some(result),
            FusionPreview::Empty | FusionPreview::NoMatch => None,
        }
    }
}

/// Left/right slot occupancy. Holds keys only; cards stay in the arena.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FusionSlots {
    left: Option<CardKey>,
    right: Option<CardKey>,
}

impl FusionSlots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, side: SlotSide) -> Option<CardKey> {
        match side {
            SlotSide::Left => self.left,
            SlotSide::Right => self.right,
        }
    }

    /// Put `key` in a slot, returning the card it displaced.
    pub fn set(&mut self, side: SlotSide, key: CardKey) -> Option<CardKey> {
        self.slot_mut(side).replace(key)
    }

    /// Empty a slot, returning its card.
    pub fn take(&mut self, side: SlotSide) -> Option<CardKey> {
        self.slot_mut(side).take()
    }

    /// Which slot holds `key`, if any.
    #[must_use]
    pub fn find(&self, key: CardKey) -> Option<SlotSide> {
        SlotSide::ALL.into_iter().find(|&side| self.get(side) == Some(key))
    }

    /// Number of filled slots.
    #[must_use]
    pub fn filled(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }

    /// Evaluate the result position.
    #[must_use]
    pub fn preview(&self, arena: &CardArena, registry: &ContentRegistry) -> FusionPreview {
        match (self.left, self.right) {
            (None, None) => FusionPreview::Empty,
            (Some(key), None) | (None, Some(key)) => FusionPreview::Solo(key),
            (Some(left), Some(right)) => {
                let ids = arena.get(left).zip(arena.get(right)).map(|(l, r)| (l.id, r.id));
                match ids.and_then(|(a, b)| registry.check_fusion(a, b)) {
                    Some(result) => FusionPreview::Fused {
                        result,
                        sources: [left, right],
                    },
                    None => FusionPreview::NoMatch,
                }
            }
        }
    }

    fn slot_mut(&mut self, side: SlotSide) -> &mut Option<CardKey> {
        match side {
            SlotSide::Left => &mut self.left,
            SlotSide::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;
    use crate::core::{MotionConfig, Side};
    use glam::Vec2;

    fn fixture() -> (CardArena, ContentRegistry) {
        let registry = ContentRegistry::from_definitions([
            CardDefinition::new(CardId::new(3), 2, 1),
            CardDefinition::new(CardId::new(7), 1, 3),
            CardDefinition::new(CardId::new(8), 1, 1),
            CardDefinition::new(CardId::new(12), 6, 4).with_fusion(CardId::new(3), CardId::new(7)),
        ])
        .unwrap();
        let arena = CardArena::new(Vec2::new(10.0, 14.0), MotionConfig::default());
        (arena, registry)
    }

    fn spawn(arena: &mut CardArena, registry: &ContentRegistry, id: u32) -> CardKey {
        arena.spawn(registry.get(CardId::new(id)).unwrap(), Side::Player)
    }

    #[test]
    fn test_empty_preview() {
        let (arena, registry) = fixture();
        let slots = FusionSlots::new();
        assert_eq!(slots.preview(&arena, &registry), FusionPreview::Empty);
        assert!(!slots.preview(&arena, &registry).is_playable());
    }

    #[test]
    fn test_single_card_is_shown_unfused() {
        let (mut arena, registry) = fixture();
        let key = spawn(&mut arena, &registry, 8);
        let mut slots = FusionSlots::new();
        slots.set(SlotSide::Right, key);

        let preview = slots.preview(&arena, &registry);
        assert_eq!(preview, FusionPreview::Solo(key));
        assert_eq!(preview.display_id(&arena), Some(CardId::new(8)));
    }

    #[test]
    fn test_matching_pair_fuses_in_either_order() {
        let (mut arena, registry) = fixture();
        let a = spawn(&mut arena, &registry, 7);
        let b = spawn(&mut arena, &registry, 3);
        let mut slots = FusionSlots::new();
        slots.set(SlotSide::Left, a);
        slots.set(SlotSide::Right, b);

        let preview = slots.preview(&arena, &registry);
        assert_eq!(preview, FusionPreview::Fused { result: CardId::new(12), sources: [a, b] });
        assert_eq!(preview.display_id(&arena), Some(CardId::new(12)));
    }

    #[test]
    fn test_non_matching_pair_shows_nothing() {
        let (mut arena, registry) = fixture();
        let a = spawn(&mut arena, &registry, 3);
        let b = spawn(&mut arena, &registry, 8);
        let mut slots = FusionSlots::new();
        slots.set(SlotSide::Left, a);
        slots.set(SlotSide::Right, b);

        let preview = slots.preview(&arena, &registry);
        assert_eq!(preview, FusionPreview::NoMatch);
        assert_eq!(preview.display_id(&arena), None);
        assert!(!preview.is_playable());
    }

    #[test]
    fn test_set_returns_displaced() {
        let mut slots = FusionSlots::new();
        assert_eq!(slots.set(SlotSide::Left, CardKey(1)), None);
        assert_eq!(slots.set(SlotSide::Left, CardKey(2)), Some(CardKey(1)));
        assert_eq!(slots.find(CardKey(2)), Some(SlotSide::Left));
        assert_eq!(slots.take(SlotSide::Left), Some(CardKey(2)));
        assert!(slots.is_empty());
    }
}
