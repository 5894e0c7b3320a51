//! Hand layout, hover selection and draw order.
//!
//! Runs once per frame over the player's hand:
//! 1. cards in `Hand` are placed left-to-right, evenly spaced and centered
//! 2. at most one of them is hovered: the first under the pointer
//! 3. every card's hand and drag motion advances by `dt`

use glam::Vec2;

use super::card_motion::CardLocation;
use crate::cards::{CardArena, CardKey};
use crate::core::TableLayout;

/// Anchor of the `index`-th of `count` cards in the hand row.
#[must_use]
pub fn hand_anchor(layout: &TableLayout, index: usize, count: usize) -> Vec2 {
    let width = layout.card_size.x;
    let total = count as f32 * width + count.saturating_sub(1) as f32 * layout.hand_spacing;
    let left = (layout.screen_size.x - total) * 0.5;
    Vec2::new(left + index as f32 * (width + layout.hand_spacing), layout.hand_y())
}

/// Reposition hand cards and pick the hovered one.
///
/// `pointer` is `None` while something is being dragged so no card lifts
/// underneath it. Returns the hovered card, if any.
pub fn layout_hand(
    arena: &mut CardArena,
    hand: &[CardKey],
    layout: &TableLayout,
    pointer: Option<Vec2>,
) -> Option<CardKey> {
    let in_hand: Vec<CardKey> = hand
        .iter()
        .copied()
        .filter(|&key| arena.get(key).is_some_and(|c| c.location() == CardLocation::Hand))
        .collect();

    let count = in_hand.len();
    let mut hovered = None;

    for (index, &key) in in_hand.iter().enumerate() {
        let Some(card) = arena.get_mut(key) else {
            continue;
        };
        card.motion.move_to(hand_anchor(layout, index, count));

        let hit = hovered.is_none() && pointer.is_some_and(|p| card.motion.contains_point(p));
        if hit {
            hovered = Some(key);
        }
        card.motion.set_hovered(hit);
    }

    hovered
}

/// Advance hover/entry smoothing and drag following for every hand card.
pub fn update_hand(arena: &mut CardArena, hand: &[CardKey], pointer: Vec2, dt: f32) {
    for &key in hand {
        if let Some(card) = arena.get_mut(key) {
            card.motion.update_hand_motion(dt);
            card.motion.update_drag_position(pointer, dt);
        }
    }
}

/// Render order for the hand: resting cards, then elevated cards, then the
/// dragged card on top. Cards on a slot are drawn with the table instead.
#[must_use]
pub fn draw_order(arena: &CardArena, hand: &[CardKey]) -> Vec<CardKey> {
    let mut resting = Vec::with_capacity(hand.len());
    let mut elevated = Vec::new();
    let mut dragged = Vec::new();

    for &key in hand {
        let Some(card) = arena.get(key) else {
            continue;
        };
        match card.location() {
            CardLocation::Drag => dragged.push(key),
            CardLocation::Hand if card.motion.is_elevated() => elevated.push(key),
            CardLocation::Hand => resting.push(key),
            CardLocation::Slot => {}
        }
    }

    resting.extend(elevated);
    resting.extend(dragged);
    resting
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId};
    use crate::core::{MotionConfig, Rect, Side};

    fn setup(count: usize) -> (CardArena, Vec<CardKey>, TableLayout) {
        let layout = TableLayout::default();
        let mut arena = CardArena::new(layout.card_size, MotionConfig::default());
        let def = CardDefinition::new(CardId::new(1), 1, 1);
        let hand = (0..count).map(|_| arena.spawn(&def, Side::Player)).collect();
        (arena, hand, layout)
    }

    #[test]
    fn test_anchors_are_centered_and_even() {
        let layout = TableLayout::default();
        let count = 4;
        let first = hand_anchor(&layout, 0, count);
        let last = hand_anchor(&layout, count - 1, count);

        let left_margin = first.x;
        let right_margin = layout.screen_size.x - (last.x + layout.card_size.x);
        assert!((left_margin - right_margin).abs() < 1e-3);

        let step = hand_anchor(&layout, 1, count).x - first.x;
        assert!((step - (layout.card_size.x + layout.hand_spacing)).abs() < 1e-3);
        assert_eq!(first.y, layout.hand_y());
    }

    #[test]
    fn test_single_card_is_centered() {
        let layout = TableLayout::default();
        let anchor = hand_anchor(&layout, 0, 1);
        assert!((anchor.x + layout.card_size.x * 0.5 - layout.screen_size.x * 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_slot_cards_leave_a_gap_closed() {
        let (mut arena, hand, layout) = setup(3);
        arena
            .get_mut(hand[1])
            .unwrap()
            .motion
            .place_in_slot(Rect::new(Vec2::ZERO, layout.card_size));

        layout_hand(&mut arena, &hand, &layout, None);

        assert_eq!(arena.get(hand[0]).unwrap().motion.anchor(), hand_anchor(&layout, 0, 2));
        assert_eq!(arena.get(hand[2]).unwrap().motion.anchor(), hand_anchor(&layout, 1, 2));
        assert_eq!(arena.get(hand[1]).unwrap().motion.anchor(), Vec2::ZERO);
    }

    #[test]
    fn test_at_most_one_hovered() {
        let (mut arena, hand, mut layout) = setup(3);
        // Negative spacing makes neighbours overlap.
        layout.hand_spacing = -60.0;
        layout_hand(&mut arena, &hand, &layout, None);

        let overlap_x = hand_anchor(&layout, 1, 3).x + 10.0;
        let pointer = Vec2::new(overlap_x, layout.hand_y() + 20.0);
        assert!(arena.get(hand[0]).unwrap().motion.contains_point(pointer));
        assert!(arena.get(hand[1]).unwrap().motion.contains_point(pointer));

        let hovered = layout_hand(&mut arena, &hand, &layout, Some(pointer));
        assert_eq!(hovered, Some(hand[0]));

        update_hand(&mut arena, &hand, pointer, 0.05);
        assert!(arena.get(hand[0]).unwrap().motion.is_elevated());
        assert!(!arena.get(hand[1]).unwrap().motion.is_elevated());
    }

    #[test]
    fn test_no_hover_without_pointer() {
        let (mut arena, hand, layout) = setup(2);
        assert_eq!(layout_hand(&mut arena, &hand, &layout, None), None);
    }

    #[test]
    fn test_draw_order_puts_elevated_then_dragged_last() {
        let (mut arena, hand, layout) = setup(4);
        arena.get_mut(hand[0]).unwrap().motion.start_drag(Vec2::new(1.0, 1.0));
        layout_hand(&mut arena, &hand, &layout, None);

        let hover_at = arena.get(hand[1]).unwrap().motion.rect().center();
        let hovered = layout_hand(&mut arena, &hand, &layout, Some(hover_at));
        assert_eq!(hovered, Some(hand[1]));
        update_hand(&mut arena, &hand, hover_at, 0.05);

        let order = draw_order(&arena, &hand);
        assert_eq!(order, vec![hand[2], hand[3], hand[1], hand[0]]);
    }
}
