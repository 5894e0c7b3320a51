//! Fusion tests.
//!
//! These tests verify fusion lookups and the fusion table:
//! - recipes match in either order, including a card with itself
//! - content loading rejects inconsistent recipe data
//! - the result position follows the one/both/no-match rules
//! - the bot's in-deck fusion consumes exactly the two ingredients

use fusion_duel::cards::{CardArena, CardId, ContentRegistry};
use fusion_duel::core::{ContentError, GameRng, MotionConfig, Side};
use fusion_duel::fusion::{try_auto_fusion, CombinationTable, FusionPreview, FusionSlots, SlotSide};
use fusion_duel::zones::Deck;
use glam::Vec2;
use proptest::prelude::*;

const CONTENT: &str = r#"{ "cards": [
    { "id": 3,  "name": "Ember",   "attack": 2, "defense": 1 },
    { "id": 7,  "name": "Gust",    "attack": 1, "defense": 3 },
    { "id": 5,  "name": "Pebble",  "attack": 1, "defense": 1 },
    { "id": 12, "name": "Wildfire", "attack": 6, "defense": 4, "fusion": [3, 7] },
    { "id": 20, "name": "Boulder", "attack": 4, "defense": 5, "fusion": [5, 5] }
] }"#;

fn registry() -> ContentRegistry {
    ContentRegistry::from_json(CONTENT).unwrap()
}

/// A recipe for (3, 7) is found when asked for (7, 3).
#[test]
fn test_reversed_pair_fuses() {
    let registry = registry();
    assert_eq!(registry.check_fusion(CardId::new(7), CardId::new(3)), Some(CardId::new(12)));
    assert_eq!(registry.check_fusion(CardId::new(3), CardId::new(7)), Some(CardId::new(12)));
    assert_eq!(registry.check_fusion(CardId::new(3), CardId::new(5)), None);
}

/// A recipe may use two copies of the same card.
#[test]
fn test_self_pair_fuses() {
    let registry = registry();
    assert_eq!(registry.check_fusion(CardId::new(5), CardId::new(5)), Some(CardId::new(20)));
    assert_eq!(registry.check_fusion(CardId::new(3), CardId::new(3)), None);
}

/// Loading rejects the ways content can contradict itself.
#[test]
fn test_invalid_content_is_rejected() {
    let duplicate = r#"{ "cards": [
        { "id": 1, "attack": 1, "defense": 1 },
        { "id": 1, "attack": 2, "defense": 2 }
    ] }"#;
    assert!(matches!(
        ContentRegistry::from_json(duplicate),
        Err(ContentError::DuplicateCardId(id)) if id == CardId::new(1)
    ));

    let unknown = r#"{ "cards": [
        { "id": 1, "attack": 1, "defense": 1 },
        { "id": 2, "attack": 3, "defense": 3, "fusion": [1, 9] }
    ] }"#;
    assert!(matches!(
        ContentRegistry::from_json(unknown),
        Err(ContentError::UnknownFusionIngredient { missing, .. }) if missing == CardId::new(9)
    ));

    let conflict = r#"{ "cards": [
        { "id": 1, "attack": 1, "defense": 1 },
        { "id": 2, "attack": 1, "defense": 1 },
        { "id": 3, "attack": 3, "defense": 3, "fusion": [1, 2] },
        { "id": 4, "attack": 4, "defense": 4, "fusion": [2, 1] }
    ] }"#;
    assert!(matches!(
        ContentRegistry::from_json(conflict),
        Err(ContentError::ConflictingRecipe { .. })
    ));

    assert!(matches!(
        ContentRegistry::from_json(r#"{ "cards": [] }"#),
        Err(ContentError::EmptyContent)
    ));
    assert!(matches!(ContentRegistry::from_json("not json"), Err(ContentError::Json(_))));
}

/// The result position shows a lone card, a fused card, or nothing.
#[test]
fn test_result_position_rules() {
    let registry = registry();
    let mut arena = CardArena::new(Vec2::new(120.0, 168.0), MotionConfig::default());
    let spawn = |arena: &mut CardArena, id: u32| {
        arena.spawn(registry.get(CardId::new(id)).unwrap(), Side::Player)
    };

    let ember = spawn(&mut arena, 3);
    let gust = spawn(&mut arena, 7);
    let pebble = spawn(&mut arena, 5);
    let mut slots = FusionSlots::new();

    slots.set(SlotSide::Right, gust);
    assert_eq!(slots.preview(&arena, &registry).display_id(&arena), Some(CardId::new(7)));

    slots.set(SlotSide::Left, ember);
    assert_eq!(
        slots.preview(&arena, &registry),
        FusionPreview::Fused { result: CardId::new(12), sources: [ember, gust] }
    );

    slots.set(SlotSide::Left, pebble);
    assert_eq!(slots.preview(&arena, &registry), FusionPreview::NoMatch);
    assert_eq!(slots.preview(&arena, &registry).display_id(&arena), None);
}

/// Auto-fusion draws the fused card and removes its two ingredients.
#[test]
fn test_auto_fusion_from_registry_recipes() {
    let registry = registry();
    let mut deck = Deck::from_cards([3, 5, 7].map(CardId::new));
    let mut rng = GameRng::new(11);

    let fused = try_auto_fusion(&mut deck, registry.combinations(), 1.0, &mut rng);

    assert_eq!(fused, Some(CardId::new(12)));
    assert_eq!(deck.iter().collect::<Vec<_>>(), vec![CardId::new(5)]);
}

/// Decks hold base cards only.
#[test]
fn test_fused_cards_never_in_decks() {
    let registry = registry();
    let deck = Deck::build(&registry, 3, &mut GameRng::new(2));
    assert_eq!(deck.len(), 9);
    assert!(deck.iter().all(|id| registry.get(id).is_some_and(|def| !def.is_fused())));
}

fn table_from(recipes: &[(u32, u32, u32)]) -> CombinationTable {
    let mut table = CombinationTable::new();
    for &(a, b, r) in recipes {
        table.insert(CardId::new(a), CardId::new(b), CardId::new(r));
    }
    table
}

proptest! {
    /// Lookup is symmetric for every pair, equal ids included.
    #[test]
    fn test_check_fusion_symmetric(
        recipes in prop::collection::vec((0u32..12, 0u32..12, 100u32..200), 0..20),
        a in 0u32..12,
        b in 0u32..12,
    ) {
        let table = table_from(&recipes);
        let (a, b) = (CardId::new(a), CardId::new(b));
        prop_assert_eq!(table.check_fusion(a, b), table.check_fusion(b, a));
    }

    /// Auto-fusion either leaves the deck alone or removes exactly two cards
    /// that fuse into the returned card.
    #[test]
    fn test_auto_fusion_consumes_a_valid_pair(
        cards in prop::collection::vec(0u32..6, 0..12),
        seed in any::<u64>(),
    ) {
        let table = table_from(&[(0, 1, 50), (2, 2, 51), (3, 5, 52)]);
        let before = Deck::from_cards(cards.iter().copied().map(CardId::new));
        let mut deck = before.clone();

        match try_auto_fusion(&mut deck, &table, 1.0, &mut GameRng::new(seed)) {
            None => prop_assert_eq!(deck, before),
            Some(result) => {
                prop_assert_eq!(deck.len() + 2, before.len());
                let mut removed: Vec<CardId> = before.iter().collect();
                for id in deck.iter() {
                    let pos = removed.iter().position(|&r| r == id).unwrap();
                    removed.remove(pos);
                }
                prop_assert_eq!(removed.len(), 2);
                prop_assert_eq!(table.check_fusion(removed[0], removed[1]), Some(result));
            }
        }
    }
}
