//! Content registry: card definitions plus the combination table.
//!
//! Built once by the application from the content table and then shared
//! read-only with every component that needs card stats or fusion lookups.
//! Nothing in the engine caches content globally.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::definition::{CardDefinition, CardId};
use crate::core::error::ContentError;
use crate::fusion::CombinationTable;

/// On-disk shape of the content table.
#[derive(Deserialize)]
struct ContentFile {
    cards: Vec<CardDefinition>,
}

/// Immutable registry of card definitions and fusion recipes.
///
/// ## Example
///
/// ```
/// use fusion_duel::cards::{CardId, ContentRegistry};
///
/// let registry = ContentRegistry::from_json(r#"{ "cards": [
///     { "id": 3,  "attack": 2, "defense": 1 },
///     { "id": 7,  "attack": 1, "defense": 3 },
///     { "id": 12, "attack": 6, "defense": 4, "fusion": [3, 7] }
/// ] }"#).unwrap();
///
/// assert_eq!(registry.check_fusion(CardId::new(7), CardId::new(3)), Some(CardId::new(12)));
/// assert_eq!(registry.base_cards().count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContentRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    /// Definition order, so deck building is independent of hash order.
    order: Vec<CardId>,
    combinations: CombinationTable,
}

impl ContentRegistry {
    /// Parse and validate a JSON content table.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let file: ContentFile = serde_json::from_str(json)?;
        Self::from_definitions(file.cards)
    }

    /// Build from already-parsed definitions.
    ///
    /// Fails on duplicate ids, recipes naming unknown ingredients, a pair
    /// that fuses into two different results, or content with no base cards.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, ContentError> {
        let mut registry = Self::default();

        for mut def in definitions {
            if registry.cards.contains_key(&def.id) {
                return Err(ContentError::DuplicateCardId(def.id));
            }
            if def.attack < 0 || def.defense < 0 {
                log::warn!("{} has negative stats, clamping to zero", def.id);
                def.attack = def.attack.max(0);
                def.defense = def.defense.max(0);
            }
            registry.order.push(def.id);
            registry.cards.insert(def.id, def);
        }

        for &result in &registry.order {
            let Some([a, b]) = registry.cards[&result].fusion else {
                continue;
            };
            for ingredient in [a, b] {
                if !registry.cards.contains_key(&ingredient) {
                    return Err(ContentError::UnknownFusionIngredient {
                        result,
                        missing: ingredient,
                    });
                }
            }
            if let Some(first) = registry.combinations.insert(a, b, result) {
                return Err(ContentError::ConflictingRecipe {
                    a,
                    b,
                    first,
                    second: result,
                });
            }
        }

        if registry.base_cards().next().is_none() {
            return Err(ContentError::EmptyContent);
        }

        log::info!(
            "Loaded {} cards with {} fusion recipes",
            registry.len(),
            registry.combinations.len()
        );
        Ok(registry)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions in content order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }

    /// Cards that are not fusion results, in content order.
    pub fn base_cards(&self) -> impl Iterator<Item = &CardDefinition> {
        self.iter().filter(|def| !def.is_fused())
    }

    /// The fusion recipe table.
    #[must_use]
    pub fn combinations(&self) -> &CombinationTable {
        &self.combinations
    }

    /// Look up the fusion of two cards, order-independent.
    #[must_use]
    pub fn check_fusion(&self, a: CardId, b: CardId) -> Option<CardId> {
        self.combinations.check_fusion(a, b)
    }
}
