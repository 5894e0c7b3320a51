//! Combination table: which two cards fuse into which result.
//!
//! Recipes are stored exactly as the content lists them. Lookups try the
//! pair as given and then reversed, so `check_fusion(a, b)` and
//! `check_fusion(b, a)` always agree.

use rustc_hash::FxHashMap;

use crate::cards::CardId;

/// Static mapping from an unordered pair of card ids to a fused card id.
///
/// ## Example
///
/// ```
/// use fusion_duel::cards::CardId;
/// use fusion_duel::fusion::CombinationTable;
///
/// let mut table = CombinationTable::new();
/// table.insert(CardId::new(3), CardId::new(7), CardId::new(12));
///
/// assert_eq!(table.check_fusion(CardId::new(7), CardId::new(3)), Some(CardId::new(12)));
/// assert_eq!(table.check_fusion(CardId::new(3), CardId::new(4)), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CombinationTable {
    recipes: FxHashMap<(CardId, CardId), CardId>,
}

impl CombinationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `a + b -> result`.
    ///
    /// Returns the result previously registered for the pair (in either
    /// order), which the caller may treat as a conflict.
    pub fn insert(&mut self, a: CardId, b: CardId, result: CardId) -> Option<CardId> {
        let previous = self.check_fusion(a, b);
        if previous.is_none() {
            self.recipes.insert((a, b), result);
        }
        previous
    }

    /// Look up the fusion of two cards, order-independent.
    #[must_use]
    pub fn check_fusion(&self, a: CardId, b: CardId) -> Option<CardId> {
        self.recipes
            .get(&(a, b))
            .or_else(|| self.recipes.get(&(b, a)))
            .copied()
    }

    /// Number of registered recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
