//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card identity:
//! its attack and defense, and, for fused cards, the two ingredients that
//! produce it.
//!
//! Per-instance data (where the card sits, how it is animating) lives in
//! `Card` instead.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Identifies the "kind" of card, not a specific copy in a deck or hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition as it appears in the content table.
///
/// ## Example
///
/// ```
/// use fusion_duel::cards::{CardDefinition, CardId};
///
/// let drake = CardDefinition::new(CardId::new(12), 7, 5)
///     .with_name("Ember Drake")
///     .with_fusion(CardId::new(3), CardId::new(7));
///
/// assert!(drake.is_fused());
/// assert_eq!(drake.fusion, Some([CardId::new(3), CardId::new(7)]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,

    /// Display name. Defaults to empty when content omits it.
    #[serde(default)]
    pub name: String,

    pub attack: i32,

    pub defense: i32,

    /// Texture path, handed to the renderer untouched.
    #[serde(default)]
    pub image_path: Option<String>,

    /// The two cards that fuse into this one, if it is a fusion result.
    #[serde(default)]
    pub fusion: Option<[CardId; 2]>,
}

impl CardDefinition {
    /// Create a base (non-fused) card definition.
    ///
    /// Negative stats are clamped to zero.
    #[must_use]
    pub fn new(id: CardId, attack: i32, defense: i32) -> Self {
        Self {
            id,
            name: String::new(),
            attack: attack.max(0),
            defense: defense.max(0),
            image_path: None,
            fusion: None,
        }
    }

    /// Set the display name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the texture path (builder pattern).
    #[must_use]
    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    /// Mark this card as the fusion of `a` and `b` (builder pattern).
    #[must_use]
    pub fn with_fusion(mut self, a: CardId, b: CardId) -> Self {
        self.fusion = Some([a, b]);
        self
    }

    /// Whether this card only comes into play through fusion.
    #[must_use]
    pub fn is_fused(&self) -> bool {
        self.fusion.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_negative_stats_are_clamped() {
        let card = CardDefinition::new(CardId::new(1), -3, -1);
        assert_eq!(card.attack, 0);
        assert_eq!(card.defense, 0);
    }

    #[test]
    fn test_content_shape_deserializes() {
        let json = r#"{ "id": 12, "attack": 7, "defense": 5, "fusion": [3, 7] }"#;
        let card: CardDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(card.id, CardId::new(12));
        assert_eq!(card.name, "");
        assert_eq!(card.fusion, Some([CardId::new(3), CardId::new(7)]));
        assert!(card.image_path.is_none());
    }

    #[test]
    fn test_base_card_has_no_recipe() {
        let card = CardDefinition::new(CardId::new(1), 2, 2).with_image("assets/cards/imp.png");
        assert!(!card.is_fused());
        assert_eq!(card.image_path.as_deref(), Some("assets/cards/imp.png"));
    }
}
