//! Bot auto-fusion: occasionally fuse two cards straight out of the deck.
//!
//! Before its normal draw the bot rolls against a fixed chance. On success
//! it scans every unordered pair of remaining deck cards, in a shuffled
//! order so deck position carries no bias, and takes the first pair that
//! fuses. Both ingredients leave the deck and the fused card is drawn
//! instead.

use super::table::CombinationTable;
use crate::cards::CardId;
use crate::core::GameRng;
use crate::zones::Deck;

/// A fusable pair found in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckFusion {
    /// Deck indices of the two ingredients, always distinct.
    pub indices: (usize, usize),
    pub result: CardId,
}

/// Find the first fusable pair, visiting pairs in a shuffled order.
#[must_use]
pub fn find_deck_fusion(
    deck: &Deck,
    table: &CombinationTable,
    rng: &mut GameRng,
) -> Option<DeckFusion> {
    let mut order: Vec<usize> = (0..deck.len()).collect();
    rng.shuffle(&mut order);

    for (pos, &i) in order.iter().enumerate() {
        for &j in &order[pos + 1..] {
            let (Some(a), Some(b)) = (deck.get(i), deck.get(j)) else {
                continue;
            };
            if let Some(result) = table.check_fusion(a, b) {
                return Some(DeckFusion { indices: (i, j), result });
            }
        }
    }
    None
}

/// Roll `chance` and, on success, consume a fusable pair from `deck`.
///
/// Returns the fused card to draw in place of the top card, or `None` if
/// the roll failed or the deck holds no fusable pair (the deck is then
/// untouched).
pub fn try_auto_fusion(
    deck: &mut Deck,
    table: &CombinationTable,
    chance: f64,
    rng: &mut GameRng,
) -> Option<CardId> {
    if deck.len() < 2 || !rng.gen_bool(chance) {
        return None;
    }

    let fusion = find_deck_fusion(deck, table, rng)?;
    let (i, j) = fusion.indices;
    // Remove the higher index first so the lower one stays valid.
    deck.remove_at(i.max(j));
    deck.remove_at(i.min(j));

    log::debug!(
        "Bot auto-fused into {} ({} cards left in deck)",
        fusion.result,
        deck.len()
    );
    Some(fusion.result)
}
