//! Card containers outside the arena.
//!
//! Hands and fusion slots hold arena keys and live with their owners
//! (`battle::Participant`, `fusion::FusionSlots`). Decks hold undrawn card
//! identities and live here.

pub mod deck;

pub use deck::Deck;
