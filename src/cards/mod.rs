//! Card system: definitions, content registry, and live instances.
//!
//! ## Key Types
//!
//! - `CardId`: identity of a card definition
//! - `CardDefinition`: static stats and optional fusion recipe
//! - `ContentRegistry`: validated, immutable lookup of all definitions
//! - `CardKey`: handle of a live card in the arena
//! - `Card`: a live card with owner and motion state
//! - `CardArena`: the single owner of every live card
//!
//! The registry is built once and shared by handle; nothing in the crate
//! keeps global card state.

pub mod arena;
pub mod definition;
pub mod instance;
pub mod registry;

pub use arena::CardArena;
pub use definition::{CardDefinition, CardId};
pub use instance::{Card, CardKey};
pub use registry::ContentRegistry;
