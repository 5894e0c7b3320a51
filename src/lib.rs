//! # fusion-duel
//!
//! Turn-resolution engine for a two-player card-fusion battle.
//!
//! The player drags cards from a hand onto a two-slot fusion table; a pair
//! that appears in the combination table fuses into a stronger card. Playing
//! starts an animated round against an automated opponent: both cards fly
//! in, each strikes once, both fly out, the hand refills, and the battle
//! checks for a winner.
//!
//! ## Design Principles
//!
//! 1. **Frame-driven**: one `update(dt)` per rendered frame advances every
//!    timer. Nothing blocks and nothing runs in the background.
//!
//! 2. **Effects fire once**: round phases are data (timed frames of action
//!    tags) and each attack phase carries its own applied flag, so damage
//!    lands exactly once however the frame time is sliced.
//!
//! 3. **Explicit content**: card data lives in a `ContentRegistry` built
//!    once and passed in by handle. No global caches.
//!
//! 4. **Host-agnostic**: drawing, audio and input are traits and plain
//!    values in `platform`; the engine never touches a device.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration, geometry, errors
//! - `cards`: definitions, content registry, card arena
//! - `zones`: decks
//! - `motion`: smoothing, tweens, shake, per-card motion, hand layout
//! - `fusion`: combination table, fusion slots, bot auto-fusion
//! - `timeline`: the frame sequencer
//! - `platform`: renderer, audio and frame-input seams
//! - `battle`: the orchestrator and its round state machine

pub mod battle;
pub mod cards;
pub mod core;
pub mod fusion;
pub mod motion;
pub mod platform;
pub mod timeline;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, ContentError, GameRng, MotionConfig, PhaseTimings, Rect, RuleConfig, ShakeConfig,
    Side, SideMap, TableLayout,
};

pub use crate::cards::{Card, CardArena, CardDefinition, CardId, CardKey, ContentRegistry};

pub use crate::zones::Deck;

pub use crate::motion::{CardLocation, CardMotion, Ease, Tween};

pub use crate::fusion::{CombinationTable, FusionPreview, FusionSlots, SlotSide};

pub use crate::timeline::{Frame, Sequencer};

pub use crate::platform::{AudioSink, DrawList, FrameInput, NullAudio, Renderer, Sound, TextureId};

pub use crate::battle::{Battle, BattleAction, BattlePhase, GameOutcome, Participant, StatsView};
