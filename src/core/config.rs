//! Battle configuration.
//!
//! The application builds a `BattleConfig` once (usually `Default`, or
//! loaded from JSON) and hands it to `Battle::new`. Nothing in the engine
//! reads tuning values from anywhere else.
//!
//! - `PhaseTimings`: durations of the round timeline
//! - `RuleConfig`: health, hand size, deck composition, bot behaviour
//! - `MotionConfig`: hand hover/entry/drag feel
//! - `ShakeConfig`: attack shake visual
//! - `TableLayout`: screen-space geometry of slots, hand and exits

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::error::ContentError;
use super::geometry::Rect;

/// Durations (seconds) of the timed phases of a round.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTimings {
    /// Played cards fly to their attack positions.
    pub travel: f32,
    /// Length of each side's attack shake.
    pub shake: f32,
    /// Pause between the two shakes.
    pub gap: f32,
    /// Played cards leave the screen.
    pub exit: f32,
    /// Fusion table slides back in while the hand refills.
    pub table_return: f32,
}

impl Default for PhaseTimings {
    fn default() -> Self {
        Self {
            travel: 0.65,
            shake: 0.35,
            gap: 0.35,
            exit: 0.55,
            table_return: 0.8,
        }
    }
}

/// Game rules that are tunable per run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub player_health: i32,
    pub bot_health: i32,
    /// Cards the player draws before the first round.
    pub starting_hand_size: usize,
    /// Copies of each base card shuffled into every deck.
    pub copies_per_card: usize,
    /// Probability that the bot tries an in-deck fusion before drawing.
    pub auto_fusion_chance: f64,
    /// Seed for deck shuffles and bot decisions.
    pub seed: u64,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            player_health: 20,
            bot_health: 30,
            starting_hand_size: 5,
            copies_per_card: 3,
            auto_fusion_chance: 0.35,
            seed: 42,
        }
    }
}

/// Feel of the hand: hover raise, slide-in and drag tilt.
///
/// Speeds are rates for `1 - e^(-speed * dt)` smoothing, angles are radians,
/// distances are pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    pub hover_speed: f32,
    pub entry_speed: f32,
    /// How far a hovered card rises above its slot in the hand.
    pub raise_amount: f32,
    /// Scale of a fully hovered card.
    pub hover_scale: f32,
    /// Rotation of a fully hovered card.
    pub hover_rotation: f32,
    /// Distance below its hand slot a freshly drawn card starts from.
    pub entry_offset: f32,
    /// Progress values closer than this to their target snap onto it.
    pub snap_epsilon: f32,
    /// Tilt per pixel/second of horizontal pointer velocity.
    pub tilt_factor: f32,
    pub max_tilt: f32,
    /// How quickly tilt follows the pointer while dragging.
    pub tilt_follow_speed: f32,
    /// Decay rate of tilt once the card is released.
    pub tilt_damping: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            hover_speed: 14.0,
            entry_speed: 9.0,
            raise_amount: 24.0,
            hover_scale: 1.1,
            hover_rotation: -0.04,
            entry_offset: 220.0,
            snap_epsilon: 0.001,
            tilt_factor: 0.0009,
            max_tilt: 0.35,
            tilt_follow_speed: 18.0,
            tilt_damping: 10.0,
        }
    }
}

/// Attack shake visual.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShakeConfig {
    /// Peak displacement in pixels.
    pub amplitude: f32,
    /// Oscillations per second.
    pub frequency: f32,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            amplitude: 6.0,
            frequency: 18.0,
        }
    }
}

/// Screen-space geometry of the battle board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableLayout {
    pub screen_size: Vec2,
    pub card_size: Vec2,
    /// Horizontal gap between neighbouring fusion-table slots.
    pub slot_gap: f32,
    /// Horizontal gap between neighbouring cards in the hand.
    pub hand_spacing: f32,
    /// Distance between the hand's bottom edge and the screen bottom.
    pub hand_bottom_margin: f32,
    /// How far the table slides while it is hidden during a round.
    pub table_hide_offset: Vec2,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            screen_size: Vec2::new(1280.0, 720.0),
            card_size: Vec2::new(120.0, 168.0),
            slot_gap: 60.0,
            hand_spacing: 12.0,
            hand_bottom_margin: 50.0,
            table_hide_offset: Vec2::new(0.0, -420.0),
        }
    }
}

impl TableLayout {
    fn slot_center(&self, column: f32) -> Vec2 {
        let mid = self.screen_size * 0.5;
        Vec2::new(mid.x + column * (self.card_size.x + self.slot_gap), mid.y)
    }

    /// Left fusion slot; also where the player's card attacks from.
    #[must_use]
    pub fn left_slot(&self) -> Rect {
        Rect::from_center(self.slot_center(-1.0), self.card_size)
    }

    #[must_use]
    pub fn right_slot(&self) -> Rect {
        Rect::from_center(self.slot_center(0.0), self.card_size)
    }

    /// Fusion result position; also where the bot's card attacks from.
    #[must_use]
    pub fn result_slot(&self) -> Rect {
        Rect::from_center(self.slot_center(1.0), self.card_size)
    }

    /// Top edge of the hand row.
    #[must_use]
    pub fn hand_y(&self) -> f32 {
        self.screen_size.y - self.card_size.y - self.hand_bottom_margin
    }
}

/// Complete engine configuration.
///
/// ## Example
///
/// ```
/// use fusion_duel::core::BattleConfig;
///
/// let config = BattleConfig::default()
///     .with_seed(7)
///     .with_health(10, 12);
///
/// assert_eq!(config.rules.seed, 7);
/// assert_eq!(config.rules.bot_health, 12);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    #[serde(default)]
    pub timings: PhaseTimings,
    #[serde(default)]
    pub rules: RuleConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub shake: ShakeConfig,
    #[serde(default)]
    pub layout: TableLayout,
}

impl BattleConfig {
    /// Parse a config from JSON. Missing sections fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rules.seed = seed;
        self
    }

    /// Set both starting health totals.
    #[must_use]
    pub fn with_health(mut self, player: i32, bot: i32) -> Self {
        self.rules.player_health = player;
        self.rules.bot_health = bot;
        self
    }

    /// Set the size of the player's opening hand.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.rules.starting_hand_size = size;
        self
    }

    /// Set how many copies of each base card go into a deck.
    #[must_use]
    pub fn with_copies_per_card(mut self, copies: usize) -> Self {
        self.rules.copies_per_card = copies;
        self
    }

    /// Set the bot's auto-fusion probability.
    #[must_use]
    pub fn with_auto_fusion_chance(mut self, chance: f64) -> Self {
        self.rules.auto_fusion_chance = chance;
        self
    }
}
