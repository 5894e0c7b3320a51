//! The battle orchestrator.
//!
//! Owns every piece of a duel: the card arena, both sides, the fusion
//! slots, and the round in flight. A round starts with `play` and is then
//! driven purely by `update`: the round timeline fires phase actions, the
//! battle dispatches them, and each attack phase applies its damage once.
//!
//! ## Round flow
//!
//! ```text
//! idle -> traveling -> player_shake -> gap -> bot_shake
//!      -> exiting -> table_returning -> finishing -> idle | game over
//! ```

use std::sync::Arc;

use glam::Vec2;

use super::outcome::{attack_damage, GameOutcome};
use super::participant::Participant;
use super::phase::{BattleAction, BattlePhase};
use super::round::{bot_entry_point, played_rect, Round};
use super::stats::StatsView;
use crate::cards::{Card, CardArena, CardKey, ContentRegistry};
use crate::core::{BattleConfig, GameRng, Rect, Side, SideMap};
use crate::fusion::{try_auto_fusion, FusionPreview, FusionSlots, SlotSide};
use crate::motion::{layout_hand, shake_offset, update_hand, Ease, Tween};
use crate::platform::{AudioSink, FrameInput, Sound};
use crate::zones::Deck;

/// A duel between the player and the bot.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use fusion_duel::battle::{Battle, BattlePhase};
/// use fusion_duel::cards::ContentRegistry;
/// use fusion_duel::core::BattleConfig;
/// use fusion_duel::platform::{FrameInput, NullAudio};
///
/// let registry = ContentRegistry::from_json(
///     r#"{ "cards": [ { "id": 1, "attack": 3, "defense": 1 } ] }"#,
/// ).unwrap();
/// let mut battle = Battle::new(BattleConfig::default(), Arc::new(registry));
///
/// assert_eq!(battle.hand().len(), 3);
/// assert_eq!(battle.phase(), BattlePhase::Idle);
///
/// // Nothing on the fusion table yet, so there is nothing to play.
/// assert!(!battle.play(&mut NullAudio));
/// battle.update(FrameInput::default(), &mut NullAudio);
/// ```
#[derive(Clone, Debug)]
pub struct Battle {
    pub(super) config: BattleConfig,
    pub(super) registry: Arc<ContentRegistry>,
    pub(super) arena: CardArena,
    pub(super) sides: SideMap<Participant>,
    pub(super) slots: FusionSlots,
    pub(super) dragged: Option<CardKey>,
    pub(super) round: Option<Round>,
    pub(super) phase: BattlePhase,
    pub(super) stats: SideMap<StatsView>,
    pub(super) outcome: Option<GameOutcome>,
    /// Offset of the fusion table, animated while it hides and returns.
    pub(super) table: Tween,
    pub(super) bot_rng: GameRng,
    pub(super) pointer: Vec2,
}

impl Battle {
    /// Set up a duel: build and shuffle both decks, deal the player's
    /// opening hand.
    #[must_use]
    pub fn new(config: BattleConfig, registry: Arc<ContentRegistry>) -> Self {
        let rng = GameRng::new(config.rules.seed);
        let copies = config.rules.copies_per_card;
        let [player_deck, bot_deck] = Side::ALL.map(|side| {
            let mut deck_rng = rng.for_context(match side {
                Side::Player => "deck:player",
                Side::Bot => "deck:bot",
            });
            Deck::build(&registry, copies, &mut deck_rng)
        });
        Self::with_decks(config, registry, player_deck, bot_deck)
    }

    /// Set up a duel with fixed decks instead of shuffled ones.
    #[must_use]
    pub fn with_decks(
        config: BattleConfig,
        registry: Arc<ContentRegistry>,
        player_deck: Deck,
        bot_deck: Deck,
    ) -> Self {
        let rng = GameRng::new(config.rules.seed);
        let mut sides = SideMap::new(|side| {
            let health = match side {
                Side::Player => config.rules.player_health,
                Side::Bot => config.rules.bot_health,
            };
            Participant::new(side, health, Deck::new())
        });
        sides[Side::Player].deck = player_deck;
        sides[Side::Bot].deck = bot_deck;

        let mut battle = Self {
            arena: CardArena::new(config.layout.card_size, config.motion),
            bot_rng: rng.for_context("bot:auto_fusion"),
            stats: SideMap::with_value(StatsView::default()),
            sides,
            slots: FusionSlots::new(),
            dragged: None,
            round: None,
            phase: BattlePhase::Idle,
            outcome: None,
            table: Tween::resting(Vec2::ZERO),
            pointer: Vec2::ZERO,
            registry,
            config,
        };

        for _ in 0..battle.config.rules.starting_hand_size {
            battle.draw_player_card();
        }
        battle.layout_player_hand();
        battle.refresh_stats();

        log::info!(
            "Battle started: seed {}, {} card definitions, decks {}/{}",
            battle.config.rules.seed,
            battle.registry.len(),
            battle.sides[Side::Player].deck.len(),
            battle.sides[Side::Bot].deck.len()
        );
        battle
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    #[must_use]
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Terminal outcome, once the battle is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Whether the player may drag cards and play. False during a round and
    /// after the battle ended.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.outcome.is_none() && self.round.is_none()
    }

    /// Actual health, which may be below zero.
    #[must_use]
    pub fn health(&self, side: Side) -> i32 {
        self.sides[side].health
    }

    #[must_use]
    pub fn participant(&self, side: Side) -> &Participant {
        &self.sides[side]
    }

    /// Counters for the stats display.
    #[must_use]
    pub fn stats(&self, side: Side) -> StatsView {
        self.stats[side]
    }

    /// The player's hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[CardKey] {
        &self.sides[Side::Player].hand
    }

    #[must_use]
    pub fn arena(&self) -> &CardArena {
        &self.arena
    }

    #[must_use]
    pub fn card(&self, key: CardKey) -> Option<&Card> {
        self.arena.get(key)
    }

    #[must_use]
    pub fn slots(&self) -> &FusionSlots {
        &self.slots
    }

    #[must_use]
    pub fn fusion_preview(&self) -> FusionPreview {
        self.slots.preview(&self.arena, &self.registry)
    }

    #[must_use]
    pub fn dragged(&self) -> Option<CardKey> {
        self.dragged
    }

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Current displacement of the fusion table.
    #[must_use]
    pub fn table_offset(&self) -> Vec2 {
        self.table.value()
    }

    /// Resting rectangle of a fusion slot, ignoring the table offset.
    #[must_use]
    pub fn slot_rect(&self, side: SlotSide) -> Rect {
        side.rect(&self.config.layout)
    }

    /// The card `side` played this round.
    #[must_use]
    pub fn played_card(&self, side: Side) -> Option<&Card> {
        self.arena.get(self.played_key(side)?)
    }

    /// Where `side`'s played card is drawn, shake included.
    #[must_use]
    pub fn played_card_rect(&self, side: Side) -> Option<Rect> {
        let round = self.round.as_ref()?;
        let card = self.played_card(side)?;
        let rect = card.motion.rect();

        let shaking = matches!(
            (side, self.phase),
            (Side::Player, BattlePhase::PlayerShake { .. })
                | (Side::Bot, BattlePhase::BotShake { .. })
        );
        if shaking {
            let offset =
                shake_offset(&self.config.shake, round.phase_elapsed(), self.config.timings.shake);
            return Some(rect.translated(offset));
        }
        Some(rect)
    }

    fn played_key(&self, side: Side) -> Option<CardKey> {
        let round = self.round.as_ref()?;
        match side {
            Side::Player => Some(round.player_card),
            Side::Bot => round.bot_card,
        }
    }

    // === Play ===

    /// Start a round with whatever the fusion table resolves to.
    ///
    /// Returns `false`, changing nothing, when the table has no result,
    /// a round is already running, a card is being dragged, or the battle
    /// is over.
    pub fn play(&mut self, audio: &mut impl AudioSink) -> bool {
        if !self.is_interactive() || self.dragged.is_some() {
            return false;
        }

        let (player_card, consumed) = match self.fusion_preview() {
            FusionPreview::Solo(key) => {
                self.slots = FusionSlots::new();
                self.sides[Side::Player].remove_from_hand(key);
                (key, 1)
            }
            FusionPreview::Fused { result, sources } => {
                let Some(def) = self.registry.get(result) else {
                    log::warn!("Fusion result {} is missing from the registry", result);
                    return false;
                };
                for key in sources {
                    self.sides[Side::Player].remove_from_hand(key);
                    self.arena.remove(key);
                }
                self.slots = FusionSlots::new();
                (self.arena.spawn(def, Side::Player), 2)
            }
            FusionPreview::Empty | FusionPreview::NoMatch => return false,
        };

        let result_rect = self.config.layout.result_slot();
        if let Some(card) = self.arena.get_mut(player_card) {
            card.motion.place_in_slot(result_rect);
        }

        let bot_card = self.draw_bot_card();
        self.stats[Side::Bot].refresh_cards(&self.sides[Side::Bot]);

        self.round = Some(Round::new(
            &self.config.timings,
            &self.config.layout,
            player_card,
            bot_card,
            consumed,
        ));
        audio.play(Sound::PlayCard);

        log::info!(
            "Round started: player plays {:?} ({} consumed), bot plays {:?}",
            self.played_card(Side::Player).map(|c| c.id),
            consumed,
            self.played_card(Side::Bot).map(|c| c.id)
        );
        true
    }

    // === Frame tick ===

    /// Advance the battle by one frame.
    ///
    /// Phase actions fire before anything else this tick, so whatever is
    /// rendered afterwards already reflects them.
    pub fn update(&mut self, input: FrameInput, audio: &mut impl AudioSink) {
        let dt = input.dt.max(0.0);
        self.pointer = input.pointer;

        if let Some(round) = self.round.as_mut() {
            let fired = round.timeline.update(dt);
            for action in fired {
                self.apply_action(action, audio);
            }
            if let Some(round) = self.round.as_mut() {
                round.step(dt);
            }
            self.apply_phase_effect();
            self.sync_played_cards();
        }

        self.table.step(dt);
        self.layout_player_hand();
        let hand = &self.sides[Side::Player].hand;
        update_hand(&mut self.arena, hand, self.pointer, dt);
    }

    fn apply_action(&mut self, action: BattleAction, audio: &mut impl AudioSink) {
        // A long tick can jump straight over an attack phase.
        self.apply_phase_effect();

        let Some(round) = self.round.as_mut() else {
            return;
        };
        self.phase = action.phase();
        log::debug!("Entering phase {}", self.phase);

        let timings = &self.config.timings;
        let layout = &self.config.layout;
        match action {
            BattleAction::StartTravel => {
                round.start_travel(timings, layout);
                self.table = Tween::new(
                    self.table.value(),
                    layout.table_hide_offset,
                    timings.travel,
                    Ease::OutCubic,
                );
            }
            BattleAction::StartPlayerShake | BattleAction::StartBotShake => {
                audio.play(Sound::CardAttack);
            }
            BattleAction::StartGap => {}
            BattleAction::StartExit => round.start_exit(timings, layout),
            BattleAction::ShowTable => {
                let from = self.table.value();
                self.table = Tween::new(from, Vec2::ZERO, timings.table_return, Ease::OutCubic);
                self.refill_player_hand();
            }
            BattleAction::FinishRound => self.finish_round(audio),
        }
    }

    /// Apply the current phase's pending effect, if it has one.
    fn apply_phase_effect(&mut self) {
        let attacker = match &mut self.phase {
            BattlePhase::PlayerShake { applied } if !*applied => {
                *applied = true;
                Side::Player
            }
            BattlePhase::BotShake { applied } if !*applied => {
                *applied = true;
                Side::Bot
            }
            _ => return,
        };
        self.resolve_attack(attacker);
    }

    fn resolve_attack(&mut self, attacker: Side) {
        let defender = attacker.opponent();
        let (Some(atk), Some(def)) = (self.played_card(attacker), self.played_card(defender)) else {
            log::debug!("{} attack skipped: no card to fight", attacker);
            return;
        };
        let damage = attack_damage(atk.attack, def.defense);

        self.sides[defender].take_damage(damage);
        self.stats[defender].refresh_health(&self.sides[defender]);
        log::debug!(
            "{} deals {} damage to {} ({} health left)",
            attacker,
            damage,
            defender,
            self.sides[defender].health
        );
    }

    fn refill_player_hand(&mut self) {
        let count = self.round.as_ref().map_or(0, |r| r.cards_consumed.min(2));
        for _ in 0..count {
            self.draw_player_card();
        }
        self.stats[Side::Player].refresh_cards(&self.sides[Side::Player]);
    }

    fn finish_round(&mut self, audio: &mut impl AudioSink) {
        let Some(round) = self.round.take() else {
            return;
        };

        self.sides[Side::Player].remove_from_hand(round.player_card);
        self.arena.remove(round.player_card);
        if let Some(key) = round.bot_card {
            self.sides[Side::Bot].remove_from_hand(key);
            self.arena.remove(key);
        }
        self.refresh_stats();

        let player = &self.sides[Side::Player];
        let bot = &self.sides[Side::Bot];
        self.outcome = GameOutcome::evaluate(
            player.health,
            bot.health,
            player.remaining_cards(),
            bot.remaining_cards(),
        );
        self.phase = BattlePhase::Idle;

        match self.outcome {
            Some(outcome) => {
                if let Some(sound) = outcome.sound() {
                    audio.play(sound);
                }
                log::info!(
                    "Battle over: {} (health {}/{})",
                    outcome,
                    self.sides[Side::Player].health,
                    self.sides[Side::Bot].health
                );
            }
            None => log::info!(
                "Round over (health {}/{})",
                self.sides[Side::Player].health,
                self.sides[Side::Bot].health
            ),
        }
    }

    /// Pin the played cards to their tweens.
    fn sync_played_cards(&mut self) {
        let Some(round) = self.round.as_ref() else {
            return;
        };
        let moves = [
            (Some(round.player_card), round.player_tween.value()),
            (round.bot_card, round.bot_tween.value()),
        ];
        for (key, pos) in moves {
            if let Some(card) = key.and_then(|k| self.arena.get_mut(k)) {
                card.motion.move_to(pos);
            }
        }
    }

    fn layout_player_hand(&mut self) {
        let hover = (self.is_interactive() && self.dragged.is_none()).then_some(self.pointer);
        let hand = &self.sides[Side::Player].hand;
        layout_hand(&mut self.arena, hand, &self.config.layout, hover);
    }

    // === Draws ===

    fn draw_player_card(&mut self) -> Option<CardKey> {
        let key = self.sides[Side::Player].draw(&mut self.arena, &self.registry)?;
        if let Some(card) = self.arena.get_mut(key) {
            card.motion.begin_hand_entry();
        }
        Some(key)
    }

    /// The bot's card for this round: an auto-fused card when the roll
    /// succeeds, otherwise its top card. Starts just off-screen.
    fn draw_bot_card(&mut self) -> Option<CardKey> {
        let chance = self.config.rules.auto_fusion_chance;
        let bot = &mut self.sides[Side::Bot];

        let combinations = self.registry.combinations();
        let id = try_auto_fusion(&mut bot.deck, combinations, chance, &mut self.bot_rng)
            .or_else(|| bot.deck.draw())?;
        let key = bot.add_to_hand(id, &mut self.arena, &self.registry)?;

        let entry = played_rect(&self.config.layout, bot_entry_point(&self.config.layout));
        if let Some(card) = self.arena.get_mut(key) {
            card.motion.place_in_slot(entry);
        }
        Some(key)
    }

    fn refresh_stats(&mut self) {
        for side in Side::ALL {
            self.stats[side] = StatsView::of(&self.sides[side]);
        }
    }
}
