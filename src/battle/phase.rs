//! Round phases and the timeline actions that enter them.

use serde::{Deserialize, Serialize};

use crate::core::PhaseTimings;
use crate::timeline::{Frame, Sequencer};

/// Where the battle is within a round.
///
/// The two attack phases carry their own `applied` flag: the phase is
/// re-evaluated every tick while active, and damage lands only on the
/// tick that flips the flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattlePhase {
    /// No timeline running. Right after `play` the round already exists
    /// but stays here until the next update starts its timeline.
    #[default]
    Idle,
    /// Both played cards fly to their attack positions.
    Traveling,
    /// The player's card strikes the bot.
    PlayerShake { applied: bool },
    Gap,
    /// The bot's card strikes the player.
    BotShake { applied: bool },
    /// Both played cards leave the screen.
    Exiting,
    /// The fusion table slides back and the player refills.
    TableReturning,
    /// Cleanup and the win/loss check.
    Finishing,
}

impl BattlePhase {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BattlePhase::Idle => "idle",
            BattlePhase::Traveling => "traveling",
            BattlePhase::PlayerShake { .. } => "player_shake",
            BattlePhase::Gap => "gap",
            BattlePhase::BotShake { .. } => "bot_shake",
            BattlePhase::Exiting => "exiting",
            BattlePhase::TableReturning => "table_returning",
            BattlePhase::Finishing => "finishing",
        }
    }
}

impl std::fmt::Display for BattlePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Timeline tags dispatched by the battle when a round frame begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleAction {
    StartTravel,
    StartPlayerShake,
    StartGap,
    StartBotShake,
    StartExit,
    ShowTable,
    FinishRound,
}

impl BattleAction {
    /// The phase this action enters, with its effect still pending.
    #[must_use]
    pub fn phase(self) -> BattlePhase {
        match self {
            BattleAction::StartTravel => BattlePhase::Traveling,
            BattleAction::StartPlayerShake => BattlePhase::PlayerShake { applied: false },
            BattleAction::StartGap => BattlePhase::Gap,
            BattleAction::StartBotShake => BattlePhase::BotShake { applied: false },
            BattleAction::StartExit => BattlePhase::Exiting,
            BattleAction::ShowTable => BattlePhase::TableReturning,
            BattleAction::FinishRound => BattlePhase::Finishing,
        }
    }
}

/// The fixed timeline of one round.
#[must_use]
pub fn round_timeline(timings: &PhaseTimings) -> Sequencer<BattleAction> {
    Sequencer::new([
        Frame::new(timings.travel).with_action(BattleAction::StartTravel),
        Frame::new(timings.shake).with_action(BattleAction::StartPlayerShake),
        Frame::new(timings.gap).with_action(BattleAction::StartGap),
        Frame::new(timings.shake).with_action(BattleAction::StartBotShake),
        Frame::new(timings.exit).with_action(BattleAction::StartExit),
        Frame::new(timings.table_return).with_action(BattleAction::ShowTable),
        Frame::new(0.0).with_action(BattleAction::FinishRound),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_duration_matches_timings() {
        let timings = PhaseTimings::default();
        let timeline = round_timeline(&timings);
        let expected = timings.travel
            + 2.0 * timings.shake
            + timings.gap
            + timings.exit
            + timings.table_return;
        assert!((timeline.total_duration() - expected).abs() < 1e-5);
        assert_eq!(timeline.len(), 7);
    }

    #[test]
    fn test_timeline_fires_phases_in_order() {
        let mut timeline = round_timeline(&PhaseTimings::default());
        let fired: Vec<BattleAction> = timeline.update(100.0).into_iter().collect();
        assert_eq!(
            fired,
            vec![
                BattleAction::StartTravel,
                BattleAction::StartPlayerShake,
                BattleAction::StartGap,
                BattleAction::StartBotShake,
                BattleAction::StartExit,
                BattleAction::ShowTable,
                BattleAction::FinishRound,
            ]
        );
    }

    #[test]
    fn test_attack_phases_start_unapplied() {
        assert_eq!(
            BattleAction::StartPlayerShake.phase(),
            BattlePhase::PlayerShake { applied: false }
        );
        assert_eq!(BattleAction::StartBotShake.phase(), BattlePhase::BotShake { applied: false });
    }
}
