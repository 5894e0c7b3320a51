//! Terminal outcomes and attack damage.

use serde::{Deserialize, Serialize};

use crate::platform::Sound;

/// How a finished battle ended, from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win,
    Loss,
    /// Both sides fell together, or one side ran out of cards.
    Stalemate,
}

impl GameOutcome {
    /// Decide whether the battle is over after a round.
    ///
    /// Health is checked first, so a side that drops to zero on its last
    /// card still wins or loses rather than stalemating.
    #[must_use]
    pub fn evaluate(
        player_health: i32,
        bot_health: i32,
        player_cards: usize,
        bot_cards: usize,
    ) -> Option<Self> {
        let player_down = player_health <= 0;
        let bot_down = bot_health <= 0;

        match (player_down, bot_down) {
            (true, true) => Some(GameOutcome::Stalemate),
            (true, false) => Some(GameOutcome::Loss),
            (false, true) => Some(GameOutcome::Win),
            (false, false) if player_cards == 0 || bot_cards == 0 => Some(GameOutcome::Stalemate),
            (false, false) => None,
        }
    }

    /// Sound announcing this outcome, if it has one.
    #[must_use]
    pub fn sound(self) -> Option<Sound> {
        match self {
            GameOutcome::Win => Some(Sound::Victory),
            GameOutcome::Loss => Some(Sound::Lose),
            GameOutcome::Stalemate => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Win => write!(f, "win"),
            GameOutcome::Loss => write!(f, "loss"),
            GameOutcome::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Damage dealt by an attacker to a defender. Never negative.
#[must_use]
pub fn attack_damage(attack: i32, defense: i32) -> i32 {
    attack.saturating_sub(defense).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage() {
        assert_eq!(attack_damage(5, 4), 1);
        assert_eq!(attack_damage(3, 2), 1);
        assert_eq!(attack_damage(2, 7), 0);
        assert_eq!(attack_damage(4, 4), 0);
    }

    #[test]
    fn test_both_down_is_stalemate() {
        assert_eq!(GameOutcome::evaluate(0, -3, 5, 5), Some(GameOutcome::Stalemate));
    }

    #[test]
    fn test_player_down_is_loss() {
        assert_eq!(GameOutcome::evaluate(0, 4, 5, 5), Some(GameOutcome::Loss));
        assert_eq!(GameOutcome::evaluate(-2, 4, 0, 0), Some(GameOutcome::Loss));
    }

    #[test]
    fn test_bot_down_is_win() {
        assert_eq!(GameOutcome::evaluate(3, 0, 0, 5), Some(GameOutcome::Win));
    }

    #[test]
    fn test_out_of_cards_is_stalemate() {
        assert_eq!(GameOutcome::evaluate(3, 3, 0, 5), Some(GameOutcome::Stalemate));
        assert_eq!(GameOutcome::evaluate(3, 3, 5, 0), Some(GameOutcome::Stalemate));
    }

    #[test]
    fn test_battle_continues() {
        assert_eq!(GameOutcome::evaluate(1, 1, 1, 1), None);
    }

    #[test]
    fn test_outcome_sounds() {
        assert_eq!(GameOutcome::Win.sound(), Some(Sound::Victory));
        assert_eq!(GameOutcome::Loss.sound(), Some(Sound::Lose));
        assert_eq!(GameOutcome::Stalemate.sound(), None);
    }
}
