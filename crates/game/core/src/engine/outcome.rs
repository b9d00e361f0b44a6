use crate::state::{PlayerIndex, ScoreChange, WordEntry};

/// Side effect of a transition, reported to the runtime for notification.
///
/// Effects never mutate state themselves; they describe what the transition
/// already did so the caller can publish events and update transient UI flags.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    GameStarted,
    GameReset,
    /// A player's score changed (including penalties clamped at zero).
    ScoreChanged(ScoreChange),
    /// Status text for the player, e.g. `Turn skipped! -1 point`.
    Message(String),
    WordAccepted(WordEntry),
    /// The turn was resolved and handed to `next`.
    TurnPassed { next: PlayerIndex, turn_number: u32 },
    /// The countdown reached zero; the caller must resolve it with a timeout.
    TimerExpired,
    GameOver { winner: PlayerIndex },
}

/// Complete outcome of action execution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    pub effects: Vec<Effect>,
}

impl ExecutionOutcome {
    pub fn new(effects: Vec<Effect>) -> Self {
        Self { effects }
    }

    /// True when the action resolved the current turn.
    pub fn resolved_turn(&self) -> bool {
        self.effects
            .iter()
            .any(|effect| matches!(effect, Effect::TurnPassed { .. }))
    }

    pub fn timer_expired(&self) -> bool {
        self.effects
            .iter()
            .any(|effect| matches!(effect, Effect::TimerExpired))
    }

    pub fn winner(&self) -> Option<PlayerIndex> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::GameOver { winner } => Some(*winner),
            _ => None,
        })
    }

    pub fn score_change(&self) -> Option<&ScoreChange> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::ScoreChanged(change) => Some(change),
            _ => None,
        })
    }

    /// Last status message produced, if any.
    pub fn message(&self) -> Option<&str> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::Message(message) => Some(message.as_str()),
            _ => None,
        })
    }

    pub fn accepted_entry(&self) -> Option<&WordEntry> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::WordAccepted(entry) => Some(entry),
            _ => None,
        })
    }
}
