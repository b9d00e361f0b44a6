//! Event types for different topics.

use serde::{Deserialize, Serialize};
use shiritori_core::{Action, Effect, PlayerIndex, TransitionPhase, TurnState};

/// Events related to game state changes (actions, failures)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// An action was committed; `effects` describe what it changed.
    ActionExecuted {
        action: Action,
        effects: Vec<Effect>,
        turn_number: u32,
    },

    /// An action failed during execution pipeline
    ActionFailed {
        action: Action,
        phase: TransitionPhase,
        error: String,
        turn_number: u32,
    },
}

/// Turn clock snapshot, published on every countdown change and turn handover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEvent {
    pub player: PlayerIndex,
    pub turn_number: u32,
    pub time_left: u32,
    pub generation: u64,
}

impl From<&TurnState> for TurnEvent {
    fn from(turn: &TurnState) -> Self {
        Self {
            player: turn.current_player,
            turn_number: turn.turn_number,
            time_left: turn.time_left,
            generation: turn.generation,
        }
    }
}

/// Progress of dictionary lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupEvent {
    Started { word: String, generation: u64 },
    Found { word: String },
    NotFound { word: String },
    /// Every attempt failed; the turn stays with the same player.
    NetworkError { word: String, attempts: u32 },
    /// The turn was resolved elsewhere before the lookup finished.
    Discarded { word: String, generation: u64 },
}
