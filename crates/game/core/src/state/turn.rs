use super::PlayerIndex;

/// Turn bookkeeping: whose turn it is, the countdown, and the generation
/// counter used to recognize stale asynchronous completions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub current_player: PlayerIndex,
    /// Seconds remaining in the current turn.
    pub time_left: u32,
    /// Number of resolved turns (accepted, invalid, skipped or timed out).
    pub turn_number: u32,
    /// Monotonic counter bumped on start, reset and every resolved turn.
    /// Never goes backwards, even across resets.
    pub generation: u64,
}

impl TurnState {
    pub fn new(turn_seconds: u32, generation: u64) -> Self {
        Self {
            current_player: PlayerIndex::First,
            time_left: turn_seconds,
            turn_number: 0,
            generation,
        }
    }

    /// Identifies the turn that is live right now.
    pub fn ticket(&self) -> TurnTicket {
        TurnTicket {
            generation: self.generation,
            player: self.current_player,
        }
    }

    /// Hands the turn to the other player with a fresh clock.
    pub fn pass_to_next(&mut self, turn_seconds: u32) {
        self.current_player = self.current_player.other();
        self.time_left = turn_seconds;
        self.turn_number += 1;
        self.generation += 1;
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new(crate::config::GameConfig::DEFAULT_TURN_SECONDS, 0)
    }
}

/// Captured when asynchronous work (a lookup, a timer tick) is dispatched for
/// a turn; the completion is only honored while the ticket is still live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnTicket {
    pub generation: u64,
    pub player: PlayerIndex,
}
