//! Authoritative game state representation.
//!
//! This module owns the data structures describing players, turn bookkeeping
//! and the chain of played words. Runtime layers clone or query this state but
//! mutate it exclusively through the engine.
mod chain;
mod player;
mod score;
mod turn;

pub use chain::{WordChain, WordEntry};
pub use player::{Player, PlayerIndex};
pub use score::ScoreChange;
pub use turn::{TurnState, TurnTicket};

use crate::config::GameConfig;

/// Lifecycle of a session. Exactly one phase holds at any time.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    #[default]
    NotStarted,
    InProgress,
    /// Terminal until an explicit reset.
    GameOver,
}

/// Canonical snapshot of a two-player session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub phase: GamePhase,
    pub players: [Player; 2],
    pub turn: TurnState,
    pub chain: WordChain,
    /// Set exactly once, when the phase becomes [`GamePhase::GameOver`].
    pub winner: Option<PlayerIndex>,
    /// Every score change of the session, oldest first.
    pub score_history: Vec<ScoreChange>,
}

impl GameState {
    /// Creates the initial state described by `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_generation(config, 0)
    }

    /// Creates an initial state whose turn generation continues from `generation`.
    ///
    /// Used by reset so that completions dispatched before the reset can never
    /// match a ticket issued after it.
    pub fn with_generation(config: &GameConfig, generation: u64) -> Self {
        let [first, second] = &config.player_names;
        Self {
            phase: GamePhase::NotStarted,
            players: [Player::new(first.clone()), Player::new(second.clone())],
            turn: TurnState::new(config.turn_seconds, generation),
            chain: WordChain::default(),
            winner: None,
            score_history: Vec::new(),
        }
    }

    pub fn player(&self, index: PlayerIndex) -> &Player {
        &self.players[index.as_usize()]
    }

    pub fn player_mut(&mut self, index: PlayerIndex) -> &mut Player {
        &mut self.players[index.as_usize()]
    }

    /// Returns the player whose turn is active.
    pub fn current_player(&self) -> &Player {
        self.player(self.turn.current_player)
    }

    pub fn game_started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_in_progress(&self) -> bool {
        self.phase == GamePhase::InProgress
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|index| self.player(index).name.as_str())
    }

    /// Returns `(max, min)` across both players' scores.
    pub fn score_extremes(&self) -> (u32, u32) {
        let [a, b] = &self.players;
        (a.score.max(b.score), a.score.min(b.score))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_matches_documented_defaults() {
        let state = GameState::default();

        assert_eq!(state.phase, GamePhase::NotStarted);
        assert!(!state.game_started());
        assert!(!state.game_over());
        assert_eq!(state.turn.current_player, PlayerIndex::First);
        assert_eq!(state.turn.time_left, 30);
        assert_eq!(state.turn.turn_number, 0);
        assert_eq!(state.players[0].name, "Player 1");
        assert_eq!(state.players[1].name, "Player 2");
        assert!(state.players.iter().all(|p| p.score == 0 && p.words_played == 0));
        assert!(state.chain.current_word.is_none());
        assert!(state.chain.last_letter.is_none());
        assert!(state.chain.used_words.is_empty());
        assert!(state.winner.is_none());
    }

    #[test]
    fn phase_names_are_snake_case() {
        assert_eq!(GamePhase::InProgress.to_string(), "in_progress");
        let name: &'static str = GamePhase::GameOver.into();
        assert_eq!(name, "game_over");
    }
}
