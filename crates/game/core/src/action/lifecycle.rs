//! Session lifecycle: start and reset.

use crate::engine::{Effect, LifecycleError};
use crate::env::GameEnv;
use crate::error::NeverError;
use crate::state::{GamePhase, GameState};

use super::ActionTransition;

/// Moves a fresh session into play and starts the first turn's clock.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartGameAction;

impl ActionTransition for StartGameAction {
    type Error = LifecycleError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.phase != GamePhase::NotStarted {
            return Err(LifecycleError::AlreadyStarted { phase: state.phase });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        effects: &mut Vec<Effect>,
    ) -> Result<(), Self::Error> {
        state.phase = GamePhase::InProgress;
        state.turn.time_left = env.config.turn_seconds;
        state.turn.generation += 1;
        effects.push(Effect::GameStarted);
        Ok(())
    }
}

/// Discards the whole session and returns to the initial state.
///
/// Only the turn generation survives, so work dispatched before the reset is
/// recognized as stale afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetGameAction;

impl ActionTransition for ResetGameAction {
    type Error = NeverError;

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        effects: &mut Vec<Effect>,
    ) -> Result<(), Self::Error> {
        *state = GameState::with_generation(env.config, state.turn.generation + 1);
        effects.push(Effect::GameReset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::config::GameConfig;
    use crate::engine::{ExecuteError, GameEngine};

    #[test]
    fn start_enters_play_without_touching_turn_number() {
        let config = GameConfig::default();
        let mut state = GameState::default();
        state.turn.time_left = 3;

        GameEngine::new(&mut state)
            .execute(GameEnv::new(&config), &Action::start())
            .unwrap();

        assert!(state.is_in_progress());
        assert_eq!(state.turn.time_left, 30);
        assert_eq!(state.turn.turn_number, 0);
    }

    #[test]
    fn start_twice_fails() {
        let config = GameConfig::default();
        let mut state = GameState::default();
        let mut engine = GameEngine::new(&mut state);
        engine.execute(GameEnv::new(&config), &Action::start()).unwrap();

        let err = engine
            .execute(GameEnv::new(&config), &Action::start())
            .unwrap_err();
        assert!(matches!(
            err,
            ExecuteError::Start(ref e) if e.error == LifecycleError::AlreadyStarted { phase: GamePhase::InProgress }
        ));
    }

    #[test]
    fn reset_restores_initial_state_but_advances_generation() {
        let config = GameConfig::default();
        let mut state = GameState::default();
        state.phase = GamePhase::GameOver;
        state.players[0].score = 25;
        state.turn.turn_number = 9;
        state.turn.generation = 12;
        state.winner = Some(crate::state::PlayerIndex::First);

        let outcome = GameEngine::new(&mut state)
            .execute(GameEnv::new(&config), &Action::reset())
            .unwrap();

        let mut expected = GameState::default();
        expected.turn.generation = 13;
        assert_eq!(state, expected);
        assert_eq!(outcome.effects, vec![Effect::GameReset]);
    }
}
