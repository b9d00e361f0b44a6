//! Turns that end without a word: skipping and running out of time.

use crate::engine::{Effect, TurnError};
use crate::env::GameEnv;
use crate::state::GameState;

use super::ActionTransition;
use super::resolve::{debug_check_resolved, penalize_and_pass, require_in_progress};

/// The active player gives up the turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkipTurnAction;

impl ActionTransition for SkipTurnAction {
    type Error = TurnError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_in_progress(state)
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        effects: &mut Vec<Effect>,
    ) -> Result<(), Self::Error> {
        let penalty = env.config.skip_penalty;
        let unit = if penalty == 1 { "point" } else { "points" };
        penalize_and_pass(
            state,
            env,
            penalty,
            "Turn skipped",
            format!("Turn skipped! -{penalty} {unit}"),
            effects,
        );
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_check_resolved(state);
        Ok(())
    }
}

/// The countdown reached zero.
///
/// Only valid while the clock reads zero; resolving it resets the clock, so a
/// second timeout for the same expiry fails pre-validation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeoutAction;

impl ActionTransition for TimeoutAction {
    type Error = TurnError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_in_progress(state)?;
        if state.turn.time_left > 0 {
            return Err(TurnError::TimerRunning {
                time_left: state.turn.time_left,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        effects: &mut Vec<Effect>,
    ) -> Result<(), Self::Error> {
        let penalty = env.config.timeout_penalty;
        let unit = if penalty == 1 { "point" } else { "points" };
        penalize_and_pass(
            state,
            env,
            penalty,
            "Time's up!",
            format!("Time's up! -{penalty} {unit}"),
            effects,
        );
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_check_resolved(state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::config::GameConfig;
    use crate::engine::{ExecuteError, GameEngine};
    use crate::state::{GamePhase, PlayerIndex};

    fn started() -> GameState {
        let mut state = GameState::default();
        state.phase = GamePhase::InProgress;
        state
    }

    #[test]
    fn skip_deducts_clamped_point_and_rotates() {
        let config = GameConfig::default();
        let mut state = started();
        state.turn.time_left = 12;

        let outcome = GameEngine::new(&mut state)
            .execute(GameEnv::new(&config), &Action::skip())
            .unwrap();

        assert_eq!(state.players[0].score, 0);
        assert_eq!(state.turn.current_player, PlayerIndex::Second);
        assert_eq!(state.turn.time_left, 30);
        assert_eq!(state.turn.turn_number, 1);
        let change = outcome.score_change().unwrap();
        assert_eq!(change.points, -1);
        assert_eq!(change.reason, "Turn skipped");
        assert_eq!(outcome.message(), Some("Turn skipped! -1 point"));
    }

    #[test]
    fn skip_requires_running_game() {
        let config = GameConfig::default();
        let mut state = GameState::default();
        let err = GameEngine::new(&mut state)
            .execute(GameEnv::new(&config), &Action::skip())
            .unwrap_err();
        assert!(err.is_not_in_progress());
        assert_eq!(state.turn.turn_number, 0);
    }

    #[test]
    fn timeout_deducts_two_and_fires_once() {
        let config = GameConfig::default();
        let mut state = started();
        state.players[0].score = 5;
        state.turn.time_left = 0;
        let mut engine = GameEngine::new(&mut state);

        let outcome = engine
            .execute(GameEnv::new(&config), &Action::timeout())
            .unwrap();
        assert_eq!(outcome.score_change().unwrap().points, -2);
        assert_eq!(outcome.message(), Some("Time's up! -2 points"));

        let err = engine
            .execute(GameEnv::new(&config), &Action::timeout())
            .unwrap_err();
        assert!(matches!(
            err,
            ExecuteError::Timeout(ref e) if e.error == TurnError::TimerRunning { time_left: 30 }
        ));

        assert_eq!(state.players[0].score, 3);
        assert_eq!(state.turn.turn_number, 1);
    }

    #[test]
    fn penalty_can_hand_the_game_to_the_opponent() {
        let config = GameConfig::default();
        let mut state = started();
        state.players[0].score = 10;
        state.players[1].score = 1;
        state.turn.current_player = PlayerIndex::Second;

        GameEngine::new(&mut state)
            .execute(GameEnv::new(&config), &Action::skip())
            .unwrap();

        assert!(state.game_over());
        assert_eq!(state.winner, Some(PlayerIndex::First));
    }
}
