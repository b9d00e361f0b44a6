use crate::engine::{Effect, TurnError};
use crate::env::GameEnv;
use crate::state::GameState;

use super::ActionTransition;
use super::resolve::require_in_progress;

/// One second of the turn countdown.
///
/// Reaching zero does not resolve the turn by itself; it reports
/// [`Effect::TimerExpired`] and the caller follows up with a timeout.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickAction;

impl ActionTransition for TickAction {
    type Error = TurnError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_in_progress(state)?;
        if state.turn.time_left == 0 {
            return Err(TurnError::TimerExpired);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        effects: &mut Vec<Effect>,
    ) -> Result<(), Self::Error> {
        state.turn.time_left -= 1;
        if state.turn.time_left == 0 {
            effects.push(Effect::TimerExpired);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::config::GameConfig;
    use crate::engine::GameEngine;
    use crate::state::GamePhase;

    #[test]
    fn countdown_reports_expiry_at_zero() {
        let config = GameConfig::default();
        let mut state = GameState::default();
        state.phase = GamePhase::InProgress;
        let mut engine = GameEngine::new(&mut state);

        for _ in 0..29 {
            let outcome = engine.execute(GameEnv::new(&config), &Action::tick()).unwrap();
            assert!(!outcome.timer_expired());
        }
        let outcome = engine.execute(GameEnv::new(&config), &Action::tick()).unwrap();
        assert!(outcome.timer_expired());
        assert_eq!(engine.state().turn.time_left, 0);
        assert_eq!(engine.state().turn.turn_number, 0);

        assert!(engine.execute(GameEnv::new(&config), &Action::tick()).is_err());
    }

    #[test]
    fn ticks_ignored_outside_play() {
        let config = GameConfig::default();
        let mut state = GameState::default();
        let err = GameEngine::new(&mut state)
            .execute(GameEnv::new(&config), &Action::tick())
            .unwrap_err();
        assert!(err.is_not_in_progress());
        assert_eq!(state.turn.time_left, 30);
    }
}
