//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionTransition};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
use super::outcome::Effect;

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and record effects
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
    effects: &mut Vec<Effect>,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, env, effects)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(())
}

/// Routes each action to its transition and collects the effects it produced.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<Vec<Effect>, ExecuteError> {
    let mut effects = Vec::new();
    match action {
        Action::Start(transition) => {
            drive_transition(transition, state, env, &mut effects).map_err(ExecuteError::Start)?
        }
        Action::Reset(transition) => {
            drive_transition(transition, state, env, &mut effects).map_err(ExecuteError::Reset)?
        }
        Action::AcceptWord(transition) => drive_transition(transition, state, env, &mut effects)
            .map_err(ExecuteError::AcceptWord)?,
        Action::RejectWord(transition) => drive_transition(transition, state, env, &mut effects)
            .map_err(ExecuteError::RejectWord)?,
        Action::Skip(transition) => {
            drive_transition(transition, state, env, &mut effects).map_err(ExecuteError::Skip)?
        }
        Action::Timeout(transition) => {
            drive_transition(transition, state, env, &mut effects).map_err(ExecuteError::Timeout)?
        }
        Action::Tick(transition) => {
            drive_transition(transition, state, env, &mut effects).map_err(ExecuteError::Tick)?
        }
    }
    Ok(effects)
}
