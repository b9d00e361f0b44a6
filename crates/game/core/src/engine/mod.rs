//! Turn resolution and action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! routes every [`Action`] through the transition phases and reports what
//! happened as a list of [`Effect`]s. [`reduce`] is the pure form used by the
//! runtime: it leaves the input untouched and returns the next state.

mod errors;
mod outcome;
mod transition;

pub use errors::{ExecuteError, LifecycleError, TransitionPhase, TransitionPhaseError, TurnError};
pub use outcome::{Effect, ExecutionOutcome};

use crate::action::Action;
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::state::{GameState, PlayerIndex};

/// Game engine applying actions to a borrowed state.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action and returns the effects it produced.
    ///
    /// On error the state may be partially updated; callers that need
    /// all-or-nothing semantics use [`reduce`].
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let effects = transition::execute_transition(action, self.state, &env)?;
        Ok(ExecutionOutcome::new(effects))
    }

    pub fn state(&self) -> &GameState {
        self.state
    }
}

/// Applies `action` to a copy of `state`, returning the next state and its effects.
pub fn reduce(
    state: &GameState,
    env: GameEnv<'_>,
    action: &Action,
) -> Result<(GameState, ExecutionOutcome), ExecuteError> {
    let mut next = state.clone();
    let outcome = GameEngine::new(&mut next).execute(env, action)?;
    Ok((next, outcome))
}

/// Decides whether the scores end the game, returning the winner.
///
/// The game ends when the gap between the scores reaches the winning margin
/// or the leading score reaches the winning score. Ties on the maximum go to
/// the first player.
pub fn check_game_end(state: &GameState, config: &GameConfig) -> Option<PlayerIndex> {
    let (max, min) = state.score_extremes();
    if max - min < config.winning_margin && max < config.winning_score {
        return None;
    }
    PlayerIndex::ALL
        .into_iter()
        .find(|&index| state.player(index).score == max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::validate_submission;
    use proptest::prelude::*;

    fn scored(first: u32, second: u32) -> GameState {
        let mut state = GameState::default();
        state.players[0].score = first;
        state.players[1].score = second;
        state
    }

    #[test]
    fn game_continues_below_thresholds() {
        let config = GameConfig::default();
        assert_eq!(check_game_end(&scored(0, 0), &config), None);
        assert_eq!(check_game_end(&scored(19, 10), &config), None);
        assert_eq!(check_game_end(&scored(3, 12), &config), None);
    }

    #[test]
    fn margin_of_ten_ends_game() {
        let config = GameConfig::default();
        assert_eq!(
            check_game_end(&scored(0, 10), &config),
            Some(PlayerIndex::Second)
        );
    }

    #[test]
    fn reaching_twenty_ends_game_and_ties_go_to_first_player() {
        let config = GameConfig::default();
        assert_eq!(
            check_game_end(&scored(20, 20), &config),
            Some(PlayerIndex::First)
        );
        assert_eq!(
            check_game_end(&scored(15, 21), &config),
            Some(PlayerIndex::Second)
        );
    }

    #[test]
    fn reduce_leaves_input_untouched_on_error() {
        let state = GameState::default();
        let config = GameConfig::default();
        let result = reduce(&state, GameEnv::new(&config), &Action::skip());
        assert!(result.unwrap_err().is_not_in_progress());
        assert_eq!(state, GameState::default());
    }

    #[derive(Clone, Debug)]
    enum Step {
        Skip,
        /// Tick the clock down to zero, then time out.
        Timeout,
        Submit {
            tail: String,
            chained: bool,
            known: bool,
            time_left: u32,
        },
        /// Input that fails the format checks.
        Garbage(String),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            Just(Step::Skip),
            Just(Step::Timeout),
            ("[a-z]{3,7}", any::<bool>(), any::<bool>(), 0u32..=30).prop_map(
                |(tail, chained, known, time_left)| Step::Submit {
                    tail,
                    chained,
                    known,
                    time_left,
                }
            ),
            "[a-z]{0,3}|[a-z]{2,5}[0-9!?-]".prop_map(Step::Garbage),
        ]
    }

    proptest! {
        #[test]
        fn turn_bookkeeping_holds_for_any_sequence(steps in prop::collection::vec(step(), 1..60)) {
            let config = GameConfig::default();
            let env = GameEnv::new(&config);
            let (mut state, _) = reduce(&GameState::default(), env, &Action::start()).unwrap();
            let mut resolved = 0;

            for step in &steps {
                let before = state.clone();
                let mover = before.turn.current_player;

                let (next, penalty) = match step {
                    Step::Skip => (
                        reduce(&before, env, &Action::skip()).map(|(next, _)| next),
                        Some(config.skip_penalty),
                    ),
                    Step::Timeout => {
                        let mut clock = before.clone();
                        while clock.is_in_progress() && clock.turn.time_left > 0 {
                            clock = reduce(&clock, env, &Action::tick()).unwrap().0;
                        }
                        prop_assert_eq!(clock.turn.turn_number, before.turn.turn_number);
                        (
                            reduce(&clock, env, &Action::timeout()).map(|(next, _)| next),
                            Some(config.timeout_penalty),
                        )
                    }
                    Step::Submit { tail, chained, known, time_left } => {
                        let raw = match before.chain.last_letter {
                            Some(letter) if *chained => format!("{letter}{tail}"),
                            _ => tail.clone(),
                        };
                        let Ok(word) = validate_submission(&before, &raw, &config) else {
                            continue;
                        };
                        if *known {
                            let action = Action::accept_word(word, "a definition", *time_left);
                            (reduce(&before, env, &action).map(|(next, _)| next), None)
                        } else {
                            (
                                reduce(&before, env, &Action::reject_word(word)).map(|(next, _)| next),
                                Some(config.invalid_word_penalty),
                            )
                        }
                    }
                    Step::Garbage(raw) => {
                        prop_assert!(validate_submission(&before, raw, &config).is_err());
                        continue;
                    }
                };

                let Ok(after) = next else {
                    prop_assert!(before.game_over());
                    continue;
                };
                prop_assert!(before.is_in_progress());
                prop_assert_eq!(after.turn.turn_number, before.turn.turn_number + 1);
                prop_assert_ne!(after.turn.current_player, mover);
                let (old, new) = (before.player(mover).score, after.player(mover).score);
                match penalty {
                    Some(penalty) => {
                        prop_assert_eq!(new, old.saturating_sub(penalty));
                    }
                    None => {
                        prop_assert!(new > old);
                    }
                }
                prop_assert_eq!(after.winner.is_some(), after.game_over());
                resolved += 1;
                state = after;
            }

            prop_assert_eq!(state.turn.turn_number, resolved);
        }
    }
}
