//! Bookkeeping shared by every transition that resolves a turn.

use crate::engine::{Effect, TurnError, check_game_end};
use crate::env::GameEnv;
use crate::state::{GamePhase, GameState, PlayerIndex, ScoreChange};

pub(super) fn require_in_progress(state: &GameState) -> Result<(), TurnError> {
    if state.is_in_progress() {
        Ok(())
    } else {
        Err(TurnError::NotInProgress { phase: state.phase })
    }
}

/// Logs a score change against the turn being resolved.
pub(super) fn record_score_change(
    state: &mut GameState,
    env: &GameEnv<'_>,
    player: PlayerIndex,
    points: i32,
    reason: impl Into<String>,
    effects: &mut Vec<Effect>,
) {
    let change = ScoreChange {
        player,
        points,
        reason: reason.into(),
        turn: state.turn.turn_number + 1,
        timestamp_ms: env.timestamp_ms,
    };
    state.score_history.push(change.clone());
    effects.push(Effect::ScoreChanged(change));
}

/// Deducts `penalty` from the current player (clamped at zero) and resolves the turn.
pub(super) fn penalize_and_pass(
    state: &mut GameState,
    env: &GameEnv<'_>,
    penalty: u32,
    reason: &str,
    message: String,
    effects: &mut Vec<Effect>,
) {
    let player = state.turn.current_player;
    state.player_mut(player).deduct(penalty);
    let delta = -i32::try_from(penalty).unwrap_or(i32::MAX);
    record_score_change(state, env, player, delta, reason, effects);
    effects.push(Effect::Message(message));
    finish_turn(state, env, effects);
}

/// Rotates the turn, resets the clock and runs the game-end check.
pub(super) fn finish_turn(state: &mut GameState, env: &GameEnv<'_>, effects: &mut Vec<Effect>) {
    state.turn.pass_to_next(env.config.turn_seconds);
    effects.push(Effect::TurnPassed {
        next: state.turn.current_player,
        turn_number: state.turn.turn_number,
    });

    if let Some(winner) = check_game_end(state, env.config) {
        state.phase = GamePhase::GameOver;
        state.winner = Some(winner);
        effects.push(Effect::GameOver { winner });
    }
}

/// Post-condition shared by turn-resolving transitions.
pub(super) fn debug_check_resolved(state: &GameState) {
    debug_assert!(
        state.game_over() == state.winner.is_some(),
        "winner must be set exactly when the game is over"
    );
    debug_assert!(
        state.chain.current_word.as_deref().and_then(|w| w.chars().last()) == state.chain.last_letter,
        "last_letter must track the final letter of current_word"
    );
}
