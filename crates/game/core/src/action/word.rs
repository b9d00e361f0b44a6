//! Resolution of a submitted word once the dictionary has answered.

use crate::engine::{Effect, TurnError};
use crate::env::GameEnv;
use crate::scoring::ScoreBreakdown;
use crate::state::{GameState, WordEntry};
use crate::word::{Word, check_chain};

use super::ActionTransition;
use super::resolve::{
    debug_check_resolved, finish_turn, penalize_and_pass, record_score_change,
    require_in_progress,
};

/// The dictionary knows the word: score it and extend the chain.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcceptWordAction {
    pub word: Word,
    pub definition: String,
    /// Seconds left on the clock when the word was submitted.
    pub time_left: u32,
}

impl ActionTransition for AcceptWordAction {
    type Error = TurnError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_in_progress(state)?;
        check_chain(&state.chain, &self.word)?;
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        effects: &mut Vec<Effect>,
    ) -> Result<(), Self::Error> {
        let player = state.turn.current_player;
        let word = self.word.as_str();
        let breakdown = ScoreBreakdown::new(self.word.len(), self.time_left);
        let points = breakdown.points();
        let bonus = breakdown.bonus_message();

        let entry = WordEntry {
            word: word.to_string(),
            player,
            points,
            turn: state.turn.turn_number + 1,
            definition: self.definition.clone(),
        };
        state.chain.record(entry.clone());

        let scorer = state.player_mut(player);
        scorer.award(points);
        scorer.record_word(word);

        record_score_change(
            state,
            env,
            player,
            i32::try_from(points).unwrap_or(i32::MAX),
            format!("\"{word}\"{bonus}"),
            effects,
        );

        let next_letter = self
            .word
            .last_letter()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or_default();
        effects.push(Effect::Message(format!(
            "Valid word! +{points} points{bonus} Next word must start with \"{next_letter}\""
        )));
        effects.push(Effect::WordAccepted(entry));

        finish_turn(state, env, effects);
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(state.chain.is_used(self.word.as_str()));
        debug_check_resolved(state);
        Ok(())
    }
}

/// The dictionary does not know the word: a scored game event, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RejectWordAction {
    pub word: Word,
}

impl ActionTransition for RejectWordAction {
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
        penalize_and_pass(
            state,
            env,
            env.config.invalid_word_penalty,
            "Invalid word",
            "Word not found in dictionary!".to_string(),
            effects,
        );
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(!state.chain.is_used(self.word.as_str()));
        debug_check_resolved(state);
        Ok(())
    }
}
