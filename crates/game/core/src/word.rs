//! Local validation of submitted words.
//!
//! Everything that can be decided without the dictionary happens here, in a
//! fixed order that stops at the first failure. A rejection never changes the
//! game state and never ends the turn.
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, WordChain};

/// A lowercase, letters-only word that passed the format checks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Word(String);

impl Word {
    /// Normalizes raw input and applies the format checks (letters only, minimum length).
    pub fn parse(raw: &str, min_length: usize) -> Result<Self, RejectReason> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RejectReason::Empty);
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(RejectReason::NotLetters);
        }
        if trimmed.len() < min_length {
            return Err(RejectReason::TooShort { min_length });
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first_letter(&self) -> Option<char> {
        self.0.chars().next()
    }

    pub fn last_letter(&self) -> Option<char> {
        self.0.chars().last()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl core::fmt::Display for Word {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why a submission was turned away before reaching the dictionary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectReason {
    /// Nothing but whitespace was submitted; callers treat this as a no-op.
    #[error("Enter a word first")]
    Empty,

    #[error("Word must contain only letters!")]
    NotLetters,

    #[error("Word must be at least {min_length} letters long!")]
    TooShort { min_length: usize },

    #[error("Word must start with \"{}\"!", .expected.to_ascii_uppercase())]
    WrongFirstLetter { expected: char },

    #[error("This word has already been used!")]
    AlreadyUsed,
}

impl GameError for RejectReason {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use RejectReason::*;
        match self {
            Empty => "WORD_EMPTY",
            NotLetters => "WORD_NOT_LETTERS",
            TooShort { .. } => "WORD_TOO_SHORT",
            WrongFirstLetter { .. } => "WORD_WRONG_FIRST_LETTER",
            AlreadyUsed => "WORD_ALREADY_USED",
        }
    }
}

/// Checks the chain rules: required first letter, then uniqueness.
pub fn check_chain(chain: &WordChain, word: &Word) -> Result<(), RejectReason> {
    if let Some(expected) = chain.last_letter
        && word.first_letter() != Some(expected)
    {
        return Err(RejectReason::WrongFirstLetter { expected });
    }
    if chain.is_used(word.as_str()) {
        return Err(RejectReason::AlreadyUsed);
    }
    Ok(())
}

/// Runs every local check on the active player's raw input.
pub fn validate_submission(
    state: &GameState,
    raw: &str,
    config: &GameConfig,
) -> Result<Word, RejectReason> {
    let word = Word::parse(raw, config.min_word_length)?;
    check_chain(&state.chain, &word)?;
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PlayerIndex, WordEntry};

    fn state_after(words: &[&str]) -> GameState {
        let mut state = GameState::default();
        for word in words {
            state.chain.record(WordEntry {
                word: word.to_string(),
                player: PlayerIndex::First,
                points: 1,
                turn: 1,
                definition: String::new(),
            });
        }
        state
    }

    #[test]
    fn blank_input_is_a_no_op_rejection() {
        let state = GameState::default();
        let config = GameConfig::default();
        assert_eq!(
            validate_submission(&state, "   ", &config),
            Err(RejectReason::Empty)
        );
    }

    #[test]
    fn non_letters_rejected_before_length() {
        let state = GameState::default();
        let config = GameConfig::default();
        for raw in ["ab1", "hello world", "café", "don't"] {
            assert_eq!(
                validate_submission(&state, raw, &config),
                Err(RejectReason::NotLetters),
                "{raw}"
            );
        }
    }

    #[test]
    fn short_words_rejected() {
        let state = GameState::default();
        let config = GameConfig::default();
        let err = validate_submission(&state, "cat", &config).unwrap_err();
        assert_eq!(err, RejectReason::TooShort { min_length: 4 });
        assert_eq!(err.to_string(), "Word must be at least 4 letters long!");
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        let state = GameState::default();
        let config = GameConfig::default();
        let word = validate_submission(&state, "  Elephant ", &config).unwrap();
        assert_eq!(word.as_str(), "elephant");
        assert_eq!(word.last_letter(), Some('t'));
    }

    #[test]
    fn chain_letter_enforced() {
        let state = state_after(&["elephant"]);
        let config = GameConfig::default();
        let err = validate_submission(&state, "apple", &config).unwrap_err();
        assert_eq!(err, RejectReason::WrongFirstLetter { expected: 't' });
        assert_eq!(err.to_string(), "Word must start with \"T\"!");
        assert!(validate_submission(&state, "Tiger", &config).is_ok());
    }

    #[test]
    fn reuse_rejected_case_insensitively() {
        let state = state_after(&["tent", "tart"]);
        let config = GameConfig::default();
        assert_eq!(
            validate_submission(&state, "TENT", &config),
            Err(RejectReason::AlreadyUsed)
        );
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(RejectReason::AlreadyUsed.error_code(), "WORD_ALREADY_USED");
        assert!(!RejectReason::NotLetters.severity().is_recoverable());
    }
}
