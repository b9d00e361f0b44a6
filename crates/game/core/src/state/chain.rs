use std::collections::HashSet;

use super::PlayerIndex;

/// Permanent log record of an accepted word.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordEntry {
    pub word: String,
    pub player: PlayerIndex,
    pub points: u32,
    /// 1-based number of the turn in which the word was accepted.
    pub turn: u32,
    pub definition: String,
}

/// The chain of accepted words and the constraint it carries forward.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordChain {
    /// Last accepted word, `None` before the first one.
    pub current_word: Option<String>,
    /// Final letter of `current_word`; the next word must start with it.
    pub last_letter: Option<char>,
    /// Lowercase words already played this session.
    pub used_words: HashSet<String>,
    pub history: Vec<WordEntry>,
}

impl WordChain {
    /// Case-insensitive membership test against the used words.
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.contains(&word.to_ascii_lowercase())
    }

    /// Appends an accepted word and moves the chain constraint forward.
    pub fn record(&mut self, entry: WordEntry) {
        let word = entry.word.to_ascii_lowercase();
        self.last_letter = word.chars().last();
        self.used_words.insert(word.clone());
        self.current_word = Some(word);
        self.history.push(entry);
    }

    pub fn entry(&self, index: usize) -> Option<&WordEntry> {
        self.history.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> WordEntry {
        WordEntry {
            word: word.to_string(),
            player: PlayerIndex::First,
            points: 1,
            turn: 1,
            definition: String::new(),
        }
    }

    #[test]
    fn record_updates_constraint_and_membership() {
        let mut chain = WordChain::default();
        chain.record(entry("apple"));

        assert_eq!(chain.current_word.as_deref(), Some("apple"));
        assert_eq!(chain.last_letter, Some('e'));
        assert!(chain.is_used("APPLE"));
        assert_eq!(chain.history.len(), 1);
    }
}
