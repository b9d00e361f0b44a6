//! Asynchronous abstraction for dictionary lookups.
//!
//! The session worker only needs to know whether a word exists and, if so,
//! a definition to store with it. Runtime users plug in a
//! [`DictionaryProvider`] so the game can run against the public dictionary
//! service, a fixed word list, or scripted test fixtures.
use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

/// Answer from a dictionary that responded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    Found { definition: String },
    /// The service answered but does not know the word. Penalized as an invalid word.
    NotFound,
}

/// Failure to obtain any answer. All variants are retryable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("dictionary request failed: {0}")]
    Transport(String),

    #[error("dictionary request timed out")]
    Timeout,

    #[error("dictionary response could not be decoded: {0}")]
    Decode(String),
}

#[async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Looks up a lowercase word.
    async fn lookup(&self, word: &str) -> Result<LookupResponse, LookupError>;
}

/// In-memory dictionary for offline play and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticDictionary {
    entries: HashMap<String, String>,
}

impl StaticDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from `(word, definition)` pairs.
    pub fn from_entries<I, W, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, D)>,
        W: Into<String>,
        D: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(word, definition)| (word.into().to_lowercase(), definition.into()))
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, word: impl Into<String>, definition: impl Into<String>) {
        self.entries
            .insert(word.into().to_lowercase(), definition.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl DictionaryProvider for StaticDictionary {
    async fn lookup(&self, word: &str) -> Result<LookupResponse, LookupError> {
        Ok(match self.entries.get(&word.to_lowercase()) {
            Some(definition) => LookupResponse::Found {
                definition: definition.clone(),
            },
            None => LookupResponse::NotFound,
        })
    }
}

#[async_trait]
impl<T: DictionaryProvider + ?Sized> DictionaryProvider for std::sync::Arc<T> {
    async fn lookup(&self, word: &str) -> Result<LookupResponse, LookupError> {
        (**self).lookup(word).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_dictionary_is_case_insensitive() {
        let dictionary = StaticDictionary::from_entries([("Elephant", "a large mammal")]);
        assert_eq!(
            dictionary.lookup("elephant").await,
            Ok(LookupResponse::Found {
                definition: "a large mammal".to_string()
            })
        );
        assert_eq!(
            dictionary.lookup("tiger").await,
            Ok(LookupResponse::NotFound)
        );
    }

    #[tokio::test]
    async fn inserted_words_become_known() {
        let mut dictionary = StaticDictionary::new();
        assert!(dictionary.is_empty());

        dictionary.insert("Tiger", "a large striped cat");
        dictionary.insert("tiger", "a big cat");
        assert_eq!(dictionary.len(), 1);
        assert_eq!(
            dictionary.lookup("TIGER").await,
            Ok(LookupResponse::Found {
                definition: "a big cat".to_string()
            })
        );
    }
}
