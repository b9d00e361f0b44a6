//! HTTP client for the Free Dictionary API.

use async_trait::async_trait;
use serde::Deserialize;

use crate::api::{DictionaryProvider, LookupError, LookupResponse};
use crate::config::LookupConfig;

/// Stored when the service knows the word but returns no usable definition.
pub const NO_DEFINITION: &str = "No definition available";

/// Dictionary backed by `GET {base_url}/{word}`.
///
/// Any non-success status is read as "word not found". Timeouts and retries
/// are the caller's concern; see [`super::RetryPolicy`].
#[derive(Debug, Clone)]
pub struct FreeDictionaryClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl FreeDictionaryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &LookupConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for FreeDictionaryClient {
    fn default() -> Self {
        Self::new(LookupConfig::DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl DictionaryProvider for FreeDictionaryClient {
    async fn lookup(&self, word: &str) -> Result<LookupResponse, LookupError> {
        let url = format!("{}/{}", self.base_url, word);
        tracing::debug!(target: "runtime::lookup", %url, "Querying dictionary");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|err| LookupError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(target: "runtime::lookup", word, %status, "Word not in dictionary");
            return Ok(LookupResponse::NotFound);
        }

        let body = response
            .text()
            .await
            .map_err(|err| LookupError::Transport(err.to_string()))?;
        let entries: Vec<DictionaryEntry> =
            serde_json::from_str(&body).map_err(|err| LookupError::Decode(err.to_string()))?;

        Ok(LookupResponse::Found {
            definition: first_definition(&entries),
        })
    }
}

#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(default)]
    definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
struct Definition {
    #[serde(default)]
    definition: String,
}

/// First definition of the first or second meaning of the first entry.
fn first_definition(entries: &[DictionaryEntry]) -> String {
    entries
        .first()
        .into_iter()
        .flat_map(|entry| entry.meanings.iter().take(2))
        .filter_map(|meaning| meaning.definitions.first())
        .map(|definition| definition.definition.as_str())
        .find(|text| !text.is_empty())
        .unwrap_or(NO_DEFINITION)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> String {
        let entries: Vec<DictionaryEntry> = serde_json::from_str(json).unwrap();
        first_definition(&entries)
    }

    #[test]
    fn takes_first_meaning_definition() {
        let json = r#"[{"word":"tent","meanings":[
            {"partOfSpeech":"noun","definitions":[{"definition":"A portable shelter."}]},
            {"partOfSpeech":"verb","definitions":[{"definition":"To camp."}]}
        ]}]"#;
        assert_eq!(parse(json), "A portable shelter.");
    }

    #[test]
    fn falls_back_to_second_meaning() {
        let json = r#"[{"meanings":[
            {"definitions":[]},
            {"definitions":[{"definition":"To camp."}]}
        ]}]"#;
        assert_eq!(parse(json), "To camp.");
    }

    #[test]
    fn placeholder_when_nothing_usable() {
        assert_eq!(parse("[]"), NO_DEFINITION);
        assert_eq!(parse(r#"[{"meanings":[{"definitions":[{"definition":""}]}]}]"#), NO_DEFINITION);
        let third_only = r#"[{"meanings":[{},{},{"definitions":[{"definition":"late"}]}]}]"#;
        assert_eq!(parse(third_only), NO_DEFINITION);
    }
}
