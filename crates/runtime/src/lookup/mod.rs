//! Dictionary access used by the session worker.

mod free_dictionary;
mod retry;

pub use free_dictionary::{FreeDictionaryClient, NO_DEFINITION};
pub use retry::{RetryError, RetryPolicy};

use crate::api::{DictionaryProvider, LookupError, LookupResponse};

/// Looks up `word`, retrying failures according to `policy`.
pub async fn lookup_with_retry(
    provider: &dyn DictionaryProvider,
    policy: &RetryPolicy,
    word: &str,
) -> Result<LookupResponse, RetryError<LookupError>> {
    policy
        .run(|attempt| {
            tracing::trace!(target: "runtime::lookup", word, attempt, "Dictionary attempt");
            provider.lookup(word)
        })
        .await
}
