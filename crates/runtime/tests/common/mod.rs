#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use shiritori_runtime::{
    DictionaryProvider, LookupError, LookupResponse, Runtime, RuntimeConfig, RuntimeHandle,
    StaticDictionary,
};

pub fn dictionary() -> StaticDictionary {
    StaticDictionary::from_entries([
        ("elephant", "a very large mammal"),
        ("tiger", "a large striped cat"),
        ("tent", "a portable shelter"),
        ("rabbit", "a small burrowing mammal"),
        ("example", "a representative form"),
        ("eagle", "a bird of prey"),
    ])
}

/// Runtime with the countdown disabled so tests control the clock.
pub async fn manual_runtime(provider: impl DictionaryProvider + 'static) -> (Runtime, RuntimeHandle) {
    let runtime = Runtime::builder()
        .config(RuntimeConfig::default())
        .enable_timer(false)
        .dictionary(provider)
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();
    (runtime, handle)
}

pub async fn started_runtime(provider: impl DictionaryProvider + 'static) -> (Runtime, RuntimeHandle) {
    let (runtime, handle) = manual_runtime(provider).await;
    handle.start().await.expect("start should succeed");
    (runtime, handle)
}

/// Answers from a script, then reports every further word as unknown.
#[derive(Default)]
pub struct ScriptedDictionary {
    responses: Mutex<VecDeque<Result<LookupResponse, LookupError>>>,
    calls: AtomicU32,
}

impl ScriptedDictionary {
    pub fn new(responses: impl IntoIterator<Item = Result<LookupResponse, LookupError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DictionaryProvider for ScriptedDictionary {
    async fn lookup(&self, _word: &str) -> Result<LookupResponse, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(LookupResponse::NotFound))
    }
}

/// Holds every lookup until the test releases a permit.
pub struct GatedDictionary {
    pub gate: Arc<Semaphore>,
    inner: StaticDictionary,
}

impl GatedDictionary {
    pub fn new(inner: StaticDictionary) -> Self {
        Self {
            gate: Arc::new(Semaphore::new(0)),
            inner,
        }
    }
}

#[async_trait]
impl DictionaryProvider for GatedDictionary {
    async fn lookup(&self, word: &str) -> Result<LookupResponse, LookupError> {
        let permit = self.gate.acquire().await.expect("gate closed");
        permit.forget();
        self.inner.lookup(word).await
    }
}

/// Polls the view until the worker reports a lookup in flight.
pub async fn wait_until_validating(handle: &RuntimeHandle) {
    for _ in 0..100 {
        if handle.view().await.unwrap().is_validating {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("lookup never started");
}
