//! High-level runtime orchestrator.
//!
//! The runtime owns background workers, wires up command/event channels, and
//! exposes a builder-based API for clients to drive a session.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use shiritori_core::GameState;

use crate::api::{DictionaryProvider, Result, RuntimeError, RuntimeHandle};
use crate::config::RuntimeConfig;
use crate::events::EventBus;
use crate::lookup::FreeDictionaryClient;
use crate::workers::{Command, SessionWorker, TimerWorker};

/// Main runtime that hosts one game session
///
/// Runtime owns the workers; [`RuntimeHandle`] provides a cloneable façade
/// for clients.
pub struct Runtime {
    handle: RuntimeHandle,

    session_worker_handle: JoinHandle<()>,
    timer_worker_handle: Option<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The session worker exits once every handle is dropped; clones still
    /// held elsewhere keep it alive until then.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.session_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        if let Some(timer_handle) = self.timer_worker_handle {
            timer_handle.await.map_err(RuntimeError::WorkerJoin)?;
        }

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    dictionary: Option<Arc<dyn DictionaryProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            dictionary: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial game state
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the dictionary used to check submitted words.
    ///
    /// Defaults to [`FreeDictionaryClient`] pointed at the configured URL.
    pub fn dictionary(mut self, provider: impl DictionaryProvider + 'static) -> Self {
        self.dictionary = Some(Arc::new(provider));
        self
    }

    /// Enable or disable the countdown worker
    pub fn enable_timer(mut self, enable: bool) -> Self {
        self.config.enable_timer = enable;
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let initial_state = self
            .state
            .unwrap_or_else(|| GameState::new(&self.config.game));
        let dictionary = self.dictionary.unwrap_or_else(|| {
            Arc::new(FreeDictionaryClient::from_config(&self.config.lookup))
        });

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (tick_tx, tick_rx) = mpsc::channel(1);
        let (timer_tx, timer_rx) = watch::channel(None);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let timer_worker_handle = if self.config.enable_timer {
            let timer = TimerWorker::new(self.config.tick_interval, timer_rx, tick_tx);
            Some(tokio::spawn(async move {
                timer.run().await;
            }))
        } else {
            drop(tick_tx);
            None
        };

        let session_worker = SessionWorker::new(
            initial_state,
            self.config,
            dictionary,
            command_rx,
            tick_rx,
            timer_tx,
            event_bus,
        );

        let session_worker_handle = tokio::spawn(async move {
            session_worker.run().await;
        });

        tracing::debug!(target: "runtime", "Runtime started");

        Ok(Runtime {
            handle,
            session_worker_handle,
            timer_worker_handle,
        })
    }
}
