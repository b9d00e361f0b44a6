//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! driving the session or streaming events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use shiritori_core::{GameState, WordEntry};

use super::errors::{Result, RuntimeError};
use super::view::{SessionView, SubmitOutcome};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Start the game and the turn countdown.
    pub async fn start(&self) -> Result<()> {
        self.request(|reply| Command::Start { reply }).await?
    }

    /// Submit a word for the current player.
    ///
    /// Resolves once the word has been validated and, if it passes the local
    /// rules, looked up in the dictionary (including retries).
    pub async fn submit_word(&self, input: impl Into<String>) -> Result<SubmitOutcome> {
        let input = input.into();
        self.request(|reply| Command::Submit { input, reply })
            .await?
    }

    /// Give up the current turn.
    pub async fn skip_turn(&self) -> Result<()> {
        self.request(|reply| Command::Skip { reply }).await?
    }

    /// Advance the countdown by one second.
    ///
    /// The timer worker does this on its own; manual ticks are for runtimes
    /// built without it.
    pub async fn tick(&self) -> Result<()> {
        self.request(|reply| Command::Tick { reply }).await?
    }

    /// Discard the session and return to the not-started state.
    pub async fn reset(&self) -> Result<()> {
        self.request(|reply| Command::Reset { reply }).await
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Snapshot of everything a frontend renders.
    pub async fn view(&self) -> Result<SessionView> {
        self.request(|reply| Command::View { reply }).await
    }

    /// Open a history entry for inspection.
    pub async fn select_word(&self, index: usize) -> Result<WordEntry> {
        self.request(|reply| Command::SelectWord { index, reply })
            .await?
    }

    pub async fn clear_selection(&self) -> Result<()> {
        self.request(|reply| Command::ClearSelection { reply })
            .await
    }

    pub async fn dismiss_network_error(&self) -> Result<()> {
        self.request(|reply| Command::DismissNetworkError { reply })
            .await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::GameState` - Action execution and failures
    /// - `Topic::Turn` - Countdown and turn handover
    /// - `Topic::Lookup` - Dictionary lookups
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
