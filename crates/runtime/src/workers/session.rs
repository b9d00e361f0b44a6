//! Session worker that owns the authoritative [`GameState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), countdown
//! ticks from the timer worker, and completions from dictionary lookup tasks.
//! Everything is processed one message at a time, so the engine never sees
//! concurrent mutations. Lookups run as separate tasks; their results are
//! only applied while the turn they were started for is still live.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use shiritori_core::{
    Action, Effect, ExecuteError, ExecutionOutcome, GameEnv, GameState, RejectReason,
    ScoreChange, TransitionPhase, TurnError, TurnTicket, Word, WordEntry, reduce,
    validate_submission,
};

use super::timer::TimerTick;
use crate::api::{
    DictionaryProvider, LookupError, LookupResponse, Result, RuntimeError, SessionView,
    SubmitOutcome,
};
use crate::config::RuntimeConfig;
use crate::events::{Event, EventBus, GameStateEvent, LookupEvent, TurnEvent};
use crate::lookup::{RetryError, RetryPolicy, lookup_with_retry};

pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Commands that can be sent to the session worker
pub enum Command {
    Start {
        reply: oneshot::Sender<Result<()>>,
    },
    /// Validate and look up a word for the current player. The reply is sent
    /// once the lookup resolves.
    Submit {
        input: String,
        reply: oneshot::Sender<Result<SubmitOutcome>>,
    },
    Skip {
        reply: oneshot::Sender<Result<()>>,
    },
    /// Advance the countdown by one second, outside the timer worker.
    Tick {
        reply: oneshot::Sender<Result<()>>,
    },
    Reset {
        reply: oneshot::Sender<()>,
    },
    QueryState {
        reply: oneshot::Sender<GameState>,
    },
    View {
        reply: oneshot::Sender<SessionView>,
    },
    SelectWord {
        index: usize,
        reply: oneshot::Sender<Result<WordEntry>>,
    },
    ClearSelection {
        reply: oneshot::Sender<()>,
    },
    DismissNetworkError {
        reply: oneshot::Sender<()>,
    },
}

/// Result of a lookup task, routed back to the worker.
struct LookupCompletion {
    ticket: TurnTicket,
    result: std::result::Result<LookupResponse, RetryError<LookupError>>,
}

/// Submission waiting on the dictionary.
struct PendingLookup {
    ticket: TurnTicket,
    input: String,
    word: Word,
    /// Clock reading at submission; speed bonuses use it, not the clock at resolution.
    time_left: u32,
    reply: oneshot::Sender<Result<SubmitOutcome>>,
    task: JoinHandle<()>,
}

/// Background task that processes session commands.
pub struct SessionWorker {
    state: GameState,
    config: RuntimeConfig,
    dictionary: Arc<dyn DictionaryProvider>,
    retry: RetryPolicy,

    message: Option<String>,
    network_error: bool,
    recent: Option<(ScoreChange, Instant)>,
    selected: Option<WordEntry>,
    pending: Option<PendingLookup>,

    command_rx: mpsc::Receiver<Command>,
    lookup_tx: mpsc::Sender<LookupCompletion>,
    lookup_rx: mpsc::Receiver<LookupCompletion>,
    tick_rx: mpsc::Receiver<TimerTick>,
    timer_tx: watch::Sender<Option<u64>>,
    event_bus: EventBus,
}

impl SessionWorker {
    /// Creates a new session worker.
    pub fn new(
        state: GameState,
        config: RuntimeConfig,
        dictionary: Arc<dyn DictionaryProvider>,
        command_rx: mpsc::Receiver<Command>,
        tick_rx: mpsc::Receiver<TimerTick>,
        timer_tx: watch::Sender<Option<u64>>,
        event_bus: EventBus,
    ) -> Self {
        let (lookup_tx, lookup_rx) = mpsc::channel(4);
        let retry = RetryPolicy::from(&config.lookup);
        Self {
            state,
            config,
            dictionary,
            retry,
            message: None,
            network_error: false,
            recent: None,
            selected: None,
            pending: None,
            command_rx,
            lookup_tx,
            lookup_rx,
            tick_rx,
            timer_tx,
            event_bus,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        self.sync_timer();
        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                Some(completion) = self.lookup_rx.recv() => {
                    self.handle_lookup(completion);
                }
                Some(tick) = self.tick_rx.recv() => {
                    self.handle_timer_tick(tick);
                }
            }
        }

        if let Some(pending) = self.pending.take() {
            pending.task.abort();
        }
        debug!(target: "runtime::worker", "Session worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Start { reply } => {
                let result = self.start();
                let _ = reply.send(result);
            }
            Command::Submit { input, reply } => self.submit(input, reply),
            Command::Skip { reply } => {
                let result = self.skip();
                let _ = reply.send(result);
            }
            Command::Tick { reply } => {
                let result = self.tick();
                let _ = reply.send(result);
            }
            Command::Reset { reply } => {
                self.reset();
                let _ = reply.send(());
            }
            Command::QueryState { reply } => {
                let _ = reply.send(self.state.clone());
            }
            Command::View { reply } => {
                let _ = reply.send(self.view());
            }
            Command::SelectWord { index, reply } => {
                let result = self.select_word(index);
                let _ = reply.send(result);
            }
            Command::ClearSelection { reply } => {
                self.selected = None;
                let _ = reply.send(());
            }
            Command::DismissNetworkError { reply } => {
                self.network_error = false;
                let _ = reply.send(());
            }
        }
    }

    fn start(&mut self) -> Result<()> {
        self.execute(Action::start())?;
        info!(target: "runtime::worker", "Game started");
        Ok(())
    }

    fn skip(&mut self) -> Result<()> {
        self.ensure_in_progress()?;
        self.execute(Action::skip())?;
        Ok(())
    }

    fn tick(&mut self) -> Result<()> {
        self.ensure_in_progress()?;
        let outcome = self.execute(Action::tick())?;
        if outcome.timer_expired() {
            self.resolve_timeout();
        }
        Ok(())
    }

    fn reset(&mut self) {
        if let Err(error) = self.execute(Action::reset()) {
            // Reset cannot fail; keep the worker alive regardless.
            error!(target: "runtime::worker", %error, "Reset failed");
        }
        self.message = None;
        self.network_error = false;
        self.recent = None;
        self.selected = None;
        info!(target: "runtime::worker", "Game reset");
    }

    fn submit(&mut self, input: String, reply: oneshot::Sender<Result<SubmitOutcome>>) {
        if let Err(err) = self.ensure_in_progress() {
            let _ = reply.send(Err(err));
            return;
        }
        if self.pending.is_some() {
            let _ = reply.send(Ok(SubmitOutcome::Busy));
            return;
        }

        let word = match validate_submission(&self.state, &input, &self.config.game) {
            Ok(word) => word,
            Err(RejectReason::Empty) => {
                let _ = reply.send(Ok(SubmitOutcome::Rejected(RejectReason::Empty)));
                return;
            }
            Err(reason) => {
                debug!(target: "runtime::worker", input = %input, %reason, "Submission rejected");
                self.network_error = false;
                self.message = Some(reason.to_string());
                let _ = reply.send(Ok(SubmitOutcome::Rejected(reason)));
                return;
            }
        };

        self.message = None;
        self.network_error = false;

        let ticket = self.state.turn.ticket();
        let task = self.spawn_lookup(ticket, word.clone());
        self.event_bus.publish(Event::Lookup(LookupEvent::Started {
            word: word.to_string(),
            generation: ticket.generation,
        }));
        self.pending = Some(PendingLookup {
            ticket,
            input,
            word,
            time_left: self.state.turn.time_left,
            reply,
            task,
        });
    }

    fn spawn_lookup(&self, ticket: TurnTicket, word: Word) -> JoinHandle<()> {
        let dictionary = Arc::clone(&self.dictionary);
        let retry = self.retry;
        let completions = self.lookup_tx.clone();
        tokio::spawn(async move {
            let result = lookup_with_retry(dictionary.as_ref(), &retry, word.as_str()).await;
            // The worker may have shut down in the meantime.
            let _ = completions.send(LookupCompletion { ticket, result }).await;
        })
    }

    fn handle_lookup(&mut self, completion: LookupCompletion) {
        let live = self.state.turn.ticket();
        let matches_pending = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.ticket == completion.ticket);
        if !matches_pending || completion.ticket != live || !self.state.is_in_progress() {
            debug!(
                target: "runtime::worker",
                generation = completion.ticket.generation,
                live_generation = live.generation,
                "Discarding stale lookup completion"
            );
            return;
        }
        let Some(pending) = self.pending.take() else {
            return;
        };

        let word = pending.word.to_string();
        let outcome = match completion.result {
            Ok(LookupResponse::Found { definition }) => {
                self.event_bus
                    .publish(Event::Lookup(LookupEvent::Found { word: word.clone() }));
                let action = Action::accept_word(pending.word, definition, pending.time_left);
                match self.execute(action) {
                    Ok(outcome) => match outcome.accepted_entry() {
                        Some(entry) => SubmitOutcome::Accepted {
                            entry: entry.clone(),
                        },
                        None => SubmitOutcome::Superseded,
                    },
                    Err(err) => Self::outcome_for_failed_accept(err),
                }
            }
            Ok(LookupResponse::NotFound) => {
                self.event_bus
                    .publish(Event::Lookup(LookupEvent::NotFound { word: word.clone() }));
                match self.execute(Action::reject_word(pending.word)) {
                    Ok(_) => SubmitOutcome::InvalidWord,
                    Err(_) => SubmitOutcome::Superseded,
                }
            }
            Err(retry_error) => {
                warn!(
                    target: "runtime::worker",
                    word = %word,
                    attempts = retry_error.attempts,
                    error = ?retry_error.last,
                    "Dictionary unreachable"
                );
                self.network_error = true;
                self.message = Some(NETWORK_ERROR_MESSAGE.to_string());
                self.event_bus.publish(Event::Lookup(LookupEvent::NetworkError {
                    word,
                    attempts: retry_error.attempts,
                }));
                SubmitOutcome::NetworkError {
                    word: pending.input,
                }
            }
        };

        let _ = pending.reply.send(Ok(outcome));
    }

    fn outcome_for_failed_accept(err: ExecuteError) -> SubmitOutcome {
        match err.turn_error() {
            Some(TurnError::Rejected(reason)) => SubmitOutcome::Rejected(reason.clone()),
            _ => SubmitOutcome::Superseded,
        }
    }

    fn handle_timer_tick(&mut self, tick: TimerTick) {
        if tick.generation != self.state.turn.generation || !self.state.is_in_progress() {
            debug!(
                target: "runtime::timer",
                generation = tick.generation,
                live_generation = self.state.turn.generation,
                "Discarding stale tick"
            );
            return;
        }
        if self.state.turn.time_left == 0 {
            self.resolve_timeout();
            return;
        }
        if let Ok(outcome) = self.execute(Action::tick())
            && outcome.timer_expired()
        {
            self.resolve_timeout();
        }
    }

    fn resolve_timeout(&mut self) {
        if let Ok(outcome) = self.execute(Action::timeout()) {
            info!(
                target: "runtime::worker",
                player = ?outcome.score_change().map(|change| change.player),
                "Turn timed out"
            );
        }
    }

    fn select_word(&mut self, index: usize) -> Result<WordEntry> {
        let entry = self
            .state
            .chain
            .entry(index)
            .cloned()
            .ok_or(RuntimeError::NoSuchWord {
                index,
                len: self.state.chain.history.len(),
            })?;
        self.selected = Some(entry.clone());
        Ok(entry)
    }

    fn view(&self) -> SessionView {
        let ttl = self.config.score_notice_ttl;
        SessionView {
            state: self.state.clone(),
            message: self.message.clone(),
            is_validating: self.pending.is_some(),
            network_error: self.network_error,
            recent_score_change: self
                .recent
                .as_ref()
                .filter(|(_, at)| at.elapsed() < ttl)
                .map(|(change, _)| change.clone()),
            selected_word: self.selected.clone(),
        }
    }

    fn ensure_in_progress(&self) -> Result<()> {
        if self.state.is_in_progress() {
            Ok(())
        } else {
            Err(RuntimeError::GameNotActive {
                phase: self.state.phase,
            })
        }
    }

    /// Runs `action` against a copy of the state and commits it on success.
    fn execute(&mut self, action: Action) -> std::result::Result<ExecutionOutcome, ExecuteError> {
        let env = GameEnv::at(&self.config.game, chrono::Utc::now().timestamp_millis());

        match reduce(&self.state, env, &action) {
            Ok((next, outcome)) => {
                self.state = next;
                self.commit(&action, &outcome);
                Ok(outcome)
            }
            Err(error) => {
                self.handle_execute_error(&action, &error);
                Err(error)
            }
        }
    }

    fn commit(&mut self, action: &Action, outcome: &ExecutionOutcome) {
        for effect in &outcome.effects {
            match effect {
                Effect::Message(message) => self.message = Some(message.clone()),
                Effect::ScoreChanged(change) => {
                    self.recent = Some((change.clone(), Instant::now()));
                }
                Effect::GameOver { winner } => {
                    info!(
                        target: "runtime::worker",
                        winner = ?winner,
                        name = self.state.winner_name().unwrap_or_default(),
                        "Game over"
                    );
                }
                _ => {}
            }
        }

        self.supersede_stale_lookup();

        self.event_bus
            .publish(Event::GameState(GameStateEvent::ActionExecuted {
                action: action.clone(),
                effects: outcome.effects.clone(),
                turn_number: self.state.turn.turn_number,
            }));
        self.event_bus
            .publish(Event::Turn(TurnEvent::from(&self.state.turn)));

        self.sync_timer();
    }

    /// Answers a pending submission whose turn was resolved by something else.
    fn supersede_stale_lookup(&mut self) {
        let live = self.state.turn.ticket();
        let Some(pending) = self
            .pending
            .take_if(|pending| pending.ticket != live || !self.state.is_in_progress())
        else {
            return;
        };

        pending.task.abort();
        debug!(
            target: "runtime::worker",
            word = %pending.word,
            generation = pending.ticket.generation,
            "Lookup superseded"
        );
        self.event_bus.publish(Event::Lookup(LookupEvent::Discarded {
            word: pending.word.to_string(),
            generation: pending.ticket.generation,
        }));
        let _ = pending.reply.send(Ok(SubmitOutcome::Superseded));
    }

    fn sync_timer(&self) {
        let active = self
            .state
            .is_in_progress()
            .then_some(self.state.turn.generation);
        self.timer_tx.send_if_modified(|current| {
            if *current == active {
                false
            } else {
                *current = active;
                true
            }
        });
    }

    fn handle_execute_error(&self, action: &Action, error: &ExecuteError) {
        let phase = error.phase();
        if phase == TransitionPhase::PreValidate {
            debug!(
                target: "runtime::worker",
                action = action.as_snake_case(),
                phase = phase.as_str(),
                error = %error,
                "Action rejected during pre-validate"
            );
        } else {
            error!(
                target: "runtime::worker",
                action = action.as_snake_case(),
                phase = phase.as_str(),
                error = %error,
                "Action execution failed"
            );
        }

        self.event_bus
            .publish(Event::GameState(GameStateEvent::ActionFailed {
                action: action.clone(),
                phase,
                error: error.to_string(),
                turn_number: self.state.turn.turn_number,
            }));
    }
}
