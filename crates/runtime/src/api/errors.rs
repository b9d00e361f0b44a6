//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, engine transitions, and logging
//! setup so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use shiritori_core::{ExecuteError, GamePhase};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("runtime worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("game is not active (phase: {phase})")]
    GameNotActive { phase: GamePhase },

    #[error("transition rejected: {0}")]
    Transition(#[from] ExecuteError),

    #[error("no word at history index {index} (history has {len} entries)")]
    NoSuchWord { index: usize, len: usize },

    #[error("failed to prepare log directory")]
    LogDirectory(#[source] std::io::Error),

    #[error("failed to install tracing subscriber")]
    LoggingInit(#[source] tracing_subscriber::util::TryInitError),
}
