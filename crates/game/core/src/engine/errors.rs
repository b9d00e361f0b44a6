//! Error types for the transition pipeline.

use crate::error::{ErrorSeverity, GameError, NeverError};
use crate::state::GamePhase;
use crate::word::RejectReason;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors from transitions that act on a running turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("game is not in progress (phase: {phase})")]
    NotInProgress { phase: GamePhase },

    #[error("word no longer fits the chain: {0}")]
    Rejected(#[from] RejectReason),

    #[error("turn timer has not expired ({time_left}s left)")]
    TimerRunning { time_left: u32 },

    #[error("turn timer already expired, awaiting timeout resolution")]
    TimerExpired,
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        use TurnError::*;
        match self {
            NotInProgress { .. } | Rejected(_) => ErrorSeverity::Validation,
            TimerRunning { .. } | TimerExpired => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use TurnError::*;
        match self {
            NotInProgress { .. } => "TURN_NOT_IN_PROGRESS",
            Rejected(reason) => reason.error_code(),
            TimerRunning { .. } => "TURN_TIMER_RUNNING",
            TimerExpired => "TURN_TIMER_EXPIRED",
        }
    }
}

/// Errors from session lifecycle transitions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifecycleError {
    #[error("game already started (phase: {phase})")]
    AlreadyStarted { phase: GamePhase },
}

impl GameError for LifecycleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            LifecycleError::AlreadyStarted { .. } => "LIFECYCLE_ALREADY_STARTED",
        }
    }
}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("start action failed: {0}")]
    Start(TransitionPhaseError<LifecycleError>),

    #[error("reset action failed: {0}")]
    Reset(TransitionPhaseError<NeverError>),

    #[error("accept word action failed: {0}")]
    AcceptWord(TransitionPhaseError<TurnError>),

    #[error("reject word action failed: {0}")]
    RejectWord(TransitionPhaseError<TurnError>),

    #[error("skip turn action failed: {0}")]
    Skip(TransitionPhaseError<TurnError>),

    #[error("timeout action failed: {0}")]
    Timeout(TransitionPhaseError<TurnError>),

    #[error("tick action failed: {0}")]
    Tick(TransitionPhaseError<TurnError>),
}

impl ExecuteError {
    /// Returns the pipeline phase that failed.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::Start(e) => e.phase,
            Self::Reset(e) => match e.error {},
            Self::AcceptWord(e)
            | Self::RejectWord(e)
            | Self::Skip(e)
            | Self::Timeout(e)
            | Self::Tick(e) => e.phase,
        }
    }

    /// Returns the underlying turn error, if the failing action was a turn action.
    pub fn turn_error(&self) -> Option<&TurnError> {
        match self {
            Self::AcceptWord(e)
            | Self::RejectWord(e)
            | Self::Skip(e)
            | Self::Timeout(e)
            | Self::Tick(e) => Some(&e.error),
            Self::Start(_) | Self::Reset(_) => None,
        }
    }

    /// True when the action was refused because no game is running.
    pub fn is_not_in_progress(&self) -> bool {
        matches!(self.turn_error(), Some(TurnError::NotInProgress { .. }))
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Start(e) => e.error.severity(),
            Self::Reset(e) => match e.error {},
            _ => self
                .turn_error()
                .map(GameError::severity)
                .unwrap_or(ErrorSeverity::Internal),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Start(e) => e.error.error_code(),
            Self::Reset(e) => match e.error {},
            _ => self
                .turn_error()
                .map(GameError::error_code)
                .unwrap_or("EXECUTE_UNKNOWN"),
        }
    }
}
