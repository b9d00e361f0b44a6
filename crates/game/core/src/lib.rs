//! Deterministic Shiritori rules shared by the runtime and offline tools.
//!
//! `shiritori-core` defines the canonical game state, word validation,
//! scoring, and the transitions that move a two-player session from
//! "not started" to "game over". It performs no I/O: dictionary lookups and
//! the countdown clock live in the runtime, which feeds their results back as
//! [`Action`]s. All state mutation flows through [`engine::GameEngine`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod scoring;
pub mod state;
pub mod word;

pub use action::{
    AcceptWordAction, Action, ActionTransition, RejectWordAction, ResetGameAction,
    SkipTurnAction, StartGameAction, TickAction, TimeoutAction,
};
pub use config::GameConfig;
pub use engine::{
    Effect, ExecuteError, ExecutionOutcome, GameEngine, LifecycleError, TransitionPhase,
    TransitionPhaseError, TurnError, check_game_end, reduce,
};
pub use env::GameEnv;
pub use error::{ErrorSeverity, GameError};
pub use scoring::{LengthBonus, ScoreBreakdown, SpeedBonus, points};
pub use state::{
    GamePhase, GameState, Player, PlayerIndex, ScoreChange, TurnState, TurnTicket, WordChain,
    WordEntry,
};
pub use word::{RejectReason, Word, validate_submission};
