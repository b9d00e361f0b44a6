//! Read-only inputs a transition needs besides the state itself.
//!
//! Keeping the rules and the wall-clock reading here lets every transition
//! stay deterministic: the same state, env and action always produce the same
//! result.
use crate::config::GameConfig;

/// Execution environment handed to every transition.
#[derive(Clone, Copy, Debug)]
pub struct GameEnv<'a> {
    pub config: &'a GameConfig,
    /// Milliseconds since the Unix epoch, stamped onto score changes.
    pub timestamp_ms: i64,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self {
            config,
            timestamp_ms: 0,
        }
    }

    pub fn at(config: &'a GameConfig, timestamp_ms: i64) -> Self {
        Self {
            config,
            timestamp_ms,
        }
    }
}
