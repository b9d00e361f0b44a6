use super::PlayerIndex;

/// A point delta applied to a player, kept for notifications and the session log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreChange {
    pub player: PlayerIndex,
    /// Nominal delta; penalties are reported in full even when the score clamps at zero.
    pub points: i32,
    pub reason: String,
    /// 1-based number of the turn that produced the change.
    pub turn: u32,
    /// Milliseconds since the Unix epoch, supplied by the caller's [`GameEnv`](crate::GameEnv).
    pub timestamp_ms: i64,
}

impl ScoreChange {
    pub fn is_gain(&self) -> bool {
        self.points > 0
    }
}
