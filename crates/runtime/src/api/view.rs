//! Snapshot types returned to presentation layers.

use serde::{Deserialize, Serialize};
use shiritori_core::{GameState, RejectReason, ScoreChange, WordEntry};

/// Everything a frontend needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub state: GameState,
    /// Validation or status text; `None` when cleared.
    pub message: Option<String>,
    /// A dictionary lookup is in flight; further submissions answer `Busy`.
    pub is_validating: bool,
    /// Sticky until dismissed, reset, or the next submission.
    pub network_error: bool,
    /// Most recent score change, dropped once its notice expires.
    pub recent_score_change: Option<ScoreChange>,
    /// History entry opened for inspection.
    pub selected_word: Option<WordEntry>,
}

/// How a submission was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// Failed local validation. The turn does not advance.
    Rejected(RejectReason),
    /// Another submission is still being looked up.
    Busy,
    Accepted { entry: WordEntry },
    /// The dictionary does not know the word; the player was penalized.
    InvalidWord,
    /// The dictionary could not be reached. `word` is the input to resubmit.
    NetworkError { word: String },
    /// The turn was resolved by a skip, timeout or reset before the lookup finished.
    Superseded,
}

impl SubmitOutcome {
    /// True when the outcome advanced the turn.
    pub fn resolved_turn(&self) -> bool {
        matches!(self, Self::Accepted { .. } | Self::InvalidWord)
    }
}
