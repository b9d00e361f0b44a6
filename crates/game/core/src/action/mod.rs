//! Actions that drive a Shiritori session.
//!
//! Every external event the runtime observes (a player's command, a timer
//! tick, a dictionary verdict) becomes one [`Action`]. Each action type
//! implements [`ActionTransition`] and is executed by the engine.
mod lifecycle;
mod penalty;
mod resolve;
mod timer;
mod transition;
mod word;

pub use lifecycle::{ResetGameAction, StartGameAction};
pub use penalty::{SkipTurnAction, TimeoutAction};
pub use timer::TickAction;
pub use transition::ActionTransition;
pub use word::{AcceptWordAction, RejectWordAction};

use crate::word::Word;

/// Top-level action enum routed by the engine.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Start(StartGameAction),
    Reset(ResetGameAction),
    /// The dictionary knows the word.
    AcceptWord(AcceptWordAction),
    /// The dictionary answered "not found".
    RejectWord(RejectWordAction),
    Skip(SkipTurnAction),
    Timeout(TimeoutAction),
    Tick(TickAction),
}

impl Action {
    pub fn start() -> Self {
        Self::Start(StartGameAction)
    }

    pub fn reset() -> Self {
        Self::Reset(ResetGameAction)
    }

    /// Accepts `word`; `time_left` is the clock reading when it was submitted.
    pub fn accept_word(word: Word, definition: impl Into<String>, time_left: u32) -> Self {
        Self::AcceptWord(AcceptWordAction {
            word,
            definition: definition.into(),
            time_left,
        })
    }

    pub fn reject_word(word: Word) -> Self {
        Self::RejectWord(RejectWordAction { word })
    }

    pub fn skip() -> Self {
        Self::Skip(SkipTurnAction)
    }

    pub fn timeout() -> Self {
        Self::Timeout(TimeoutAction)
    }

    pub fn tick() -> Self {
        Self::Tick(TickAction)
    }

    /// Returns the action name in snake_case, for logs.
    pub fn as_snake_case(&self) -> &'static str {
        self.into()
    }
}
