//! Worker tasks that back the runtime orchestration.
//!
//! The session worker owns the game and serializes every mutation; the timer
//! worker feeds it countdown ticks.

mod session;
mod timer;

pub use session::{Command, NETWORK_ERROR_MESSAGE, SessionWorker};
pub use timer::TimerWorker;
