//! Async session runtime for the Shiritori engine.
//!
//! This crate wraps the deterministic rules in `shiritori-core` with the
//! parts that need time and I/O: a worker that owns the session, a countdown
//! timer, dictionary lookups with retries, and a topic-based event bus.
//! Consumers embed [`Runtime`] and drive the game through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`lookup`] talks to the dictionary service
//! - [`config`] and [`logging`] cover environment setup
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod config;
pub mod events;
pub mod logging;
pub mod lookup;
pub mod runtime;

mod workers;

pub use api::{
    DictionaryProvider, LookupError, LookupResponse, Result, RuntimeError, RuntimeHandle,
    SessionView, StaticDictionary, SubmitOutcome,
};
pub use config::{LoggingConfig, LookupConfig, RuntimeConfig};
pub use events::{Event, EventBus, GameStateEvent, LookupEvent, Topic, TurnEvent};
pub use logging::setup_logging;
pub use lookup::{FreeDictionaryClient, RetryError, RetryPolicy, lookup_with_retry};
pub use runtime::{Runtime, RuntimeBuilder};
pub use workers::NETWORK_ERROR_MESSAGE;
