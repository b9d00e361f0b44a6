//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{GameStateEvent, LookupEvent, TurnEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Game state changes (actions, failures)
    GameState,
    /// Countdown and turn handover
    Turn,
    /// Dictionary lookups
    Lookup,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    GameState(GameStateEvent),
    Turn(TurnEvent),
    Lookup(LookupEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::GameState(_) => Topic::GameState,
            Event::Turn(_) => Topic::Turn,
            Event::Lookup(_) => Topic::Lookup,
        }
    }
}

struct Channels {
    game_state: broadcast::Sender<Event>,
    turn: broadcast::Sender<Event>,
    lookup: broadcast::Sender<Event>,
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing is best-effort: events sent while a
/// topic has no subscribers are dropped.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                game_state: broadcast::channel(capacity).0,
                turn: broadcast::channel(capacity).0,
                lookup: broadcast::channel(capacity).0,
            }),
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::GameState => &self.channels.game_state,
            Topic::Turn => &self.channels.turn,
            Topic::Lookup => &self.channels.lookup,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiritori_core::PlayerIndex;

    fn turn_event() -> Event {
        Event::Turn(TurnEvent {
            player: PlayerIndex::First,
            turn_number: 0,
            time_left: 29,
            generation: 1,
        })
    }

    #[test]
    fn events_reach_only_their_topic() {
        let bus = EventBus::new();
        let mut turn_rx = bus.subscribe(Topic::Turn);
        let mut lookup_rx = bus.subscribe(Topic::Lookup);

        bus.publish(turn_event());

        assert!(matches!(turn_rx.try_recv(), Ok(Event::Turn(t)) if t.time_left == 29));
        assert!(lookup_rx.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_harmless() {
        let bus = EventBus::with_capacity(0);
        bus.publish(turn_event());
        let mut rx = bus.clone().subscribe(Topic::Turn);
        assert!(rx.try_recv().is_err());
    }
}
