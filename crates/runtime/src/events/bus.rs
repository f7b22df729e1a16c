//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::broadcast;

use game_core::CombatNotifier;

use super::types::{GameEvent, UiEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Log lines and control state for the UI
    Ui,
    /// Session lifecycle and defeats
    Game,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Ui(UiEvent),
    Game(GameEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Ui(_) => Topic::Ui,
            Event::Game(_) => Topic::Game,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Cloning shares the underlying channels.
#[derive(Clone)]
pub struct EventBus {
    ui: broadcast::Sender<Event>,
    game: broadcast::Sender<Event>,
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
            ui: broadcast::channel(capacity).0,
            game: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Ui => &self.ui,
            Topic::Game => &self.game,
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
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
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

/// [`CombatNotifier`] that publishes every call as a [`UiEvent`].
#[derive(Clone)]
pub struct BusNotifier {
    bus: EventBus,
}

impl BusNotifier {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl CombatNotifier for BusNotifier {
    fn append_log(&mut self, text: &str) {
        self.bus.publish(Event::Ui(UiEvent::Log(text.to_owned())));
    }

    fn set_player_action_enabled(&mut self, enabled: bool) {
        self.bus
            .publish(Event::Ui(UiEvent::PlayerActionEnabled(enabled)));
    }

    fn show_session_overlay(&mut self, visible: bool) {
        self.bus.publish(Event::Ui(UiEvent::SessionOverlay(visible)));
    }
}
