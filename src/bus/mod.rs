//! Event bus for pushing view updates to connected pages
//!
//! Uses tokio::sync::broadcast for pub/sub pattern.
//! Events are typed and serialize as `{"type": ..., "payload": ...}`.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::view::ChartSpec;

/// Event types that can be published on the bus
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum DashboardEvent {
    /// Text content of an element changed
    ElementText { id: String, text: String },
    /// The "active" class of an element changed
    ElementActive { id: String, active: bool },
    /// A chart replaced whatever occupied `container`
    ChartDrawn { container: String, options: ChartSpec },
}

/// Event bus handle for publishing and subscribing
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DashboardEvent>,
}

impl EventBus {
    /// Create a new event bus with specified capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: DashboardEvent) {
        // Ignore send errors (no subscribers)
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.sender.subscribe()
    }

    /// Get the number of current subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    /// Default capacity (256 events)
    fn default() -> Self {
        Self::new(256)
    }
}

/// Shared event bus wrapped in Arc for thread-safe sharing
pub type SharedBus = Arc<EventBus>;

/// Create a new shared event bus
pub fn create_bus() -> SharedBus {
    Arc::new(EventBus::default())
}
