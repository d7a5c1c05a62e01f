//! Typed event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is shared via `Arc<EventBus>` across the application. Any
//! number of subscribers independently receive every published
//! [`PortalEvent`]; a lagging subscriber loses oldest events rather than
//! blocking publishers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use regportal_core::types::DbId;

// ---------------------------------------------------------------------------
// PortalEvent
// ---------------------------------------------------------------------------

/// What happened, with the identifiers a listener needs to react.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PortalEventKind {
    /// A completed payment row was recorded for an application. Listeners
    /// reload registration state, which unlocks the Review step.
    PaymentCompleted {
        application_id: DbId,
        payment_id: DbId,
    },
    /// An application reached its terminal submitted state.
    ApplicationSubmitted {
        application_id: DbId,
        application_number: String,
    },
}

/// A domain event that occurred in the portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalEvent {
    pub kind: PortalEventKind,
    /// Id of the candidate that triggered the event.
    pub actor_user_id: DbId,
    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl PortalEvent {
    pub fn new(kind: PortalEventKind, actor_user_id: DbId) -> Self {
        Self {
            kind,
            actor_user_id,
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
pub struct EventBus {
    sender: broadcast::Sender<PortalEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl EventBus {
    /// Create a bus with an explicit channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// An event published with no subscribers is dropped silently; that is
    /// normal during startup and teardown.
    pub fn publish(&self, event: PortalEvent) {
        let receivers = self.sender.receiver_count();
        tracing::debug!(kind = ?event.kind, receivers, "Publishing portal event");
        let _ = self.sender.send(event);
    }

    /// Subscribe to all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<PortalEvent> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscriber_receives_published_event() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(PortalEvent::new(
            PortalEventKind::PaymentCompleted {
                application_id: 7,
                payment_id: 21,
            },
            42,
        ));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.actor_user_id, 42);
        assert_eq!(
            event.kind,
            PortalEventKind::PaymentCompleted {
                application_id: 7,
                payment_id: 21,
            }
        );
    }

    #[tokio::test]
    async fn publish_without_subscribers_does_not_panic() {
        let bus = EventBus::default();
        bus.publish(PortalEvent::new(
            PortalEventKind::ApplicationSubmitted {
                application_id: 1,
                application_number: "REG20261234567".to_string(),
            },
            1,
        ));
    }

    #[tokio::test]
    async fn multiple_subscribers_each_receive_events() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(PortalEvent::new(
            PortalEventKind::PaymentCompleted {
                application_id: 3,
                payment_id: 9,
            },
            5,
        ));

        assert!(rx1.recv().await.is_ok());
        assert!(rx2.recv().await.is_ok());
    }
}
