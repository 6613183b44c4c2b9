//! Seals notifications into envelopes and hands them to the bus.
//!
//! Call [`NotificationPublisher::publish`] only after the state transition the
//! notification describes has been committed.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

use oncc_events::{Event, EventBus, EventEnvelope, Notification, NotificationEnvelope};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PublishError {
    #[error("failed to publish {event_type}: {message}")]
    Bus {
        event_type: &'static str,
        message: String,
    },
}

/// Publisher bound to one bus.
#[derive(Debug, Clone)]
pub struct NotificationPublisher<B> {
    bus: B,
}

impl<B> NotificationPublisher<B>
where
    B: EventBus<NotificationEnvelope>,
{
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Seal `notification` at the current time and publish it.
    pub fn publish(
        &self,
        notification: impl Into<Notification>,
    ) -> Result<NotificationEnvelope, PublishError> {
        self.publish_at(notification, Utc::now())
    }

    /// Seal `notification` at `occurred_at` and publish it.
    pub fn publish_at(
        &self,
        notification: impl Into<Notification>,
        occurred_at: DateTime<Utc>,
    ) -> Result<NotificationEnvelope, PublishError> {
        let notification = notification.into();
        let event_type = notification.event_type();
        let envelope = EventEnvelope::seal(notification, occurred_at);

        if let Err(err) = self.bus.publish(envelope.clone()) {
            warn!(event_id = %envelope.event_id(), event_type, error = ?err, "notification publish failed");
            return Err(PublishError::Bus {
                event_type,
                message: format!("{err:?}"),
            });
        }

        info!(
            event_id = %envelope.event_id(),
            event_type,
            aggregate = %envelope.aggregate(),
            "notification published"
        );
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use oncc_events::notifications::AccountDeactivatedPayload;
    use oncc_events::{AggregateKind, InMemoryEventBus, Subscription};

    struct ClosedBus;

    impl EventBus<NotificationEnvelope> for ClosedBus {
        type Error = &'static str;

        fn publish(&self, _message: NotificationEnvelope) -> Result<(), Self::Error> {
            Err("bus closed")
        }

        fn subscribe(&self) -> Subscription<NotificationEnvelope> {
            let (_tx, rx) = std::sync::mpsc::channel();
            Subscription::new(rx)
        }
    }

    fn deactivated() -> AccountDeactivatedPayload {
        AccountDeactivatedPayload {
            email: "user@oncc.cm".to_string(),
            user_name: "Paul Essomba".to_string(),
            reason: Some("left the company".to_string()),
        }
    }

    #[test]
    fn published_envelope_reaches_subscribers() {
        let bus = Arc::new(InMemoryEventBus::<NotificationEnvelope>::new());
        let sub = bus.subscribe();
        let publisher = NotificationPublisher::new(bus.clone());

        let envelope = publisher.publish(deactivated()).unwrap();

        let received = sub.try_recv().unwrap();
        assert_eq!(received, envelope);
        assert_eq!(received.event_type(), "user.account.deactivated");
        assert_eq!(received.aggregate(), AggregateKind::User);
    }

    #[test]
    fn each_publish_gets_a_fresh_event_id() {
        let publisher = NotificationPublisher::new(InMemoryEventBus::<NotificationEnvelope>::new());
        let a = publisher.publish(deactivated()).unwrap();
        let b = publisher.publish(deactivated()).unwrap();
        assert_ne!(a.event_id(), b.event_id());
    }

    #[test]
    fn bus_failure_is_returned_to_the_caller() {
        let publisher = NotificationPublisher::new(ClosedBus);
        let err = publisher.publish(deactivated()).unwrap_err();
        assert_eq!(
            err,
            PublishError::Bus {
                event_type: "user.account.deactivated",
                message: "\"bus closed\"".to_string(),
            }
        );
    }
}
