use crate::envelope::EventEnvelope;
use crate::notifications::Notification;

/// Envelope type carried on the notification bus.
pub type NotificationEnvelope = EventEnvelope<Notification>;

/// Consumes sealed notifications (subscriber abstraction).
///
/// Implementations match on [`Notification`] exhaustively, so adding an event kind
/// is a compile error in every subscriber until it decides what to do with it.
///
/// Delivery is at-least-once: `handle` may see the same `event_id` twice.
pub trait NotificationHandler {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn handle(&self, envelope: &NotificationEnvelope) -> Result<(), Self::Error>;
}

impl<H> NotificationHandler for std::sync::Arc<H>
where
    H: NotificationHandler + ?Sized,
{
    type Error = H::Error;

    fn handle(&self, envelope: &NotificationEnvelope) -> Result<(), Self::Error> {
        (**self).handle(envelope)
    }
}
