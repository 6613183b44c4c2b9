//! Notification fan-out between publishing services and subscribers.
//!
//! `M` is [`crate::NotificationEnvelope`] everywhere in this workspace; the bus is
//! generic only so tests can push plain values through it.
//!
//! Delivery is best-effort and at-least-once: a subscriber may see the same
//! `event_id` twice and must not assume it will see every notification. Nothing
//! is stored; a subscriber that is not connected misses what was published.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvError, RecvTimeoutError, TryRecvError};
use std::time::Duration;

/// Receiving end of one subscription.
///
/// Owned by a single consumer thread (typically a `NotificationWorker`), which
/// polls with [`Subscription::recv_timeout`] so it can notice shutdown requests:
///
/// ```ignore
/// let subscription = bus.subscribe();
/// loop {
///     match subscription.recv_timeout(tick) {
///         Ok(envelope) => handler.handle(&envelope)?,
///         Err(RecvTimeoutError::Timeout) => continue,
///         Err(RecvTimeoutError::Disconnected) => break,
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    inbox: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(inbox: Receiver<M>) -> Self {
        Self { inbox }
    }

    /// Block until a message arrives or every sender is gone.
    pub fn recv(&self) -> Result<M, RecvError> {
        self.inbox.recv()
    }

    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.inbox.try_recv()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, RecvTimeoutError> {
        self.inbox.recv_timeout(timeout)
    }

    /// Everything already delivered, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.inbox.try_iter().collect()
    }
}

/// Publish side of the notification channel.
///
/// ```text
/// campaign / store / actor / user service (state committed)
///     -> NotificationPublisher (seals the envelope)
///     -> EventBus
///     -> each Subscription (mail notifier, ...)
/// ```
///
/// A failed `publish` is reported to the publisher and never retried here.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    /// Open a new subscription; it only sees messages published afterwards.
    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        B::publish(self, message)
    }

    fn subscribe(&self) -> Subscription<M> {
        B::subscribe(self)
    }
}
