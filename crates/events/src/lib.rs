//! `oncc-events` — notification payloads, envelope and bus mechanics.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod handler;
pub mod in_memory_bus;
pub mod notifications;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::{AggregateKind, Event};
pub use handler::{NotificationEnvelope, NotificationHandler};
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use notifications::{EVENT_TYPES, Notification};
