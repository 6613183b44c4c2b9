use serde::{Deserialize, Serialize};

/// Aggregate a notification is raised for.
///
/// Subscribers use it to route or filter without decoding the payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateKind {
    Actor,
    Campaign,
    Store,
    User,
}

impl AggregateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateKind::Actor => "actor",
            AggregateKind::Campaign => "campaign",
            AggregateKind::Store => "store",
            AggregateKind::User => "user",
        }
    }
}

impl core::fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A domain event carried to notification subscribers.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - **closed**: every kind is a variant subscribers can match exhaustively
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "store.occupant.assigned").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// Aggregate the event belongs to.
    fn aggregate(&self) -> AggregateKind;
}
