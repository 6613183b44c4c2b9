use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::event::{AggregateKind, Event};

/// Envelope for a notification, carrying delivery metadata around the payload.
///
/// This is the unit publishers put on the bus and subscribers receive.
///
/// Notes:
/// - An envelope is **sealed** once, when the underlying state transition has been
///   committed; fields are private and read-only afterwards.
/// - `event_type` and `aggregate` are copied from the payload so JSON consumers can
///   route without decoding it.
/// - `event_id` is a UUIDv7 (time-ordered); duplicates on the bus share the same id.
/// - Deserialising re-seals the payload: wire metadata that disagrees with the
///   payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    event_type: String,
    version: u32,
    aggregate: AggregateKind,
    occurred_at: DateTime<Utc>,
    payload: E,
}

impl<E: Event> EventEnvelope<E> {
    /// Freeze `payload` into an envelope stamped with `occurred_at`.
    pub fn seal(payload: E, occurred_at: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::now_v7(), payload, occurred_at)
    }

    /// Same as [`EventEnvelope::seal`] with an explicit id (replays, tests).
    pub fn with_id(event_id: Uuid, payload: E, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id,
            event_type: payload.event_type().to_string(),
            version: payload.version(),
            aggregate: payload.aggregate(),
            occurred_at,
            payload,
        }
    }
}

/// Envelope fields exactly as received, before re-sealing.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireEnvelope<E> {
    event_id: Uuid,
    event_type: String,
    version: u32,
    aggregate: AggregateKind,
    occurred_at: DateTime<Utc>,
    payload: E,
}

impl<'de, E> Deserialize<'de> for EventEnvelope<E>
where
    E: Event + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireEnvelope::<E>::deserialize(deserializer)?;
        let sealed = EventEnvelope::with_id(wire.event_id, wire.payload, wire.occurred_at);

        if sealed.event_type != wire.event_type
            || sealed.version != wire.version
            || sealed.aggregate != wire.aggregate
        {
            return Err(D::Error::custom(format!(
                "envelope {} claims {} v{} ({}) but carries {} v{} ({})",
                wire.event_id,
                wire.event_type,
                wire.version,
                wire.aggregate,
                sealed.event_type,
                sealed.version,
                sealed.aggregate,
            )));
        }

        Ok(sealed)
    }
}

impl<E> EventEnvelope<E> {
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn aggregate(&self) -> AggregateKind {
        self.aggregate
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
