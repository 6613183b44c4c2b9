//! Redis pub/sub-backed notification bus.
//!
//! Redis pub/sub is not durable: a subscriber that is offline misses messages.
//! That matches the notification contract (best-effort, at-least-once while
//! connected); anything that must not be lost belongs in the platform database.

use std::sync::mpsc;
use std::thread;

use redis::Commands;
use thiserror::Error;
use tracing::warn;

use oncc_events::{EventBus, NotificationEnvelope, Subscription};

#[derive(Debug, Error)]
pub enum RedisBusError {
    #[error("redis error: {0}")]
    Redis(String),
    #[error("failed to serialize envelope: {0}")]
    Serialize(String),
}

/// Redis pub/sub bus for JSON notification envelopes.
#[derive(Debug, Clone)]
pub struct RedisPubSubEventBus {
    client: redis::Client,
    channel: String,
}

impl RedisPubSubEventBus {
    pub fn new(redis_url: impl AsRef<str>, channel: impl Into<String>) -> Result<Self, RedisBusError> {
        let client = redis::Client::open(redis_url.as_ref())
            .map_err(|e| RedisBusError::Redis(e.to_string()))?;
        Ok(Self {
            client,
            channel: channel.into(),
        })
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

/// Decode one pub/sub payload; `None` (after a warning) when it is not an envelope.
pub fn decode_envelope(channel: &str, payload: &str) -> Option<NotificationEnvelope> {
    match serde_json::from_str::<NotificationEnvelope>(payload) {
        Ok(envelope) => Some(envelope),
        Err(err) => {
            warn!(channel, error = %err, "dropping undecodable notification");
            None
        }
    }
}

impl EventBus<NotificationEnvelope> for RedisPubSubEventBus {
    type Error = RedisBusError;

    fn publish(&self, message: NotificationEnvelope) -> Result<(), Self::Error> {
        let payload = serde_json::to_string(&message)
            .map_err(|e| RedisBusError::Serialize(e.to_string()))?;

        let mut conn = self
            .client
            .get_connection()
            .map_err(|e| RedisBusError::Redis(e.to_string()))?;

        let _: i64 = conn
            .publish(&self.channel, payload)
            .map_err(|e| RedisBusError::Redis(e.to_string()))?;

        Ok(())
    }

    fn subscribe(&self) -> Subscription<NotificationEnvelope> {
        let (tx, rx) = mpsc::channel();

        let client = self.client.clone();
        let channel = self.channel.clone();

        // Background thread that receives pub/sub messages and forwards them.
        thread::spawn(move || {
            let mut conn = match client.get_connection() {
                Ok(c) => c,
                Err(err) => {
                    warn!(channel = %channel, error = %err, "redis subscription could not connect");
                    return;
                }
            };

            let mut pubsub = conn.as_pubsub();
            if let Err(err) = pubsub.subscribe(&channel) {
                warn!(channel = %channel, error = %err, "redis subscribe failed");
                return;
            }

            loop {
                let msg = match pubsub.get_message() {
                    Ok(m) => m,
                    Err(err) => {
                        warn!(channel = %channel, error = %err, "redis subscription closed");
                        return;
                    }
                };

                let payload: String = match msg.get_payload() {
                    Ok(p) => p,
                    Err(_) => continue,
                };

                let Some(envelope) = decode_envelope(&channel, &payload) else {
                    continue;
                };

                if tx.send(envelope).is_err() {
                    return;
                }
            }
        });

        Subscription::new(rx)
    }
}
