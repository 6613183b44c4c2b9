//! Infrastructure layer: configuration, Postgres, migrations, bus adapters and workers.

pub mod config;
pub mod db;
pub mod event_bus;
pub mod migrations;
pub mod publisher;
pub mod workers;

pub use config::{ConfigError, NotifierConfig, StorageConfig};
pub use db::{PgUserLookup, connect_database, load_actor_manager_emails};
pub use migrations::{EnablePgcrypto, MIGRATIONS, Migration, MigrationError, MigrationOutcome, Migrator};
pub use publisher::{NotificationPublisher, PublishError};
pub use workers::{NotificationWorker, WorkerHandle};

#[cfg(feature = "redis")]
pub use event_bus::{RedisBusError, RedisPubSubEventBus};
