use anyhow::{Context, Result};
use tracing::info;

use oncc_infra::{
    Migrator, NotificationWorker, NotifierConfig, RedisPubSubEventBus, connect_database,
    load_actor_manager_emails,
};
use oncc_notifier::{InMemoryRecipientDirectory, LogMailer, MailNotificationHandler};

#[tokio::main]
async fn main() -> Result<()> {
    oncc_observability::init();

    let config = NotifierConfig::from_env()?;
    info!(config = ?config, "starting notifier");
    info!(
        endpoint = %config.storage.endpoint_url(),
        bucket = %config.storage.bucket,
        "object storage configured"
    );

    let pool = connect_database(&config.database_url)
        .await
        .context("failed to connect to Postgres")?;

    Migrator::new(pool.clone())
        .run_up()
        .await
        .context("failed to run migrations")?;

    let directory = InMemoryRecipientDirectory::from_pairs(
        load_actor_manager_emails(&pool)
            .await
            .context("failed to load actor managers")?,
    );
    info!(actors = directory.actor_count(), "recipient directory loaded");

    let bus = RedisPubSubEventBus::new(&config.redis_url, config.channel.clone())
        .context("invalid REDIS_URL")?;

    let handler = MailNotificationHandler::new(
        directory,
        LogMailer,
        config.audit_recipients.clone(),
        config.mail_from.clone(),
    );
    let worker = NotificationWorker::spawn("mail-notifier", &bus, &[], handler)
        .context("failed to spawn notification worker")?;
    info!(channel = bus.channel(), "listening for notifications");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    info!("shutting down");
    tokio::task::spawn_blocking(move || worker.shutdown())
        .await
        .context("worker shutdown panicked")?;

    Ok(())
}
