use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use oncc_events::{AggregateKind, EventBus, NotificationEnvelope, NotificationHandler, Subscription};

/// Handle to control and join a background worker.
#[derive(Debug)]
pub struct WorkerHandle {
    shutdown: mpsc::Sender<()>,
    join: Option<thread::JoinHandle<()>>,
}

impl WorkerHandle {
    /// Request graceful shutdown and wait for the worker to stop.
    pub fn shutdown(mut self) {
        let _ = self.shutdown.send(());
        if let Some(j) = self.join.take() {
            let _ = j.join();
        }
    }
}

/// Notification subscriber loop.
///
/// - Subscribes to a bus
/// - Passes every envelope to a [`NotificationHandler`]
/// - Logs handler failures and keeps consuming
/// - Supports graceful shutdown
/// - Optional aggregate filtering
#[derive(Debug)]
pub struct NotificationWorker;

impl NotificationWorker {
    /// Spawn a worker thread consuming `bus`.
    ///
    /// `aggregates`: when non-empty, envelopes for other aggregates are skipped.
    pub fn spawn<B, H>(
        name: &'static str,
        bus: &B,
        aggregates: &[AggregateKind],
        handler: H,
    ) -> io::Result<WorkerHandle>
    where
        B: EventBus<NotificationEnvelope> + ?Sized,
        H: NotificationHandler + Send + 'static,
    {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
        let sub = bus.subscribe();
        let aggregates = aggregates.to_vec();

        let join = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || worker_loop(name, sub, shutdown_rx, &aggregates, &handler))?;

        info!(worker = name, "notification worker started");
        Ok(WorkerHandle {
            shutdown: shutdown_tx,
            join: Some(join),
        })
    }
}

fn worker_loop<H>(
    name: &'static str,
    sub: Subscription<NotificationEnvelope>,
    shutdown_rx: mpsc::Receiver<()>,
    aggregates: &[AggregateKind],
    handler: &H,
) where
    H: NotificationHandler,
{
    let tick = Duration::from_millis(250);

    loop {
        if shutdown_rx.try_recv().is_ok() {
            break;
        }

        match sub.recv_timeout(tick) {
            Ok(envelope) => {
                if !aggregates.is_empty() && !aggregates.contains(&envelope.aggregate()) {
                    continue;
                }

                debug!(worker = name, event_id = %envelope.event_id(), event_type = envelope.event_type(), "handling notification");
                if let Err(err) = handler.handle(&envelope) {
                    warn!(
                        worker = name,
                        event_id = %envelope.event_id(),
                        event_type = envelope.event_type(),
                        error = ?err,
                        "notification handler failed"
                    );
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    info!(worker = name, "notification worker stopped");
}
