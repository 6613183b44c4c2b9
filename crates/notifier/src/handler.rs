use tracing::{debug, info};

use oncc_events::{NotificationEnvelope, NotificationHandler};

use crate::mail::compose;
use crate::mailer::{MailError, Mailer};
use crate::recipients::{RecipientDirectory, recipients_for};

/// Sends one e-mail per notification that has at least one recipient.
#[derive(Debug)]
pub struct MailNotificationHandler<D, M> {
    directory: D,
    mailer: M,
    audit_recipients: Vec<String>,
    from: String,
}

impl<D, M> MailNotificationHandler<D, M>
where
    D: RecipientDirectory,
    M: Mailer,
{
    pub fn new(directory: D, mailer: M, audit_recipients: Vec<String>, from: impl Into<String>) -> Self {
        Self {
            directory,
            mailer,
            audit_recipients,
            from: from.into(),
        }
    }
}

impl<D, M> NotificationHandler for MailNotificationHandler<D, M>
where
    D: RecipientDirectory,
    M: Mailer,
{
    type Error = MailError;

    fn handle(&self, envelope: &NotificationEnvelope) -> Result<(), Self::Error> {
        let recipients = recipients_for(envelope.payload(), &self.directory, &self.audit_recipients);

        let Some(email) = compose(envelope, recipients) else {
            debug!(
                event_id = %envelope.event_id(),
                event_type = envelope.event_type(),
                "no recipient for notification; skipped"
            );
            return Ok(());
        };

        let email = email.with_from(self.from.clone());
        self.mailer.send(&email)?;

        info!(
            event_id = %envelope.event_id(),
            event_type = envelope.event_type(),
            recipients = email.to.len(),
            "notification mailed"
        );
        Ok(())
    }
}
