//! Mail transports.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::info;

use crate::mail::OutboundEmail;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MailError {
    #[error("outbound e-mail has no recipients")]
    NoRecipients,
    #[error("mail transport failed: {0}")]
    Transport(String),
}

/// Delivers composed e-mails.
pub trait Mailer: Send + Sync {
    fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

impl<M> Mailer for Arc<M>
where
    M: Mailer + ?Sized,
{
    fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        (**self).send(email)
    }
}

/// Writes each e-mail to the log instead of delivering it.
///
/// Bodies are not logged: the welcome mail carries a temporary password.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        if email.to.is_empty() {
            return Err(MailError::NoRecipients);
        }

        info!(
            from = email.from.as_deref().unwrap_or_default(),
            to = %email.to.join(", "),
            subject = %email.subject,
            body_len = email.body.len(),
            "mail sent"
        );
        Ok(())
    }
}

/// Keeps sent e-mails in memory.
#[derive(Debug, Default)]
pub struct InMemoryMailer {
    sent: Mutex<Vec<OutboundEmail>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Mailer for InMemoryMailer {
    fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        if email.to.is_empty() {
            return Err(MailError::NoRecipients);
        }

        self.sent
            .lock()
            .map_err(|_| MailError::Transport("in-memory mailer lock poisoned".to_string()))?
            .push(email.clone());
        Ok(())
    }
}
