//! `oncc-notifier` — turns platform notifications into outbound e-mails.

pub mod handler;
pub mod mail;
pub mod mailer;
pub mod recipients;

pub use handler::MailNotificationHandler;
pub use mail::{OutboundEmail, compose};
pub use mailer::{InMemoryMailer, LogMailer, MailError, Mailer};
pub use recipients::{InMemoryRecipientDirectory, RecipientDirectory, recipients_for};
