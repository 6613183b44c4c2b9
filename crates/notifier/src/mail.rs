//! Outbound e-mail composition.

use serde::Serialize;

use oncc_events::notifications::{CampaignSummary, StatusCounts, UserRef};
use oncc_events::{Notification, NotificationEnvelope};

/// A rendered e-mail, ready for a [`crate::Mailer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundEmail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl OutboundEmail {
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }
}

/// Render the e-mail for `envelope`; `None` when there is nobody to send it to.
pub fn compose(envelope: &NotificationEnvelope, recipients: Vec<String>) -> Option<OutboundEmail> {
    if recipients.is_empty() {
        return None;
    }

    let (subject, body) = render(envelope.payload());
    Some(OutboundEmail {
        from: None,
        to: recipients,
        subject,
        body,
    })
}

fn by(user: &UserRef) -> String {
    format!("{} ({})", user.full_name, user.username)
}

fn period(campaign: &CampaignSummary) -> String {
    format!("{} ({} to {})", campaign.code, campaign.start_date, campaign.end_date)
}

fn counts(c: &StatusCounts) -> String {
    format!("{} total, {} active, {} inactive", c.total, c.active, c.inactive)
}

fn render(notification: &Notification) -> (String, String) {
    match notification {
        Notification::BuyerAddedToExporter(p) => (
            format!("Buyer {} added to {}", p.buyer_name, p.exporter_name),
            format!(
                "{} ({}) is now registered as a buyer of exporter {} ({}).",
                p.buyer_name, p.buyer_id, p.exporter_name, p.exporter_id
            ),
        ),
        Notification::BuyerAssignedAsMandataire(p) => (
            format!("{} assigned as mandataire of {}", p.buyer_name, p.exporter_name),
            format!(
                "{} ({}) now acts as mandataire for exporter {} ({}).",
                p.buyer_name, p.buyer_id, p.exporter_name, p.exporter_id
            ),
        ),
        Notification::BuyerRemovedFromExporter(p) => (
            format!("Buyer {} removed from {}", p.buyer_name, p.exporter_name),
            format!(
                "{} ({}) is no longer a buyer of exporter {} ({}).",
                p.buyer_name, p.buyer_id, p.exporter_name, p.exporter_id
            ),
        ),
        Notification::BuyerUnassignedAsMandataire(p) => (
            format!("{} no longer mandataire of {}", p.buyer_name, p.exporter_name),
            format!(
                "{} ({}) no longer acts as mandataire for exporter {} ({}).",
                p.buyer_name, p.buyer_id, p.exporter_name, p.exporter_id
            ),
        ),
        Notification::ProducerRemovedFromOpa(p) => (
            format!("Producer {} removed from {}", p.producer_name, p.opa_name),
            format!(
                "Producer {} ({}) has been removed from OPA {} ({}).",
                p.producer_name, p.producer_id, p.opa_name, p.opa_id
            ),
        ),
        Notification::CampaignActivated(p) => (
            format!("Campaign {} activated", p.campaign.code),
            format!(
                "Campaign {} ({} to {}) is now {} (activated by {}).",
                p.campaign.code,
                p.campaign.start_date,
                p.campaign.end_date,
                p.campaign.status,
                by(&p.activated_by)
            ),
        ),
        Notification::OpaConventionsStatus(p) => (
            format!("Conventions of {} for campaign {}", p.opa.full_name, p.campaign.code),
            format!(
                "Campaign {}: conventions of OPA {} ({}): {}. Activated by {}.",
                period(&p.campaign),
                p.opa.full_name,
                p.opa.id,
                counts(&p.conventions_data),
                by(&p.activated_by)
            ),
        ),
        Notification::StoresStatus(p) => (
            format!("Store status for campaign {}", p.campaign.code),
            format!(
                "Campaign {}: stores {}. Activated by {}.",
                period(&p.campaign),
                counts(&p.stores_data),
                by(&p.activated_by)
            ),
        ),
        Notification::OccupantAssigned(p) => (
            format!("{} assigned to store {}", p.actor.full_name, p.store.name),
            format!(
                "{} ({}, {}) now occupies store {}{}. Assigned by {}.",
                p.actor.full_name,
                p.actor.id,
                p.actor.actor_type,
                p.store.name,
                p.store.code.as_deref().map(|c| format!(" [{c}]")).unwrap_or_default(),
                by(&p.assigned_by)
            ),
        ),
        Notification::OccupantUnassigned(p) => (
            format!("{} unassigned from store {}", p.actor.full_name, p.store.name),
            format!(
                "{} ({}, {}) no longer occupies store {}{}. Unassigned by {}.",
                p.actor.full_name,
                p.actor.id,
                p.actor.actor_type,
                p.store.name,
                p.store.code.as_deref().map(|c| format!(" [{c}]")).unwrap_or_default(),
                by(&p.unassigned_by)
            ),
        ),
        Notification::StoreActivated(p) => (
            format!("Store {} activated", p.store.name),
            format!(
                "Store {}{} is active for campaign {}. Activated by {}.",
                p.store.name,
                p.store.store_type.map(|t| format!(" ({t})")).unwrap_or_default(),
                period(&p.campaign),
                by(&p.activated_by)
            ),
        ),
        Notification::StoreDeactivated(p) => (
            format!("Store {} deactivated", p.store.name),
            format!(
                "Store {}{} is inactive for campaign {}. Deactivated by {}.",
                p.store.name,
                p.store.store_type.map(|t| format!(" ({t})")).unwrap_or_default(),
                period(&p.campaign),
                by(&p.deactivated_by)
            ),
        ),
        Notification::AccountDeactivated(p) => (
            "Your ONCC account has been deactivated".to_string(),
            match &p.reason {
                Some(reason) => format!("Hello {}, your account has been deactivated. Reason: {reason}.", p.user_name),
                None => format!("Hello {}, your account has been deactivated.", p.user_name),
            },
        ),
        Notification::ActorManagerWelcome(p) => (
            format!("Welcome to ONCC, {}", p.user_name),
            format!(
                "Hello {}, you now manage {} ({}{}).\nUsername: {}\nTemporary password: {}\nPlease change it at first login.",
                p.user_name,
                p.actor_info.name,
                p.actor_info.actor_type,
                p.actor_info.location.as_deref().map(|l| format!(", {l}")).unwrap_or_default(),
                p.username,
                p.temp_password
            ),
        ),
    }
}
