//! Who receives the e-mail for each notification.
//!
//! Payloads that carry an address (account deactivation, welcome, occupant with
//! e-mail) are delivered there. Actor-level events go to the managers of every
//! actor involved. Campaign- and store-level events go to the audit list.

use std::collections::{BTreeSet, HashMap};

use oncc_core::ActorId;
use oncc_events::Notification;

/// Resolves the e-mail addresses of an actor's managers.
pub trait RecipientDirectory: Send + Sync {
    fn managers_of(&self, actor: &ActorId) -> Vec<String>;
}

impl<D> RecipientDirectory for std::sync::Arc<D>
where
    D: RecipientDirectory + ?Sized,
{
    fn managers_of(&self, actor: &ActorId) -> Vec<String> {
        (**self).managers_of(actor)
    }
}

/// Snapshot of actor managers, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipientDirectory {
    managers: HashMap<ActorId, Vec<String>>,
}

impl InMemoryRecipientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (ActorId, String)>) -> Self {
        let mut directory = Self::new();
        for (actor, email) in pairs {
            directory.insert(actor, email);
        }
        directory
    }

    pub fn insert(&mut self, actor: ActorId, email: impl Into<String>) {
        self.managers.entry(actor).or_default().push(email.into());
    }

    /// Number of actors with at least one manager.
    pub fn actor_count(&self) -> usize {
        self.managers.len()
    }
}

impl RecipientDirectory for InMemoryRecipientDirectory {
    fn managers_of(&self, actor: &ActorId) -> Vec<String> {
        self.managers.get(actor).cloned().unwrap_or_default()
    }
}

fn managers<D>(directory: &D, actors: &[&ActorId]) -> Vec<String>
where
    D: RecipientDirectory + ?Sized,
{
    actors.iter().flat_map(|a| directory.managers_of(a)).collect()
}

/// Addresses for `notification`, de-duplicated and sorted.
pub fn recipients_for<D>(notification: &Notification, directory: &D, audit: &[String]) -> Vec<String>
where
    D: RecipientDirectory + ?Sized,
{
    let found: Vec<String> = match notification {
        Notification::BuyerAddedToExporter(p) => managers(directory, &[&p.exporter_id, &p.buyer_id]),
        Notification::BuyerAssignedAsMandataire(p) => managers(directory, &[&p.buyer_id, &p.exporter_id]),
        Notification::BuyerRemovedFromExporter(p) => managers(directory, &[&p.exporter_id, &p.buyer_id]),
        Notification::BuyerUnassignedAsMandataire(p) => managers(directory, &[&p.buyer_id, &p.exporter_id]),
        Notification::ProducerRemovedFromOpa(p) => managers(directory, &[&p.opa_id, &p.producer_id]),
        Notification::CampaignActivated(_) | Notification::StoresStatus(_) => audit.to_vec(),
        Notification::OpaConventionsStatus(p) => {
            let mut out = managers(directory, &[&p.opa.id]);
            out.extend_from_slice(audit);
            out
        }
        Notification::OccupantAssigned(p) => match &p.actor.email {
            Some(email) => vec![email.clone()],
            None => managers(directory, &[&p.actor.id]),
        },
        Notification::OccupantUnassigned(p) => match &p.actor.email {
            Some(email) => vec![email.clone()],
            None => managers(directory, &[&p.actor.id]),
        },
        Notification::StoreActivated(_) | Notification::StoreDeactivated(_) => audit.to_vec(),
        Notification::AccountDeactivated(p) => vec![p.email.clone()],
        Notification::ActorManagerWelcome(p) => vec![p.email.clone()],
    };

    found
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
