//! Notification payloads, grouped by aggregate, and the [`Notification`] sum type.
//!
//! Each payload is the exact, closed set of fields a publisher supplies when the
//! corresponding event happens. Publishers wrap a payload in a [`Notification`]
//! variant and seal it into an envelope; subscribers match on the variant.

pub mod actor;
pub mod campaign;
pub mod common;
pub mod store;
pub mod user;

use serde::{Deserialize, Serialize};

use crate::event::{AggregateKind, Event};

pub use actor::{
    BuyerAddedToExporterPayload, BuyerAssignedAsMandatairePayload,
    BuyerRemovedFromExporterPayload, BuyerUnassignedAsMandatairePayload,
    ProducerRemovedFromOpaPayload,
};
pub use campaign::{CampaignActivatedPayload, OpaConventionsStatusPayload, OpaRef, StoresStatusPayload};
pub use common::{Campaign, CampaignSummary, StatusCounts, UserRef};
pub use store::{
    OccupantActor, OccupantAssignedPayload, OccupantUnassignedPayload, StoreActivatedPayload,
    StoreDeactivatedPayload, StoreDetails, StoreRef,
};
pub use user::{AccountDeactivatedPayload, ActorInfo, ActorManagerWelcomePayload};

/// Declares the notification enum from a single table so the serde tag, the
/// `event_type()` string and the aggregate cannot drift apart.
macro_rules! notifications {
    ($($variant:ident($payload:ty) => $event_type:literal, $aggregate:ident;)+) => {
        /// Every notification the platform raises, one variant per event kind.
        ///
        /// Serialized adjacently tagged: `{"type": "<event type>", "data": {..payload..}}`.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(tag = "type", content = "data")]
        pub enum Notification {
            $(
                #[serde(rename = $event_type)]
                $variant($payload),
            )+
        }

        /// Every notification event type, in declaration order.
        pub const EVENT_TYPES: &[&str] = &[$($event_type),+];

        impl Event for Notification {
            fn event_type(&self) -> &'static str {
                match self {
                    $(Notification::$variant(_) => $event_type,)+
                }
            }

            fn version(&self) -> u32 {
                1
            }

            fn aggregate(&self) -> AggregateKind {
                match self {
                    $(Notification::$variant(_) => AggregateKind::$aggregate,)+
                }
            }
        }

        $(
            impl From<$payload> for Notification {
                fn from(value: $payload) -> Self {
                    Notification::$variant(value)
                }
            }
        )+
    };
}

notifications! {
    BuyerAddedToExporter(BuyerAddedToExporterPayload) => "actor.buyer.added_to_exporter", Actor;
    BuyerAssignedAsMandataire(BuyerAssignedAsMandatairePayload) => "actor.buyer.assigned_as_mandataire", Actor;
    BuyerRemovedFromExporter(BuyerRemovedFromExporterPayload) => "actor.buyer.removed_from_exporter", Actor;
    BuyerUnassignedAsMandataire(BuyerUnassignedAsMandatairePayload) => "actor.buyer.unassigned_as_mandataire", Actor;
    ProducerRemovedFromOpa(ProducerRemovedFromOpaPayload) => "actor.producer.removed_from_opa", Actor;
    CampaignActivated(CampaignActivatedPayload) => "campaign.activated", Campaign;
    OpaConventionsStatus(OpaConventionsStatusPayload) => "campaign.opa_conventions_status", Campaign;
    StoresStatus(StoresStatusPayload) => "campaign.stores_status", Campaign;
    OccupantAssigned(OccupantAssignedPayload) => "store.occupant.assigned", Store;
    OccupantUnassigned(OccupantUnassignedPayload) => "store.occupant.unassigned", Store;
    StoreActivated(StoreActivatedPayload) => "store.activated", Store;
    StoreDeactivated(StoreDeactivatedPayload) => "store.deactivated", Store;
    AccountDeactivated(AccountDeactivatedPayload) => "user.account.deactivated", User;
    ActorManagerWelcome(ActorManagerWelcomePayload) => "user.actor_manager.welcome", User;
}

impl oncc_core::ValueObject for Notification {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::EventEnvelope;
    use chrono::{NaiveDate, TimeZone, Utc};
    use oncc_core::{ActorId, CampaignId, StoreId, UserId};
    use serde_json::json;

    fn admin() -> UserRef {
        UserRef {
            id: UserId::new("usr-1").unwrap(),
            username: "admin".to_string(),
            full_name: "Admin ONCC".to_string(),
        }
    }

    fn summary() -> CampaignSummary {
        CampaignSummary {
            id: CampaignId::new("cmp-2025").unwrap(),
            code: "2025-2026".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
        }
    }

    fn store_details() -> StoreDetails {
        StoreDetails {
            id: StoreId::new("sto-1").unwrap(),
            name: "Magasin Kribi".to_string(),
            code: Some("KR-01".to_string()),
            store_type: Some(oncc_core::StoreType::Export),
        }
    }

    fn one_of_each() -> Vec<Notification> {
        let exporter = ActorId::new("exp-1").unwrap();
        let buyer = ActorId::new("buy-9").unwrap();
        let occupant = OccupantActor {
            id: ActorId::new("act-5").unwrap(),
            full_name: "Coop Ndé".to_string(),
            actor_type: oncc_core::ActorType::Producers,
            email: Some("contact@coop.cm".to_string()),
        };
        let store = StoreRef {
            id: StoreId::new("sto-1").unwrap(),
            name: "Magasin Kribi".to_string(),
            code: Some("KR-01".to_string()),
        };

        vec![
            BuyerAddedToExporterPayload {
                exporter_id: exporter.clone(),
                exporter_name: "Cacao Export SA".to_string(),
                buyer_id: buyer.clone(),
                buyer_name: "Jean Mbarga".to_string(),
            }
            .into(),
            BuyerAssignedAsMandatairePayload {
                buyer_id: buyer.clone(),
                buyer_name: "Jean Mbarga".to_string(),
                exporter_id: exporter.clone(),
                exporter_name: "Cacao Export SA".to_string(),
            }
            .into(),
            BuyerRemovedFromExporterPayload {
                exporter_id: exporter.clone(),
                exporter_name: "Cacao Export SA".to_string(),
                buyer_id: buyer.clone(),
                buyer_name: "Jean Mbarga".to_string(),
            }
            .into(),
            BuyerUnassignedAsMandatairePayload {
                buyer_id: buyer,
                buyer_name: "Jean Mbarga".to_string(),
                exporter_id: exporter,
                exporter_name: "Cacao Export SA".to_string(),
            }
            .into(),
            ProducerRemovedFromOpaPayload {
                opa_id: ActorId::new("opa-7").unwrap(),
                opa_name: "OPA Centre".to_string(),
                producer_id: ActorId::new("prod-3").unwrap(),
                producer_name: "Awa Bello".to_string(),
            }
            .into(),
            CampaignActivatedPayload {
                campaign: Campaign {
                    id: CampaignId::new("cmp-2025").unwrap(),
                    code: "2025-2026".to_string(),
                    start_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
                    end_date: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
                    status: oncc_core::CampaignStatus::Active,
                },
                activated_by: admin(),
            }
            .into(),
            OpaConventionsStatusPayload {
                campaign: summary(),
                opa: OpaRef {
                    id: ActorId::new("opa-7").unwrap(),
                    full_name: "OPA Centre".to_string(),
                },
                conventions_data: StatusCounts::new(3, 1),
                activated_by: admin(),
            }
            .into(),
            StoresStatusPayload {
                campaign: summary(),
                stores_data: StatusCounts::new(10, 2),
                activated_by: admin(),
            }
            .into(),
            OccupantAssignedPayload {
                store: store.clone(),
                actor: occupant.clone(),
                assigned_by: admin(),
            }
            .into(),
            OccupantUnassignedPayload {
                store,
                actor: occupant,
                unassigned_by: admin(),
            }
            .into(),
            StoreActivatedPayload {
                store: store_details(),
                campaign: summary(),
                activated_by: admin(),
            }
            .into(),
            StoreDeactivatedPayload {
                store: store_details(),
                campaign: summary(),
                deactivated_by: admin(),
            }
            .into(),
            AccountDeactivatedPayload {
                email: "user@oncc.cm".to_string(),
                user_name: "Paul Essomba".to_string(),
                reason: Some("left the cooperative".to_string()),
            }
            .into(),
            ActorManagerWelcomePayload {
                email: "manager@coop.cm".to_string(),
                user_name: "Marie Ngo".to_string(),
                username: "mngo".to_string(),
                temp_password: "T3mp!pass".to_string(),
                actor_info: ActorInfo {
                    name: "Coop Ndé".to_string(),
                    actor_type: oncc_core::ActorType::Producers,
                    location: Some("Bafang".to_string()),
                },
            }
            .into(),
        ]
    }

    #[test]
    fn serde_tag_matches_event_type_for_every_variant() {
        let all = one_of_each();
        assert_eq!(all.len(), EVENT_TYPES.len());

        for (notification, expected) in all.iter().zip(EVENT_TYPES) {
            assert_eq!(notification.event_type(), *expected);
            let json = serde_json::to_value(notification).unwrap();
            assert_eq!(json["type"], *expected);
            assert!(json["data"].is_object());
        }
    }

    #[test]
    fn aggregate_kind_is_the_event_type_prefix() {
        for notification in one_of_each() {
            let prefix = notification.event_type().split('.').next().unwrap();
            assert_eq!(prefix, notification.aggregate().as_str());
        }
    }

    #[test]
    fn envelope_copies_metadata_from_the_payload() {
        let occurred_at = Utc.with_ymd_and_hms(2025, 10, 1, 8, 0, 0).unwrap();
        let notification = one_of_each().remove(10);
        let envelope = EventEnvelope::seal(notification.clone(), occurred_at);

        assert_eq!(envelope.event_type(), "store.activated");
        assert_eq!(envelope.aggregate(), AggregateKind::Store);
        assert_eq!(envelope.version(), 1);
        assert_eq!(envelope.occurred_at(), occurred_at);
        assert_eq!(envelope.payload(), &notification);
    }

    #[test]
    fn envelope_json_survives_the_wire() {
        let envelope = EventEnvelope::seal(one_of_each().remove(8), Utc::now());
        let wire = serde_json::to_string(&envelope).unwrap();
        let back: EventEnvelope<Notification> = serde_json::from_str(&wire).unwrap();

        assert_eq!(back, envelope);
        let value: serde_json::Value = serde_json::from_str(&wire).unwrap();
        assert_eq!(value["eventType"], "store.occupant.assigned");
        assert_eq!(value["aggregate"], "store");
    }

    /// JSON-pointer suffixes of the fields a publisher may leave out.
    const OPTIONAL_FIELDS: &[&str] = &[
        "/store/code",
        "/store/storeType",
        "/actor/email",
        "/reason",
        "/actorInfo/location",
    ];

    fn field_pointers(value: &serde_json::Value, prefix: &str, out: &mut Vec<String>) {
        if let Some(object) = value.as_object() {
            for (key, child) in object {
                let pointer = format!("{prefix}/{key}");
                field_pointers(child, &pointer, out);
                out.push(pointer);
            }
        }
    }

    fn without(value: &serde_json::Value, pointer: &str) -> serde_json::Value {
        let mut value = value.clone();
        let (parent, key) = pointer.rsplit_once('/').unwrap();
        value
            .pointer_mut(parent)
            .and_then(|p| p.as_object_mut())
            .unwrap()
            .remove(key)
            .unwrap();
        value
    }

    #[test]
    fn every_required_field_is_enforced_and_optional_ones_are_not() {
        let mut optional_seen = 0;

        for notification in one_of_each() {
            let json = serde_json::to_value(&notification).unwrap();
            let mut pointers = Vec::new();
            field_pointers(&json["data"], "/data", &mut pointers);
            assert!(!pointers.is_empty());

            for pointer in pointers {
                let result = serde_json::from_value::<Notification>(without(&json, &pointer));
                if OPTIONAL_FIELDS.iter().any(|suffix| pointer.ends_with(suffix)) {
                    optional_seen += 1;
                    assert!(
                        result.is_ok(),
                        "{}: dropping optional {pointer} must be accepted",
                        notification.event_type()
                    );
                } else {
                    assert!(
                        result.is_err(),
                        "{}: dropping required {pointer} must be rejected",
                        notification.event_type()
                    );
                }
            }
        }

        // store code x4, store type x2, actor email x2, reason, location
        assert_eq!(optional_seen, 10);
    }

    #[test]
    fn envelope_metadata_must_match_the_payload() {
        let envelope = EventEnvelope::seal(one_of_each().remove(12), Utc::now());
        let honest = serde_json::to_value(&envelope).unwrap();

        for (field, forged) in [
            ("eventType", json!("campaign.activated")),
            ("aggregate", json!("actor")),
            ("version", json!(7)),
        ] {
            let mut wire = honest.clone();
            wire[field] = forged;
            let err = serde_json::from_value::<EventEnvelope<Notification>>(wire).unwrap_err();
            assert!(err.to_string().contains("user.account.deactivated"), "{err}");
        }

        let back: EventEnvelope<Notification> = serde_json::from_value(honest).unwrap();
        assert_eq!(back, envelope);
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        let result = serde_json::from_value::<Notification>(json!({
            "type": "store.demolished",
            "data": { "id": "sto-1" },
        }));
        assert!(result.is_err());
    }
}
