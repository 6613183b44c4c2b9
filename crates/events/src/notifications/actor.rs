//! Actor-relationship notifications (exporters, buyers, OPAs).
//!
//! The four buyer payloads carry the same fields. They stay separate types so
//! each event can evolve on its own.

use serde::{Deserialize, Serialize};

use oncc_core::{ActorId, ValueObject};

/// A buyer was attached to an exporter (sent to the exporter side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuyerAddedToExporterPayload {
    pub exporter_id: ActorId,
    pub exporter_name: String,
    pub buyer_id: ActorId,
    pub buyer_name: String,
}

/// A buyer became mandataire of an exporter (sent to the buyer side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuyerAssignedAsMandatairePayload {
    pub buyer_id: ActorId,
    pub buyer_name: String,
    pub exporter_id: ActorId,
    pub exporter_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuyerRemovedFromExporterPayload {
    pub exporter_id: ActorId,
    pub exporter_name: String,
    pub buyer_id: ActorId,
    pub buyer_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuyerUnassignedAsMandatairePayload {
    pub buyer_id: ActorId,
    pub buyer_name: String,
    pub exporter_id: ActorId,
    pub exporter_name: String,
}

/// A producer left an OPA (sent to the OPA).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProducerRemovedFromOpaPayload {
    pub opa_id: ActorId,
    pub opa_name: String,
    pub producer_id: ActorId,
    pub producer_name: String,
}

impl ValueObject for BuyerAddedToExporterPayload {}
impl ValueObject for BuyerAssignedAsMandatairePayload {}
impl ValueObject for BuyerRemovedFromExporterPayload {}
impl ValueObject for BuyerUnassignedAsMandatairePayload {}
impl ValueObject for ProducerRemovedFromOpaPayload {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn buyer_added_uses_camel_case_wire_names() {
        let payload = BuyerAddedToExporterPayload {
            exporter_id: ActorId::new("exp-1").unwrap(),
            exporter_name: "Cacao Export SA".to_string(),
            buyer_id: ActorId::new("buy-9").unwrap(),
            buyer_name: "Jean Mbarga".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "exporterId": "exp-1",
                "exporterName": "Cacao Export SA",
                "buyerId": "buy-9",
                "buyerName": "Jean Mbarga",
            })
        );
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = serde_json::from_value::<BuyerAssignedAsMandatairePayload>(json!({
            "buyerId": "buy-9",
            "buyerName": "Jean Mbarga",
            "exporterId": "exp-1",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("exporterName"));
    }

    #[test]
    fn empty_identifier_is_rejected() {
        let result = serde_json::from_value::<ProducerRemovedFromOpaPayload>(json!({
            "opaId": "",
            "opaName": "OPA Sud",
            "producerId": "prod-3",
            "producerName": "Awa",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_value::<BuyerRemovedFromExporterPayload>(json!({
            "exporterId": "exp-1",
            "exporterName": "Cacao Export SA",
            "buyerId": "buy-9",
            "buyerName": "Jean Mbarga",
            "reason": "contract ended",
        }));
        assert!(result.is_err());
    }
}
