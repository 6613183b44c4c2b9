//! Store occupancy and lifecycle notifications.

use serde::{Deserialize, Serialize};

use oncc_core::{ActorId, ActorType, StoreId, StoreType, ValueObject};

use super::common::{CampaignSummary, UserRef};

/// Store reference in occupancy notifications. `code` may be unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StoreRef {
    pub id: StoreId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Store reference in lifecycle notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StoreDetails {
    pub id: StoreId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_type: Option<StoreType>,
}

/// Actor occupying (or leaving) a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OccupantActor {
    pub id: ActorId,
    pub full_name: String,
    pub actor_type: ActorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OccupantAssignedPayload {
    pub store: StoreRef,
    pub actor: OccupantActor,
    pub assigned_by: UserRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OccupantUnassignedPayload {
    pub store: StoreRef,
    pub actor: OccupantActor,
    pub unassigned_by: UserRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StoreActivatedPayload {
    pub store: StoreDetails,
    pub campaign: CampaignSummary,
    pub activated_by: UserRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StoreDeactivatedPayload {
    pub store: StoreDetails,
    pub campaign: CampaignSummary,
    pub deactivated_by: UserRef,
}

impl ValueObject for StoreRef {}
impl ValueObject for StoreDetails {}
impl ValueObject for OccupantActor {}
impl ValueObject for OccupantAssignedPayload {}
impl ValueObject for OccupantUnassignedPayload {}
impl ValueObject for StoreActivatedPayload {}
impl ValueObject for StoreDeactivatedPayload {}
