//! Campaign lifecycle notifications and the audits taken at activation.

use serde::{Deserialize, Serialize};

use oncc_core::{ActorId, ValueObject};

use super::common::{Campaign, CampaignSummary, StatusCounts, UserRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CampaignActivatedPayload {
    pub campaign: Campaign,
    pub activated_by: UserRef,
}

/// OPA reference inside a conventions audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OpaRef {
    pub id: ActorId,
    pub full_name: String,
}

/// Convention counts of one OPA when a campaign is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OpaConventionsStatusPayload {
    pub campaign: CampaignSummary,
    pub opa: OpaRef,
    pub conventions_data: StatusCounts,
    pub activated_by: UserRef,
}

/// Store counts when a campaign is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StoresStatusPayload {
    pub campaign: CampaignSummary,
    pub stores_data: StatusCounts,
    pub activated_by: UserRef,
}

impl ValueObject for CampaignActivatedPayload {}
impl ValueObject for OpaRef {}
impl ValueObject for OpaConventionsStatusPayload {}
impl ValueObject for StoresStatusPayload {}
