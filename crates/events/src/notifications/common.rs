//! Shapes shared by several payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use oncc_core::{CampaignId, CampaignStatus, UserId, ValueObject};

/// The user who performed the action behind a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserRef {
    pub id: UserId,
    pub username: String,
    pub full_name: String,
}

/// Campaign identity as quoted inside store and audit notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CampaignSummary {
    pub id: CampaignId,
    pub code: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Campaign aggregate as seen by subscribers (owned by the campaign service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Campaign {
    pub id: CampaignId,
    pub code: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CampaignStatus,
}

impl Campaign {
    pub fn summary(&self) -> CampaignSummary {
        CampaignSummary {
            id: self.id.clone(),
            code: self.code.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// Active/inactive breakdown captured when a campaign is activated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusCounts {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
}

impl StatusCounts {
    pub fn new(active: u64, inactive: u64) -> Self {
        Self {
            total: active + inactive,
            active,
            inactive,
        }
    }
}

impl ValueObject for UserRef {}
impl ValueObject for CampaignSummary {}
impl ValueObject for Campaign {}
impl ValueObject for StatusCounts {}
