closed_set! {
    /// Campaign lifecycle status. At most one campaign is active at a time.
    CampaignStatus, CAMPAIGN_STATUSES, "campaign status" {
        Active => "active",
        Inactive => "inactive",
    }
}
