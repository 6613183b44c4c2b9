//! Location classification.

closed_set! {
    /// Administrative level of a location.
    LocationType, LOCATION_TYPES, "location type" {
        Region => "region",
        Department => "department",
        District => "district",
    }
}

closed_set! {
    /// Whether a location can currently be referenced.
    LocationStatus, LOCATION_STATUSES, "location status" {
        Active => "active",
        Inactive => "inactive",
    }
}
