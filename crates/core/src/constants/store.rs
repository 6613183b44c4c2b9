//! Store / warehouse classification.

closed_set! {
    /// Activity carried out in a store.
    StoreType, STORE_TYPES, "store type" {
        Export => "EXPORT",
        Grouping => "GROUPING",
        GroupingAndMachining => "GROUPING_AND_MACHINING",
    }
}

closed_set! {
    /// Store lifecycle status for the current campaign.
    StoreStatus, STORE_STATUSES, "store status" {
        Active => "active",
        Inactive => "inactive",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn every_listed_store_type_round_trips_through_serde() {
        for ty in STORE_TYPES {
            let json = serde_json::to_string(ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
            assert_eq!(serde_json::from_str::<StoreType>(&json).unwrap(), *ty);
        }
    }

    #[test]
    fn unknown_store_type_error_names_the_allowed_set() {
        let err = "WAREHOUSE".parse::<StoreType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown store type 'WAREHOUSE' (expected one of: EXPORT, GROUPING, GROUPING_AND_MACHINING)"
        );
    }

    #[test]
    fn store_status_display_matches_wire_literal() {
        assert_eq!(StoreStatus::Active.to_string(), "active");
        assert_eq!(STORE_STATUSES.len(), 2);
    }

    proptest! {
        #[test]
        fn strings_outside_store_types_are_rejected(s in "[A-Z_]{0,24}") {
            prop_assume!(!StoreType::allowed_values().contains(&s.as_str()));
            prop_assert!(s.parse::<StoreType>().is_err());
            let quoted = format!("\"{s}\"");
            prop_assert!(serde_json::from_str::<StoreType>(&quoted).is_err());
        }

        #[test]
        fn strings_outside_store_statuses_are_rejected(s in "[a-z]{0,12}") {
            prop_assume!(s != "active" && s != "inactive");
            prop_assert!(s.parse::<StoreStatus>().is_err());
        }
    }
}
