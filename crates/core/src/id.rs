//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque, non-empty strings owned by the platform's persistence
//! layer. This crate never generates them, it only refuses blank ones.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an actor (exporter, buyer, producer, OPA, transformer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActorId(String);

/// Identifier of a campaign (export season).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CampaignId(String);

/// Identifier of a store / warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StoreId(String);

/// Identifier of a platform user account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

macro_rules! impl_string_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Build an identifier, rejecting empty or whitespace-only input.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: must not be empty", $name)));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_id!(ActorId, "ActorId");
impl_string_id!(CampaignId, "CampaignId");
impl_string_id!(StoreId, "StoreId");
impl_string_id!(UserId, "UserId");

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blank_identifiers_are_rejected() {
        assert!(ActorId::new("").is_err());
        assert!(StoreId::new("   ").is_err());
        assert!(matches!(
            "".parse::<CampaignId>(),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn identifiers_serialize_as_plain_strings() {
        let id = UserId::new("usr_42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"usr_42\"");

        let back: UserId = serde_json::from_str("\"usr_42\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn deserializing_an_empty_identifier_fails() {
        assert!(serde_json::from_str::<ActorId>("\"\"").is_err());
    }

    proptest! {
        #[test]
        fn any_non_blank_string_is_accepted_verbatim(s in "[A-Za-z0-9_-]{1,40}") {
            let id = StoreId::new(s.clone()).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        #[test]
        fn whitespace_only_strings_are_rejected(s in "[ \t\n]{0,10}") {
            prop_assert!(ActorId::new(s).is_err());
        }
    }
}
