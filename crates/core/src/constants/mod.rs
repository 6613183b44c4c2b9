//! Closed enumerations shared by payloads, validation and display.
//!
//! Each enumeration is declared once through [`closed_set!`]; the generated
//! list constant (`LOCATION_TYPES`, `STORE_TYPES`, ...) is the only place the
//! allowed values live. Parsing, serde and error messages all derive from it.

/// Declare a closed string enumeration together with its list constant.
///
/// ```ignore
/// closed_set! {
///     /// Store lifecycle status.
///     StoreStatus, STORE_STATUSES, "store status" {
///         Active => "active",
///         Inactive => "inactive",
///     }
/// }
/// ```
/// Must stay above the `mod` declarations below: submodules see it through
/// textual scope.
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident, $all:ident, $label:literal {
            $($variant:ident => $lit:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $lit)]
                $variant,
            )+
        }

        #[doc = concat!("Every allowed `", stringify!($name), "`, in declaration order.")]
        pub const $all: &[$name] = &[$($name::$variant),+];

        impl $name {
            /// Human-readable name of the enumeration (used in error messages).
            pub const LABEL: &'static str = $label;

            /// Wire literal for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $lit,)+
                }
            }

            /// Wire literals of every allowed value.
            pub fn allowed_values() -> Vec<&'static str> {
                $all.iter().map(|v| v.as_str()).collect()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $all
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| {
                        $crate::error::DomainError::unknown_value(
                            $label,
                            s,
                            &Self::allowed_values(),
                        )
                    })
            }
        }
    };
}

pub mod actor;
pub mod campaign;
pub mod location;
pub mod store;

pub use actor::{ACTOR_TYPES, ActorType};
pub use campaign::{CAMPAIGN_STATUSES, CampaignStatus};
pub use location::{LOCATION_STATUSES, LOCATION_TYPES, LocationStatus, LocationType};
pub use store::{STORE_STATUSES, STORE_TYPES, StoreStatus, StoreType};
