//! `oncc-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, closed enumerations and the error model.

pub mod constants;
pub mod error;
pub mod id;
pub mod value_object;

pub use constants::{
    ACTOR_TYPES, ActorType, CAMPAIGN_STATUSES, CampaignStatus, LOCATION_STATUSES,
    LOCATION_TYPES, LocationStatus, LocationType, STORE_STATUSES, STORE_TYPES, StoreStatus,
    StoreType,
};
pub use error::{DomainError, FieldError, FieldErrors, ViolationKind};
pub use id::{ActorId, CampaignId, StoreId, UserId};
pub use value_object::ValueObject;
