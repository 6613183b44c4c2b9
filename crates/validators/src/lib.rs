//! `oncc-validators` — request validators backed by injected lookups.

pub mod lookup;
pub mod user_assignment;

pub use lookup::{InMemoryUserLookup, LookupError, UserLookup};
pub use user_assignment::{
    USER_IDS_FIELD, UserAssignment, ValidationError, check_shape, validate_user_assignment,
};
