//! Validation of `{ "userIds": number[] }` submitted before an assignment change.
//!
//! Two phases:
//! 1. **shape**: the document is an object whose `userIds` is an array of integers.
//!    Every violation is collected; none of them touches the user store.
//! 2. **reference**: one batched existence query; each id without a user record is
//!    reported at its array index.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use oncc_core::{FieldError, FieldErrors};

use crate::lookup::{LookupError, UserLookup};

pub const USER_IDS_FIELD: &str = "userIds";

/// Validated assignment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAssignment {
    pub user_ids: Vec<i64>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Shape or reference violations, field by field.
    #[error("validation failed: {0}")]
    Rejected(FieldErrors),

    /// The user store could not be queried.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl ValidationError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationError::Rejected(errors) => Some(errors),
            ValidationError::Lookup(_) => None,
        }
    }
}

/// Structural check only. Returns the ids in submission order.
pub fn check_shape(candidate: &Value) -> Result<Vec<i64>, FieldErrors> {
    let mut errors = FieldErrors::new();

    let Some(object) = candidate.as_object() else {
        errors.push(FieldError::shape("", "object", "the request body must be an object"));
        return Err(errors);
    };

    let Some(raw) = object.get(USER_IDS_FIELD) else {
        errors.push(FieldError::shape(
            USER_IDS_FIELD,
            "required",
            "the userIds field must be defined",
        ));
        return Err(errors);
    };

    let Some(items) = raw.as_array() else {
        errors.push(FieldError::shape(
            USER_IDS_FIELD,
            "array",
            "the userIds field must be an array",
        ));
        return Err(errors);
    };

    let mut ids = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let field = format!("{USER_IDS_FIELD}.{index}");
        match item {
            // Only JSON integers in i64 range. Float literals are refused even
            // when whole (`1.0`, `1e2`), as are integers above i64::MAX.
            Value::Number(n) => match n.as_i64() {
                Some(id) => ids.push(id),
                None => errors.push(FieldError::shape(
                    field,
                    "withoutDecimals",
                    format!("{n} is not a valid integer user id"),
                )),
            },
            other => errors.push(FieldError::shape(
                field,
                "number",
                format!("expected a number, got {}", json_type(other)),
            )),
        }
    }

    if errors.is_empty() {
        Ok(ids)
    } else {
        Err(errors)
    }
}

/// Validate an assignment request against the user store.
///
/// Succeeds with the submitted ids unchanged (order and duplicates preserved).
pub async fn validate_user_assignment<L>(
    candidate: &Value,
    lookup: &L,
) -> Result<UserAssignment, ValidationError>
where
    L: UserLookup + ?Sized,
{
    let user_ids = check_shape(candidate).map_err(ValidationError::Rejected)?;

    if user_ids.is_empty() {
        return Ok(UserAssignment { user_ids });
    }

    let distinct: Vec<i64> = user_ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
    let found = lookup.existing(&distinct).await?;

    let mut errors = FieldErrors::new();
    for (index, id) in user_ids.iter().enumerate() {
        if !found.contains(id) {
            errors.push(FieldError::reference(
                format!("{USER_IDS_FIELD}.{index}"),
                "exists",
                format!("user {id} does not exist"),
            ));
        }
    }

    if !errors.is_empty() {
        debug!(missing = errors.len(), submitted = user_ids.len(), "user assignment rejected");
        return Err(ValidationError::Rejected(errors));
    }

    Ok(UserAssignment { user_ids })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
