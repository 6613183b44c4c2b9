//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain-level error.
///
/// Deterministic failures of domain values: closed-set violations and malformed
/// identifiers. Field-by-field request validation uses [`FieldErrors`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value is outside a closed enumeration.
    #[error("unknown {kind} '{value}' (expected one of: {allowed})")]
    UnknownValue {
        kind: &'static str,
        value: String,
        allowed: String,
    },

    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_value(kind: &'static str, value: impl Into<String>, allowed: &[&str]) -> Self {
        Self::UnknownValue {
            kind,
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }
}

/// Category of a field-level violation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The submitted value does not match the declared structure.
    Shape,
    /// The value is well-formed but references a record that does not exist.
    Reference,
}

/// A single field-level validation failure.
///
/// `field` is a dotted path into the submitted document (`userIds.1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub rule: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldError {
    pub fn shape(field: impl Into<String>, rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            kind: ViolationKind::Shape,
            message: message.into(),
        }
    }

    pub fn reference(
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            kind: ViolationKind::Reference,
            message: message.into(),
        }
    }
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.message, self.rule)
    }
}

/// Ordered collection of field-level failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// True when every error is of the given kind.
    pub fn all_of(&self, kind: ViolationKind) -> bool {
        self.0.iter().all(|e| e.kind == kind)
    }

    /// Errors reported for an exact field path.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.0.iter().filter(move |e| e.field == field)
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(value: Vec<FieldError>) -> Self {
        Self(value)
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_value_lists_allowed_values() {
        let err = DomainError::unknown_value("store type", "SILO", &["EXPORT", "GROUPING"]);
        assert_eq!(
            err.to_string(),
            "unknown store type 'SILO' (expected one of: EXPORT, GROUPING)"
        );
    }

    #[test]
    fn blank_identifier_error_names_the_identifier() {
        let err = "  ".parse::<crate::StoreId>().unwrap_err();
        assert_eq!(err, DomainError::invalid_id("StoreId: must not be empty"));
        assert_eq!(err.to_string(), "invalid identifier: StoreId: must not be empty");
    }

    #[test]
    fn field_errors_display_joins_entries() {
        let errors = FieldErrors::from(vec![
            FieldError::shape("userIds.0", "number", "must be a number"),
            FieldError::reference("userIds.1", "exists", "user 999 does not exist"),
        ]);

        assert_eq!(
            errors.to_string(),
            "userIds.0: must be a number (number); userIds.1: user 999 does not exist (exists)"
        );
        assert!(!errors.all_of(ViolationKind::Shape));
        assert_eq!(errors.for_field("userIds.1").count(), 1);
    }

    #[test]
    fn field_error_serializes_kind_in_snake_case() {
        let json = serde_json::to_value(FieldError::reference("userIds.0", "exists", "missing")).unwrap();
        assert_eq!(json["kind"], "reference");
        assert_eq!(json["field"], "userIds.0");
    }
}
