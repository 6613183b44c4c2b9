//! Value object trait: equality by value, not identity.
//!
//! Notification payloads are value objects: they are built once when a domain
//! event happens, never mutated afterwards, and two payloads carrying the same
//! values are the same payload.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Clone**: value objects are copied, never shared mutably
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: printable in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct StatusCounts {
///     total: u64,
///     active: u64,
///     inactive: u64,
/// }
///
/// impl ValueObject for StatusCounts {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
