//! Failures of the closed enumerations (states, roles, licensing statuses).

use thiserror::Error;

/// A name did not match any member of an enumeration.
///
/// Carries the enumeration kind and the offending raw input so the boundary can
/// report exactly what was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("the given {kind} [{value}] is non-existent in the map of valid values")]
pub struct EnumDecodeError {
    /// Enumeration name, e.g. `"brazilian state"`.
    pub kind: &'static str,
    /// The rejected input, as received.
    pub value: String,
}

/// A proposed enumeration change was rejected. No state is modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumTransitionError {
    #[error("the new {kind} cannot be equal to undefined")]
    Undefined { kind: &'static str },

    #[error("the new {kind} [{current}] cannot be the same as the old one")]
    Unchanged {
        kind: &'static str,
        current: &'static str,
    },

    /// Raised when a raw code outside the closed set is proposed.
    #[error("the new {kind} code [{code}] is not present in the available list")]
    NotMember { kind: &'static str, code: i64 },
}
