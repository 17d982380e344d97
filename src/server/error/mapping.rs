//! Failures converting persisted rows into domain records.

use thiserror::Error;

use super::enumeration::EnumDecodeError;

/// A stored enumeration column held a value with no matching member.
///
/// Names the entity and column so the failure can be traced back to the row. The
/// whole mapping fails; no partially decoded record is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to decode {entity}.{field}: {source}")]
pub struct RowDecodeError {
    pub entity: &'static str,
    pub field: &'static str,
    #[source]
    pub source: EnumDecodeError,
}

impl RowDecodeError {
    pub fn new(entity: &'static str, field: &'static str, source: EnumDecodeError) -> Self {
        Self {
            entity,
            field,
            source,
        }
    }
}
