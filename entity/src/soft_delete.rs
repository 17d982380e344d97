//! Soft-delete marker shared by every table.

use chrono::NaiveDate;
use sea_orm::entity::prelude::{DateTimeUtc, EntityTrait};

/// The "zero date" (`0001-01-01 00:00:00 UTC`) stored in `deleted_at` for live rows.
pub fn sentinel() -> DateTimeUtc {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTimeUtc::MIN_UTC)
}

/// Whether a `deleted_at` value marks the row as deleted.
pub fn is_deleted(deleted_at: &DateTimeUtc) -> bool {
    *deleted_at != sentinel()
}

/// Uniqueness that only holds among live rows.
///
/// Each listed column gets a unique index filtered on `deleted_at` being the
/// sentinel, so a soft-deleted row never blocks a new row with the same value.
pub trait LiveUnique: EntityTrait {
    /// The entity's `deleted_at` column.
    fn deleted_at() -> Self::Column;

    /// Columns unique among live rows, one index each.
    fn live_unique_columns() -> Vec<Self::Column>;
}
