//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions build in-memory entity models for mapping tests and provide the
//! default values used by the factories. Unlike factories, fixtures do NOT insert data
//! into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let mut row = fixture::address::entity();
//! row.state = "MISSOURI".to_string();
//! ```

pub mod address;
pub mod driver;
pub mod driver_vehicle;
pub mod user;
pub mod vehicle;

use chrono::{DateTime, TimeZone, Utc};

/// Fixed creation timestamp shared by all fixtures.
pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}
