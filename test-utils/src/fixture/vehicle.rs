//! Vehicle fixtures.

use chrono::NaiveDate;
use entity::vehicle;

use super::timestamp;

pub const DEFAULT_BRAND: &str = "Volvo";
pub const DEFAULT_MODEL: &str = "FH 540";
pub const DEFAULT_YEAR_OF_MANUFACTURE: i32 = 2021;
pub const DEFAULT_PLATE: &str = "BRA2E19";
pub const DEFAULT_RENAVAM: &str = "00123456789";
pub const DEFAULT_LICENSING_STATUS: &str = "REGULAR";

/// Default licensing expiry date, 2025-12-31.
pub fn licensing_expiry_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default()
}

/// Creates a live vehicle row with id `1` and a regular licensing status.
pub fn entity() -> vehicle::Model {
    vehicle::Model {
        id: 1,
        brand: DEFAULT_BRAND.to_string(),
        model: DEFAULT_MODEL.to_string(),
        year_of_manufacture: DEFAULT_YEAR_OF_MANUFACTURE,
        plate: DEFAULT_PLATE.to_string(),
        renavam: DEFAULT_RENAVAM.to_string(),
        licensing_expiry_date: licensing_expiry_date(),
        licensing_status: DEFAULT_LICENSING_STATUS.to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
        deleted_at: entity::soft_delete::sentinel(),
    }
}
