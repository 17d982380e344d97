//! Driver fixtures.

use chrono::NaiveDate;
use entity::driver;

use super::timestamp;

pub const DEFAULT_NAME: &str = "João da Silva";
pub const DEFAULT_RG: &str = "12.345.678-9";
pub const DEFAULT_CPF: &str = "123.456.789-09";
pub const DEFAULT_DRIVER_LICENSE: &str = "01234567890";
pub const DEFAULT_CELL_PHONE: &str = "+55 11 91234-5678";
pub const DEFAULT_EMAIL: &str = "joao.silva@example.com";

/// Default date of birth, 1985-06-15.
pub fn date_of_birth() -> NaiveDate {
    NaiveDate::from_ymd_opt(1985, 6, 15).unwrap_or_default()
}

/// Creates a live driver row with id `1` owned by user `1`.
pub fn entity() -> driver::Model {
    driver::Model {
        id: 1,
        user_id: 1,
        name: DEFAULT_NAME.to_string(),
        date_of_birth: date_of_birth(),
        rg: DEFAULT_RG.to_string(),
        cpf: DEFAULT_CPF.to_string(),
        driver_license: DEFAULT_DRIVER_LICENSE.to_string(),
        cell_phone: DEFAULT_CELL_PHONE.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
        deleted_at: entity::soft_delete::sentinel(),
    }
}
