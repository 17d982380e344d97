//! Address fixtures.

use entity::address;

use super::timestamp;

pub const DEFAULT_LOCALITY: &str = "Avenida Paulista";
pub const DEFAULT_NUMBER: &str = "1578";
pub const DEFAULT_COMPLEMENT: &str = "Conjunto 12";
pub const DEFAULT_NEIGHBORHOOD: &str = "Bela Vista";
pub const DEFAULT_CITY: &str = "São Paulo";
pub const DEFAULT_STATE: &str = "SÃO PAULO";
pub const DEFAULT_CEP: &str = "01310-200";
pub const DEFAULT_COUNTRY: &str = "Brasil";

/// Creates a live address row with id `1` owned by user `1`, located in São Paulo.
pub fn entity() -> address::Model {
    address::Model {
        id: 1,
        user_id: 1,
        locality: DEFAULT_LOCALITY.to_string(),
        number: DEFAULT_NUMBER.to_string(),
        complement: DEFAULT_COMPLEMENT.to_string(),
        neighborhood: DEFAULT_NEIGHBORHOOD.to_string(),
        city: DEFAULT_CITY.to_string(),
        state: DEFAULT_STATE.to_string(),
        cep: DEFAULT_CEP.to_string(),
        country: DEFAULT_COUNTRY.to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
        deleted_at: entity::soft_delete::sentinel(),
    }
}
