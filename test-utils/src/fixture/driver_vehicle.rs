//! Driver-vehicle link fixtures.

use entity::driver_vehicle;

use super::timestamp;

/// Creates a live link between driver `1` and vehicle `1`.
pub fn entity() -> driver_vehicle::Model {
    driver_vehicle::Model {
        driver_id: 1,
        vehicle_id: 1,
        created_at: timestamp(),
        updated_at: timestamp(),
        deleted_at: entity::soft_delete::sentinel(),
    }
}
