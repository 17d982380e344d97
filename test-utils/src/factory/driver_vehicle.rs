//! Driver-vehicle link factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for links between an existing driver and an existing vehicle.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::driver_vehicle::DriverVehicleFactory;
///
/// let removed = DriverVehicleFactory::new(&db, driver.id, vehicle.id)
///     .deleted_at(Utc::now())
///     .build()
///     .await?;
/// ```
pub struct DriverVehicleFactory<'a> {
    db: &'a DatabaseConnection,
    driver_id: i32,
    vehicle_id: i32,
    deleted_at: DateTime<Utc>,
}

impl<'a> DriverVehicleFactory<'a> {
    /// Creates a factory for a live link between the given rows.
    pub fn new(db: &'a DatabaseConnection, driver_id: i32, vehicle_id: i32) -> Self {
        Self {
            db,
            driver_id,
            vehicle_id,
            deleted_at: entity::soft_delete::sentinel(),
        }
    }

    /// Stores the link as already soft-deleted at `deleted_at`.
    pub fn deleted_at(mut self, deleted_at: DateTime<Utc>) -> Self {
        self.deleted_at = deleted_at;
        self
    }

    /// Builds and inserts the link.
    ///
    /// # Returns
    /// - `Ok(entity::driver_vehicle::Model)` - Created link
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::driver_vehicle::Model, DbErr> {
        let now = Utc::now();
        entity::driver_vehicle::ActiveModel {
            driver_id: ActiveValue::Set(self.driver_id),
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Links an existing driver to an existing vehicle.
///
/// Shorthand for `DriverVehicleFactory::new(db, driver_id, vehicle_id).build().await`.
pub async fn create_link(
    db: &DatabaseConnection,
    driver_id: i32,
    vehicle_id: i32,
) -> Result<entity::driver_vehicle::Model, DbErr> {
    DriverVehicleFactory::new(db, driver_id, vehicle_id)
        .build()
        .await
}
