//! Domain model for the driver/vehicle assignment link.

use chrono::{DateTime, Utc};

use crate::model::driver_vehicle::DriverVehicleDto;

/// Active assignment of a vehicle to a driver, keyed by the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverVehicle {
    pub driver_id: i32,
    pub vehicle_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

impl DriverVehicle {
    /// The link has no enumeration columns, so this conversion cannot fail.
    pub fn from_entity(entity: entity::driver_vehicle::Model) -> Self {
        Self {
            driver_id: entity.driver_id,
            vehicle_id: entity.vehicle_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }

    pub fn into_entity(self) -> entity::driver_vehicle::Model {
        entity::driver_vehicle::Model {
            driver_id: self.driver_id,
            vehicle_id: self.vehicle_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }

    pub fn into_dto(self) -> DriverVehicleDto {
        DriverVehicleDto {
            driver_id: self.driver_id,
            vehicle_id: self.vehicle_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
