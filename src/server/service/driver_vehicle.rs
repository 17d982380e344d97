//! Service for assigning vehicles to drivers.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::driver_vehicle::DriverVehicleRepository,
    error::AppError,
    model::driver_vehicle::DriverVehicle,
};

/// Service providing business logic for driver/vehicle links.
pub struct DriverVehicleService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> DriverVehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a driver to a vehicle.
    ///
    /// # Returns
    /// - `Ok(DriverVehicle)` - The committed link
    /// - `Err(AppError::ReferentialIntegrity)` - The driver or the vehicle does not exist
    pub async fn create(&self, driver_id: i32, vehicle_id: i32) -> Result<DriverVehicle, AppError> {
        tracing::debug!(driver_id, vehicle_id, "linking driver to vehicle");

        let link = DriverVehicleRepository::new(self.db)
            .create(driver_id, vehicle_id)
            .await
            .inspect_err(|err| {
                if let AppError::ReferentialIntegrity { .. } = err {
                    tracing::warn!(driver_id, vehicle_id, "link rejected: {}", err);
                }
            })?;

        tracing::info!(driver_id, vehicle_id, "driver linked to vehicle");
        Ok(link)
    }

    pub async fn get(&self, driver_id: i32, vehicle_id: i32) -> Result<DriverVehicle, AppError> {
        tracing::debug!(driver_id, vehicle_id, "getting driver vehicle link");

        DriverVehicleRepository::new(self.db)
            .find(driver_id, vehicle_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Driver {} is not linked to vehicle {}",
                    driver_id, vehicle_id
                ))
            })
    }

    /// Removes a link. The endpoints are not checked.
    pub async fn delete(&self, driver_id: i32, vehicle_id: i32) -> Result<(), AppError> {
        tracing::debug!(driver_id, vehicle_id, "unlinking driver from vehicle");

        if !DriverVehicleRepository::new(self.db)
            .delete(driver_id, vehicle_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Driver {} is not linked to vehicle {}",
                driver_id, vehicle_id
            )));
        }

        tracing::info!(driver_id, vehicle_id, "driver unlinked from vehicle");
        Ok(())
    }
}
