//! Vehicle service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{driver_vehicle::DriverVehicleRepository, vehicle::VehicleRepository},
    error::AppError,
    model::{
        driver::Driver,
        enumeration::{Enumeration, LicensingStatus},
        pagination::Pagination,
        vehicle::{UpdateVehicleParam, UpsertVehicleParam, Vehicle, VehicleFilter},
    },
};

/// Service providing business logic for vehicles.
pub struct VehicleService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a vehicle, or overwrites the vehicle whose id is given.
    pub async fn create(&self, param: UpsertVehicleParam) -> Result<Vehicle, AppError> {
        tracing::debug!(
            id = ?param.id,
            plate = %param.legal_information.plate,
            "upserting vehicle"
        );

        let vehicle = VehicleRepository::new(self.db).upsert(param).await?;

        tracing::info!(id = vehicle.id, "vehicle stored");
        Ok(vehicle)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Vehicle, AppError> {
        tracing::debug!(id, "getting vehicle by id");

        VehicleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))
    }

    pub async fn get_by_plate(&self, plate: &str) -> Result<Vehicle, AppError> {
        tracing::debug!(plate, "getting vehicle by plate");

        VehicleRepository::new(self.db)
            .find_by_plate(plate)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle with plate {} not found", plate)))
    }

    pub async fn get_by_renavam(&self, renavam: &str) -> Result<Vehicle, AppError> {
        tracing::debug!(renavam, "getting vehicle by renavam");

        VehicleRepository::new(self.db)
            .find_by_renavam(renavam)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Vehicle with renavam {} not found", renavam))
            })
    }

    /// Lists vehicles matching the filter. An empty result is not an error.
    pub async fn list(&self, filter: VehicleFilter) -> Result<Vec<Vehicle>, AppError> {
        tracing::debug!(?filter, "listing vehicles");

        VehicleRepository::new(self.db).list(filter).await
    }

    /// Lists the drivers assigned to a vehicle, without relations.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No live vehicle with that id
    pub async fn list_drivers(
        &self,
        id: i32,
        pagination: Pagination,
    ) -> Result<Vec<Driver>, AppError> {
        self.get_by_id(id).await?;

        DriverVehicleRepository::new(self.db)
            .list_drivers_by_vehicle(id, pagination)
            .await
    }

    pub async fn update(&self, param: UpdateVehicleParam) -> Result<Vehicle, AppError> {
        tracing::debug!(id = param.id, "updating vehicle");
        let id = param.id;

        let vehicle = VehicleRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))?;

        tracing::info!(id, "vehicle updated");
        Ok(vehicle)
    }

    /// Changes the licensing status after validating the transition.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The vehicle with the new status
    /// - `Err(AppError::NotFound)` - No live vehicle with that id
    /// - `Err(AppError::Transition)` - The status is undefined or unchanged
    /// - `Err(AppError::Conflict)` - The status changed after it was read
    pub async fn change_licensing_status(
        &self,
        id: i32,
        proposed: LicensingStatus,
    ) -> Result<Vehicle, AppError> {
        let current = self.get_by_id(id).await?.legal_information.licensing.status;

        let status = current.transition(proposed)?;
        if !VehicleRepository::new(self.db)
            .set_licensing_status(id, current, status)
            .await?
        {
            self.get_by_id(id).await?;
            return Err(AppError::Conflict(format!(
                "Vehicle {} licensing status changed concurrently",
                id
            )));
        }

        tracing::info!(id, from = %current, to = %status, "licensing status changed");
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::debug!(id, "deleting vehicle");

        if !VehicleRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Vehicle {} not found", id)));
        }

        tracing::info!(id, "vehicle deleted");
        Ok(())
    }
}
