//! Driver service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{driver::DriverRepository, driver_vehicle::DriverVehicleRepository},
    error::AppError,
    model::{
        driver::{Driver, UpdateDriverParam, UpsertDriverParam},
        pagination::Pagination,
        vehicle::Vehicle,
    },
};

/// Service providing business logic for drivers.
///
/// Reads take an `eager` flag: shallow reads return the driver alone, eager reads
/// also resolve the owning user's address and the linked vehicles.
pub struct DriverService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> DriverService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a driver, or overwrites the driver whose id is given.
    pub async fn create(&self, param: UpsertDriverParam) -> Result<Driver, AppError> {
        tracing::debug!(id = ?param.id, user_id = param.user_id, "upserting driver");

        let driver = DriverRepository::new(self.db).upsert(param).await?;

        tracing::info!(id = driver.id, user_id = driver.user_id, "driver stored");
        Ok(driver)
    }

    /// Retrieves a driver by id.
    ///
    /// # Returns
    /// - `Ok(Driver)` - The driver, with relations when `eager`
    /// - `Err(AppError::NotFound)` - No live driver with that id
    /// - `Err(AppError::RowDecode)` - A related address or vehicle holds an unknown value
    pub async fn get_by_id(&self, id: i32, eager: bool) -> Result<Driver, AppError> {
        tracing::debug!(id, eager, "getting driver by id");

        DriverRepository::new(self.db)
            .find_by_id(id, eager)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", id)))
    }

    pub async fn get_by_user_id(&self, user_id: i32, eager: bool) -> Result<Driver, AppError> {
        tracing::debug!(user_id, eager, "getting driver by user id");

        DriverRepository::new(self.db)
            .find_by_user_id(user_id, eager)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Driver of user {} not found", user_id)))
    }

    pub async fn list(&self, pagination: Pagination, eager: bool) -> Result<Vec<Driver>, AppError> {
        tracing::debug!(?pagination, eager, "listing drivers");

        DriverRepository::new(self.db).list(pagination, eager).await
    }

    /// Lists the vehicles assigned to a driver.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No live driver with that id
    pub async fn list_vehicles(
        &self,
        id: i32,
        pagination: Pagination,
    ) -> Result<Vec<Vehicle>, AppError> {
        self.get_by_id(id, false).await?;

        DriverVehicleRepository::new(self.db)
            .list_vehicles_by_driver(id, pagination)
            .await
    }

    pub async fn update(&self, param: UpdateDriverParam) -> Result<Driver, AppError> {
        tracing::debug!(id = param.id, "updating driver");
        let id = param.id;

        let driver = DriverRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", id)))?;

        tracing::info!(id, "driver updated");
        Ok(driver)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::debug!(id, "deleting driver");

        if !DriverRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Driver {} not found", id)));
        }

        tracing::info!(id, "driver deleted");
        Ok(())
    }
}
