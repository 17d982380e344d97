use chrono::Utc;
use entity::soft_delete;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::query::paginate,
    error::AppError,
    model::{
        driver::{Driver, DriverRecord},
        driver_vehicle::DriverVehicle,
        pagination::Pagination,
        vehicle::Vehicle,
    },
};

pub struct DriverVehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriverVehicleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a driver to a vehicle inside one transaction.
    ///
    /// Both endpoints are read with a shared row lock and must be live; otherwise
    /// the transaction is rolled back and nothing is written. A previously deleted
    /// link for the same pair is revived.
    ///
    /// # Returns
    /// - `Ok(DriverVehicle)`: The committed link
    /// - `Err(AppError::ReferentialIntegrity)`: Driver or vehicle missing
    /// - `Err(AppError::DbErr)`: Insert or commit failed; the transaction is rolled back
    pub async fn create(&self, driver_id: i32, vehicle_id: i32) -> Result<DriverVehicle, AppError> {
        let txn = self.db.begin().await?;

        let driver = entity::prelude::Driver::find_by_id(driver_id)
            .filter(entity::driver::Column::DeletedAt.eq(soft_delete::sentinel()))
            .lock_shared()
            .one(&txn)
            .await?;
        let vehicle = entity::prelude::Vehicle::find_by_id(vehicle_id)
            .filter(entity::vehicle::Column::DeletedAt.eq(soft_delete::sentinel()))
            .lock_shared()
            .one(&txn)
            .await?;

        if driver.is_none() || vehicle.is_none() {
            txn.rollback().await?;
            return Err(AppError::ReferentialIntegrity {
                driver_id,
                vehicle_id,
            });
        }

        let now = Utc::now();
        let entity = entity::prelude::DriverVehicle::insert(entity::driver_vehicle::ActiveModel {
            driver_id: ActiveValue::Set(driver_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(soft_delete::sentinel()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::driver_vehicle::Column::DriverId,
                entity::driver_vehicle::Column::VehicleId,
            ])
            .update_columns([
                entity::driver_vehicle::Column::UpdatedAt,
                entity::driver_vehicle::Column::DeletedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(&txn)
        .await?;

        txn.commit().await?;

        Ok(DriverVehicle::from_entity(entity))
    }

    /// Finds the live link between a driver and a vehicle.
    ///
    /// # Returns
    /// - `Ok(Some(DriverVehicle))`: Link found
    /// - `Ok(None)`: The pair is not linked
    pub async fn find(
        &self,
        driver_id: i32,
        vehicle_id: i32,
    ) -> Result<Option<DriverVehicle>, AppError> {
        let entity = entity::prelude::DriverVehicle::find_by_id((driver_id, vehicle_id))
            .filter(entity::driver_vehicle::Column::DeletedAt.eq(soft_delete::sentinel()))
            .one(self.db)
            .await?;

        Ok(entity.map(DriverVehicle::from_entity))
    }

    /// Lists the live vehicles linked to a driver, ordered by vehicle id.
    pub async fn list_vehicles_by_driver(
        &self,
        driver_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<Vehicle>, AppError> {
        let entities = paginate(
            entity::prelude::Vehicle::find()
                .inner_join(entity::prelude::DriverVehicle)
                .filter(entity::driver_vehicle::Column::DriverId.eq(driver_id))
                .filter(entity::driver_vehicle::Column::DeletedAt.eq(soft_delete::sentinel()))
                .filter(entity::vehicle::Column::DeletedAt.eq(soft_delete::sentinel()))
                .order_by_asc(entity::vehicle::Column::Id),
            pagination,
        )
        .all(self.db)
        .await?;

        Ok(entities
            .into_iter()
            .map(Vehicle::from_entity)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Lists the live drivers linked to a vehicle, ordered by driver id, without relations.
    pub async fn list_drivers_by_vehicle(
        &self,
        vehicle_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<Driver>, AppError> {
        let entities = paginate(
            entity::prelude::Driver::find()
                .inner_join(entity::prelude::DriverVehicle)
                .filter(entity::driver_vehicle::Column::VehicleId.eq(vehicle_id))
                .filter(entity::driver_vehicle::Column::DeletedAt.eq(soft_delete::sentinel()))
                .filter(entity::driver::Column::DeletedAt.eq(soft_delete::sentinel()))
                .order_by_asc(entity::driver::Column::Id),
            pagination,
        )
        .all(self.db)
        .await?;

        Ok(entities
            .into_iter()
            .map(|entity| Driver::from_entity(DriverRecord::shallow(entity)))
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Soft-deletes the link for the pair without checking either endpoint.
    ///
    /// # Returns
    /// - `Ok(true)`: Link marked as deleted
    /// - `Ok(false)`: Nothing to delete
    pub async fn delete(&self, driver_id: i32, vehicle_id: i32) -> Result<bool, AppError> {
        let now = Utc::now();
        let result = entity::prelude::DriverVehicle::update_many()
            .col_expr(entity::driver_vehicle::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::driver_vehicle::Column::UpdatedAt, Expr::value(now))
            .filter(entity::driver_vehicle::Column::DriverId.eq(driver_id))
            .filter(entity::driver_vehicle::Column::VehicleId.eq(vehicle_id))
            .filter(entity::driver_vehicle::Column::DeletedAt.eq(soft_delete::sentinel()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
