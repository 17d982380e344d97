use chrono::Utc;
use entity::soft_delete;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::query::paginate,
    error::AppError,
    model::{
        enumeration::{Enumeration, LicensingStatus},
        vehicle::{UpdateVehicleParam, UpsertVehicleParam, Vehicle, VehicleFilter},
    },
};

pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a vehicle, or replaces the vehicle with the same id.
    ///
    /// Replacing rewrites plate and renavam too; only `update` keeps them fixed.
    ///
    /// # Returns
    /// - `Ok(Vehicle)`: The stored vehicle
    /// - `Err(AppError)`: Database error, e.g. a duplicate plate
    pub async fn upsert(&self, param: UpsertVehicleParam) -> Result<Vehicle, AppError> {
        let assign_id = param.id.is_some();
        let mut model = param
            .into_vehicle(Utc::now())
            .into_entity()
            .into_active_model()
            .reset_all();
        if !assign_id {
            model.id = ActiveValue::NotSet;
        }

        let entity = entity::prelude::Vehicle::insert(model)
            .on_conflict(
                OnConflict::column(entity::vehicle::Column::Id)
                    .update_columns([
                        entity::vehicle::Column::Brand,
                        entity::vehicle::Column::Model,
                        entity::vehicle::Column::YearOfManufacture,
                        entity::vehicle::Column::Plate,
                        entity::vehicle::Column::Renavam,
                        entity::vehicle::Column::LicensingExpiryDate,
                        entity::vehicle::Column::LicensingStatus,
                        entity::vehicle::Column::UpdatedAt,
                        entity::vehicle::Column::DeletedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(Vehicle::from_entity(entity)?)
    }

    /// Finds a live vehicle by id.
    ///
    /// # Returns
    /// - `Ok(Some(Vehicle))`: Vehicle found
    /// - `Ok(None)`: No live vehicle with that id
    /// - `Err(AppError)`: Database error or a stored status that does not decode
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let entity = entity::prelude::Vehicle::find_by_id(id)
            .filter(entity::vehicle::Column::DeletedAt.eq(soft_delete::sentinel()))
            .one(self.db)
            .await?;

        Ok(entity.map(Vehicle::from_entity).transpose()?)
    }

    pub async fn find_by_plate(&self, plate: &str) -> Result<Option<Vehicle>, AppError> {
        let entity = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Plate.eq(plate))
            .filter(entity::vehicle::Column::DeletedAt.eq(soft_delete::sentinel()))
            .one(self.db)
            .await?;

        Ok(entity.map(Vehicle::from_entity).transpose()?)
    }

    pub async fn find_by_renavam(&self, renavam: &str) -> Result<Option<Vehicle>, AppError> {
        let entity = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Renavam.eq(renavam))
            .filter(entity::vehicle::Column::DeletedAt.eq(soft_delete::sentinel()))
            .one(self.db)
            .await?;

        Ok(entity.map(Vehicle::from_entity).transpose()?)
    }

    /// Lists live vehicles matching every set filter, ordered by id.
    ///
    /// # Arguments
    /// - `filter`: Column filters and the page to return
    ///
    /// # Returns
    /// - `Ok(Vec<Vehicle>)`: Matching vehicles, possibly empty
    /// - `Err(AppError)`: Database error or a row that does not decode
    pub async fn list(&self, filter: VehicleFilter) -> Result<Vec<Vehicle>, AppError> {
        let mut query = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::DeletedAt.eq(soft_delete::sentinel()));

        if let Some(brand) = filter.brand {
            query = query.filter(entity::vehicle::Column::Brand.eq(brand));
        }
        if let Some(model) = filter.model {
            query = query.filter(entity::vehicle::Column::Model.eq(model));
        }
        if let Some(year) = filter.year_of_manufacture {
            query = query.filter(entity::vehicle::Column::YearOfManufacture.eq(year));
        }
        if let Some(expiry_date) = filter.licensing_expiry_date {
            query = query.filter(entity::vehicle::Column::LicensingExpiryDate.eq(expiry_date));
        }
        if let Some(status) = filter.licensing_status {
            query = query.filter(entity::vehicle::Column::LicensingStatus.eq(status.display_name()));
        }

        let entities = paginate(
            query.order_by_asc(entity::vehicle::Column::Id),
            filter.pagination,
        )
        .all(self.db)
        .await?;

        Ok(entities
            .into_iter()
            .map(Vehicle::from_entity)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Updates a live vehicle, leaving plate and renavam untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Vehicle))`: The updated vehicle
    /// - `Ok(None)`: No live vehicle with that id
    pub async fn update(&self, param: UpdateVehicleParam) -> Result<Option<Vehicle>, AppError> {
        let result = entity::prelude::Vehicle::update_many()
            .set(entity::vehicle::ActiveModel {
                brand: ActiveValue::Set(param.attributes.brand),
                model: ActiveValue::Set(param.attributes.model),
                year_of_manufacture: ActiveValue::Set(param.attributes.year_of_manufacture),
                licensing_expiry_date: ActiveValue::Set(param.licensing.expiry_date),
                licensing_status: ActiveValue::Set(
                    param.licensing.status.display_name().to_string(),
                ),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::vehicle::Column::Id.eq(param.id))
            .filter(entity::vehicle::Column::DeletedAt.eq(soft_delete::sentinel()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(param.id).await
    }

    /// Replaces `current` with `status`. Callers validate the transition first.
    ///
    /// Returns `Ok(false)` when no live vehicle with that id still holds `current`.
    pub async fn set_licensing_status(
        &self,
        id: i32,
        current: LicensingStatus,
        status: LicensingStatus,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Vehicle::update_many()
            .col_expr(
                entity::vehicle::Column::LicensingStatus,
                Expr::value(status.display_name()),
            )
            .col_expr(entity::vehicle::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::vehicle::Column::Id.eq(id))
            .filter(entity::vehicle::Column::LicensingStatus.eq(current.display_name()))
            .filter(entity::vehicle::Column::DeletedAt.eq(soft_delete::sentinel()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Soft-deletes a live vehicle. Its driver links are left as they are.
    ///
    /// # Returns
    /// - `Ok(true)`: Vehicle marked as deleted
    /// - `Ok(false)`: Nothing to delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let now = Utc::now();
        let result = entity::prelude::Vehicle::update_many()
            .col_expr(entity::vehicle::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::vehicle::Column::UpdatedAt, Expr::value(now))
            .filter(entity::vehicle::Column::Id.eq(id))
            .filter(entity::vehicle::Column::DeletedAt.eq(soft_delete::sentinel()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
