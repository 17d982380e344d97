use chrono::Utc;
use entity::soft_delete;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::server::{
    data::query::paginate,
    error::AppError,
    model::{
        driver::{Driver, DriverRecord, UpdateDriverParam, UpsertDriverParam},
        pagination::Pagination,
    },
};

pub struct DriverRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriverRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a driver, or replaces the driver with the same id.
    ///
    /// # Returns
    /// - `Ok(Driver)`: The stored driver, without relations
    /// - `Err(AppError)`: Database error, e.g. a duplicate CPF or a missing user
    pub async fn upsert(&self, param: UpsertDriverParam) -> Result<Driver, AppError> {
        let assign_id = param.id.is_some();
        let mut model = param
            .into_driver(Utc::now())
            .into_entity()
            .driver
            .into_active_model()
            .reset_all();
        if !assign_id {
            model.id = ActiveValue::NotSet;
        }

        let entity = entity::prelude::Driver::insert(model)
            .on_conflict(
                OnConflict::column(entity::driver::Column::Id)
                    .update_columns([
                        entity::driver::Column::UserId,
                        entity::driver::Column::Name,
                        entity::driver::Column::DateOfBirth,
                        entity::driver::Column::Rg,
                        entity::driver::Column::Cpf,
                        entity::driver::Column::DriverLicense,
                        entity::driver::Column::CellPhone,
                        entity::driver::Column::Email,
                        entity::driver::Column::UpdatedAt,
                        entity::driver::Column::DeletedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(Driver::from_entity(DriverRecord::shallow(entity))?)
    }

    /// Finds a live driver by id.
    ///
    /// # Arguments
    /// - `id`: Driver id
    /// - `eager`: Also load the owning user's address and the linked vehicles
    ///
    /// # Returns
    /// - `Ok(Some(Driver))`: Driver found
    /// - `Ok(None)`: No live driver with that id
    /// - `Err(AppError)`: Database error or a nested row that does not decode
    pub async fn find_by_id(&self, id: i32, eager: bool) -> Result<Option<Driver>, AppError> {
        let entity = entity::prelude::Driver::find_by_id(id)
            .filter(entity::driver::Column::DeletedAt.eq(soft_delete::sentinel()))
            .one(self.db)
            .await?;

        self.assemble_one(entity, eager).await
    }

    /// Finds the live driver owned by a user.
    pub async fn find_by_user_id(
        &self,
        user_id: i32,
        eager: bool,
    ) -> Result<Option<Driver>, AppError> {
        let entity = entity::prelude::Driver::find()
            .filter(entity::driver::Column::UserId.eq(user_id))
            .filter(entity::driver::Column::DeletedAt.eq(soft_delete::sentinel()))
            .one(self.db)
            .await?;

        self.assemble_one(entity, eager).await
    }

    /// Lists live drivers ordered by id.
    ///
    /// # Arguments
    /// - `pagination`: Page to return
    /// - `eager`: Also load addresses and vehicles, batched for the whole page
    pub async fn list(&self, pagination: Pagination, eager: bool) -> Result<Vec<Driver>, AppError> {
        let entities = paginate(
            entity::prelude::Driver::find()
                .filter(entity::driver::Column::DeletedAt.eq(soft_delete::sentinel()))
                .order_by_asc(entity::driver::Column::Id),
            pagination,
        )
        .all(self.db)
        .await?;

        self.assemble(entities, eager).await
    }

    /// Updates name, date of birth and contact of a live driver.
    ///
    /// RG, CPF, driver license and the owning user are never part of the update.
    ///
    /// # Returns
    /// - `Ok(Some(Driver))`: The updated driver, without relations
    /// - `Ok(None)`: No live driver with that id
    pub async fn update(&self, param: UpdateDriverParam) -> Result<Option<Driver>, AppError> {
        let result = entity::prelude::Driver::update_many()
            .set(entity::driver::ActiveModel {
                name: ActiveValue::Set(param.attributes.name),
                date_of_birth: ActiveValue::Set(param.attributes.date_of_birth),
                cell_phone: ActiveValue::Set(param.contact.cell_phone),
                email: ActiveValue::Set(param.contact.email),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::driver::Column::Id.eq(param.id))
            .filter(entity::driver::Column::DeletedAt.eq(soft_delete::sentinel()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(param.id, false).await
    }

    /// Soft-deletes a live driver. Its vehicle links are left as they are.
    ///
    /// # Returns
    /// - `Ok(true)`: Driver marked as deleted
    /// - `Ok(false)`: Nothing to delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let now = Utc::now();
        let result = entity::prelude::Driver::update_many()
            .col_expr(entity::driver::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::driver::Column::UpdatedAt, Expr::value(now))
            .filter(entity::driver::Column::Id.eq(id))
            .filter(entity::driver::Column::DeletedAt.eq(soft_delete::sentinel()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn assemble_one(
        &self,
        entity: Option<entity::driver::Model>,
        eager: bool,
    ) -> Result<Option<Driver>, AppError> {
        let Some(entity) = entity else {
            return Ok(None);
        };

        Ok(self.assemble(vec![entity], eager).await?.pop())
    }

    /// Maps driver rows to drivers, loading relations first when `eager` is set.
    async fn assemble(
        &self,
        entities: Vec<entity::driver::Model>,
        eager: bool,
    ) -> Result<Vec<Driver>, AppError> {
        let records = if eager {
            self.load_relations(entities).await?
        } else {
            entities.into_iter().map(DriverRecord::shallow).collect()
        };

        Ok(records
            .into_iter()
            .map(Driver::from_entity)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Attaches each driver's address (through its user) and linked vehicles.
    ///
    /// Runs one query per relation for the whole batch. Soft-deleted links,
    /// vehicles, users and addresses are skipped; vehicles are ordered by id.
    async fn load_relations(
        &self,
        drivers: Vec<entity::driver::Model>,
    ) -> Result<Vec<DriverRecord>, DbErr> {
        if drivers.is_empty() {
            return Ok(Vec::new());
        }

        let driver_ids: Vec<i32> = drivers.iter().map(|driver| driver.id).collect();
        let user_ids: Vec<i32> = drivers.iter().map(|driver| driver.user_id).collect();

        let links = entity::prelude::DriverVehicle::find()
            .find_also_related(entity::prelude::Vehicle)
            .filter(entity::driver_vehicle::Column::DriverId.is_in(driver_ids))
            .filter(entity::driver_vehicle::Column::DeletedAt.eq(soft_delete::sentinel()))
            .filter(entity::vehicle::Column::DeletedAt.eq(soft_delete::sentinel()))
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await?;

        let mut vehicles_by_driver: HashMap<i32, Vec<entity::vehicle::Model>> = HashMap::new();
        for (link, vehicle) in links {
            if let Some(vehicle) = vehicle {
                vehicles_by_driver
                    .entry(link.driver_id)
                    .or_default()
                    .push(vehicle);
            }
        }

        let addresses = entity::prelude::Address::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::address::Relation::User.def(),
            )
            .filter(entity::address::Column::UserId.is_in(user_ids))
            .filter(entity::address::Column::DeletedAt.eq(soft_delete::sentinel()))
            .filter(entity::user::Column::DeletedAt.eq(soft_delete::sentinel()))
            .all(self.db)
            .await?;

        let mut address_by_user: HashMap<i32, entity::address::Model> = addresses
            .into_iter()
            .map(|address| (address.user_id, address))
            .collect();

        Ok(drivers
            .into_iter()
            .map(|driver| DriverRecord {
                address: address_by_user.remove(&driver.user_id),
                vehicles: vehicles_by_driver.remove(&driver.id).unwrap_or_default(),
                driver,
            })
            .collect())
    }
}
