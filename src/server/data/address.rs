use chrono::Utc;
use entity::soft_delete;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::{
    error::AppError,
    model::{
        address::{Address, UpdateAddressParam, UpsertAddressParam},
        enumeration::{BrazilianState, Enumeration},
    },
};

pub struct AddressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an address, or replaces the address with the same id.
    ///
    /// # Returns
    /// - `Ok(Address)`: The stored address
    /// - `Err(AppError)`: Database error, e.g. the user already has an address
    pub async fn upsert(&self, param: UpsertAddressParam) -> Result<Address, AppError> {
        let assign_id = param.id.is_some();
        let mut model = param
            .into_address(Utc::now())
            .into_entity()
            .into_active_model()
            .reset_all();
        if !assign_id {
            model.id = ActiveValue::NotSet;
        }

        let entity = entity::prelude::Address::insert(model)
            .on_conflict(
                OnConflict::column(entity::address::Column::Id)
                    .update_columns([
                        entity::address::Column::UserId,
                        entity::address::Column::Locality,
                        entity::address::Column::Number,
                        entity::address::Column::Complement,
                        entity::address::Column::Neighborhood,
                        entity::address::Column::City,
                        entity::address::Column::State,
                        entity::address::Column::Cep,
                        entity::address::Column::Country,
                        entity::address::Column::UpdatedAt,
                        entity::address::Column::DeletedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(Address::from_entity(entity)?)
    }

    /// Finds a live address by id.
    ///
    /// # Returns
    /// - `Ok(Some(Address))`: Address found
    /// - `Ok(None)`: No live address with that id
    /// - `Err(AppError)`: Database error or a stored state that does not decode
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Address>, AppError> {
        let entity = entity::prelude::Address::find_by_id(id)
            .filter(entity::address::Column::DeletedAt.eq(soft_delete::sentinel()))
            .one(self.db)
            .await?;

        Ok(entity.map(Address::from_entity).transpose()?)
    }

    /// Finds the live address owned by a user.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Address>, AppError> {
        let entity = entity::prelude::Address::find()
            .filter(entity::address::Column::UserId.eq(user_id))
            .filter(entity::address::Column::DeletedAt.eq(soft_delete::sentinel()))
            .one(self.db)
            .await?;

        Ok(entity.map(Address::from_entity).transpose()?)
    }

    /// Updates every column of a live address except its owner.
    ///
    /// # Returns
    /// - `Ok(Some(Address))`: The updated address
    /// - `Ok(None)`: No live address with that id
    pub async fn update(&self, param: UpdateAddressParam) -> Result<Option<Address>, AppError> {
        let result = entity::prelude::Address::update_many()
            .set(entity::address::ActiveModel {
                locality: ActiveValue::Set(param.locality),
                number: ActiveValue::Set(param.number),
                complement: ActiveValue::Set(param.complement),
                neighborhood: ActiveValue::Set(param.neighborhood),
                city: ActiveValue::Set(param.city),
                state: ActiveValue::Set(param.state.display_name().to_string()),
                cep: ActiveValue::Set(param.cep),
                country: ActiveValue::Set(param.country),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::address::Column::Id.eq(param.id))
            .filter(entity::address::Column::DeletedAt.eq(soft_delete::sentinel()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(param.id).await
    }

    /// Replaces `current` with `state`. Callers validate the transition first.
    ///
    /// Returns `Ok(false)` when no live address with that id still holds `current`.
    pub async fn set_state(
        &self,
        id: i32,
        current: BrazilianState,
        state: BrazilianState,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Address::update_many()
            .col_expr(
                entity::address::Column::State,
                Expr::value(state.display_name()),
            )
            .col_expr(entity::address::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::address::Column::Id.eq(id))
            .filter(entity::address::Column::State.eq(current.display_name()))
            .filter(entity::address::Column::DeletedAt.eq(soft_delete::sentinel()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Soft-deletes a live address.
    ///
    /// # Returns
    /// - `Ok(true)`: Address marked as deleted
    /// - `Ok(false)`: Nothing to delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let now = Utc::now();
        let result = entity::prelude::Address::update_many()
            .col_expr(entity::address::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::address::Column::UpdatedAt, Expr::value(now))
            .filter(entity::address::Column::Id.eq(id))
            .filter(entity::address::Column::DeletedAt.eq(soft_delete::sentinel()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
