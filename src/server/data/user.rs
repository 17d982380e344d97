use chrono::Utc;
use entity::soft_delete;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        enumeration::{Enumeration, Role},
        user::{UpdateUserParam, UpsertUserParam, User},
    },
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user, or replaces the user with the same id.
    ///
    /// When `param.id` is set and the row exists, every mutable column is
    /// overwritten and a soft-deleted row is revived; `created_at` is kept.
    ///
    /// # Returns
    /// - `Ok(User)`: The stored user
    /// - `Err(AppError)`: Database error, e.g. a duplicate username
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let assign_id = param.id.is_some();
        let mut model = param
            .into_user(Utc::now())
            .into_entity()
            .into_active_model()
            .reset_all();
        if !assign_id {
            model.id = ActiveValue::NotSet;
        }

        let entity = entity::prelude::User::insert(model)
            .on_conflict(
                OnConflict::column(entity::user::Column::Id)
                    .update_columns([
                        entity::user::Column::Username,
                        entity::user::Column::HashedPassword,
                        entity::user::Column::Role,
                        entity::user::Column::UpdatedAt,
                        entity::user::Column::DeletedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(User::from_entity(entity)?)
    }

    /// Finds a live user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))`: User found
    /// - `Ok(None)`: No live user with that id
    /// - `Err(AppError)`: Database or decode error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.eq(soft_delete::sentinel()))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity).transpose()?)
    }

    /// Finds a live user by username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .filter(entity::user::Column::DeletedAt.eq(soft_delete::sentinel()))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity).transpose()?)
    }

    /// Lists live users holding `role`, ordered by id.
    pub async fn list_by_role(&self, role: Role) -> Result<Vec<User>, AppError> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.display_name()))
            .filter(entity::user::Column::DeletedAt.eq(soft_delete::sentinel()))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Updates username, password hash and role of a live user.
    ///
    /// # Returns
    /// - `Ok(Some(User))`: The updated user
    /// - `Ok(None)`: No live user with that id
    /// - `Err(AppError)`: Database error
    pub async fn update(&self, param: UpdateUserParam) -> Result<Option<User>, AppError> {
        let result = entity::prelude::User::update_many()
            .set(entity::user::ActiveModel {
                username: ActiveValue::Set(param.username),
                hashed_password: ActiveValue::Set(param.hashed_password),
                role: ActiveValue::Set(param.role.display_name().to_string()),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::user::Column::Id.eq(param.id))
            .filter(entity::user::Column::DeletedAt.eq(soft_delete::sentinel()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(param.id).await
    }

    /// Replaces `current` with `role`. Callers validate the transition first.
    ///
    /// # Returns
    /// - `Ok(true)`: Role written
    /// - `Ok(false)`: No live user with that id still holds `current`
    pub async fn set_role(&self, id: i32, current: Role, role: Role) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Role, Expr::value(role.display_name()))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::Role.eq(current.display_name()))
            .filter(entity::user::Column::DeletedAt.eq(soft_delete::sentinel()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Soft-deletes a live user.
    ///
    /// # Returns
    /// - `Ok(true)`: User marked as deleted
    /// - `Ok(false)`: Nothing to delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let now = Utc::now();
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(now))
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::DeletedAt.eq(soft_delete::sentinel()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
