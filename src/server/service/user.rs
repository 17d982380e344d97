//! User service for business logic.
//!
//! This module provides the `UserService` for managing user accounts and their roles.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        enumeration::{Enumeration, Role},
        user::{UpdateUserParam, UpsertUserParam, User},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user, or overwrites the user whose id is given.
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user
    /// - `Err(AppError::DbErr)` - Database error, e.g. the username is taken
    pub async fn create(&self, param: UpsertUserParam) -> Result<User, AppError> {
        tracing::debug!(id = ?param.id, username = %param.username, "upserting user");

        let user = UserRepository::new(self.db).upsert(param).await?;

        tracing::info!(id = user.id, role = %user.role, "user stored");
        Ok(user)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No live user with that id
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        tracing::debug!(id, "getting user by id");

        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Retrieves a user by username.
    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        tracing::debug!(username, "getting user by username");

        UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", username)))
    }

    /// Lists every live user holding a role.
    pub async fn list_by_role(&self, role: Role) -> Result<Vec<User>, AppError> {
        tracing::debug!(role = %role, "listing users by role");

        UserRepository::new(self.db).list_by_role(role).await
    }

    pub async fn update(&self, param: UpdateUserParam) -> Result<User, AppError> {
        tracing::debug!(id = param.id, "updating user");
        let id = param.id;

        let user = UserRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        tracing::info!(id, "user updated");
        Ok(user)
    }

    /// Changes a user's role after validating the transition.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new role
    /// - `Err(AppError::NotFound)` - No live user with that id
    /// - `Err(AppError::Transition)` - The role is undefined or unchanged
    /// - `Err(AppError::Conflict)` - The role changed after it was read
    pub async fn change_role(&self, id: i32, proposed: Role) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);
        let current = self.get_by_id(id).await?;

        let role = current.role.transition(proposed)?;
        if !repo.set_role(id, current.role, role).await? {
            // Gone entirely yields NotFound; still present means another write won.
            self.get_by_id(id).await?;
            return Err(AppError::Conflict(format!(
                "User {} role changed concurrently",
                id
            )));
        }

        tracing::info!(id, from = %current.role, to = %role, "user role changed");
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::debug!(id, "deleting user");

        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        tracing::info!(id, "user deleted");
        Ok(())
    }
}
