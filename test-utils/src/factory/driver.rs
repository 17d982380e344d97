//! Driver factory for creating test driver entities.

use crate::{factory::helpers::next_id, fixture};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drivers.
///
/// RG, CPF and driver license default to values derived from `next_id()` so
/// several drivers can coexist under their unique constraints.
pub struct DriverFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    rg: String,
    cpf: String,
    driver_license: String,
}

impl<'a> DriverFactory<'a> {
    /// Creates a new DriverFactory for the given user.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of an existing user
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Driver {}", id),
            rg: format!("RG-{:09}", id),
            cpf: format!("{:011}", id),
            driver_license: format!("CNH-{:011}", id),
        }
    }

    /// Sets the driver name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the CPF.
    pub fn cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = cpf.into();
        self
    }

    /// Builds and inserts the driver entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::driver::Model)` - Created driver entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::driver::Model, DbErr> {
        let now = Utc::now();
        entity::driver::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            date_of_birth: ActiveValue::Set(fixture::driver::date_of_birth()),
            rg: ActiveValue::Set(self.rg),
            cpf: ActiveValue::Set(self.cpf),
            driver_license: ActiveValue::Set(self.driver_license),
            cell_phone: ActiveValue::Set(fixture::driver::DEFAULT_CELL_PHONE.to_string()),
            email: ActiveValue::Set(fixture::driver::DEFAULT_EMAIL.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(entity::soft_delete::sentinel()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a driver with default values for the given user.
pub async fn create_driver(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::driver::Model, DbErr> {
    DriverFactory::new(db, user_id).build().await
}
