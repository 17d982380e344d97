//! Address factory for creating test address entities.

use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a user's address with customizable fields.
pub struct AddressFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    city: String,
    state: String,
}

impl<'a> AddressFactory<'a> {
    /// Creates a new AddressFactory for the given user using the fixture defaults
    /// (São Paulo, state `"SÃO PAULO"`).
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of an existing user
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            city: fixture::address::DEFAULT_CITY.to_string(),
            state: fixture::address::DEFAULT_STATE.to_string(),
        }
    }

    /// Sets the city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the stored state string, valid or not.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Builds and inserts the address entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::address::Model)` - Created address entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::address::Model, DbErr> {
        let now = Utc::now();
        entity::address::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            locality: ActiveValue::Set(fixture::address::DEFAULT_LOCALITY.to_string()),
            number: ActiveValue::Set(fixture::address::DEFAULT_NUMBER.to_string()),
            complement: ActiveValue::Set(fixture::address::DEFAULT_COMPLEMENT.to_string()),
            neighborhood: ActiveValue::Set(fixture::address::DEFAULT_NEIGHBORHOOD.to_string()),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            cep: ActiveValue::Set(fixture::address::DEFAULT_CEP.to_string()),
            country: ActiveValue::Set(fixture::address::DEFAULT_COUNTRY.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(entity::soft_delete::sentinel()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an address with default values for the given user.
pub async fn create_address(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::address::Model, DbErr> {
    AddressFactory::new(db, user_id).build().await
}
