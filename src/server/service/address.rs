//! Address service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::address::AddressRepository,
    error::AppError,
    model::{
        address::{Address, UpdateAddressParam, UpsertAddressParam},
        enumeration::{BrazilianState, Enumeration},
    },
};

/// Service providing business logic for user addresses.
pub struct AddressService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AddressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an address, or overwrites the address whose id is given.
    pub async fn create(&self, param: UpsertAddressParam) -> Result<Address, AppError> {
        tracing::debug!(id = ?param.id, user_id = param.user_id, "upserting address");

        let address = AddressRepository::new(self.db).upsert(param).await?;

        tracing::info!(id = address.id, user_id = address.user_id, "address stored");
        Ok(address)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Address, AppError> {
        tracing::debug!(id, "getting address by id");

        AddressRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Address {} not found", id)))
    }

    /// Retrieves the address of a user.
    ///
    /// # Returns
    /// - `Ok(Address)` - The user's address
    /// - `Err(AppError::NotFound)` - The user has no live address
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Address, AppError> {
        tracing::debug!(user_id, "getting address by user id");

        AddressRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Address of user {} not found", user_id)))
    }

    pub async fn update(&self, param: UpdateAddressParam) -> Result<Address, AppError> {
        tracing::debug!(id = param.id, "updating address");
        let id = param.id;

        let address = AddressRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Address {} not found", id)))?;

        tracing::info!(id, "address updated");
        Ok(address)
    }

    /// Moves an address to another state after validating the transition.
    ///
    /// # Returns
    /// - `Ok(Address)` - The address with the new state
    /// - `Err(AppError::NotFound)` - No live address with that id
    /// - `Err(AppError::Transition)` - The state is undefined or unchanged
    /// - `Err(AppError::Conflict)` - The state changed after it was read
    pub async fn change_state(&self, id: i32, proposed: BrazilianState) -> Result<Address, AppError> {
        let current = self.get_by_id(id).await?;

        let state = current.state.transition(proposed)?;
        if !AddressRepository::new(self.db)
            .set_state(id, current.state, state)
            .await?
        {
            self.get_by_id(id).await?;
            return Err(AppError::Conflict(format!(
                "Address {} state changed concurrently",
                id
            )));
        }

        tracing::info!(id, from = %current.state, to = %state, "address state changed");
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::debug!(id, "deleting address");

        if !AddressRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Address {} not found", id)));
        }

        tracing::info!(id, "address deleted");
        Ok(())
    }
}
