//! Domain models for user addresses.

use chrono::{DateTime, Utc};

use crate::{
    model::address::{AddressDto, UpdateAddressDto, UpsertAddressDto},
    server::{
        error::{enumeration::EnumDecodeError, mapping::RowDecodeError},
        model::enumeration::{BrazilianState, Enumeration},
    },
};

/// Postal address of a user. A user has at most one.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: i32,
    pub user_id: i32,
    pub locality: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: BrazilianState,
    pub cep: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

impl Address {
    /// Converts an entity model to an address domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Address)` - The converted address
    /// - `Err(RowDecodeError)` - The stored state matches no Brazilian state
    pub fn from_entity(entity: entity::address::Model) -> Result<Self, RowDecodeError> {
        let state = BrazilianState::lookup(&entity.state)
            .map_err(|err| RowDecodeError::new("address", "state", err))?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            locality: entity.locality,
            number: entity.number,
            complement: entity.complement,
            neighborhood: entity.neighborhood,
            city: entity.city,
            state,
            cep: entity.cep,
            country: entity.country,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }

    /// Converts the address back to its persisted row. Never fails.
    pub fn into_entity(self) -> entity::address::Model {
        entity::address::Model {
            id: self.id,
            user_id: self.user_id,
            locality: self.locality,
            number: self.number,
            complement: self.complement,
            neighborhood: self.neighborhood,
            city: self.city,
            state: self.state.display_name().to_string(),
            cep: self.cep,
            country: self.country,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }

    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            id: self.id,
            user_id: self.user_id,
            locality: self.locality,
            number: self.number,
            complement: self.complement,
            neighborhood: self.neighborhood,
            city: self.city,
            state: self.state.display_name().to_string(),
            state_abbreviation: self.state.abbreviation().map(str::to_string),
            cep: self.cep,
            country: self.country,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for inserting or replacing an address.
#[derive(Debug, Clone)]
pub struct UpsertAddressParam {
    /// Existing id to overwrite, or `None` to insert a new row.
    pub id: Option<i32>,
    pub user_id: i32,
    pub locality: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: BrazilianState,
    pub cep: String,
    pub country: String,
}

impl UpsertAddressParam {
    /// Validates the state name of the request body.
    pub fn from_dto(dto: UpsertAddressDto) -> Result<Self, EnumDecodeError> {
        Ok(Self {
            id: dto.id,
            user_id: dto.user_id,
            locality: dto.locality,
            number: dto.number,
            complement: dto.complement,
            neighborhood: dto.neighborhood,
            city: dto.city,
            state: BrazilianState::lookup(&dto.state)?,
            cep: dto.cep,
            country: dto.country,
        })
    }

    /// Builds the live address this upsert will store, stamped with `now`.
    ///
    /// A missing id becomes `0`; the repository leaves it unset so storage assigns one.
    pub fn into_address(self, now: DateTime<Utc>) -> Address {
        Address {
            id: self.id.unwrap_or_default(),
            user_id: self.user_id,
            locality: self.locality,
            number: self.number,
            complement: self.complement,
            neighborhood: self.neighborhood,
            city: self.city,
            state: self.state,
            cep: self.cep,
            country: self.country,
            created_at: now,
            updated_at: now,
            deleted_at: entity::soft_delete::sentinel(),
        }
    }
}

/// Parameters for a partial update. `user_id` is not updatable.
#[derive(Debug, Clone)]
pub struct UpdateAddressParam {
    pub id: i32,
    pub locality: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: BrazilianState,
    pub cep: String,
    pub country: String,
}

impl UpdateAddressParam {
    pub fn from_dto(id: i32, dto: UpdateAddressDto) -> Result<Self, EnumDecodeError> {
        Ok(Self {
            id,
            locality: dto.locality,
            number: dto.number,
            complement: dto.complement,
            neighborhood: dto.neighborhood,
            city: dto.city,
            state: BrazilianState::lookup(&dto.state)?,
            cep: dto.cep,
            country: dto.country,
        })
    }
}
