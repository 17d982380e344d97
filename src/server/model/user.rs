//! Domain models for user accounts.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{UpdateUserDto, UpsertUserDto, UserDto},
    server::{
        error::{enumeration::EnumDecodeError, mapping::RowDecodeError},
        model::enumeration::{Enumeration, Role},
    },
};

/// User account with its role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub hashed_password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(RowDecodeError)` - The stored role matches no role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, RowDecodeError> {
        let role = Role::lookup(&entity.role)
            .map_err(|err| RowDecodeError::new("user", "role", err))?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            hashed_password: entity.hashed_password,
            role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }

    pub fn into_entity(self) -> entity::user::Model {
        entity::user::Model {
            id: self.id,
            username: self.username,
            hashed_password: self.hashed_password,
            role: self.role.display_name().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            role: self.role.display_name().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for inserting or replacing a user.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Existing id to overwrite, or `None` to insert a new row.
    pub id: Option<i32>,
    pub username: String,
    pub hashed_password: String,
    pub role: Role,
}

impl UpsertUserParam {
    pub fn from_dto(dto: UpsertUserDto) -> Result<Self, EnumDecodeError> {
        Ok(Self {
            id: dto.id,
            username: dto.username,
            hashed_password: dto.hashed_password,
            role: Role::lookup(&dto.role)?,
        })
    }

    /// Builds the live user this upsert will store, stamped with `now`.
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: self.id.unwrap_or_default(),
            username: self.username,
            hashed_password: self.hashed_password,
            role: self.role,
            created_at: now,
            updated_at: now,
            deleted_at: entity::soft_delete::sentinel(),
        }
    }
}

/// Parameters for a partial update of a user.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub id: i32,
    pub username: String,
    pub hashed_password: String,
    pub role: Role,
}

impl UpdateUserParam {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Result<Self, EnumDecodeError> {
        Ok(Self {
            id,
            username: dto.username,
            hashed_password: dto.hashed_password,
            role: Role::lookup(&dto.role)?,
        })
    }
}
