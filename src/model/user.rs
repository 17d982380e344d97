use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User as returned by the API. The password hash is never echoed.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    /// One of `ADMINISTRATOR`, `EMPLOYEE`, `DRIVER`.
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /v1/users`.
///
/// Passing an existing `id` overwrites that user.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpsertUserDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub username: String,
    pub hashed_password: String,
    pub role: String,
}

/// Body of `PUT /v1/users/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateUserDto {
    pub username: String,
    pub hashed_password: String,
    pub role: String,
}

/// Body of `PATCH /v1/users/{id}/role`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ChangeRoleDto {
    pub role: String,
}
