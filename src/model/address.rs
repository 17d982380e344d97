use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AddressDto {
    pub id: i32,
    pub user_id: i32,
    pub locality: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    /// Upper-case state name, e.g. `SÃO PAULO`.
    pub state: String,
    /// Two-letter state code, e.g. `SP`; absent for an undefined state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_abbreviation: Option<String>,
    pub cep: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /v1/addresses`.
///
/// Passing an existing `id` overwrites that address.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpsertAddressDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub user_id: i32,
    pub locality: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub cep: String,
    pub country: String,
}

/// Body of `PUT /v1/addresses/{id}`. The owning user cannot be changed.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateAddressDto {
    pub locality: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub cep: String,
    pub country: String,
}

/// Body of `PATCH /v1/addresses/{id}/state`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ChangeStateDto {
    pub state: String,
}
