use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{address::AddressDto, vehicle::VehicleDto};

/// Driver as returned by the API.
///
/// `address` and `vehicles` are only populated on eager reads.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct DriverDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub rg: String,
    pub cpf: String,
    pub driver_license: String,
    pub cell_phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDto>,
    pub vehicles: Vec<VehicleDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /v1/drivers`.
///
/// Passing an existing `id` overwrites that driver.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpsertDriverDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub user_id: i32,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub rg: String,
    pub cpf: String,
    pub driver_license: String,
    pub cell_phone: String,
    pub email: String,
}

/// Body of `PUT /v1/drivers/{id}`. Legal documents and the owning user are immutable.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateDriverDto {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub cell_phone: String,
    pub email: String,
}
