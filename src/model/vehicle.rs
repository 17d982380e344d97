use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub year_of_manufacture: i32,
    pub plate: String,
    pub renavam: String,
    pub licensing_expiry_date: NaiveDate,
    /// One of `REGULAR`, `LATE`, `BLOCKED`, `SEIZED`, `STOLEN`.
    pub licensing_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /v1/vehicles`.
///
/// Passing an existing `id` overwrites that vehicle.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpsertVehicleDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub brand: String,
    pub model: String,
    pub year_of_manufacture: i32,
    pub plate: String,
    pub renavam: String,
    pub licensing_expiry_date: NaiveDate,
    pub licensing_status: String,
}

/// Body of `PUT /v1/vehicles/{id}`. Plate and renavam are immutable.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateVehicleDto {
    pub brand: String,
    pub model: String,
    pub year_of_manufacture: i32,
    pub licensing_expiry_date: NaiveDate,
    pub licensing_status: String,
}

/// Body of `PATCH /v1/vehicles/{id}/licensing-status`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ChangeLicensingStatusDto {
    pub licensing_status: String,
}
