use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct DriverVehicleDto {
    pub driver_id: i32,
    pub vehicle_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /v1/driver-vehicles`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateDriverVehicleDto {
    pub driver_id: i32,
    pub vehicle_id: i32,
}
