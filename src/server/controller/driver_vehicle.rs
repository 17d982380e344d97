use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        driver_vehicle::{CreateDriverVehicleDto, DriverVehicleDto},
    },
    server::{error::AppError, service::driver_vehicle::DriverVehicleService, state::AppState},
};

pub static DRIVER_VEHICLE_TAG: &str = "driver_vehicle";

/// Assigns a vehicle to a driver.
///
/// Both must exist; the check and the insert share one transaction. Re-linking a
/// previously removed pair revives it.
#[utoipa::path(
    post,
    path = "/v1/driver-vehicles",
    tag = DRIVER_VEHICLE_TAG,
    request_body = CreateDriverVehicleDto,
    responses(
        (status = 201, description = "Successfully linked driver and vehicle", body = DriverVehicleDto),
        (status = 422, description = "Driver or vehicle does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_driver_vehicle(
    State(state): State<AppState>,
    Json(payload): Json<CreateDriverVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let link = DriverVehicleService::new(&state.db)
        .create(payload.driver_id, payload.vehicle_id)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v1/driver-vehicles/{driver_id}/{vehicle_id}",
    tag = DRIVER_VEHICLE_TAG,
    params(
        ("driver_id" = i32, Path, description = "Driver ID"),
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved link", body = DriverVehicleDto),
        (status = 404, description = "Driver is not linked to the vehicle", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_driver_vehicle(
    State(state): State<AppState>,
    Path((driver_id, vehicle_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let link = DriverVehicleService::new(&state.db)
        .get(driver_id, vehicle_id)
        .await?;

    Ok((StatusCode::OK, Json(link.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/v1/driver-vehicles/{driver_id}/{vehicle_id}",
    tag = DRIVER_VEHICLE_TAG,
    params(
        ("driver_id" = i32, Path, description = "Driver ID"),
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 204, description = "Successfully removed link"),
        (status = 404, description = "Driver is not linked to the vehicle", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_driver_vehicle(
    State(state): State<AppState>,
    Path((driver_id, vehicle_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    DriverVehicleService::new(&state.db)
        .delete(driver_id, vehicle_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
