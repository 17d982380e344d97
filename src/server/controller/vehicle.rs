use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        driver::DriverDto,
        vehicle::{ChangeLicensingStatusDto, UpdateVehicleDto, UpsertVehicleDto, VehicleDto},
    },
    server::{
        controller::param::{PaginationParam, VehicleListParam},
        error::AppError,
        model::{
            enumeration::{Enumeration, LicensingStatus},
            vehicle::{UpdateVehicleParam, UpsertVehicleParam},
        },
        service::vehicle::VehicleService,
        state::AppState,
    },
};

pub static VEHICLE_TAG: &str = "vehicle";

#[utoipa::path(
    post,
    path = "/v1/vehicles",
    tag = VEHICLE_TAG,
    request_body = UpsertVehicleDto,
    responses(
        (status = 201, description = "Successfully stored vehicle", body = VehicleDto),
        (status = 400, description = "Unknown licensing status", body = ErrorDto),
        (status = 409, description = "Plate or renavam already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(payload): Json<UpsertVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let vehicle = VehicleService::new(&state.db)
        .create(UpsertVehicleParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(vehicle.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v1/vehicles",
    tag = VEHICLE_TAG,
    params(VehicleListParam),
    responses(
        (status = 200, description = "Vehicles matching the filters", body = Vec<VehicleDto>),
        (status = 400, description = "Unknown licensing status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(params): Query<VehicleListParam>,
) -> Result<impl IntoResponse, AppError> {
    let vehicles = VehicleService::new(&state.db)
        .list(params.into_filter()?)
        .await?;

    let dto: Vec<VehicleDto> = vehicles
        .into_iter()
        .map(|vehicle| vehicle.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/v1/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let vehicle = VehicleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v1/vehicles/plate/{plate}",
    tag = VEHICLE_TAG,
    params(
        ("plate" = String, Path, description = "License plate")
    ),
    responses(
        (status = 200, description = "Successfully retrieved vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle_by_plate(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let vehicle = VehicleService::new(&state.db).get_by_plate(&plate).await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v1/vehicles/renavam/{renavam}",
    tag = VEHICLE_TAG,
    params(
        ("renavam" = String, Path, description = "National vehicle registry number")
    ),
    responses(
        (status = 200, description = "Successfully retrieved vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle_by_renavam(
    State(state): State<AppState>,
    Path(renavam): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let vehicle = VehicleService::new(&state.db)
        .get_by_renavam(&renavam)
        .await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v1/vehicles/{id}/drivers",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "Drivers assigned to the vehicle", body = Vec<DriverDto>),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_vehicle_drivers(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let drivers = VehicleService::new(&state.db)
        .list_drivers(id, pagination.into())
        .await?;

    let dto: Vec<DriverDto> = drivers.into_iter().map(|driver| driver.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/v1/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    request_body = UpdateVehicleDto,
    responses(
        (status = 200, description = "Successfully updated vehicle", body = VehicleDto),
        (status = 400, description = "Unknown licensing status", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let vehicle = VehicleService::new(&state.db)
        .update(UpdateVehicleParam::from_dto(id, payload)?)
        .await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/v1/vehicles/{id}/licensing-status",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    request_body = ChangeLicensingStatusDto,
    responses(
        (status = 200, description = "Successfully changed licensing status", body = VehicleDto),
        (status = 400, description = "Unknown, undefined or unchanged status", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 409, description = "The licensing status changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_vehicle_licensing_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ChangeLicensingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let proposed = LicensingStatus::lookup_proposed(&payload.licensing_status)?;

    let vehicle = VehicleService::new(&state.db)
        .change_licensing_status(id, proposed)
        .await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/v1/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted vehicle"),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    VehicleService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
