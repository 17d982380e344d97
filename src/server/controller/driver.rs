use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        driver::{DriverDto, UpdateDriverDto, UpsertDriverDto},
        vehicle::VehicleDto,
    },
    server::{
        controller::param::{EagerParam, PaginationParam},
        error::AppError,
        model::driver::{UpdateDriverParam, UpsertDriverParam},
        service::driver::DriverService,
        state::AppState,
    },
};

pub static DRIVER_TAG: &str = "driver";

#[utoipa::path(
    post,
    path = "/v1/drivers",
    tag = DRIVER_TAG,
    request_body = UpsertDriverDto,
    responses(
        (status = 201, description = "Successfully stored driver", body = DriverDto),
        (status = 409, description = "RG, CPF, license or user already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_driver(
    State(state): State<AppState>,
    Json(payload): Json<UpsertDriverDto>,
) -> Result<impl IntoResponse, AppError> {
    let driver = DriverService::new(&state.db)
        .create(UpsertDriverParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(driver.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v1/drivers",
    tag = DRIVER_TAG,
    params(PaginationParam, EagerParam),
    responses(
        (status = 200, description = "Successfully listed drivers", body = Vec<DriverDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_drivers(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParam>,
    Query(eager): Query<EagerParam>,
) -> Result<impl IntoResponse, AppError> {
    let drivers = DriverService::new(&state.db)
        .list(pagination.into(), eager.eager)
        .await?;

    let dto: Vec<DriverDto> = drivers.into_iter().map(|driver| driver.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/v1/drivers/{id}",
    tag = DRIVER_TAG,
    params(
        ("id" = i32, Path, description = "Driver ID"),
        EagerParam
    ),
    responses(
        (status = 200, description = "Successfully retrieved driver", body = DriverDto),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(eager): Query<EagerParam>,
) -> Result<impl IntoResponse, AppError> {
    let driver = DriverService::new(&state.db)
        .get_by_id(id, eager.eager)
        .await?;

    Ok((StatusCode::OK, Json(driver.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v1/drivers/user/{user_id}",
    tag = DRIVER_TAG,
    params(
        ("user_id" = i32, Path, description = "Owning user ID"),
        EagerParam
    ),
    responses(
        (status = 200, description = "Successfully retrieved driver", body = DriverDto),
        (status = 404, description = "User has no driver", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_driver_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(eager): Query<EagerParam>,
) -> Result<impl IntoResponse, AppError> {
    let driver = DriverService::new(&state.db)
        .get_by_user_id(user_id, eager.eager)
        .await?;

    Ok((StatusCode::OK, Json(driver.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v1/drivers/{id}/vehicles",
    tag = DRIVER_TAG,
    params(
        ("id" = i32, Path, description = "Driver ID"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "Vehicles assigned to the driver", body = Vec<VehicleDto>),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_driver_vehicles(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let vehicles = DriverService::new(&state.db)
        .list_vehicles(id, pagination.into())
        .await?;

    let dto: Vec<VehicleDto> = vehicles
        .into_iter()
        .map(|vehicle| vehicle.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/v1/drivers/{id}",
    tag = DRIVER_TAG,
    params(
        ("id" = i32, Path, description = "Driver ID")
    ),
    request_body = UpdateDriverDto,
    responses(
        (status = 200, description = "Successfully updated driver", body = DriverDto),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDriverDto>,
) -> Result<impl IntoResponse, AppError> {
    let driver = DriverService::new(&state.db)
        .update(UpdateDriverParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(driver.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/v1/drivers/{id}",
    tag = DRIVER_TAG,
    params(
        ("id" = i32, Path, description = "Driver ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted driver"),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    DriverService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
