use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        address::{AddressDto, ChangeStateDto, UpdateAddressDto, UpsertAddressDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        model::{
            address::{UpdateAddressParam, UpsertAddressParam},
            enumeration::{BrazilianState, Enumeration},
        },
        service::address::AddressService,
        state::AppState,
    },
};

pub static ADDRESS_TAG: &str = "address";

#[utoipa::path(
    post,
    path = "/v1/addresses",
    tag = ADDRESS_TAG,
    request_body = UpsertAddressDto,
    responses(
        (status = 201, description = "Successfully stored address", body = AddressDto),
        (status = 400, description = "Unknown state", body = ErrorDto),
        (status = 409, description = "User already has an address", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_address(
    State(state): State<AppState>,
    Json(payload): Json<UpsertAddressDto>,
) -> Result<impl IntoResponse, AppError> {
    let address = AddressService::new(&state.db)
        .create(UpsertAddressParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(address.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v1/addresses/{id}",
    tag = ADDRESS_TAG,
    params(
        ("id" = i32, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved address", body = AddressDto),
        (status = 404, description = "Address not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let address = AddressService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(address.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v1/addresses/user/{user_id}",
    tag = ADDRESS_TAG,
    params(
        ("user_id" = i32, Path, description = "Owning user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved address", body = AddressDto),
        (status = 404, description = "User has no address", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_address_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let address = AddressService::new(&state.db)
        .get_by_user_id(user_id)
        .await?;

    Ok((StatusCode::OK, Json(address.into_dto())))
}

#[utoipa::path(
    put,
    path = "/v1/addresses/{id}",
    tag = ADDRESS_TAG,
    params(
        ("id" = i32, Path, description = "Address ID")
    ),
    request_body = UpdateAddressDto,
    responses(
        (status = 200, description = "Successfully updated address", body = AddressDto),
        (status = 400, description = "Unknown state", body = ErrorDto),
        (status = 404, description = "Address not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAddressDto>,
) -> Result<impl IntoResponse, AppError> {
    let address = AddressService::new(&state.db)
        .update(UpdateAddressParam::from_dto(id, payload)?)
        .await?;

    Ok((StatusCode::OK, Json(address.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/v1/addresses/{id}/state",
    tag = ADDRESS_TAG,
    params(
        ("id" = i32, Path, description = "Address ID")
    ),
    request_body = ChangeStateDto,
    responses(
        (status = 200, description = "Successfully changed state", body = AddressDto),
        (status = 400, description = "Unknown, undefined or unchanged state", body = ErrorDto),
        (status = 404, description = "Address not found", body = ErrorDto),
        (status = 409, description = "The state changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_address_state(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ChangeStateDto>,
) -> Result<impl IntoResponse, AppError> {
    let proposed = BrazilianState::lookup_proposed(&payload.state)?;

    let address = AddressService::new(&state.db)
        .change_state(id, proposed)
        .await?;

    Ok((StatusCode::OK, Json(address.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/v1/addresses/{id}",
    tag = ADDRESS_TAG,
    params(
        ("id" = i32, Path, description = "Address ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted address"),
        (status = 404, description = "Address not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AddressService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
