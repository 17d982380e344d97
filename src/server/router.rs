use std::time::Duration;

use axum::{http::StatusCode, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        address::{self, ADDRESS_TAG},
        driver::{self, DRIVER_TAG},
        driver_vehicle::{self, DRIVER_VEHICLE_TAG},
        health::{self, HEALTH_TAG},
        user::{self, USER_TAG},
        vehicle::{self, VEHICLE_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleet operations API",
        description = "Users, drivers, vehicles, addresses and driver/vehicle assignments."
    ),
    tags(
        (name = HEALTH_TAG, description = "Service health"),
        (name = USER_TAG, description = "User accounts and roles"),
        (name = ADDRESS_TAG, description = "User addresses"),
        (name = DRIVER_TAG, description = "Drivers and their relations"),
        (name = VEHICLE_TAG, description = "Vehicles and licensing"),
        (name = DRIVER_VEHICLE_TAG, description = "Driver/vehicle assignments"),
    )
)]
pub struct ApiDoc;

/// Builds the application router with OpenAPI documentation.
///
/// Registers every endpoint, serves the generated document at `/api-docs/openapi.json`
/// with Swagger UI at `/swagger-ui`, and wraps all routes in request tracing and a
/// timeout of `request_timeout`.
pub fn router(request_timeout: Duration) -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(user::create_user))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(user::get_user_by_username))
        .routes(routes!(user::list_users_by_role))
        .routes(routes!(user::change_user_role))
        .routes(routes!(address::create_address))
        .routes(routes!(
            address::get_address,
            address::update_address,
            address::delete_address
        ))
        .routes(routes!(address::get_address_by_user))
        .routes(routes!(address::change_address_state))
        .routes(routes!(driver::create_driver, driver::list_drivers))
        .routes(routes!(
            driver::get_driver,
            driver::update_driver,
            driver::delete_driver
        ))
        .routes(routes!(driver::get_driver_by_user))
        .routes(routes!(driver::list_driver_vehicles))
        .routes(routes!(vehicle::create_vehicle, vehicle::list_vehicles))
        .routes(routes!(
            vehicle::get_vehicle,
            vehicle::update_vehicle,
            vehicle::delete_vehicle
        ))
        .routes(routes!(vehicle::get_vehicle_by_plate))
        .routes(routes!(vehicle::get_vehicle_by_renavam))
        .routes(routes!(vehicle::list_vehicle_drivers))
        .routes(routes!(vehicle::change_vehicle_licensing_status))
        .routes(routes!(driver_vehicle::create_driver_vehicle))
        .routes(routes!(
            driver_vehicle::get_driver_vehicle,
            driver_vehicle::delete_driver_vehicle
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
