//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod enumeration;
pub mod mapping;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError,
        enumeration::{EnumDecodeError, EnumTransitionError},
        mapping::RowDecodeError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. The variants keep "bad input" (`InvalidEnum`,
/// `Transition`), "record not found" (`NotFound`) and "storage failure"
/// (`DbErr`, `RowDecode`) apart so callers can tell them from one another.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations become 409 Conflict; anything else is a
    /// 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A stored row could not be mapped into a domain record.
    ///
    /// Results in 500 Internal Server Error; the offending entity, field and
    /// value are logged.
    #[error(transparent)]
    RowDecode(#[from] RowDecodeError),

    /// Request input named an enumeration value that does not exist.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    InvalidEnum(#[from] EnumDecodeError),

    /// Request asked for an enumeration change that is not allowed.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    Transition(#[from] EnumTransitionError),

    /// Linking a driver to a vehicle failed because one of them does not exist.
    ///
    /// Results in 422 Unprocessable Entity.
    #[error("driver [{driver_id}] or vehicle [{vehicle_id}] does not exist")]
    ReferentialIntegrity { driver_id: i32, vehicle_id: i32 },

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// The record changed between reading it and writing to it.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),
}

/// Converts application errors into HTTP responses.
///
/// Client errors carry their message in the body. Internal errors are logged with
/// full details but return a generic message to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `InvalidEnum` and `Transition`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict` and unique constraint violations
/// - 422 Unprocessable Entity - For `ReferentialIntegrity` and foreign key violations
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            err @ (Self::InvalidEnum(_) | Self::Transition(_)) => {
                error_response(StatusCode::BAD_REQUEST, err.to_string())
            }
            err @ Self::ReferentialIntegrity { .. } => {
                error_response(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!(detail = %detail, "unique constraint violated");
                    error_response(
                        StatusCode::CONFLICT,
                        "A record with the same unique value already exists".to_string(),
                    )
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::debug!(detail = %detail, "foreign key constraint violated");
                    error_response(
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "A referenced record does not exist".to_string(),
                    )
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
