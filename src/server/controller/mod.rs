//! HTTP request handlers.
//!
//! Controllers convert DTOs into params, call the matching service and turn domain
//! models back into DTOs. Every handler is annotated with `#[utoipa::path]` so the
//! router can assemble the OpenAPI document from them.

pub mod address;
pub mod driver;
pub mod driver_vehicle;
pub mod health;
pub mod param;
pub mod user;
pub mod vehicle;
