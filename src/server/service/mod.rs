//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Not-found policy**: Every point lookup that finds nothing becomes `AppError::NotFound`
//! - **Guarded transitions**: Enumeration changes are validated before being written
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Logging**: Structured `tracing` events; repositories and mappings stay silent

pub mod address;
pub mod driver;
pub mod driver_vehicle;
pub mod user;
pub mod vehicle;
