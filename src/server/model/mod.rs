//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary (`from_entity`, which decodes enumerations and can
//! fail) and back (`into_entity`, which is total), and transformed to DTOs at the
//! controller boundary.

pub mod address;
pub mod driver;
pub mod driver_vehicle;
pub mod enumeration;
pub mod pagination;
pub mod user;
pub mod vehicle;
