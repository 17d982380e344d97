//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models, so enumeration decoding happens exactly once at this boundary. Every read
//! skips soft-deleted rows and lists are ordered by primary key.

pub mod address;
pub mod driver;
pub mod driver_vehicle;
pub mod query;
pub mod user;
pub mod vehicle;
