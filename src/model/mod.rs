//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON shapes of requests and responses. Enumeration fields
//! travel as their display strings and are validated when converted into server params.

pub mod address;
pub mod api;
pub mod driver;
pub mod driver_vehicle;
pub mod user;
pub mod vehicle;
