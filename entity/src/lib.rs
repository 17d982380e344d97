//! SeaORM entity definitions for the fleet operations schema.
//!
//! Every table carries `created_at`, `updated_at` and `deleted_at` columns. Rows are
//! never physically removed: a row is live while its `deleted_at` equals
//! [`soft_delete::sentinel`].

pub mod prelude;

pub mod address;
pub mod driver;
pub mod driver_vehicle;
pub mod soft_delete;
pub mod user;
pub mod vehicle;
