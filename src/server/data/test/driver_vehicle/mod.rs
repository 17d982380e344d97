use crate::server::{
    data::{
        driver::DriverRepository, driver_vehicle::DriverVehicleRepository,
        vehicle::VehicleRepository,
    },
    error::AppError,
    model::pagination::Pagination,
};
use chrono::{Duration, Utc};
use entity::soft_delete;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find;
mod list_vehicles_by_driver;
