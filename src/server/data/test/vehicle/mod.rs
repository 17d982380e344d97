use crate::server::{
    data::vehicle::VehicleRepository,
    error::AppError,
    model::{
        enumeration::LicensingStatus,
        pagination::Pagination,
        vehicle::{
            Licensing, UpdateVehicleParam, UpsertVehicleParam, VehicleAttributes, VehicleFilter,
            VehicleLegalInformation,
        },
    },
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory, fixture};

mod find_by_id;
mod upsert;

fn upsert_param(id: Option<i32>, plate: &str, renavam: &str) -> UpsertVehicleParam {
    UpsertVehicleParam {
        id,
        attributes: VehicleAttributes {
            brand: fixture::vehicle::DEFAULT_BRAND.to_string(),
            model: fixture::vehicle::DEFAULT_MODEL.to_string(),
            year_of_manufacture: fixture::vehicle::DEFAULT_YEAR_OF_MANUFACTURE,
        },
        legal_information: VehicleLegalInformation {
            plate: plate.to_string(),
            renavam: renavam.to_string(),
            licensing: Licensing {
                expiry_date: fixture::vehicle::licensing_expiry_date(),
                status: LicensingStatus::Regular,
            },
        },
    }
}
