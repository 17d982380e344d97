use crate::server::{
    data::driver::DriverRepository,
    error::AppError,
    model::{
        driver::{
            Contact, DriverAttributes, DriverLegalInformation, UpdateDriverParam,
            UpsertDriverParam,
        },
        enumeration::{BrazilianState, LicensingStatus},
        pagination::Pagination,
    },
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory, fixture};

mod delete;
mod find_by_id;
mod list;
mod update;
mod upsert;

fn upsert_param(id: Option<i32>, user_id: i32, cpf: &str) -> UpsertDriverParam {
    UpsertDriverParam {
        id,
        user_id,
        attributes: DriverAttributes {
            name: fixture::driver::DEFAULT_NAME.to_string(),
            date_of_birth: fixture::driver::date_of_birth(),
        },
        legal_information: DriverLegalInformation {
            rg: format!("RG-{}", cpf),
            cpf: cpf.to_string(),
            driver_license: format!("CNH-{}", cpf),
        },
        contact: Contact {
            cell_phone: fixture::driver::DEFAULT_CELL_PHONE.to_string(),
            email: fixture::driver::DEFAULT_EMAIL.to_string(),
        },
    }
}
