use crate::server::{
    data::address::AddressRepository,
    error::AppError,
    model::{
        address::{UpdateAddressParam, UpsertAddressParam},
        enumeration::BrazilianState,
    },
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory, fixture};

mod find_by_id;
mod find_by_user_id;
mod set_state;
mod update;
mod upsert;

fn upsert_param(id: Option<i32>, user_id: i32, state: BrazilianState) -> UpsertAddressParam {
    UpsertAddressParam {
        id,
        user_id,
        locality: fixture::address::DEFAULT_LOCALITY.to_string(),
        number: fixture::address::DEFAULT_NUMBER.to_string(),
        complement: fixture::address::DEFAULT_COMPLEMENT.to_string(),
        neighborhood: fixture::address::DEFAULT_NEIGHBORHOOD.to_string(),
        city: fixture::address::DEFAULT_CITY.to_string(),
        state,
        cep: fixture::address::DEFAULT_CEP.to_string(),
        country: fixture::address::DEFAULT_COUNTRY.to_string(),
    }
}
