//! Shared query-string parameters.

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::AppError,
    model::{
        enumeration::{Enumeration, LicensingStatus},
        pagination::Pagination,
        vehicle::VehicleFilter,
    },
};

/// 1-indexed page request; omitting either value returns every row.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// Page number starting at 1 (0 disables pagination)
    #[serde(default)]
    pub page: u64,
    /// Items per page (0 disables pagination)
    #[serde(default)]
    pub page_size: u64,
}

impl From<PaginationParam> for Pagination {
    fn from(param: PaginationParam) -> Self {
        Pagination::new(param.page, param.page_size)
    }
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct EagerParam {
    /// Also load the driver's address and vehicles
    #[serde(default)]
    pub eager: bool,
}

/// Column filters for the vehicle listing. Absent filters match every vehicle.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct VehicleListParam {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year_of_manufacture: Option<i32>,
    pub licensing_expiry_date: Option<NaiveDate>,
    /// Licensing status name, e.g. `REGULAR`
    pub licensing_status: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub page_size: u64,
}

impl VehicleListParam {
    /// # Returns
    /// - `Err(AppError::InvalidEnum)` - `licensing_status` names no status
    pub fn into_filter(self) -> Result<VehicleFilter, AppError> {
        let licensing_status = self
            .licensing_status
            .as_deref()
            .map(LicensingStatus::lookup)
            .transpose()?;

        Ok(VehicleFilter {
            brand: self.brand,
            model: self.model,
            year_of_manufacture: self.year_of_manufacture,
            licensing_expiry_date: self.licensing_expiry_date,
            licensing_status,
            pagination: Pagination::new(self.page, self.page_size),
        })
    }
}
