//! Domain models for vehicles.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::vehicle::{UpdateVehicleDto, UpsertVehicleDto, VehicleDto},
    server::{
        error::{enumeration::EnumDecodeError, mapping::RowDecodeError},
        model::{
            enumeration::{Enumeration, LicensingStatus},
            pagination::Pagination,
        },
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleAttributes {
    pub brand: String,
    pub model: String,
    pub year_of_manufacture: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Licensing {
    pub expiry_date: NaiveDate,
    pub status: LicensingStatus,
}

/// Registration data. Plate and renavam are unique and never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleLegalInformation {
    pub plate: String,
    pub renavam: String,
    pub licensing: Licensing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub attributes: VehicleAttributes,
    pub legal_information: VehicleLegalInformation,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

impl Vehicle {
    /// Converts an entity model to a vehicle domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The converted vehicle
    /// - `Err(RowDecodeError)` - The stored licensing status matches no status
    pub fn from_entity(entity: entity::vehicle::Model) -> Result<Self, RowDecodeError> {
        let status = LicensingStatus::lookup(&entity.licensing_status)
            .map_err(|err| RowDecodeError::new("vehicle", "licensing_status", err))?;

        Ok(Self {
            id: entity.id,
            attributes: VehicleAttributes {
                brand: entity.brand,
                model: entity.model,
                year_of_manufacture: entity.year_of_manufacture,
            },
            legal_information: VehicleLegalInformation {
                plate: entity.plate,
                renavam: entity.renavam,
                licensing: Licensing {
                    expiry_date: entity.licensing_expiry_date,
                    status,
                },
            },
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }

    pub fn into_entity(self) -> entity::vehicle::Model {
        let VehicleLegalInformation {
            plate,
            renavam,
            licensing,
        } = self.legal_information;

        entity::vehicle::Model {
            id: self.id,
            brand: self.attributes.brand,
            model: self.attributes.model,
            year_of_manufacture: self.attributes.year_of_manufacture,
            plate,
            renavam,
            licensing_expiry_date: licensing.expiry_date,
            licensing_status: licensing.status.display_name().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }

    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            brand: self.attributes.brand,
            model: self.attributes.model,
            year_of_manufacture: self.attributes.year_of_manufacture,
            plate: self.legal_information.plate,
            renavam: self.legal_information.renavam,
            licensing_expiry_date: self.legal_information.licensing.expiry_date,
            licensing_status: self
                .legal_information
                .licensing
                .status
                .display_name()
                .to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for inserting or replacing a vehicle.
#[derive(Debug, Clone)]
pub struct UpsertVehicleParam {
    /// Existing id to overwrite, or `None` to insert a new row.
    pub id: Option<i32>,
    pub attributes: VehicleAttributes,
    pub legal_information: VehicleLegalInformation,
}

impl UpsertVehicleParam {
    pub fn from_dto(dto: UpsertVehicleDto) -> Result<Self, EnumDecodeError> {
        Ok(Self {
            id: dto.id,
            attributes: VehicleAttributes {
                brand: dto.brand,
                model: dto.model,
                year_of_manufacture: dto.year_of_manufacture,
            },
            legal_information: VehicleLegalInformation {
                plate: dto.plate,
                renavam: dto.renavam,
                licensing: Licensing {
                    expiry_date: dto.licensing_expiry_date,
                    status: LicensingStatus::lookup(&dto.licensing_status)?,
                },
            },
        })
    }

    /// Builds the live vehicle this upsert will store, stamped with `now`.
    pub fn into_vehicle(self, now: DateTime<Utc>) -> Vehicle {
        Vehicle {
            id: self.id.unwrap_or_default(),
            attributes: self.attributes,
            legal_information: self.legal_information,
            created_at: now,
            updated_at: now,
            deleted_at: entity::soft_delete::sentinel(),
        }
    }
}

/// Parameters for a partial update; plate and renavam are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateVehicleParam {
    pub id: i32,
    pub attributes: VehicleAttributes,
    pub licensing: Licensing,
}

impl UpdateVehicleParam {
    pub fn from_dto(id: i32, dto: UpdateVehicleDto) -> Result<Self, EnumDecodeError> {
        Ok(Self {
            id,
            attributes: VehicleAttributes {
                brand: dto.brand,
                model: dto.model,
                year_of_manufacture: dto.year_of_manufacture,
            },
            licensing: Licensing {
                expiry_date: dto.licensing_expiry_date,
                status: LicensingStatus::lookup(&dto.licensing_status)?,
            },
        })
    }
}

/// Optional column filters for listing vehicles. Unset filters match everything.
#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year_of_manufacture: Option<i32>,
    pub licensing_expiry_date: Option<NaiveDate>,
    pub licensing_status: Option<LicensingStatus>,
    pub pagination: Pagination,
}
