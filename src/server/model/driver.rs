//! Domain models for drivers and their eager-loaded relations.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::driver::{DriverDto, UpdateDriverDto, UpsertDriverDto},
    server::{
        error::mapping::RowDecodeError,
        model::{address::Address, vehicle::Vehicle},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverAttributes {
    pub name: String,
    pub date_of_birth: NaiveDate,
}

/// Identity documents. Each is unique and none can be updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverLegalInformation {
    pub rg: String,
    pub cpf: String,
    pub driver_license: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub cell_phone: String,
    pub email: String,
}

/// Driver aggregate.
///
/// `address` comes from the owning user and `vehicles` from the link table. Both are
/// only populated by eager reads and are recomputed on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: i32,
    pub user_id: i32,
    pub attributes: DriverAttributes,
    pub legal_information: DriverLegalInformation,
    pub contact: Contact,
    pub address: Option<Address>,
    pub vehicles: Vec<Vehicle>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

/// Persisted shape of a driver read: the driver row plus the related rows an eager
/// read attached. A shallow read carries no address and no vehicles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRecord {
    pub driver: entity::driver::Model,
    pub address: Option<entity::address::Model>,
    pub vehicles: Vec<entity::vehicle::Model>,
}

impl DriverRecord {
    pub fn shallow(driver: entity::driver::Model) -> Self {
        Self {
            driver,
            address: None,
            vehicles: Vec::new(),
        }
    }
}

impl Driver {
    /// Converts a driver record, including any attached address and vehicles.
    ///
    /// Nested rows are decoded in full: a bad state on the address or a bad licensing
    /// status on any vehicle fails the whole driver. Vehicle order is preserved.
    ///
    /// # Returns
    /// - `Ok(Driver)` - The converted driver
    /// - `Err(RowDecodeError)` - A nested row failed to decode
    pub fn from_entity(record: DriverRecord) -> Result<Self, RowDecodeError> {
        let address = record.address.map(Address::from_entity).transpose()?;
        let vehicles = record
            .vehicles
            .into_iter()
            .map(Vehicle::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        let entity = record.driver;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            attributes: DriverAttributes {
                name: entity.name,
                date_of_birth: entity.date_of_birth,
            },
            legal_information: DriverLegalInformation {
                rg: entity.rg,
                cpf: entity.cpf,
                driver_license: entity.driver_license,
            },
            contact: Contact {
                cell_phone: entity.cell_phone,
                email: entity.email,
            },
            address,
            vehicles,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }

    pub fn into_entity(self) -> DriverRecord {
        DriverRecord {
            driver: entity::driver::Model {
                id: self.id,
                user_id: self.user_id,
                name: self.attributes.name,
                date_of_birth: self.attributes.date_of_birth,
                rg: self.legal_information.rg,
                cpf: self.legal_information.cpf,
                driver_license: self.legal_information.driver_license,
                cell_phone: self.contact.cell_phone,
                email: self.contact.email,
                created_at: self.created_at,
                updated_at: self.updated_at,
                deleted_at: self.deleted_at,
            },
            address: self.address.map(Address::into_entity),
            vehicles: self.vehicles.into_iter().map(Vehicle::into_entity).collect(),
        }
    }

    pub fn into_dto(self) -> DriverDto {
        DriverDto {
            id: self.id,
            user_id: self.user_id,
            name: self.attributes.name,
            date_of_birth: self.attributes.date_of_birth,
            rg: self.legal_information.rg,
            cpf: self.legal_information.cpf,
            driver_license: self.legal_information.driver_license,
            cell_phone: self.contact.cell_phone,
            email: self.contact.email,
            address: self.address.map(Address::into_dto),
            vehicles: self.vehicles.into_iter().map(Vehicle::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for inserting or replacing a driver.
#[derive(Debug, Clone)]
pub struct UpsertDriverParam {
    /// Existing id to overwrite, or `None` to insert a new row.
    pub id: Option<i32>,
    pub user_id: i32,
    pub attributes: DriverAttributes,
    pub legal_information: DriverLegalInformation,
    pub contact: Contact,
}

impl UpsertDriverParam {
    pub fn from_dto(dto: UpsertDriverDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            attributes: DriverAttributes {
                name: dto.name,
                date_of_birth: dto.date_of_birth,
            },
            legal_information: DriverLegalInformation {
                rg: dto.rg,
                cpf: dto.cpf,
                driver_license: dto.driver_license,
            },
            contact: Contact {
                cell_phone: dto.cell_phone,
                email: dto.email,
            },
        }
    }

    /// Builds the live, relation-free driver this upsert will store, stamped with `now`.
    pub fn into_driver(self, now: DateTime<Utc>) -> Driver {
        Driver {
            id: self.id.unwrap_or_default(),
            user_id: self.user_id,
            attributes: self.attributes,
            legal_information: self.legal_information,
            contact: self.contact,
            address: None,
            vehicles: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: entity::soft_delete::sentinel(),
        }
    }
}

/// Parameters for a partial update. Documents and the owning user stay unchanged.
#[derive(Debug, Clone)]
pub struct UpdateDriverParam {
    pub id: i32,
    pub attributes: DriverAttributes,
    pub contact: Contact,
}

impl UpdateDriverParam {
    pub fn from_dto(id: i32, dto: UpdateDriverDto) -> Self {
        Self {
            id,
            attributes: DriverAttributes {
                name: dto.name,
                date_of_birth: dto.date_of_birth,
            },
            contact: Contact {
                cell_phone: dto.cell_phone,
                email: dto.email,
            },
        }
    }
}
