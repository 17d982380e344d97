//! Vehicle factory for creating test vehicle entities.

use crate::{factory::helpers::next_id, fixture};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
///
/// Plate and renavam default to values derived from `next_id()`.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    brand: String,
    model: String,
    year_of_manufacture: i32,
    plate: String,
    renavam: String,
    licensing_expiry_date: NaiveDate,
    licensing_status: String,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with the fixture defaults.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            brand: fixture::vehicle::DEFAULT_BRAND.to_string(),
            model: fixture::vehicle::DEFAULT_MODEL.to_string(),
            year_of_manufacture: fixture::vehicle::DEFAULT_YEAR_OF_MANUFACTURE,
            plate: format!("TST{:04}", id),
            renavam: format!("{:011}", id),
            licensing_expiry_date: fixture::vehicle::licensing_expiry_date(),
            licensing_status: fixture::vehicle::DEFAULT_LICENSING_STATUS.to_string(),
        }
    }

    /// Sets the brand.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Sets the model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the year of manufacture.
    pub fn year_of_manufacture(mut self, year: i32) -> Self {
        self.year_of_manufacture = year;
        self
    }

    /// Sets the plate.
    pub fn plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = plate.into();
        self
    }

    /// Sets the licensing expiry date.
    pub fn licensing_expiry_date(mut self, date: NaiveDate) -> Self {
        self.licensing_expiry_date = date;
        self
    }

    /// Sets the stored licensing status string, valid or not.
    pub fn licensing_status(mut self, status: impl Into<String>) -> Self {
        self.licensing_status = status.into();
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vehicle::Model)` - Created vehicle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now();
        entity::vehicle::ActiveModel {
            brand: ActiveValue::Set(self.brand),
            model: ActiveValue::Set(self.model),
            year_of_manufacture: ActiveValue::Set(self.year_of_manufacture),
            plate: ActiveValue::Set(self.plate),
            renavam: ActiveValue::Set(self.renavam),
            licensing_expiry_date: ActiveValue::Set(self.licensing_expiry_date),
            licensing_status: ActiveValue::Set(self.licensing_status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(entity::soft_delete::sentinel()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}
