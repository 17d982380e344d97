use sea_orm::entity::prelude::*;

use crate::soft_delete::LiveUnique;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub year_of_manufacture: i32,
    pub plate: String,
    pub renavam: String,
    pub licensing_expiry_date: Date,
    pub licensing_status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::driver_vehicle::Entity")]
    DriverVehicle,
}

impl Related<super::driver_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DriverVehicle.def()
    }
}

impl Related<super::driver::Entity> for Entity {
    fn to() -> RelationDef {
        super::driver_vehicle::Relation::Driver.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::driver_vehicle::Relation::Vehicle.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl LiveUnique for Entity {
    fn deleted_at() -> Column {
        Column::DeletedAt
    }

    fn live_unique_columns() -> Vec<Column> {
        vec![Column::Plate, Column::Renavam]
    }
}
