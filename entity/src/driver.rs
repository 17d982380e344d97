use sea_orm::entity::prelude::*;

use crate::soft_delete::LiveUnique;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "drivers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub date_of_birth: Date,
    pub rg: String,
    pub cpf: String,
    pub driver_license: String,
    pub cell_phone: String,
    pub email: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::driver_vehicle::Entity")]
    DriverVehicle,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::driver_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DriverVehicle.def()
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        super::driver_vehicle::Relation::Vehicle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::driver_vehicle::Relation::Driver.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl LiveUnique for Entity {
    fn deleted_at() -> Column {
        Column::DeletedAt
    }

    fn live_unique_columns() -> Vec<Column> {
        vec![Column::UserId, Column::Rg, Column::Cpf, Column::DriverLicense]
    }
}
