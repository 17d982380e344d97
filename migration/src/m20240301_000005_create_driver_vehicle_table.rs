use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240301_000003_create_driver_table::Driver, m20240301_000004_create_vehicle_table::Vehicle,
};
use crate::NOT_DELETED;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DriverVehicle::Table)
                    .if_not_exists()
                    .col(integer(DriverVehicle::DriverId))
                    .col(integer(DriverVehicle::VehicleId))
                    .col(
                        timestamp_with_time_zone(DriverVehicle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(DriverVehicle::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(DriverVehicle::DeletedAt)
                            .default(NOT_DELETED)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(DriverVehicle::DriverId)
                            .col(DriverVehicle::VehicleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_driver_vehicle_driver_id")
                            .from(DriverVehicle::Table, DriverVehicle::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_driver_vehicle_vehicle_id")
                            .from(DriverVehicle::Table, DriverVehicle::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DriverVehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DriverVehicle {
    #[sea_orm(iden = "drivers_vehicles")]
    Table,
    DriverId,
    VehicleId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
