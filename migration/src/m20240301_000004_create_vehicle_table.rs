use sea_orm_migration::{prelude::*, schema::*};

use crate::{live_unique_index, NOT_DELETED};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string(Vehicle::Brand))
                    .col(string(Vehicle::Model))
                    .col(integer(Vehicle::YearOfManufacture))
                    .col(string(Vehicle::Plate))
                    .col(string(Vehicle::Renavam))
                    .col(date(Vehicle::LicensingExpiryDate))
                    .col(string(Vehicle::LicensingStatus))
                    .col(
                        timestamp_with_time_zone(Vehicle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Vehicle::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Vehicle::DeletedAt)
                            .default(NOT_DELETED)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        for index in [
            live_unique_index(
                "idx_vehicles_plate_live",
                Vehicle::Table,
                Vehicle::Plate,
                Vehicle::DeletedAt,
            ),
            live_unique_index(
                "idx_vehicles_renavam_live",
                Vehicle::Table,
                Vehicle::Renavam,
                Vehicle::DeletedAt,
            ),
        ] {
            manager.create_index(index).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    #[sea_orm(iden = "vehicles")]
    Table,
    Id,
    Brand,
    Model,
    YearOfManufacture,
    Plate,
    Renavam,
    LicensingExpiryDate,
    LicensingStatus,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
