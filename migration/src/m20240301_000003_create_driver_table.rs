use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000001_create_user_table::User;
use crate::{live_unique_index, NOT_DELETED};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(pk_auto(Driver::Id))
                    .col(integer(Driver::UserId))
                    .col(string(Driver::Name))
                    .col(date(Driver::DateOfBirth))
                    .col(string(Driver::Rg))
                    .col(string(Driver::Cpf))
                    .col(string(Driver::DriverLicense))
                    .col(string(Driver::CellPhone))
                    .col(string(Driver::Email))
                    .col(
                        timestamp_with_time_zone(Driver::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Driver::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Driver::DeletedAt)
                            .default(NOT_DELETED)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_driver_user_id")
                            .from(Driver::Table, Driver::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for index in [
            live_unique_index(
                "idx_drivers_user_id_live",
                Driver::Table,
                Driver::UserId,
                Driver::DeletedAt,
            ),
            live_unique_index("idx_drivers_rg_live", Driver::Table, Driver::Rg, Driver::DeletedAt),
            live_unique_index(
                "idx_drivers_cpf_live",
                Driver::Table,
                Driver::Cpf,
                Driver::DeletedAt,
            ),
            live_unique_index(
                "idx_drivers_driver_license_live",
                Driver::Table,
                Driver::DriverLicense,
                Driver::DeletedAt,
            ),
        ] {
            manager.create_index(index).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    #[sea_orm(iden = "drivers")]
    Table,
    Id,
    UserId,
    Name,
    DateOfBirth,
    Rg,
    Cpf,
    DriverLicense,
    CellPhone,
    Email,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
