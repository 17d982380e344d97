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
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_auto(Address::Id))
                    .col(integer(Address::UserId))
                    .col(string(Address::Locality))
                    .col(string(Address::Number))
                    .col(string(Address::Complement))
                    .col(string(Address::Neighborhood))
                    .col(string(Address::City))
                    .col(string(Address::State))
                    .col(string(Address::Cep))
                    .col(string(Address::Country))
                    .col(
                        timestamp_with_time_zone(Address::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Address::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Address::DeletedAt)
                            .default(NOT_DELETED)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_user_id")
                            .from(Address::Table, Address::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for index in [
            live_unique_index(
                "idx_addresses_user_id_live",
                Address::Table,
                Address::UserId,
                Address::DeletedAt,
            ),
        ] {
            manager.create_index(index).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Address {
    #[sea_orm(iden = "addresses")]
    Table,
    Id,
    UserId,
    Locality,
    Number,
    Complement,
    Neighborhood,
    City,
    State,
    Cep,
    Country,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
