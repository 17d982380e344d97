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
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::Username))
                    .col(string(User::HashedPassword))
                    .col(string(User::Role))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(User::DeletedAt)
                            .default(NOT_DELETED)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        for index in [
            live_unique_index(
                "idx_users_username_live",
                User::Table,
                User::Username,
                User::DeletedAt,
            ),
        ] {
            manager.create_index(index).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    HashedPassword,
    Role,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
