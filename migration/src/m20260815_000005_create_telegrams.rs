use sea_orm_migration::prelude::*;

use crate::m20260815_000003_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Telegrams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Telegrams::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Telegrams::UserId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Telegrams::BotToken).string().not_null())
                    .col(ColumnDef::new(Telegrams::ChatId).string().not_null())
                    .col(
                        ColumnDef::new(Telegrams::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_telegrams_user")
                            .from(Telegrams::Table, Telegrams::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Telegrams::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Telegrams {
    Table,
    Id,
    UserId,
    BotToken,
    ChatId,
    IsActive,
}
