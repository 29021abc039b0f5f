use sea_orm_migration::prelude::*;

use crate::m20260815_000003_create_users::Users;
use crate::m20260815_000005_create_telegrams::Telegrams;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Robots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Robots::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Robots::UserId).integer().not_null())
                    .col(ColumnDef::new(Robots::TelegramId).integer().not_null())
                    .col(ColumnDef::new(Robots::Name).string().not_null())
                    .col(ColumnDef::new(Robots::Strategy).string().not_null())
                    .col(ColumnDef::new(Robots::Config).json_binary().null())
                    .col(
                        ColumnDef::new(Robots::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_robots_user")
                            .from(Robots::Table, Robots::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_robots_telegram")
                            .from(Robots::Table, Robots::TelegramId)
                            .to(Telegrams::Table, Telegrams::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Robots::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Robots {
    Table,
    Id,
    UserId,
    TelegramId,
    Name,
    Strategy,
    Config,
    IsActive,
}
