use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exchanges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exchanges::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Exchanges::Symbol)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Exchanges::Name).string().not_null())
                    .col(ColumnDef::new(Exchanges::Description).string().not_null())
                    .col(ColumnDef::new(Exchanges::Image).string().not_null())
                    .col(ColumnDef::new(Exchanges::ApiUrl).string().not_null())
                    .col(ColumnDef::new(Exchanges::ApiConfig).json_binary().null())
                    .col(ColumnDef::new(Exchanges::Country).string().not_null())
                    .col(ColumnDef::new(Exchanges::MakerFee).string().not_null())
                    .col(ColumnDef::new(Exchanges::TakerFee).string().not_null())
                    .col(
                        ColumnDef::new(Exchanges::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Exchanges::IsTracked)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Exchanges::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Exchanges {
    Table,
    Id,
    Symbol,
    Name,
    Description,
    Image,
    ApiUrl,
    ApiConfig,
    Country,
    MakerFee,
    TakerFee,
    IsActive,
    IsTracked,
}
