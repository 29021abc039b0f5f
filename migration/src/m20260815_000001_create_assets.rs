use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assets::Symbol)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Assets::Name).string().not_null())
                    .col(ColumnDef::new(Assets::CoinGeckoId).string().not_null())
                    .col(ColumnDef::new(Assets::CoinMarketCapId).string().not_null())
                    .col(ColumnDef::new(Assets::MarketCap).string().not_null())
                    .col(ColumnDef::new(Assets::MarketCapRank).integer().not_null())
                    .col(ColumnDef::new(Assets::Image).string().not_null())
                    .col(
                        ColumnDef::new(Assets::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Assets::IsTracked)
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
            .drop_table(Table::drop().table(Assets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Assets {
    Table,
    Id,
    Symbol,
    Name,
    CoinGeckoId,
    CoinMarketCapId,
    MarketCap,
    MarketCapRank,
    Image,
    IsActive,
    IsTracked,
}
