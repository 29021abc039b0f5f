use sea_orm_migration::prelude::*;

use crate::m20260815_000001_create_assets::Assets;
use crate::m20260815_000002_create_exchanges::Exchanges;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AssetMetrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssetMetrics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AssetMetrics::AssetId).integer().not_null())
                    .col(
                        ColumnDef::new(AssetMetrics::ExchangeId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssetMetrics::TradingPairId).integer().null())
                    .col(ColumnDef::new(AssetMetrics::RobotId).integer().null())
                    .col(
                        ColumnDef::new(AssetMetrics::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssetMetrics::Price).string().not_null())
                    .col(ColumnDef::new(AssetMetrics::Volume24h).string().not_null())
                    .col(ColumnDef::new(AssetMetrics::PriceChange24h).string().null())
                    .col(ColumnDef::new(AssetMetrics::MarketCap).string().null())
                    .col(
                        ColumnDef::new(AssetMetrics::PriceChangePercentage1h)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AssetMetrics::PriceChangePercentage24h)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AssetMetrics::PriceChangePercentage7d)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(AssetMetrics::MarketCapRank).integer().null())
                    .col(ColumnDef::new(AssetMetrics::High24h).string().null())
                    .col(ColumnDef::new(AssetMetrics::Low24h).string().null())
                    .col(
                        ColumnDef::new(AssetMetrics::CirculatingSupply)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(AssetMetrics::TotalSupply).string().null())
                    .col(ColumnDef::new(AssetMetrics::BidPrice).string().null())
                    .col(ColumnDef::new(AssetMetrics::AskPrice).string().null())
                    .col(ColumnDef::new(AssetMetrics::Spread).string().null())
                    .col(ColumnDef::new(AssetMetrics::QuoteVolume24h).string().null())
                    .col(ColumnDef::new(AssetMetrics::TradeCount24h).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_metrics_asset")
                            .from(AssetMetrics::Table, AssetMetrics::AssetId)
                            .to(Assets::Table, Assets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_metrics_exchange")
                            .from(AssetMetrics::Table, AssetMetrics::ExchangeId)
                            .to(Exchanges::Table, Exchanges::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One observation per (asset, exchange) pair and exact timestamp
        manager
            .create_index(
                Index::create()
                    .name("idx_asset_metrics_asset_exchange_ts")
                    .table(AssetMetrics::Table)
                    .col(AssetMetrics::AssetId)
                    .col(AssetMetrics::ExchangeId)
                    .col(AssetMetrics::Timestamp)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AssetMetrics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AssetMetrics {
    Table,
    Id,
    AssetId,
    ExchangeId,
    TradingPairId,
    RobotId,
    Timestamp,
    Price,
    #[sea_orm(iden = "volume_24h")]
    Volume24h,
    #[sea_orm(iden = "price_change_24h")]
    PriceChange24h,
    MarketCap,
    #[sea_orm(iden = "price_change_percentage_1h")]
    PriceChangePercentage1h,
    #[sea_orm(iden = "price_change_percentage_24h")]
    PriceChangePercentage24h,
    #[sea_orm(iden = "price_change_percentage_7d")]
    PriceChangePercentage7d,
    MarketCapRank,
    #[sea_orm(iden = "high_24h")]
    High24h,
    #[sea_orm(iden = "low_24h")]
    Low24h,
    CirculatingSupply,
    TotalSupply,
    BidPrice,
    AskPrice,
    Spread,
    #[sea_orm(iden = "quote_volume_24h")]
    QuoteVolume24h,
    #[sea_orm(iden = "trade_count_24h")]
    TradeCount24h,
}
