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
                    .table(TradingPairs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TradingPairs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TradingPairs::Symbol).string().not_null())
                    .col(ColumnDef::new(TradingPairs::ExchangeId).integer().not_null())
                    .col(
                        ColumnDef::new(TradingPairs::BaseAssetId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TradingPairs::QuoteAssetId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TradingPairs::MinTradeAmount)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TradingPairs::MaxTradeAmount)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TradingPairs::TickSize).string().not_null())
                    .col(ColumnDef::new(TradingPairs::StepSize).string().not_null())
                    .col(
                        ColumnDef::new(TradingPairs::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trading_pairs_exchange")
                            .from(TradingPairs::Table, TradingPairs::ExchangeId)
                            .to(Exchanges::Table, Exchanges::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trading_pairs_base_asset")
                            .from(TradingPairs::Table, TradingPairs::BaseAssetId)
                            .to(Assets::Table, Assets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trading_pairs_quote_asset")
                            .from(TradingPairs::Table, TradingPairs::QuoteAssetId)
                            .to(Assets::Table, Assets::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Composite natural key: one symbol per exchange
        manager
            .create_index(
                Index::create()
                    .name("idx_trading_pairs_symbol_exchange")
                    .table(TradingPairs::Table)
                    .col(TradingPairs::Symbol)
                    .col(TradingPairs::ExchangeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TradingPairs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TradingPairs {
    Table,
    Id,
    Symbol,
    ExchangeId,
    BaseAssetId,
    QuoteAssetId,
    MinTradeAmount,
    MaxTradeAmount,
    TickSize,
    StepSize,
    IsActive,
}
