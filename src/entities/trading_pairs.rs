//! `SeaORM` Entity for the trading_pairs table
//!
//! Natural key: (`symbol`, `exchange_id`). The symbol is conventionally
//! `"{base}/{quote}"`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "trading_pairs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub symbol: String,
    pub exchange_id: i32,
    pub base_asset_id: i32,
    pub quote_asset_id: i32,
    pub min_trade_amount: String,
    pub max_trade_amount: String,
    pub tick_size: String,
    pub step_size: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exchanges::Entity",
        from = "Column::ExchangeId",
        to = "super::exchanges::Column::Id"
    )]
    Exchange,
    #[sea_orm(
        belongs_to = "super::assets::Entity",
        from = "Column::BaseAssetId",
        to = "super::assets::Column::Id"
    )]
    BaseAsset,
    #[sea_orm(
        belongs_to = "super::assets::Entity",
        from = "Column::QuoteAssetId",
        to = "super::assets::Column::Id"
    )]
    QuoteAsset,
}

impl Related<super::exchanges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exchange.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
