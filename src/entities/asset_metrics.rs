//! `SeaORM` Entity for the asset_metrics table
//!
//! A timestamped observation for an (asset, exchange) pair. Natural key:
//! (`asset_id`, `exchange_id`, `timestamp`), at most one row per exact
//! timestamp.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "asset_metrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub asset_id: i32,
    pub exchange_id: i32,
    pub trading_pair_id: Option<i32>,
    pub robot_id: Option<i32>,
    pub timestamp: DateTimeUtc,
    pub price: String,
    pub volume_24h: String,
    pub price_change_24h: Option<String>,
    pub market_cap: Option<String>,
    pub price_change_percentage_1h: Option<String>,
    pub price_change_percentage_24h: Option<String>,
    pub price_change_percentage_7d: Option<String>,
    pub market_cap_rank: Option<i32>,
    pub high_24h: Option<String>,
    pub low_24h: Option<String>,
    pub circulating_supply: Option<String>,
    pub total_supply: Option<String>,
    pub bid_price: Option<String>,
    pub ask_price: Option<String>,
    pub spread: Option<String>,
    pub quote_volume_24h: Option<String>,
    pub trade_count_24h: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assets::Entity",
        from = "Column::AssetId",
        to = "super::assets::Column::Id"
    )]
    Asset,
    #[sea_orm(
        belongs_to = "super::exchanges::Entity",
        from = "Column::ExchangeId",
        to = "super::exchanges::Column::Id"
    )]
    Exchange,
}

impl Related<super::assets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl Related<super::exchanges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exchange.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
