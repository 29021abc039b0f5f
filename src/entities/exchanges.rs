//! `SeaORM` Entity for the exchanges table
//!
//! Natural key: `symbol`. `api_config` is an opaque JSON blob the core never
//! inspects.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "exchanges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub api_url: String,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub api_config: Option<Json>,
    pub country: String,
    pub maker_fee: String,
    pub taker_fee: String,
    pub is_active: bool,
    pub is_tracked: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trading_pairs::Entity")]
    TradingPairs,
    #[sea_orm(has_many = "super::asset_metrics::Entity")]
    AssetMetrics,
}

impl Related<super::trading_pairs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TradingPairs.def()
    }
}

impl Related<super::asset_metrics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssetMetrics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
