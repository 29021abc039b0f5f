//! `SeaORM` Entity for the assets table
//!
//! Natural key: `symbol`. Decimal values are stored as strings, missing
//! source fields as the `"N/A"` / `-1` sentinels.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "assets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub symbol: String,
    pub name: String,
    pub coin_gecko_id: String,
    pub coin_market_cap_id: String,
    pub market_cap: String,
    pub market_cap_rank: i32,
    pub image: String,
    pub is_active: bool,
    pub is_tracked: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::asset_metrics::Entity")]
    AssetMetrics,
}

impl Related<super::asset_metrics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssetMetrics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
