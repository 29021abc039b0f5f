use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of POST /asset-metric/create-asset-metric. Price and 24h volume are
/// mandatory; everything else is an optional decimal-as-string observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetMetricRequest {
    pub asset_id: i32,
    pub exchange_id: i32,
    pub trading_pair_id: Option<i32>,
    pub robot_id: Option<i32>,
    pub timestamp: DateTime<Utc>,
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
