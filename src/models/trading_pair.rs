use serde::{Deserialize, Serialize};

/// Body of POST /trading-pair/create-trading-pair. The referenced exchange
/// must already exist; base/quote asset integrity is left to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTradingPairRequest {
    pub exchange_id: i32,
    pub base_asset_id: i32,
    pub quote_asset_id: i32,
    pub symbol: String,
    pub min_trade_amount: Option<String>,
    pub max_trade_amount: Option<String>,
    pub tick_size: Option<String>,
    pub step_size: Option<String>,
}
