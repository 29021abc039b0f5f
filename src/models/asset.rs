use serde::{Deserialize, Serialize};

/// Body of POST /asset/create-asset. Optional fields fall back to the
/// sentinel defaults at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    pub symbol: String,
    pub name: String,
    pub image: Option<String>,
    pub coin_gecko_id: Option<String>,
    pub coin_market_cap_id: Option<String>,
    pub market_cap: Option<String>,
    pub market_cap_rank: Option<i32>,
}
