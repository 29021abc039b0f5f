use serde::{Deserialize, Serialize};

/// Body of POST /exchange/create-exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExchangeRequest {
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub api_url: Option<String>,
    pub api_config: Option<serde_json::Value>,
    pub country: Option<String>,
    pub maker_fee: Option<String>,
    pub taker_fee: Option<String>,
}
