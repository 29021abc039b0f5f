//! Thin CoinGecko client used by the startup seeding.
//!
//! Raw response shapes keep every field optional so the normalizer, not the
//! client, decides what a missing value becomes.

use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct CoinGeckoService {
    client: Client,
    api_key: String,
    base_url: String,
}

/// One entry of GET /coins/markets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinMarket {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<i32>,
    pub total_volume: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_1h_in_currency: Option<f64>,
    pub price_change_percentage_24h_in_currency: Option<f64>,
    pub price_change_percentage_7d_in_currency: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
}

/// One entry of GET /exchanges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeListing {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub country: Option<String>,
    pub trust_score_rank: Option<i32>,
}

/// A `[timestamp_millis, value]` series point; the value can be null.
pub type ChartPoint = (i64, Option<f64>);

/// GET /coins/{id}/market_chart: parallel series indexed by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketChart {
    pub prices: Vec<ChartPoint>,
    pub market_caps: Vec<ChartPoint>,
    pub total_volumes: Vec<ChartPoint>,
}

/// One entry of a tickers listing (fixture-shaped like GET /coins/{id}/tickers).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticker {
    pub base: String,
    pub target: String,
    pub market: TickerMarket,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerMarket {
    pub name: String,
    pub identifier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerList {
    pub tickers: Vec<Ticker>,
}

impl CoinGeckoService {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub async fn get_market_data(
        &self,
        vs_currency: &str,
    ) -> Result<Vec<CoinMarket>, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Fetching market data from CoinGecko");

        let url = format!("{}/coins/markets", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .header("x-cg-demo-api-key", &self.api_key)
            .query(&[
                ("vs_currency", vs_currency),
                ("per_page", "100"),
                ("page", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(format!("CoinGecko API error {}: {}", status, error_text).into());
        }

        let data: Vec<CoinMarket> = response.json().await?;
        tracing::debug!("Fetched {} market entries", data.len());
        Ok(data)
    }

    pub async fn get_exchanges(
        &self,
    ) -> Result<Vec<ExchangeListing>, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Fetching exchanges from CoinGecko");

        let url = format!("{}/exchanges", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .header("x-cg-demo-api-key", &self.api_key)
            .query(&[("per_page", "100"), ("page", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(format!("CoinGecko API error {}: {}", status, error_text).into());
        }

        let data: Vec<ExchangeListing> = response.json().await?;
        tracing::debug!("Fetched {} exchange listings", data.len());
        Ok(data)
    }
}
