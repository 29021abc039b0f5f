//! Bundled seed fixtures, shaped exactly like the live CoinGecko responses
//! so the normalizer cannot tell them apart from a fetch.

use crate::services::coingecko::{CoinMarket, ExchangeListing, MarketChart, TickerList};

const MARKET_DATA: &str = include_str!("data/market_data.json");
const EXCHANGES: &str = include_str!("data/exchanges.json");
const BITCOIN_TICKERS: &str = include_str!("data/bitcoin_tickers.json");
const BITCOIN_MARKET_CHART: &str = include_str!("data/bitcoin_market_chart.json");

pub fn market_data() -> Vec<CoinMarket> {
    serde_json::from_str(MARKET_DATA).expect("bundled market_data.json is valid")
}

pub fn exchanges() -> Vec<ExchangeListing> {
    serde_json::from_str(EXCHANGES).expect("bundled exchanges.json is valid")
}

pub fn bitcoin_tickers() -> TickerList {
    serde_json::from_str(BITCOIN_TICKERS).expect("bundled bitcoin_tickers.json is valid")
}

pub fn bitcoin_market_chart() -> MarketChart {
    serde_json::from_str(BITCOIN_MARKET_CHART).expect("bundled bitcoin_market_chart.json is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fixtures_parse() {
        assert!(!market_data().is_empty());
        assert!(!exchanges().is_empty());
        assert!(!bitcoin_tickers().tickers.is_empty());

        let chart = bitcoin_market_chart();
        assert_eq!(chart.prices.len(), chart.market_caps.len());
        assert_eq!(chart.prices.len(), chart.total_volumes.len());
    }
}
