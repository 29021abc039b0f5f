//! Maps raw market-data records into creation requests.
//!
//! Never fails: missing source fields become the `"N/A"` / `-1` sentinels
//! and bad values are left for the entity services to reject.

use chrono::DateTime;

use crate::models::asset::CreateAssetRequest;
use crate::models::asset_metric::CreateAssetMetricRequest;
use crate::models::exchange::CreateExchangeRequest;
use crate::services::coingecko::{ChartPoint, CoinMarket, ExchangeListing, MarketChart};

const NA: &str = "N/A";

// Fee schedule applied to seeded exchanges; listings carry no fee data.
const DEFAULT_MAKER_FEE: &str = "0.0002";
const DEFAULT_TAKER_FEE: &str = "0.00015";

/// Renders an f64 the way the source JSON wrote it: integral values without
/// a trailing `.0`.
fn decimal_string(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NA.to_string())
}

pub fn asset_from_market(raw: &CoinMarket) -> CreateAssetRequest {
    CreateAssetRequest {
        symbol: or_na(raw.symbol.clone()),
        name: or_na(raw.name.clone()),
        coin_gecko_id: Some(or_na(raw.id.clone())),
        coin_market_cap_id: Some(NA.to_string()),
        market_cap: Some(or_na(raw.market_cap.map(decimal_string))),
        market_cap_rank: Some(raw.market_cap_rank.unwrap_or(-1)),
        image: Some(or_na(raw.image.clone())),
    }
}

pub fn exchange_from_listing(raw: &ExchangeListing) -> CreateExchangeRequest {
    CreateExchangeRequest {
        symbol: raw.id.clone(),
        name: or_na(raw.name.clone()),
        description: or_na(raw.description.clone()),
        image: or_na(raw.image.clone()),
        api_url: raw.url.clone(),
        api_config: None,
        country: raw.country.clone(),
        maker_fee: Some(DEFAULT_MAKER_FEE.to_string()),
        taker_fee: Some(DEFAULT_TAKER_FEE.to_string()),
    }
}

/// Value of a parallel series at `index`, if the series has that index and
/// the value there is not null.
fn series_value(series: &[ChartPoint], index: usize) -> Option<f64> {
    series.get(index).and_then(|point| point.1)
}

/// Three-tier fallback for series-backed fields: the series value when
/// present (a legitimate 0 wins), else the snapshot field, else "0".
fn tiered(series: Option<f64>, snapshot: Option<f64>) -> String {
    series
        .or(snapshot)
        .map(decimal_string)
        .unwrap_or_else(|| "0".to_string())
}

/// Builds the metric for chart index `index`, zipping the parallel series by
/// position and filling gaps from the snapshot. Returns None only when the
/// prices series has no such index (nothing to observe).
pub fn metric_from_chart(
    asset_id: i32,
    exchange_id: i32,
    chart: &MarketChart,
    index: usize,
    snapshot: &CoinMarket,
) -> Option<CreateAssetMetricRequest> {
    let (ts_millis, price) = *chart.prices.get(index)?;
    let timestamp = DateTime::from_timestamp_millis(ts_millis)?;

    Some(CreateAssetMetricRequest {
        asset_id,
        exchange_id,
        trading_pair_id: None,
        robot_id: None,
        timestamp,
        price: tiered(price, snapshot.current_price),
        volume_24h: tiered(series_value(&chart.total_volumes, index), snapshot.total_volume),
        market_cap: Some(tiered(series_value(&chart.market_caps, index), snapshot.market_cap)),
        price_change_24h: snapshot.price_change_24h.map(decimal_string),
        price_change_percentage_1h: snapshot
            .price_change_percentage_1h_in_currency
            .map(decimal_string),
        price_change_percentage_24h: snapshot
            .price_change_percentage_24h_in_currency
            .map(decimal_string),
        price_change_percentage_7d: snapshot
            .price_change_percentage_7d_in_currency
            .map(decimal_string),
        market_cap_rank: snapshot.market_cap_rank,
        high_24h: snapshot.high_24h.map(decimal_string),
        low_24h: snapshot.low_24h.map(decimal_string),
        circulating_supply: snapshot.circulating_supply.map(decimal_string),
        total_supply: snapshot.total_supply.map(decimal_string),
        bid_price: None,
        ask_price: None,
        spread: None,
        quote_volume_24h: snapshot.total_volume.map(decimal_string),
        trade_count_24h: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_market() -> CoinMarket {
        CoinMarket {
            id: None,
            symbol: None,
            name: None,
            image: None,
            current_price: None,
            market_cap: None,
            market_cap_rank: None,
            total_volume: None,
            high_24h: None,
            low_24h: None,
            price_change_24h: None,
            price_change_percentage_1h_in_currency: None,
            price_change_percentage_24h_in_currency: None,
            price_change_percentage_7d_in_currency: None,
            circulating_supply: None,
            total_supply: None,
        }
    }

    fn chart(volume_at_0: Option<f64>) -> MarketChart {
        MarketChart {
            prices: vec![(1_700_000_000_000, Some(100.0))],
            market_caps: vec![(1_700_000_000_000, Some(2000.0))],
            total_volumes: vec![(1_700_000_000_000, volume_at_0)],
        }
    }

    #[test]
    fn missing_fields_become_sentinels() {
        let request = asset_from_market(&empty_market());
        assert_eq!(request.symbol, "N/A");
        assert_eq!(request.name, "N/A");
        assert_eq!(request.coin_gecko_id.as_deref(), Some("N/A"));
        assert_eq!(request.market_cap.as_deref(), Some("N/A"));
        assert_eq!(request.market_cap_rank, Some(-1));
    }

    #[test]
    fn null_series_value_falls_back_to_snapshot() {
        let mut snapshot = empty_market();
        snapshot.total_volume = Some(555.0);

        let metric = metric_from_chart(1, 1, &chart(None), 0, &snapshot).unwrap();
        assert_eq!(metric.volume_24h, "555");
    }

    #[test]
    fn present_zero_beats_snapshot_fallback() {
        // 0 is falsy but not nullish: the series value must win.
        let mut snapshot = empty_market();
        snapshot.total_volume = Some(555.0);

        let metric = metric_from_chart(1, 1, &chart(Some(0.0)), 0, &snapshot).unwrap();
        assert_eq!(metric.volume_24h, "0");
    }

    #[test]
    fn missing_series_and_snapshot_yield_zero() {
        let metric = metric_from_chart(1, 1, &chart(None), 0, &empty_market()).unwrap();
        assert_eq!(metric.volume_24h, "0");
    }

    #[test]
    fn out_of_range_index_yields_nothing() {
        assert!(metric_from_chart(1, 1, &chart(None), 5, &empty_market()).is_none());
    }

    #[test]
    fn decimal_strings_drop_integral_fraction() {
        assert_eq!(decimal_string(1265432100000.0), "1265432100000");
        assert_eq!(decimal_string(0.12), "0.12");
    }
}
