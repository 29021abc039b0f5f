//! Asset metric service: idempotent creation keyed on
//! (asset_id, exchange_id, timestamp).

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{asset_metrics, prelude::*};
use crate::models::asset_metric::CreateAssetMetricRequest;
use crate::models::response::Envelope;

pub async fn create_asset_metric(
    db: &DatabaseConnection,
    raw: CreateAssetMetricRequest,
) -> Envelope<asset_metrics::Model> {
    let existing = AssetMetrics::find()
        .filter(asset_metrics::Column::AssetId.eq(raw.asset_id))
        .filter(asset_metrics::Column::ExchangeId.eq(raw.exchange_id))
        .filter(asset_metrics::Column::Timestamp.eq(raw.timestamp))
        .one(db)
        .await;

    match existing {
        Ok(Some(_)) => {
            tracing::warn!(
                asset_id = raw.asset_id,
                exchange_id = raw.exchange_id,
                timestamp = %raw.timestamp,
                "duplicate asset metric rejected"
            );
            Envelope::duplicate()
        }
        Ok(None) => {
            let new_metric = asset_metrics::ActiveModel {
                asset_id: Set(raw.asset_id),
                exchange_id: Set(raw.exchange_id),
                trading_pair_id: Set(raw.trading_pair_id),
                robot_id: Set(raw.robot_id),
                timestamp: Set(raw.timestamp),
                price: Set(raw.price),
                volume_24h: Set(raw.volume_24h),
                price_change_24h: Set(raw.price_change_24h),
                market_cap: Set(raw.market_cap),
                price_change_percentage_1h: Set(raw.price_change_percentage_1h),
                price_change_percentage_24h: Set(raw.price_change_percentage_24h),
                price_change_percentage_7d: Set(raw.price_change_percentage_7d),
                market_cap_rank: Set(raw.market_cap_rank),
                high_24h: Set(raw.high_24h),
                low_24h: Set(raw.low_24h),
                circulating_supply: Set(raw.circulating_supply),
                total_supply: Set(raw.total_supply),
                bid_price: Set(raw.bid_price),
                ask_price: Set(raw.ask_price),
                spread: Set(raw.spread),
                quote_volume_24h: Set(raw.quote_volume_24h),
                trade_count_24h: Set(raw.trade_count_24h),
                ..Default::default()
            };

            match new_metric.insert(db).await {
                Ok(created) => {
                    tracing::info!(
                        asset_id = created.asset_id,
                        timestamp = %created.timestamp,
                        "asset metric added successfully"
                    );
                    Envelope::ok(created)
                }
                Err(e) => {
                    tracing::error!("failed to create asset metric: {}", e);
                    Envelope::internal()
                }
            }
        }
        Err(e) => {
            tracing::error!("failed to create asset metric: {}", e);
            Envelope::internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn metric_model(ts_millis: i64) -> asset_metrics::Model {
        asset_metrics::Model {
            id: 1,
            asset_id: 1,
            exchange_id: 1,
            trading_pair_id: None,
            robot_id: None,
            timestamp: Utc.timestamp_millis_opt(ts_millis).unwrap(),
            price: "42000".to_string(),
            volume_24h: "1000".to_string(),
            price_change_24h: None,
            market_cap: None,
            price_change_percentage_1h: None,
            price_change_percentage_24h: None,
            price_change_percentage_7d: None,
            market_cap_rank: None,
            high_24h: None,
            low_24h: None,
            circulating_supply: None,
            total_supply: None,
            bid_price: None,
            ask_price: None,
            spread: None,
            quote_volume_24h: None,
            trade_count_24h: None,
        }
    }

    #[tokio::test]
    async fn same_timestamp_for_pair_is_duplicate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![metric_model(1_700_000_000_000)]])
            .into_connection();

        let raw = CreateAssetMetricRequest {
            asset_id: 1,
            exchange_id: 1,
            trading_pair_id: None,
            robot_id: None,
            timestamp: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            price: "42000".to_string(),
            volume_24h: "1000".to_string(),
            price_change_24h: None,
            market_cap: None,
            price_change_percentage_1h: None,
            price_change_percentage_24h: None,
            price_change_percentage_7d: None,
            market_cap_rank: None,
            high_24h: None,
            low_24h: None,
            circulating_supply: None,
            total_supply: None,
            bid_price: None,
            ask_price: None,
            spread: None,
            quote_volume_24h: None,
            trade_count_24h: None,
        };

        let result = create_asset_metric(&db, raw).await;
        assert!(!result.is_success);
        assert_eq!(result.status_code, 409);
    }
}
