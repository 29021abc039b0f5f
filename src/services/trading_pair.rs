//! Trading pair service.
//!
//! Creation resolves the referenced exchange first (404 if missing) before
//! running the duplicate check on the (symbol, exchange_id) composite key.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{prelude::*, trading_pairs};
use crate::models::response::Envelope;
use crate::models::trading_pair::CreateTradingPairRequest;
use crate::services::exchange;

pub async fn create_trading_pair(
    db: &DatabaseConnection,
    raw: CreateTradingPairRequest,
) -> Envelope<trading_pairs::Model> {
    let exchange = exchange::find_by_id(db, raw.exchange_id).await;
    let exchange = match exchange.data {
        Some(exchange) => exchange,
        None => {
            tracing::error!(exchange_id = raw.exchange_id, "exchange not found for trading pair");
            return Envelope::not_found();
        }
    };

    let existing = TradingPairs::find()
        .filter(trading_pairs::Column::Symbol.eq(&raw.symbol))
        .filter(trading_pairs::Column::ExchangeId.eq(exchange.id))
        .one(db)
        .await;

    match existing {
        Ok(Some(_)) => {
            tracing::warn!(symbol = %raw.symbol, exchange_id = exchange.id, "duplicate trading pair rejected");
            Envelope::duplicate()
        }
        Ok(None) => {
            let new_pair = trading_pairs::ActiveModel {
                symbol: Set(raw.symbol),
                exchange_id: Set(raw.exchange_id),
                base_asset_id: Set(raw.base_asset_id),
                quote_asset_id: Set(raw.quote_asset_id),
                min_trade_amount: Set(raw.min_trade_amount.unwrap_or_else(|| "0".to_string())),
                max_trade_amount: Set(raw.max_trade_amount.unwrap_or_else(|| "0".to_string())),
                tick_size: Set(raw.tick_size.unwrap_or_else(|| "0".to_string())),
                step_size: Set(raw.step_size.unwrap_or_else(|| "0".to_string())),
                is_active: Set(true),
                ..Default::default()
            };

            match new_pair.insert(db).await {
                Ok(created) => {
                    tracing::info!(symbol = %created.symbol, "trading pair added successfully");
                    Envelope::ok(created)
                }
                Err(e) => {
                    tracing::error!("failed to create trading pair: {}", e);
                    Envelope::internal()
                }
            }
        }
        Err(e) => {
            tracing::error!("failed to create trading pair: {}", e);
            Envelope::internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::exchanges;
    use crate::models::response::ErrorCause;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn request() -> CreateTradingPairRequest {
        CreateTradingPairRequest {
            exchange_id: 7,
            base_asset_id: 1,
            quote_asset_id: 2,
            symbol: "btc/usdt".to_string(),
            min_trade_amount: Some("1".to_string()),
            max_trade_amount: Some("1000000".to_string()),
            tick_size: Some("0.01".to_string()),
            step_size: Some("0.01".to_string()),
        }
    }

    #[tokio::test]
    async fn missing_exchange_blocks_creation() {
        // Only the exchange lookup is queued: the service must return before
        // attempting the duplicate check or the insert.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<exchanges::Model>::new()])
            .into_connection();

        let result = create_trading_pair(&db, request()).await;
        assert!(!result.is_success);
        assert_eq!(result.status_code, 404);
        assert_eq!(result.error_cause, Some(ErrorCause::NotFound));
    }

    #[tokio::test]
    async fn composite_key_duplicate_is_rejected() {
        let exchange = exchanges::Model {
            id: 7,
            symbol: "binance".to_string(),
            name: "Binance".to_string(),
            description: "N/A".to_string(),
            image: "N/A".to_string(),
            api_url: "N/A".to_string(),
            api_config: None,
            country: "N/A".to_string(),
            maker_fee: "0.0002".to_string(),
            taker_fee: "0.00015".to_string(),
            is_active: true,
            is_tracked: true,
        };
        let pair = trading_pairs::Model {
            id: 3,
            symbol: "btc/usdt".to_string(),
            exchange_id: 7,
            base_asset_id: 1,
            quote_asset_id: 2,
            min_trade_amount: "1".to_string(),
            max_trade_amount: "1000000".to_string(),
            tick_size: "0.01".to_string(),
            step_size: "0.01".to_string(),
            is_active: true,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![exchange]])
            .append_query_results([vec![pair]])
            .into_connection();

        let result = create_trading_pair(&db, request()).await;
        assert_eq!(result.status_code, 409);
        assert_eq!(result.error_cause, Some(ErrorCause::Duplicate));
    }
}
