//! Exchange service: idempotent creation keyed on `symbol`, plus lookups.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{exchanges, prelude::*};
use crate::models::exchange::CreateExchangeRequest;
use crate::models::response::Envelope;

const NA: &str = "N/A";

pub async fn create_exchange(
    db: &DatabaseConnection,
    raw: CreateExchangeRequest,
) -> Envelope<exchanges::Model> {
    let existing = Exchanges::find()
        .filter(exchanges::Column::Symbol.eq(&raw.symbol))
        .one(db)
        .await;

    match existing {
        Ok(Some(_)) => {
            tracing::warn!(symbol = %raw.symbol, "duplicate exchange rejected");
            Envelope::duplicate()
        }
        Ok(None) => {
            let new_exchange = exchanges::ActiveModel {
                symbol: Set(raw.symbol),
                name: Set(raw.name),
                description: Set(raw.description),
                image: Set(raw.image),
                api_url: Set(raw.api_url.unwrap_or_else(|| NA.to_string())),
                api_config: Set(raw.api_config),
                country: Set(raw.country.unwrap_or_else(|| NA.to_string())),
                maker_fee: Set(raw.maker_fee.unwrap_or_else(|| NA.to_string())),
                taker_fee: Set(raw.taker_fee.unwrap_or_else(|| NA.to_string())),
                is_active: Set(true),
                is_tracked: Set(true),
                ..Default::default()
            };

            match new_exchange.insert(db).await {
                Ok(created) => {
                    tracing::info!(symbol = %created.symbol, "exchange added successfully");
                    Envelope::ok(created)
                }
                Err(e) => {
                    tracing::error!("failed to create exchange: {}", e);
                    Envelope::internal()
                }
            }
        }
        Err(e) => {
            tracing::error!("failed to create exchange: {}", e);
            Envelope::internal()
        }
    }
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Envelope<exchanges::Model> {
    match Exchanges::find_by_id(id).one(db).await {
        Ok(Some(exchange)) => Envelope::ok(exchange),
        Ok(None) => {
            tracing::warn!(id, "exchange not found");
            Envelope::not_found()
        }
        Err(e) => {
            tracing::error!("failed to find exchange: {}", e);
            Envelope::internal()
        }
    }
}

pub async fn find_by_symbol(db: &DatabaseConnection, symbol: &str) -> Envelope<exchanges::Model> {
    let found = Exchanges::find()
        .filter(exchanges::Column::Symbol.eq(symbol))
        .one(db)
        .await;

    match found {
        Ok(Some(exchange)) => Envelope::ok(exchange),
        Ok(None) => {
            tracing::warn!(symbol = %symbol, "exchange not found");
            Envelope::not_found()
        }
        Err(e) => {
            tracing::error!("failed to find exchange: {}", e);
            Envelope::internal()
        }
    }
}
