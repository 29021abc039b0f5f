//! Asset service: idempotent creation keyed on `symbol`, plus lookups.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{assets, prelude::*};
use crate::models::asset::CreateAssetRequest;
use crate::models::response::{BatchOutcome, Envelope, FailedRecord};

const NA: &str = "N/A";

fn to_active_model(raw: CreateAssetRequest) -> assets::ActiveModel {
    assets::ActiveModel {
        symbol: Set(raw.symbol),
        name: Set(raw.name),
        image: Set(raw.image.unwrap_or_else(|| NA.to_string())),
        coin_gecko_id: Set(raw.coin_gecko_id.unwrap_or_else(|| NA.to_string())),
        coin_market_cap_id: Set(raw.coin_market_cap_id.unwrap_or_else(|| NA.to_string())),
        market_cap: Set(raw.market_cap.unwrap_or_else(|| NA.to_string())),
        market_cap_rank: Set(raw.market_cap_rank.unwrap_or(-1)),
        is_active: Set(true),
        is_tracked: Set(true),
        ..Default::default()
    }
}

pub async fn create_asset(
    db: &DatabaseConnection,
    raw: CreateAssetRequest,
) -> Envelope<assets::Model> {
    let existing = Assets::find()
        .filter(assets::Column::Symbol.eq(&raw.symbol))
        .one(db)
        .await;

    match existing {
        Ok(Some(_)) => {
            tracing::warn!(symbol = %raw.symbol, "duplicate asset rejected");
            Envelope::duplicate()
        }
        Ok(None) => match to_active_model(raw).insert(db).await {
            Ok(created) => {
                tracing::info!(symbol = %created.symbol, "asset added successfully");
                Envelope::ok(created)
            }
            Err(e) => {
                tracing::error!("failed to create asset: {}", e);
                Envelope::internal()
            }
        },
        Err(e) => {
            tracing::error!("failed to create asset: {}", e);
            Envelope::internal()
        }
    }
}

/// Sequential batch creation with per-record accounting. Each record goes
/// through the same lookup-then-insert protocol; the batch itself always
/// reports 207 regardless of per-record outcomes.
pub async fn create_assets_batch(
    db: &DatabaseConnection,
    raw_assets: Vec<CreateAssetRequest>,
) -> Envelope<BatchOutcome<assets::Model>> {
    let mut outcome = BatchOutcome::default();

    for raw in raw_assets {
        let symbol = raw.symbol.clone();

        let existing = Assets::find()
            .filter(assets::Column::Symbol.eq(&symbol))
            .one(db)
            .await;

        match existing {
            Ok(Some(_)) => {
                tracing::warn!(symbol = %symbol, "duplicate asset skipped");
                outcome.duplicates.push(symbol);
            }
            Ok(None) => match to_active_model(raw).insert(db).await {
                Ok(created) => {
                    tracing::info!(symbol = %symbol, "asset created");
                    outcome.created.push(created);
                }
                Err(e) => {
                    tracing::error!(symbol = %symbol, "failed to create asset: {}", e);
                    outcome.failed.push(FailedRecord {
                        key: symbol,
                        reason: e.to_string(),
                    });
                }
            },
            Err(e) => {
                tracing::error!(symbol = %symbol, "failed to create asset: {}", e);
                outcome.failed.push(FailedRecord {
                    key: symbol,
                    reason: e.to_string(),
                });
            }
        }
    }

    Envelope::multi_status(outcome)
}

pub async fn find_by_symbol(db: &DatabaseConnection, symbol: &str) -> Envelope<assets::Model> {
    let found = Assets::find()
        .filter(assets::Column::Symbol.eq(symbol))
        .one(db)
        .await;

    match found {
        Ok(Some(asset)) => Envelope::ok(asset),
        Ok(None) => {
            tracing::warn!(symbol = %symbol, "asset not found");
            Envelope::not_found()
        }
        Err(e) => {
            tracing::error!("failed to find asset: {}", e);
            Envelope::internal()
        }
    }
}
