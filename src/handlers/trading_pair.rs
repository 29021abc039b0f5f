use axum::extract::State;
use axum::Json;

use crate::entities::trading_pairs;
use crate::models::response::Envelope;
use crate::models::trading_pair::CreateTradingPairRequest;
use crate::services::trading_pair;
use crate::AppState;

pub async fn create_trading_pair(
    State(state): State<AppState>,
    Json(raw): Json<CreateTradingPairRequest>,
) -> Envelope<trading_pairs::Model> {
    trading_pair::create_trading_pair(&state.db, raw).await
}
