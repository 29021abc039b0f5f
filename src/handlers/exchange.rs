use axum::extract::{Path, State};
use axum::Json;

use crate::entities::exchanges;
use crate::models::exchange::CreateExchangeRequest;
use crate::models::response::Envelope;
use crate::services::exchange;
use crate::AppState;

pub async fn create_exchange(
    State(state): State<AppState>,
    Json(raw): Json<CreateExchangeRequest>,
) -> Envelope<exchanges::Model> {
    exchange::create_exchange(&state.db, raw).await
}

pub async fn find_by_symbol(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Envelope<exchanges::Model> {
    exchange::find_by_symbol(&state.db, &symbol).await
}
