use axum::extract::State;
use axum::Json;

use crate::entities::telegrams;
use crate::models::response::Envelope;
use crate::models::telegram::CreateTelegramRequest;
use crate::services::telegram;
use crate::AppState;

pub async fn create_telegram(
    State(state): State<AppState>,
    Json(raw): Json<CreateTelegramRequest>,
) -> Envelope<telegrams::Model> {
    telegram::create_telegram(&state.db, raw).await
}
