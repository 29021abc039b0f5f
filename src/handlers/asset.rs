use axum::extract::{Path, State};
use axum::Json;

use crate::entities::assets;
use crate::models::asset::CreateAssetRequest;
use crate::models::response::Envelope;
use crate::services::asset;
use crate::AppState;

pub async fn create_asset(
    State(state): State<AppState>,
    Json(raw): Json<CreateAssetRequest>,
) -> Envelope<assets::Model> {
    asset::create_asset(&state.db, raw).await
}

pub async fn find_by_symbol(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Envelope<assets::Model> {
    asset::find_by_symbol(&state.db, &symbol).await
}
