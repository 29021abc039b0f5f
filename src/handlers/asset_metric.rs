use axum::extract::State;
use axum::Json;

use crate::entities::asset_metrics;
use crate::models::asset_metric::CreateAssetMetricRequest;
use crate::models::response::Envelope;
use crate::services::asset_metric;
use crate::AppState;

pub async fn create_asset_metric(
    State(state): State<AppState>,
    Json(raw): Json<CreateAssetMetricRequest>,
) -> Envelope<asset_metrics::Model> {
    asset_metric::create_asset_metric(&state.db, raw).await
}
