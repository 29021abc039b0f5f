use axum::extract::State;
use axum::Json;

use crate::entities::robots;
use crate::models::response::Envelope;
use crate::models::robot::CreateRobotRequest;
use crate::services::robot;
use crate::AppState;

pub async fn create_robot(
    State(state): State<AppState>,
    Json(raw): Json<CreateRobotRequest>,
) -> Envelope<robots::Model> {
    robot::create_robot(&state.db, raw).await
}
