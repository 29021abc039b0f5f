use axum::extract::State;
use axum::Json;

use crate::entities::users;
use crate::models::response::Envelope;
use crate::models::user::{CreateUserRequest, UserSummary};
use crate::services::user;
use crate::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    Json(raw): Json<CreateUserRequest>,
) -> Envelope<UserSummary> {
    user::create_user(&state.db, raw).await
}

pub async fn get_all(State(state): State<AppState>) -> Envelope<Vec<users::Model>> {
    user::get_all(&state.db).await
}
