use serde::{Deserialize, Serialize};

/// Body of POST /robot/create-robot. `config` is an opaque blob stored
/// without inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRobotRequest {
    pub user_id: i32,
    pub telegram_id: i32,
    pub name: String,
    pub strategy: String,
    pub config: Option<serde_json::Value>,
}
