use serde::{Deserialize, Serialize};

/// Body of POST /telegram/create-telegram. The owning user is resolved by
/// username/email rather than id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTelegramRequest {
    pub bot_token: String,
    pub chat_id: String,
    pub username: String,
    pub email: String,
}
