use serde::{Deserialize, Serialize};

/// Body of POST /user/create-user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
}

/// Trimmed creation response: the service only exposes username and email
/// for a freshly created user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub username: String,
    pub email: String,
}
