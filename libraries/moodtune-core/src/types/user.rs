/// Backend user profile
use serde::{Deserialize, Serialize};

/// Profile stored by the backend, returned from `/api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbUser {
    pub id: String,
    /// Identity provider subject
    pub uid: String,
    pub email: String,
    pub display_name: String,
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,
}
