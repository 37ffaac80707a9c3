//! Authentication models

use serde::{Deserialize, Serialize};

/// Access token issued by the identity login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    /// Bearer token sent with every API request
    pub access_token: String,
}
