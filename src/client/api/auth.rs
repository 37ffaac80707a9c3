//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::AccessToken;
use crate::error::Result;

/// Authentication operations for the workspace API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange a workspace API key for an access token
    async fn authenticate(&self, access_key_id: &str, access_key_secret: &str)
    -> Result<AccessToken>;
}
