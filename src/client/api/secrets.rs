//! Secrets API trait

use async_trait::async_trait;

use crate::client::models::Secret;
use crate::client::pagination::{ListRequest, ListResponse};
use crate::error::Result;

/// Secret operations scoped to the authenticated workspace
#[async_trait]
pub trait SecretsApi: Send + Sync {
    /// Fetch one page of secrets. Exactly one remote call, no retries.
    async fn list_secrets(&self, request: &ListRequest) -> Result<ListResponse<Secret>>;
}
