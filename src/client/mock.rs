//! Mock workspace API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, SecretsApi};
use super::models::{AccessToken, Secret};
use super::pagination::{ListRequest, ListResponse};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockWorkspaceClient::new()
///     .with_secrets(ListResponse::new(vec![Secret::new("sec-1", "db-password")]))
///     .await;
///
/// let page = mock.list_secrets(&ListRequest::default()).await?;
/// assert_eq!(page.items.len(), 1);
/// ```
#[derive(Default)]
pub struct MockWorkspaceClient {
    /// Page returned from list_secrets
    secrets: Arc<Mutex<Option<ListResponse<Secret>>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured list requests for test assertions
    captured_requests: Arc<Mutex<Vec<ListRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub authenticate: usize,
    pub list_secrets: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.authenticate + self.list_secrets
    }
}

impl MockWorkspaceClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the page returned from list_secrets.
    pub async fn with_secrets(self, page: ListResponse<Secret>) -> Self {
        *self.secrets.lock().await = Some(page);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured list requests.
    pub async fn captured_requests(&self) -> Vec<ListRequest> {
        self.captured_requests.lock().await.clone()
    }

    async fn check_error(&self) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl AuthApi for MockWorkspaceClient {
    async fn authenticate(&self, _access_key_id: &str, _secret: &str) -> Result<AccessToken> {
        self.call_count.lock().await.authenticate += 1;
        self.check_error().await?;

        Ok(AccessToken {
            access_token: "mock-access-token".to_string(),
        })
    }
}

#[async_trait]
impl SecretsApi for MockWorkspaceClient {
    async fn list_secrets(&self, request: &ListRequest) -> Result<ListResponse<Secret>> {
        self.call_count.lock().await.list_secrets += 1;
        self.captured_requests.lock().await.push(request.clone());
        self.check_error().await?;

        Ok(self
            .secrets
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| ListResponse::new(Vec::new())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_page() {
        let mock = MockWorkspaceClient::new()
            .with_secrets(ListResponse::new(vec![Secret::new("sec-1", "db-password")]))
            .await;

        let page = mock.list_secrets(&ListRequest::default()).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(mock.call_counts().await.list_secrets, 1);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockWorkspaceClient::new()
            .with_error(ApiError::Forbidden)
            .await;

        assert!(mock.list_secrets(&ListRequest::default()).await.is_err());
        assert!(mock.list_secrets(&ListRequest::default()).await.is_ok());
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_authenticate_counts_calls() {
        let mock = MockWorkspaceClient::new();

        let token = mock.authenticate("WO-1", "secret").await.unwrap();
        mock.list_secrets(&ListRequest::default()).await.unwrap();

        assert_eq!(token.access_token, "mock-access-token");
        let counts = mock.call_counts().await;
        assert_eq!(counts.authenticate, 1);
        assert_eq!(counts.list_secrets, 1);
        assert_eq!(counts.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_authenticate_returns_configured_error() {
        let mock = MockWorkspaceClient::new()
            .with_error(ApiError::Unauthorized)
            .await;

        let err = mock.authenticate("WO-1", "bad").await.unwrap_err();

        assert!(matches!(err, crate::error::Error::Api(ApiError::Unauthorized)));
        assert_eq!(mock.call_counts().await.authenticate, 1);
        assert!(mock.captured_requests().await.is_empty());
    }
}
