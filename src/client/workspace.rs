//! Workspace API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use super::api::{AuthApi, SecretsApi};
use super::models::{AccessToken, Secret};
use super::pagination::{ListRequest, ListResponse};
use crate::error::{ApiError, Error, Result};

/// Transport timeout for every request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the workspace reference on authenticated requests
const ACCESS_KEY_HEADER: &str = "X-Access-Key-Id";

/// Workspace API client
pub struct WorkspaceClient {
    http: HttpClient,
    base_url: String,
    access_key_id: String,
    access_token: RwLock<Option<String>>,
}

impl WorkspaceClient {
    /// Create a client for one workspace endpoint
    pub fn new(endpoint: &str, access_key_id: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: endpoint.trim_end_matches('/').to_string(),
            access_key_id: access_key_id.to_string(),
            access_token: RwLock::new(None),
        })
    }

    /// Store the token used for subsequent requests
    pub async fn set_access_token(&self, token: AccessToken) {
        *self.access_token.write().await = Some(token.access_token);
    }

    /// Base URL requests are sent to
    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn bearer(&self) -> Result<String> {
        self.access_token
            .read()
            .await
            .clone()
            .ok_or_else(|| ApiError::Unauthorized.into())
    }

    /// Make an authenticated GET request and decode the JSON body
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let token = self.bearer().await?;
        let url = format!("{}{}", self.base_url, path);

        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(token)
            .header(ACCESS_KEY_HEADER, &self.access_key_id)
            .send()
            .await
            .map_err(ApiError::from)?;

        decode(response).await
    }
}

/// Decode a successful response or map the status to an [`ApiError`]
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status == StatusCode::OK {
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        return serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        });
    }

    Err(status_error(status, response).await)
}

async fn status_error(status: StatusCode, response: Response) -> Error {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized.into(),
        StatusCode::FORBIDDEN => ApiError::Forbidden.into(),
        StatusCode::NOT_FOUND => {
            let msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Resource not found".to_string());
            ApiError::NotFound(msg).into()
        }
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            ApiError::RateLimit(Duration::from_secs(retry_after)).into()
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            let msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Bad request".to_string());
            ApiError::BadRequest(msg).into()
        }
        status if status.is_server_error() => {
            let msg = response
                .text()
                .await
                .unwrap_or_else(|_| format!("Server error: {}", status));
            ApiError::ServerError(msg).into()
        }
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)).into(),
    }
}

#[async_trait]
impl AuthApi for WorkspaceClient {
    async fn authenticate(
        &self,
        access_key_id: &str,
        access_key_secret: &str,
    ) -> Result<AccessToken> {
        let url = format!("{}/identity/login", self.base_url);
        debug!("POST {}", url);

        let body = serde_json::json!({
            "accessKeyId": access_key_id,
            "accessKeySecret": access_key_secret,
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from)?;

        decode(response).await
    }
}

#[async_trait]
impl SecretsApi for WorkspaceClient {
    async fn list_secrets(&self, request: &ListRequest) -> Result<ListResponse<Secret>> {
        self.get("/secrets", &request.to_query_params()).await
    }
}
