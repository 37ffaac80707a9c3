//! Error types for the wsctl CLI

use std::time::Duration;
use thiserror::Error;

/// Result type alias for wsctl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Input errors are usage errors (2); everything else is a plain failure (1).
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Input(_) => 2,
            _ => 1,
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the workspace credentials or run `wsctl workspaces link` again.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `wsctl workspaces link` to add a workspace.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("No active workspace. Run `wsctl workspaces use <REF>` to select one.")]
    NoActiveWorkspace,

    #[error("Workspace '{0}' is not linked. Run `wsctl workspaces list` to see linked workspaces.")]
    UnknownWorkspace(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Command-line input errors, raised before any network activity
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid page size '{0}': expected a positive integer")]
    InvalidPageSize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_unauthorized_message() {
        let err = ApiError::Unauthorized;
        assert!(err.to_string().contains("wsctl workspaces link"));
    }

    #[test]
    fn test_api_error_not_found() {
        let err = ApiError::NotFound("workspace WO-123".to_string());
        assert!(err.to_string().contains("WO-123"));
    }

    #[test]
    fn test_api_error_rate_limit() {
        let err = ApiError::RateLimit(Duration::from_secs(30));
        let msg = err.to_string();
        assert!(msg.contains("Rate limit"));
        assert!(msg.contains("30"));
    }

    #[test]
    fn test_api_error_server_error() {
        let err = ApiError::ServerError("Internal error".to_string());
        assert!(err.to_string().contains("Internal error"));
    }

    #[test]
    fn test_config_error_no_active_workspace() {
        let err = ConfigError::NoActiveWorkspace;
        assert!(err.to_string().contains("wsctl workspaces use"));
    }

    #[test]
    fn test_config_error_unknown_workspace() {
        let err = ConfigError::UnknownWorkspace("WO-missing".to_string());
        assert!(err.to_string().contains("WO-missing"));
    }

    #[test]
    fn test_input_error_names_the_value() {
        let err = InputError::InvalidPageSize("abc".to_string());
        let msg = err.to_string();
        assert!(msg.contains("'abc'"));
        assert!(msg.contains("positive integer"));
    }

    #[test]
    fn test_exit_codes() {
        let input: Error = InputError::InvalidPageSize("0".to_string()).into();
        assert_eq!(input.exit_code(), 2);

        let api: Error = ApiError::Unauthorized.into();
        assert_eq!(api.exit_code(), 1);

        let config: Error = ConfigError::NotFound.into();
        assert_eq!(config.exit_code(), 1);
    }

    #[test]
    fn test_error_from_api_error() {
        let err: Error = ApiError::Forbidden.into();

        match err {
            Error::Api(ApiError::Forbidden) => (),
            _ => panic!("Expected Error::Api(ApiError::Forbidden)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
