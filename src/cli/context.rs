//! Command execution context
//!
//! The authenticated session a command runs in. It is built explicitly at the
//! start of a command and dropped when the command returns; nothing about the
//! session outlives the invocation.

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::client::{AuthApi, WorkspaceClient};
use crate::config::Config;
use crate::error::Result;

/// Authenticated session for one workspace.
pub struct CommandContext {
    /// Reference of the workspace the session belongs to
    pub workspace: String,
    /// API client with a valid access token
    pub client: WorkspaceClient,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// This handles:
    /// - Loading config from path (or default location)
    /// - Resolving the workspace (override, else active)
    /// - Applying the endpoint override if provided
    /// - Logging in with the workspace API key
    ///
    /// # Errors
    /// Returns error if config cannot be loaded, no workspace resolves, or the
    /// login call fails.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let (reference, workspace) = config.resolve_workspace(opts.workspace_ref())?;

        let endpoint = opts.endpoint_ref().unwrap_or(workspace.endpoint.as_str());
        debug!("Using workspace {} at {}", reference, endpoint);

        let client = WorkspaceClient::new(endpoint, reference)?;
        let token = client
            .authenticate(reference, &workspace.access_key_secret)
            .await?;
        client.set_access_token(token).await;

        Ok(Self {
            workspace: reference.to_string(),
            client,
        })
    }
}
