//! Global CLI options shared across all commands
//!
//! Collects the global flags into one struct so handlers take a single
//! `&GlobalOptions` instead of a growing parameter list.

use crate::cli::Cli;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For each option the precedence is: CLI flag > environment variable > config file.
/// This struct captures the CLI/env layer; config file values are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Custom config file path (defaults to ~/.wsctl/config.yaml)
    pub config: Option<String>,

    /// Workspace reference override (bypasses active_workspace in config)
    pub workspace: Option<String>,

    /// API endpoint override for development/testing
    pub endpoint: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            workspace: cli.workspace.clone(),
            endpoint: cli.endpoint.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get workspace override as `Option<&str>`.
    pub fn workspace_ref(&self) -> Option<&str> {
        self.workspace.as_deref()
    }

    /// Get endpoint override as `Option<&str>`.
    pub fn endpoint_ref(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}
