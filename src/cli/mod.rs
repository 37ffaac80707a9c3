//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod handlers;
pub mod secret;
pub mod workspace;

pub use args::{GlobalOptions, PageSizeArgs};
pub use context::CommandContext;

/// wsctl - operator CLI for workspace secrets
#[derive(Parser, Debug)]
#[command(name = "wsctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Override config file location
    #[arg(long, global = true, env = "WSCTL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Use this workspace instead of the active one
    #[arg(long, global = true, env = "WSCTL_WORKSPACE", hide_env = true)]
    pub workspace: Option<String>,

    /// Override the workspace API endpoint
    #[arg(long, global = true, env = "WSCTL_ENDPOINT", hide_env = true)]
    pub endpoint: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "WSCTL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage Secrets in the active Workspace
    #[command(subcommand, visible_alias = "secret")]
    Secrets(SecretsCommands),

    /// Manage linked Workspaces
    #[command(subcommand, visible_alias = "workspace")]
    Workspaces(WorkspacesCommands),

    /// Display version information
    Version,
}

/// Secret subcommands
#[derive(Subcommand, Debug)]
pub enum SecretsCommands {
    /// Display all Secrets in the active Workspace
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            wsctl secrets list                # First 1000 secrets\n  \
            wsctl secrets list -s 20          # First 20 secrets\n  \
            wsctl secrets list --workspace WO123"
    )]
    List {
        #[command(flatten)]
        pagination: PageSizeArgs,
    },
}

/// Workspace subcommands
#[derive(Subcommand, Debug)]
pub enum WorkspacesCommands {
    /// List linked Workspaces
    #[command(visible_alias = "ls")]
    List,

    /// Set the active Workspace
    Use {
        /// Workspace reference
        reference: String,
    },

    /// Link a Workspace using its API key
    #[command(after_help = "EXAMPLES:\n  \
            wsctl workspaces link --ref WO123 --name Production --url https://api.example.com/v1\n  \
            WSCTL_ACCESS_KEY_SECRET=... wsctl workspaces link --ref WO123 --name CI --url http://localhost:50051")]
    Link {
        /// Workspace reference (also the access key id)
        #[arg(long = "ref")]
        reference: String,

        /// Display name for the Workspace
        #[arg(long)]
        name: String,

        /// Workspace API endpoint URL
        #[arg(long)]
        url: String,

        /// Access key secret (prompted for when omitted)
        #[arg(long, env = "WSCTL_ACCESS_KEY_SECRET", hide_env_values = true)]
        access_key_secret: Option<String>,
    },

    /// Remove a linked Workspace
    Unlink {
        /// Workspace reference
        reference: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_secret_alias() {
        let cli = Cli::try_parse_from(["wsctl", "secret", "ls"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Secrets(SecretsCommands::List { .. })
        ));
    }

    #[test]
    fn test_secrets_list_rejects_positional_args() {
        assert!(Cli::try_parse_from(["wsctl", "secrets", "list", "extra"]).is_err());
    }

    #[test]
    fn test_workspaces_use_parses_reference() {
        let cli = Cli::try_parse_from(["wsctl", "workspaces", "use", "WO-1"]).unwrap();
        match cli.command {
            Commands::Workspaces(WorkspacesCommands::Use { reference }) => {
                assert_eq!(reference, "WO-1")
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
