//! wsctl - operator CLI for workspace secrets

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{Cli, Commands, GlobalOptions, SecretsCommands, WorkspacesCommands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(err.exit_code());
    }
}

/// Send log output to stderr. `RUST_LOG` wins over `--debug`.
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Version => {
            println!("wsctl version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Secrets(secrets_cmd) => match secrets_cmd {
            SecretsCommands::List { pagination } => {
                cli::secret::list(&opts, &pagination.page_size).await
            }
        },
        Commands::Workspaces(workspaces_cmd) => match workspaces_cmd {
            WorkspacesCommands::List => cli::workspace::list(&opts),
            WorkspacesCommands::Use { reference } => {
                cli::workspace::use_workspace(&reference, &opts)
            }
            WorkspacesCommands::Link {
                reference,
                name,
                url,
                access_key_secret,
            } => cli::workspace::link(&reference, &name, &url, access_key_secret, &opts).await,
            WorkspacesCommands::Unlink { reference } => {
                cli::workspace::unlink(&reference, &opts)
            }
        },
    }
}
