//! Secret management commands

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::client::SecretsApi;
use crate::error::Result;
use crate::models::SECRET_COLUMNS;
use crate::output;

/// Run the secret list command
pub async fn list(opts: &GlobalOptions, page_size: &str) -> Result<()> {
    let table = run_list_command(
        page_size,
        "secrets",
        SECRET_COLUMNS,
        || CommandContext::new(opts),
        |ctx: CommandContext, request| async move {
            log::debug!("Listing secrets in workspace {}", ctx.workspace);
            ctx.client.list_secrets(&request).await
        },
    )
    .await?;

    output::print(&table)
}
