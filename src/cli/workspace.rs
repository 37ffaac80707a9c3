//! Workspace command implementations
//!
//! Manages the linked workspaces in the config file and which one is active.

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{AuthApi, WorkspaceClient};
use crate::config::{Config, Workspace};
use crate::error::{ConfigError, Error, Result};
use crate::models::{WORKSPACE_COLUMNS, WorkspaceDisplay};
use crate::output::{self, render};

/// List linked workspaces
pub fn list(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;
    let rows = WorkspaceDisplay::from_config(&config);

    if rows.is_empty() {
        println!(
            "No workspaces linked. Run {} to add one.",
            "wsctl workspaces link".cyan()
        );
        return Ok(());
    }

    output::print(&render(WORKSPACE_COLUMNS, &rows))
}

/// Switch the active workspace
pub fn use_workspace(reference: &str, opts: &GlobalOptions) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;

    if config.is_active(reference) {
        println!(
            "{} Workspace '{}' is already active.",
            "✓".green(),
            reference.bold()
        );
        return Ok(());
    }

    config.set_active(reference)?;
    config.save_at(opts.config_ref())?;

    println!("{} Switched to workspace: {}", "✓".green(), reference.bold());
    Ok(())
}

/// Link a workspace after checking its API key against the endpoint
pub async fn link(
    reference: &str,
    name: &str,
    url: &str,
    access_key_secret: Option<String>,
    opts: &GlobalOptions,
) -> Result<()> {
    let access_key_secret = match access_key_secret {
        Some(secret) => secret,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Access key secret for {}", reference))
            .interact()?,
    };

    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound)) => Config::default(),
        Err(e) => return Err(e),
    };

    println!("{}", "Authenticating...".cyan());
    let client = WorkspaceClient::new(url, reference)?;
    client.authenticate(reference, &access_key_secret).await?;
    println!("{}", "✓ Authentication successful!".green());

    config.link(
        reference,
        Workspace {
            name: name.to_string(),
            endpoint: url.to_string(),
            access_key_secret,
        },
    );
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "{} Linked workspace {} ({})",
        "✓".green(),
        reference.bold(),
        name
    );
    println!("  Configuration saved to: {}", config_path.display());
    if config.is_active(reference) {
        println!("  Active workspace: {}", reference.bold());
    }

    Ok(())
}

/// Remove a linked workspace
pub fn unlink(reference: &str, opts: &GlobalOptions) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;
    let was_active = config.is_active(reference);

    config.unlink(reference)?;
    config.save_at(opts.config_ref())?;

    println!("{} Unlinked workspace: {}", "✓".green(), reference.bold());
    if was_active {
        println!(
            "\n{} No workspace is active. Select one with: {}",
            "→".cyan(),
            "wsctl workspaces use <REF>".cyan()
        );
    }

    Ok(())
}
