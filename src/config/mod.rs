//! Configuration management for wsctl
//!
//! The config file holds every linked workspace plus the reference of the
//! active one. Commands never read it implicitly; they load it through
//! [`Config::load_at`] and pass the resolved [`Workspace`] along.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Reference of the workspace used when no override is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_workspace: Option<String>,

    /// Linked workspaces keyed by workspace reference
    #[serde(default)]
    pub workspaces: BTreeMap<String, Workspace>,
}

/// A linked workspace and its credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Human-readable workspace name
    pub name: String,

    /// Base URL of the workspace API
    pub endpoint: String,

    /// Secret half of the API key (the workspace reference is the key id)
    pub access_key_secret: String,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".wsctl").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path (default location otherwise)
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional path (default location otherwise)
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // The file holds API secrets
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Resolve the workspace a command should run against.
    ///
    /// An explicit override wins over the active workspace.
    pub fn resolve_workspace<'a>(
        &'a self,
        override_ref: Option<&'a str>,
    ) -> Result<(&'a str, &'a Workspace)> {
        let reference = override_ref
            .or(self.active_workspace.as_deref())
            .ok_or(ConfigError::NoActiveWorkspace)?;

        let workspace = self.get_workspace(reference)?;
        Ok((reference, workspace))
    }

    /// Look up a linked workspace by reference
    pub fn get_workspace(&self, reference: &str) -> Result<&Workspace> {
        self.workspaces
            .get(reference)
            .ok_or_else(|| ConfigError::UnknownWorkspace(reference.to_string()).into())
    }

    /// Add or replace a workspace. The first linked workspace becomes active.
    pub fn link(&mut self, reference: &str, workspace: Workspace) {
        self.workspaces.insert(reference.to_string(), workspace);
        if self.active_workspace.is_none() {
            self.active_workspace = Some(reference.to_string());
        }
    }

    /// Remove a workspace, clearing the active reference if it pointed there
    pub fn unlink(&mut self, reference: &str) -> Result<Workspace> {
        let removed = self
            .workspaces
            .remove(reference)
            .ok_or_else(|| ConfigError::UnknownWorkspace(reference.to_string()))?;

        if self.active_workspace.as_deref() == Some(reference) {
            self.active_workspace = None;
        }

        Ok(removed)
    }

    /// Make a linked workspace the active one
    pub fn set_active(&mut self, reference: &str) -> Result<()> {
        self.get_workspace(reference)?;
        self.active_workspace = Some(reference.to_string());
        Ok(())
    }

    /// Check whether a reference is the active workspace
    pub fn is_active(&self, reference: &str) -> bool {
        self.active_workspace.as_deref() == Some(reference)
    }
}
