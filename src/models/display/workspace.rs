//! Workspace display model

use crate::config::Config;
use crate::output::ColumnSpec;

/// One linked workspace as shown by `workspaces list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceDisplay {
    pub reference: String,
    pub name: String,
    pub active: bool,
}

impl WorkspaceDisplay {
    /// Build display rows for every linked workspace, ordered by reference.
    pub fn from_config(config: &Config) -> Vec<Self> {
        config
            .workspaces
            .iter()
            .map(|(reference, ws)| Self {
                reference: reference.clone(),
                name: ws.name.clone(),
                active: config.is_active(reference),
            })
            .collect()
    }
}

pub const WORKSPACE_COLUMNS: &[ColumnSpec<WorkspaceDisplay>] = &[
    ColumnSpec {
        header: "REF",
        width: 40,
        value: |ws| ws.reference.clone(),
    },
    ColumnSpec {
        header: "NAME",
        width: 40,
        value: |ws| ws.name.clone(),
    },
    ColumnSpec {
        header: "ACTIVE",
        width: 6,
        value: |ws| if ws.active { "*" } else { "" }.to_string(),
    },
];
