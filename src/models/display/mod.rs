//! Display models for table output
//!
//! Each display model owns the static column schema its command renders.

mod secret;
mod workspace;

pub use secret::SECRET_COLUMNS;
pub use workspace::{WORKSPACE_COLUMNS, WorkspaceDisplay};
