//! Display models for CLI output

pub mod display;

pub use display::{SECRET_COLUMNS, WORKSPACE_COLUMNS, WorkspaceDisplay};
