//! Workspace API client
//!
//! [`api`] holds the traits commands program against, [`workspace`] the HTTP
//! implementation, and `mock` a test double with call counting.

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod workspace;

pub use api::{AuthApi, SecretsApi};
#[cfg(test)]
pub use mock::MockWorkspaceClient;
pub use pagination::{ListRequest, ListResponse};
pub use workspace::WorkspaceClient;
