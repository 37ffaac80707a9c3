//! Workspace API data models

mod auth;
mod secret;

pub use auth::AccessToken;
pub use secret::Secret;
