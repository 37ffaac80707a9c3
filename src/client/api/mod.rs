//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - API-key login
//! - [`SecretsApi`] - Secret listing

mod auth;
mod secrets;

pub use auth::AuthApi;
pub use secrets::SecretsApi;
