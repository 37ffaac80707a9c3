//! Secret models

use serde::{Deserialize, Serialize};

/// Workspace secret (reference and name only - values are not rendered)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    /// Unique secret reference
    #[serde(rename = "ref")]
    pub reference: String,

    /// Secret name
    #[serde(default)]
    pub name: String,
}

impl Secret {
    /// Create a secret record.
    #[cfg(test)]
    pub fn new(reference: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            name: name.into(),
        }
    }
}
