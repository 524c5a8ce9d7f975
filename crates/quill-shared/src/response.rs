//! Error body returned on every failed request.

use serde::{Deserialize, Serialize};

/// `{ "error": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A human-readable explanation of the failure.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Engine details never reach the client.
    pub fn internal_error() -> Self {
        Self::new("Internal Server Error")
    }
}
