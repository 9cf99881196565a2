//! Failure payload carried by DONE actions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::ServiceError;

/// A failed remote operation, tagged with the ID of the request it
/// belongs to (challenge ID, submission ID, or update uuid).
///
/// The reducer uses `id` to match the failure to the loading flag it
/// should clear; `message` is what ends up in `fetchChallengeFailure`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ActionError {
    pub id: String,
    pub message: String,
}

impl ActionError {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Tag a service failure with the correlating ID and log it.
    pub fn from_service(id: impl Into<String>, error: &ServiceError) -> Self {
        let id = id.into();
        tracing::warn!(id = %id, error_type = error.error_type(), "remote operation failed: {}", error);
        Self {
            id,
            message: error.to_string(),
        }
    }
}
