//! The service seam between action creators and the network.

use async_trait::async_trait;
use serde_json::Value;

use super::error::ServiceError;
use crate::challenge::{ChallengeDetails, Checkpoints, EntityId, Submission};
use crate::config::AuthTokens;

/// Remote operations the challenge action creators depend on.
///
/// Implementations translate the remote request/response shapes into
/// the entity types the reducer folds.
#[async_trait]
pub trait ChallengeApi: Send + Sync {
    /// Normalized challenge details (v3).
    async fn challenge_details(
        &self,
        challenge_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<ChallengeDetails, ServiceError>;

    /// Register the authenticated user for a challenge (v3).
    async fn register(&self, challenge_id: &EntityId, auth: &AuthTokens)
        -> Result<(), ServiceError>;

    /// Unregister the authenticated user from a challenge (v3).
    async fn unregister(
        &self,
        challenge_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<(), ServiceError>;

    /// Save challenge fields; returns the updated record as the server sees it (v3).
    async fn update_challenge(
        &self,
        challenge: &Value,
        auth: &AuthTokens,
    ) -> Result<Value, ServiceError>;

    /// The user's own submissions to a challenge (v2).
    async fn my_submissions(
        &self,
        challenge_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<Vec<Submission>, ServiceError>;

    /// Checkpoint round data (v2). Any status other than 200 is an error.
    async fn checkpoints(
        &self,
        challenge_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<Checkpoints, ServiceError>;

    /// Final results of a challenge of the given type (v2).
    async fn results(
        &self,
        challenge_id: &EntityId,
        challenge_type: &str,
        auth: &AuthTokens,
    ) -> Result<Vec<Value>, ServiceError>;

    /// Delete one of the user's submissions (v3).
    async fn delete_submission(
        &self,
        submission_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<(), ServiceError>;
}
