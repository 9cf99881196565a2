//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

use challenge_store::challenge::{ChallengeDetails, Checkpoints, EntityId, Submission};
use challenge_store::config::AuthTokens;
use challenge_store::services::{ChallengeApi, ServiceError};

/// Details the fake API serves for any challenge.
pub fn normalized_details() -> Value {
    json!({"id": 12345, "tag": "v3-normalized-details"})
}

/// In-memory `ChallengeApi` with canned responses.
///
/// Each call is recorded as `"<operation> <id>"`; operations listed via
/// [`FakeChallengeApi::failing`] answer with a 500.
pub struct FakeChallengeApi {
    details: Value,
    submissions: Vec<Submission>,
    checkpoints: Value,
    results: Vec<Value>,
    failing: HashSet<&'static str>,
    calls: Mutex<Vec<String>>,
    auth_seen: Mutex<Vec<AuthTokens>>,
}

impl Default for FakeChallengeApi {
    fn default() -> Self {
        Self {
            details: normalized_details(),
            submissions: vec![Submission::new("1")],
            checkpoints: json!({
                "checkpointResults": [
                    {"id": 1, "expanded": true},
                    {"id": 2}
                ]
            }),
            results: vec![json!({"handle": "winner", "placement": 1})],
            failing: HashSet::new(),
            calls: Mutex::new(Vec::new()),
            auth_seen: Mutex::new(Vec::new()),
        }
    }
}

impl FakeChallengeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    pub fn with_submissions(mut self, submissions: Vec<Submission>) -> Self {
        self.submissions = submissions;
        self
    }

    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn auth_seen(&self) -> Vec<AuthTokens> {
        self.auth_seen.lock().clone()
    }

    fn record(&self, operation: &'static str, id: &str, auth: &AuthTokens) -> Result<(), ServiceError> {
        self.calls.lock().push(format!("{} {}", operation, id));
        self.auth_seen.lock().push(auth.clone());
        if self.failing.contains(operation) {
            return Err(ServiceError::Status {
                status: 500,
                url: format!("fake://{}/{}", operation, id),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ChallengeApi for FakeChallengeApi {
    async fn challenge_details(
        &self,
        challenge_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<ChallengeDetails, ServiceError> {
        self.record("details", challenge_id.as_str(), auth)?;
        Ok(ChallengeDetails::try_from(self.details.clone()).expect("fixture is an object"))
    }

    async fn register(&self, challenge_id: &EntityId, auth: &AuthTokens) -> Result<(), ServiceError> {
        self.record("register", challenge_id.as_str(), auth)
    }

    async fn unregister(
        &self,
        challenge_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<(), ServiceError> {
        self.record("unregister", challenge_id.as_str(), auth)
    }

    async fn update_challenge(
        &self,
        challenge: &Value,
        auth: &AuthTokens,
    ) -> Result<Value, ServiceError> {
        let id = challenge.get("id").map(|v| v.to_string()).unwrap_or_default();
        self.record("update", &id, auth)?;
        Ok(challenge.clone())
    }

    async fn my_submissions(
        &self,
        challenge_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<Vec<Submission>, ServiceError> {
        self.record("submissions", challenge_id.as_str(), auth)?;
        Ok(self.submissions.clone())
    }

    async fn checkpoints(
        &self,
        challenge_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<Checkpoints, ServiceError> {
        self.record("checkpoints", challenge_id.as_str(), auth)?;
        Ok(serde_json::from_value(self.checkpoints.clone()).expect("fixture is valid"))
    }

    async fn results(
        &self,
        challenge_id: &EntityId,
        challenge_type: &str,
        auth: &AuthTokens,
    ) -> Result<Vec<Value>, ServiceError> {
        self.record("results", &format!("{}/{}", challenge_type, challenge_id), auth)?;
        Ok(self.results.clone())
    }

    async fn delete_submission(
        &self,
        submission_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<(), ServiceError> {
        self.record("delete_submission", submission_id.as_str(), auth)
    }
}

/// Auth segment used across tests.
pub fn test_auth() -> AuthTokens {
    AuthTokens::new(
        Some("TcAuthTokenV2".to_string()),
        Some("TcAuthTokenV3".to_string()),
    )
}
