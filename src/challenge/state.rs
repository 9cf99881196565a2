use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::model::{ChallengeDetails, Checkpoints, EntityId, Submission};
use crate::store::StoreState;

/// State tree of the challenge family.
///
/// Serializes with the camelCase field names view code reads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengeState {
    /// Replaced wholesale by each successful details fetch.
    pub details: Option<ChallengeDetails>,
    pub loading_details_for_challenge_id: EntityId,
    /// `false` when the last details fetch succeeded, else its message.
    #[serde(with = "failure_flag")]
    pub fetch_challenge_failure: Option<String>,

    pub my_submissions: MySubmissions,
    pub loading_submissions_for_challenge_id: EntityId,
    pub my_submissions_management: SubmissionsManagement,

    pub checkpoints: Option<Checkpoints>,
    pub loading_checkpoints: bool,

    pub results: Option<Vec<Value>>,
    pub results_loaded_for_challenge_id: EntityId,
    pub loading_results_for_challenge_id: EntityId,

    pub registering: bool,
    pub unregistering: bool,

    /// Correlates an in-flight update with its completion.
    pub updating_challenge_uuid: String,
}

impl StoreState for ChallengeState {}

impl ChallengeState {
    /// Loaded details, if they belong to `challenge_id`.
    pub fn details_for(&self, challenge_id: &EntityId) -> Option<&ChallengeDetails> {
        self.details
            .as_ref()
            .filter(|details| details.id().as_ref() == Some(challenge_id))
    }

    /// Loaded submissions, if they belong to `challenge_id`.
    ///
    /// The reducer keeps whichever response arrived last, so callers must
    /// go through this check before showing the list.
    pub fn submissions_for(&self, challenge_id: &EntityId) -> Option<&[Submission]> {
        if &self.my_submissions.challenge_id != challenge_id {
            return None;
        }
        self.my_submissions.v2.as_deref()
    }

    /// Loaded results, if they belong to `challenge_id`.
    pub fn results_for(&self, challenge_id: &EntityId) -> Option<&[Value]> {
        if &self.results_loaded_for_challenge_id != challenge_id {
            return None;
        }
        self.results.as_deref()
    }

    pub fn is_loading_details(&self) -> bool {
        !self.loading_details_for_challenge_id.is_empty()
    }
}

/// The user's submissions and the challenge they belong to.
///
/// The empty record (`challengeId == ""`, `v2 == null`) means nothing
/// is loaded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MySubmissions {
    pub challenge_id: EntityId,
    pub v2: Option<Vec<Submission>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionsManagement {
    pub deleting_submission: bool,
}

/// `Option<String>` on the wire as `false | "message"`.
mod failure_flag {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(message) => serializer.serialize_str(message),
            None => serializer.serialize_bool(false),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Bool(false) | Value::Null => Ok(None),
            Value::String(message) => Ok(Some(message)),
            other => Err(D::Error::custom(format!(
                "expected false or an error message, got {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_state_serializes_to_initial_tree() {
        let value = serde_json::to_value(ChallengeState::default()).expect("serializable");
        assert_eq!(
            value,
            json!({
                "details": null,
                "loadingDetailsForChallengeId": "",
                "fetchChallengeFailure": false,
                "mySubmissions": {"challengeId": "", "v2": null},
                "loadingSubmissionsForChallengeId": "",
                "mySubmissionsManagement": {"deletingSubmission": false},
                "checkpoints": null,
                "loadingCheckpoints": false,
                "results": null,
                "resultsLoadedForChallengeId": "",
                "loadingResultsForChallengeId": "",
                "registering": false,
                "unregistering": false,
                "updatingChallengeUuid": ""
            })
        );
    }

    #[test]
    fn failure_flag_round_trips_message() {
        let state = ChallengeState {
            fetch_challenge_failure: Some("Unknown error".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&state).expect("serializable");
        assert_eq!(value["fetchChallengeFailure"], json!("Unknown error"));
        let back: ChallengeState = serde_json::from_value(value).expect("deserializable");
        assert_eq!(back, state);
    }

    #[test]
    fn submissions_for_checks_owner() {
        let state = ChallengeState {
            my_submissions: MySubmissions {
                challenge_id: EntityId::from("1"),
                v2: Some(vec![Submission::new("10")]),
            },
            ..Default::default()
        };
        assert_eq!(state.submissions_for(&EntityId::from("1")).map(<[_]>::len), Some(1));
        assert!(state.submissions_for(&EntityId::from("2")).is_none());
    }
}
