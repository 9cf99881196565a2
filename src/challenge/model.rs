//! Entity records and action payloads of the challenge family.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Normalized entity identifier.
///
/// Remote APIs hand out IDs as numbers in some places and strings in
/// others; every ID entering the state tree is stored in string form so
/// that equality checks against the `loading*ForChallengeId` fields hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stringify a JSON scalar the way the state tree expects.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&String> for EntityId {
    fn from(id: &String) -> Self {
        Self(id.clone())
    }
}

macro_rules! entity_id_from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for EntityId {
                fn from(id: $int) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

entity_id_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Null => Ok(Self::default()),
            other => Self::from_value(&other).ok_or_else(|| {
                serde::de::Error::custom(format!("expected string or number id, got {}", other))
            }),
        }
    }
}

/// Normalized challenge details as returned by the details service.
///
/// The record is kept verbatim; only `id` is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeDetails(Map<String, Value>);

impl ChallengeDetails {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn id(&self) -> Option<EntityId> {
        self.0.get("id").and_then(EntityId::from_value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Deep-merge `patch` into the record.
    ///
    /// Nested objects merge key by key; any other value replaces the
    /// existing one. Non-object patches are ignored.
    pub fn merge(&mut self, patch: &Value) {
        if let Value::Object(patch) = patch {
            merge_maps(&mut self.0, patch);
        }
    }
}

fn merge_maps(target: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (key, incoming) in patch {
        match (target.get_mut(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(nested)) => merge_maps(existing, nested),
            _ => {
                target.insert(key.clone(), incoming.clone());
            }
        }
    }
}

impl TryFrom<Value> for ChallengeDetails {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

/// One of the user's submissions to a challenge.
///
/// `submissionId` is kept as the server sent it; records without one
/// are kept too and never match a deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub submission_id: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Submission {
    pub fn new(submission_id: impl Into<EntityId>) -> Self {
        Self {
            submission_id: Value::String(submission_id.into().0),
            extra: Map::new(),
        }
    }

    /// Normalized form of `submissionId`.
    pub fn entity_id(&self) -> Option<EntityId> {
        EntityId::from_value(&self.submission_id)
    }
}

/// Checkpoint round data of a design challenge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoints {
    #[serde(default)]
    pub checkpoint_results: Vec<CheckpointResult>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Checkpoints {
    /// Mark every item collapsed; the UI toggles `expanded` afterwards.
    pub fn collapse_all(&mut self) {
        for item in &mut self.checkpoint_results {
            item.expanded = false;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckpointResult {
    /// Raw `id` as sent by the server.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    #[serde(default)]
    pub expanded: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CheckpointResult {
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: Value::String(id.into().0),
            ..Default::default()
        }
    }

    pub fn entity_id(&self) -> Option<EntityId> {
        EntityId::from_value(&self.id)
    }
}

/// Payload of a successful `GET_SUBMISSIONS_DONE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionsLoaded {
    pub challenge_id: EntityId,
    pub submissions: Vec<Submission>,
}

/// Payload of a successful `FETCH_CHECKPOINTS_DONE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointsLoaded {
    pub challenge_id: EntityId,
    pub checkpoints: Checkpoints,
}

/// Payload of a successful `LOAD_RESULTS_DONE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsLoaded {
    pub challenge_id: EntityId,
    pub results: Vec<Value>,
}

/// Payload of a successful `UPDATE_CHALLENGE_DONE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeUpdated {
    pub uuid: String,
    pub res: Value,
}
