//! Action creators for the challenge family.
//!
//! INIT creators are synchronous and only normalize their arguments.
//! DONE creators start the remote call and return a deferred action; a
//! failure is tagged with the ID of the request it belongs to and still
//! resolves to the DONE action, so the reducer sees both outcomes.

use std::sync::Arc;

use serde_json::Value;

use super::action::ChallengeAction;
use super::error::ActionError;
use super::model::{
    ChallengeDetails, ChallengeUpdated, CheckpointsLoaded, EntityId, ResultsLoaded,
    SubmissionsLoaded,
};
use crate::action::AppAction;
use crate::config::AuthTokens;
use crate::dispatch::Dispatchable;
use crate::services::ChallengeApi;

/// Drops all checkpoints loaded before.
pub fn drop_checkpoints() -> AppAction {
    ChallengeAction::DropCheckpoints.into()
}

/// Drops all challenge results loaded before.
pub fn drop_results() -> AppAction {
    ChallengeAction::DropResults.into()
}

/// Signals the beginning of challenge details loading.
pub fn get_details_init(challenge_id: impl Into<EntityId>) -> AppAction {
    ChallengeAction::GetDetailsInit(challenge_id.into()).into()
}

/// Loads challenge details.
pub fn get_details_done(
    api: Arc<dyn ChallengeApi>,
    challenge_id: impl Into<EntityId>,
    auth: AuthTokens,
) -> Dispatchable<AppAction> {
    let challenge_id = challenge_id.into();
    Dispatchable::deferred(
        async move { fetch_details(api.as_ref(), &challenge_id, &auth).await },
        |outcome| AppAction::Challenge(ChallengeAction::GetDetailsDone(outcome)),
    )
}

pub(crate) async fn fetch_details(
    api: &dyn ChallengeApi,
    challenge_id: &EntityId,
    auth: &AuthTokens,
) -> Result<ChallengeDetails, ActionError> {
    api.challenge_details(challenge_id, auth)
        .await
        .map_err(|e| ActionError::from_service(challenge_id.as_str(), &e))
}

/// Signals the beginning of user submissions loading.
pub fn get_submissions_init(challenge_id: impl Into<EntityId>) -> AppAction {
    ChallengeAction::GetSubmissionsInit(challenge_id.into()).into()
}

/// Loads the user's submissions to the challenge.
pub fn get_submissions_done(
    api: Arc<dyn ChallengeApi>,
    challenge_id: impl Into<EntityId>,
    auth: AuthTokens,
) -> Dispatchable<AppAction> {
    let challenge_id = challenge_id.into();
    Dispatchable::deferred(
        async move { fetch_submissions(api.as_ref(), challenge_id, &auth).await },
        |outcome| AppAction::Challenge(ChallengeAction::GetSubmissionsDone(outcome)),
    )
}

pub(crate) async fn fetch_submissions(
    api: &dyn ChallengeApi,
    challenge_id: EntityId,
    auth: &AuthTokens,
) -> Result<SubmissionsLoaded, ActionError> {
    match api.my_submissions(&challenge_id, auth).await {
        Ok(submissions) => Ok(SubmissionsLoaded {
            challenge_id,
            submissions,
        }),
        Err(e) => Err(ActionError::from_service(challenge_id.as_str(), &e)),
    }
}

/// Signals the beginning of registration for a challenge.
pub fn register_init() -> AppAction {
    ChallengeAction::RegisterInit.into()
}

/// Registers the user, then silently re-fetches the challenge details.
pub fn register_done(
    api: Arc<dyn ChallengeApi>,
    auth: AuthTokens,
    challenge_id: impl Into<EntityId>,
) -> Dispatchable<AppAction> {
    let challenge_id = challenge_id.into();
    Dispatchable::deferred(
        async move {
            api.register(&challenge_id, &auth)
                .await
                .map_err(|e| ActionError::from_service(challenge_id.as_str(), &e))?;
            fetch_details(api.as_ref(), &challenge_id, &auth).await
        },
        |outcome| AppAction::Challenge(ChallengeAction::RegisterDone(outcome)),
    )
}

/// Signals the beginning of unregistration from a challenge.
pub fn unregister_init() -> AppAction {
    ChallengeAction::UnregisterInit.into()
}

/// Unregisters the user, then silently re-fetches the challenge details.
pub fn unregister_done(
    api: Arc<dyn ChallengeApi>,
    auth: AuthTokens,
    challenge_id: impl Into<EntityId>,
) -> Dispatchable<AppAction> {
    let challenge_id = challenge_id.into();
    Dispatchable::deferred(
        async move {
            api.unregister(&challenge_id, &auth)
                .await
                .map_err(|e| ActionError::from_service(challenge_id.as_str(), &e))?;
            fetch_details(api.as_ref(), &challenge_id, &auth).await
        },
        |outcome| AppAction::Challenge(ChallengeAction::UnregisterDone(outcome)),
    )
}

/// Signals the beginning of challenge results loading.
pub fn load_results_init(challenge_id: impl Into<EntityId>) -> AppAction {
    ChallengeAction::LoadResultsInit(challenge_id.into()).into()
}

/// Loads challenge results. `challenge_type` selects the track
/// (e.g. `develop`, `design`).
pub fn load_results_done(
    api: Arc<dyn ChallengeApi>,
    auth: AuthTokens,
    challenge_id: impl Into<EntityId>,
    challenge_type: impl Into<String>,
) -> Dispatchable<AppAction> {
    let challenge_id = challenge_id.into();
    let challenge_type = challenge_type.into();
    Dispatchable::deferred(
        async move {
            match api.results(&challenge_id, &challenge_type, &auth).await {
                Ok(results) => Ok(ResultsLoaded {
                    challenge_id,
                    results,
                }),
                Err(e) => Err(ActionError::from_service(challenge_id.as_str(), &e)),
            }
        },
        |outcome| AppAction::Challenge(ChallengeAction::LoadResultsDone(outcome)),
    )
}

/// Signals the beginning of checkpoints loading.
pub fn fetch_checkpoints_init() -> AppAction {
    ChallengeAction::FetchCheckpointsInit.into()
}

/// Loads checkpoint data; every item starts collapsed.
pub fn fetch_checkpoints_done(
    api: Arc<dyn ChallengeApi>,
    auth: AuthTokens,
    challenge_id: impl Into<EntityId>,
) -> Dispatchable<AppAction> {
    let challenge_id = challenge_id.into();
    Dispatchable::deferred(
        async move {
            match api.checkpoints(&challenge_id, &auth).await {
                Ok(mut checkpoints) => {
                    checkpoints.collapse_all();
                    Ok(CheckpointsLoaded {
                        challenge_id,
                        checkpoints,
                    })
                }
                Err(e) => Err(ActionError::from_service(challenge_id.as_str(), &e)),
            }
        },
        |outcome| AppAction::Challenge(ChallengeAction::FetchCheckpointsDone(outcome)),
    )
}

/// Expands or collapses the feedback panel of one checkpoint.
pub fn toggle_checkpoint_feedback(id: impl Into<EntityId>, open: bool) -> AppAction {
    ChallengeAction::ToggleCheckpointFeedback {
        id: id.into(),
        open,
    }
    .into()
}

/// Fresh operation uuid for [`update_challenge_init`].
pub fn new_update_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Signals the beginning of a challenge update identified by `uuid`.
pub fn update_challenge_init(uuid: impl Into<String>) -> AppAction {
    ChallengeAction::UpdateChallengeInit(uuid.into()).into()
}

/// Saves `challenge`; `uuid` must match the preceding
/// [`update_challenge_init`] for the result to be applied.
pub fn update_challenge_done(
    api: Arc<dyn ChallengeApi>,
    uuid: impl Into<String>,
    challenge: Value,
    auth: AuthTokens,
) -> Dispatchable<AppAction> {
    let uuid = uuid.into();
    Dispatchable::deferred(
        async move {
            match api.update_challenge(&challenge, &auth).await {
                Ok(res) => Ok(ChallengeUpdated { uuid, res }),
                Err(e) => Err(ActionError::from_service(uuid, &e)),
            }
        },
        |outcome| AppAction::Challenge(ChallengeAction::UpdateChallengeDone(outcome)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creators_stringify_ids() {
        assert_eq!(
            get_details_init(12345),
            AppAction::Challenge(ChallengeAction::GetDetailsInit(EntityId::from("12345")))
        );
        assert_eq!(get_submissions_init(7u32), get_submissions_init("7"));
        assert_eq!(load_results_init(9usize), load_results_init("9"));
        assert_eq!(
            toggle_checkpoint_feedback(3, true),
            toggle_checkpoint_feedback("3", true)
        );
    }

    #[test]
    fn update_uuids_are_unique() {
        assert_ne!(new_update_uuid(), new_update_uuid());
    }

    #[test]
    fn toggle_carries_target_state() {
        assert_eq!(
            toggle_checkpoint_feedback(3u32, true),
            AppAction::Challenge(ChallengeAction::ToggleCheckpointFeedback {
                id: EntityId::from("3"),
                open: true,
            })
        );
    }
}
