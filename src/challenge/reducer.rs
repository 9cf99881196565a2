//! Reducer for the challenge state tree.

use super::action::ChallengeAction;
use super::error::ActionError;
use super::model::{ChallengeDetails, ChallengeUpdated, EntityId};
use super::state::{ChallengeState, MySubmissions};
use crate::action::AppAction;
use crate::smp::SmpAction;
use crate::store::Reducer;

/// Folds `CHALLENGE/*` and `SMP/*` actions into [`ChallengeState`].
pub struct ChallengeReducer;

impl Reducer for ChallengeReducer {
    type State = ChallengeState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AppAction::Challenge(action) => reduce_challenge(state, action),
            AppAction::Smp(action) => reduce_smp(state, action),
        }
    }
}

fn reduce_challenge(state: ChallengeState, action: ChallengeAction) -> ChallengeState {
    match action {
        ChallengeAction::DropCheckpoints => ChallengeState {
            checkpoints: None,
            ..state
        },

        ChallengeAction::DropResults => ChallengeState {
            results: None,
            ..state
        },

        ChallengeAction::FetchCheckpointsInit => ChallengeState {
            loading_checkpoints: true,
            ..state
        },

        ChallengeAction::FetchCheckpointsDone(Ok(loaded)) => {
            let mut checkpoints = loaded.checkpoints;
            checkpoints.collapse_all();
            ChallengeState {
                checkpoints: Some(checkpoints),
                loading_checkpoints: false,
                ..state
            }
        }

        ChallengeAction::FetchCheckpointsDone(Err(_)) => ChallengeState {
            loading_checkpoints: false,
            ..state
        },

        ChallengeAction::GetDetailsInit(challenge_id) => ChallengeState {
            loading_details_for_challenge_id: challenge_id,
            fetch_challenge_failure: None,
            ..state
        },

        ChallengeAction::GetDetailsDone(outcome) => on_details_done(state, outcome),

        ChallengeAction::GetSubmissionsInit(challenge_id) => ChallengeState {
            loading_submissions_for_challenge_id: challenge_id,
            my_submissions: MySubmissions::default(),
            ..state
        },

        ChallengeAction::GetSubmissionsDone(Ok(loaded)) => ChallengeState {
            my_submissions: MySubmissions {
                challenge_id: loaded.challenge_id,
                v2: Some(loaded.submissions),
            },
            loading_submissions_for_challenge_id: EntityId::default(),
            ..state
        },

        ChallengeAction::GetSubmissionsDone(Err(_)) => ChallengeState {
            my_submissions: MySubmissions::default(),
            loading_submissions_for_challenge_id: EntityId::default(),
            ..state
        },

        ChallengeAction::LoadResultsInit(challenge_id) => ChallengeState {
            loading_results_for_challenge_id: challenge_id,
            ..state
        },

        ChallengeAction::LoadResultsDone(Ok(loaded)) => ChallengeState {
            results: Some(loaded.results),
            results_loaded_for_challenge_id: loaded.challenge_id,
            loading_results_for_challenge_id: EntityId::default(),
            ..state
        },

        ChallengeAction::LoadResultsDone(Err(_)) => ChallengeState {
            loading_results_for_challenge_id: EntityId::default(),
            ..state
        },

        ChallengeAction::RegisterInit => ChallengeState {
            registering: true,
            ..state
        },

        ChallengeAction::RegisterDone(Ok(details)) => ChallengeState {
            registering: false,
            ..on_details_done(state, Ok(details))
        },

        ChallengeAction::RegisterDone(Err(_)) => ChallengeState {
            registering: false,
            ..state
        },

        ChallengeAction::ToggleCheckpointFeedback { id, open } => {
            let mut state = state;
            if let Some(item) = state.checkpoints.as_mut().and_then(|c| {
                c.checkpoint_results
                    .iter_mut()
                    .find(|item| item.entity_id().as_ref() == Some(&id))
            }) {
                item.expanded = open;
            }
            state
        }

        ChallengeAction::UnregisterInit => ChallengeState {
            unregistering: true,
            ..state
        },

        ChallengeAction::UnregisterDone(Ok(details)) => ChallengeState {
            unregistering: false,
            ..on_details_done(state, Ok(details))
        },

        ChallengeAction::UnregisterDone(Err(_)) => ChallengeState {
            unregistering: false,
            ..state
        },

        ChallengeAction::UpdateChallengeInit(uuid) => ChallengeState {
            updating_challenge_uuid: uuid,
            ..state
        },

        ChallengeAction::UpdateChallengeDone(outcome) => on_update_done(state, outcome),
    }
}

fn on_details_done(
    state: ChallengeState,
    outcome: Result<ChallengeDetails, ActionError>,
) -> ChallengeState {
    match outcome {
        Ok(details) => ChallengeState {
            details: Some(details),
            loading_details_for_challenge_id: EntityId::default(),
            fetch_challenge_failure: None,
            ..state
        },
        Err(error) => ChallengeState {
            loading_details_for_challenge_id: EntityId::default(),
            fetch_challenge_failure: Some(error.message),
            ..state
        },
    }
}

fn on_update_done(
    state: ChallengeState,
    outcome: Result<ChallengeUpdated, ActionError>,
) -> ChallengeState {
    let uuid = match &outcome {
        Ok(updated) => &updated.uuid,
        Err(error) => &error.id,
    };
    // Completion of an update the store no longer tracks.
    if state.updating_challenge_uuid.is_empty() || *uuid != state.updating_challenge_uuid {
        return state;
    }

    match outcome {
        Ok(updated) => {
            let mut details = state.details.unwrap_or_default();
            details.merge(&updated.res);
            ChallengeState {
                details: Some(details),
                updating_challenge_uuid: String::new(),
                ..state
            }
        }
        Err(_) => ChallengeState {
            updating_challenge_uuid: String::new(),
            ..state
        },
    }
}

fn reduce_smp(state: ChallengeState, action: SmpAction) -> ChallengeState {
    match action {
        SmpAction::DeleteSubmissionInit(_) => {
            let mut state = state;
            state.my_submissions_management.deleting_submission = true;
            state
        }

        SmpAction::DeleteSubmissionDone(Ok(submission_id)) => {
            let mut state = state;
            if let Some(submissions) = state.my_submissions.v2.as_mut() {
                submissions.retain(|s| s.entity_id().as_ref() != Some(&submission_id));
            }
            state.my_submissions_management.deleting_submission = false;
            state
        }

        SmpAction::DeleteSubmissionDone(Err(_)) => {
            let mut state = state;
            state.my_submissions_management.deleting_submission = false;
            state
        }
    }
}
