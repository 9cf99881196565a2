use super::error::ActionError;
use super::model::{
    ChallengeDetails, ChallengeUpdated, CheckpointsLoaded, EntityId, ResultsLoaded,
    SubmissionsLoaded,
};

/// Actions of the `CHALLENGE/*` family.
///
/// DONE variants carry the settled outcome of the remote call; the
/// dispatch adapter produces them from the deferred values returned
/// by the action creators.
#[derive(Debug, Clone, PartialEq)]
pub enum ChallengeAction {
    DropCheckpoints,
    DropResults,
    FetchCheckpointsInit,
    FetchCheckpointsDone(Result<CheckpointsLoaded, ActionError>),
    GetDetailsInit(EntityId),
    GetDetailsDone(Result<ChallengeDetails, ActionError>),
    GetSubmissionsInit(EntityId),
    GetSubmissionsDone(Result<SubmissionsLoaded, ActionError>),
    LoadResultsInit(EntityId),
    LoadResultsDone(Result<ResultsLoaded, ActionError>),
    RegisterInit,
    /// Carries the details re-fetched after registering.
    RegisterDone(Result<ChallengeDetails, ActionError>),
    ToggleCheckpointFeedback { id: EntityId, open: bool },
    UnregisterInit,
    UnregisterDone(Result<ChallengeDetails, ActionError>),
    /// Opaque operation uuid, not the challenge ID.
    UpdateChallengeInit(String),
    UpdateChallengeDone(Result<ChallengeUpdated, ActionError>),
}

impl ChallengeAction {
    pub fn kind(&self) -> &'static str {
        match self {
            ChallengeAction::DropCheckpoints => "CHALLENGE/DROP_CHECKPOINTS",
            ChallengeAction::DropResults => "CHALLENGE/DROP_RESULTS",
            ChallengeAction::FetchCheckpointsInit => "CHALLENGE/FETCH_CHECKPOINTS_INIT",
            ChallengeAction::FetchCheckpointsDone(_) => "CHALLENGE/FETCH_CHECKPOINTS_DONE",
            ChallengeAction::GetDetailsInit(_) => "CHALLENGE/GET_DETAILS_INIT",
            ChallengeAction::GetDetailsDone(_) => "CHALLENGE/GET_DETAILS_DONE",
            ChallengeAction::GetSubmissionsInit(_) => "CHALLENGE/GET_SUBMISSIONS_INIT",
            ChallengeAction::GetSubmissionsDone(_) => "CHALLENGE/GET_SUBMISSIONS_DONE",
            ChallengeAction::LoadResultsInit(_) => "CHALLENGE/LOAD_RESULTS_INIT",
            ChallengeAction::LoadResultsDone(_) => "CHALLENGE/LOAD_RESULTS_DONE",
            ChallengeAction::RegisterInit => "CHALLENGE/REGISTER_INIT",
            ChallengeAction::RegisterDone(_) => "CHALLENGE/REGISTER_DONE",
            ChallengeAction::ToggleCheckpointFeedback { .. } => {
                "CHALLENGE/TOGGLE_CHECKPOINT_FEEDBACK"
            }
            ChallengeAction::UnregisterInit => "CHALLENGE/UNREGISTER_INIT",
            ChallengeAction::UnregisterDone(_) => "CHALLENGE/UNREGISTER_DONE",
            ChallengeAction::UpdateChallengeInit(_) => "CHALLENGE/UPDATE_CHALLENGE_INIT",
            ChallengeAction::UpdateChallengeDone(_) => "CHALLENGE/UPDATE_CHALLENGE_DONE",
        }
    }

    /// Whether this is a DONE action carrying a failure.
    pub fn is_error(&self) -> bool {
        match self {
            ChallengeAction::FetchCheckpointsDone(r) => r.is_err(),
            ChallengeAction::GetDetailsDone(r)
            | ChallengeAction::RegisterDone(r)
            | ChallengeAction::UnregisterDone(r) => r.is_err(),
            ChallengeAction::GetSubmissionsDone(r) => r.is_err(),
            ChallengeAction::LoadResultsDone(r) => r.is_err(),
            ChallengeAction::UpdateChallengeDone(r) => r.is_err(),
            ChallengeAction::DropCheckpoints
            | ChallengeAction::DropResults
            | ChallengeAction::FetchCheckpointsInit
            | ChallengeAction::GetDetailsInit(_)
            | ChallengeAction::GetSubmissionsInit(_)
            | ChallengeAction::LoadResultsInit(_)
            | ChallengeAction::RegisterInit
            | ChallengeAction::ToggleCheckpointFeedback { .. }
            | ChallengeAction::UnregisterInit
            | ChallengeAction::UpdateChallengeInit(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_failed_done_actions_are_errors() {
        let failure = || ActionError::new("1", "404");
        assert!(ChallengeAction::GetDetailsDone(Err(failure())).is_error());
        assert!(ChallengeAction::UpdateChallengeDone(Err(failure())).is_error());
        assert!(!ChallengeAction::RegisterDone(Ok(ChallengeDetails::default())).is_error());
        assert!(!ChallengeAction::GetDetailsInit(EntityId::from(1)).is_error());
        assert!(!ChallengeAction::DropResults.is_error());
    }
}
