//! Action creators for submission management.

use std::sync::Arc;

use super::action::SmpAction;
use crate::action::AppAction;
use crate::challenge::{ActionError, EntityId};
use crate::config::AuthTokens;
use crate::dispatch::Dispatchable;
use crate::services::ChallengeApi;

/// Signals the start of a submission deletion.
pub fn delete_submission_init(submission_id: impl Into<EntityId>) -> AppAction {
    SmpAction::DeleteSubmissionInit(submission_id.into()).into()
}

/// Deletes one of the user's submissions; resolves to its ID.
pub fn delete_submission_done(
    api: Arc<dyn ChallengeApi>,
    auth: AuthTokens,
    submission_id: impl Into<EntityId>,
) -> Dispatchable<AppAction> {
    let submission_id = submission_id.into();
    Dispatchable::deferred(
        async move {
            api.delete_submission(&submission_id, &auth)
                .await
                .map(|()| submission_id.clone())
                .map_err(|e| ActionError::from_service(submission_id.as_str(), &e))
        },
        |outcome| AppAction::Smp(SmpAction::DeleteSubmissionDone(outcome)),
    )
}
