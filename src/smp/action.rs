use crate::challenge::{ActionError, EntityId};

/// Actions of the `SMP/*` family.
#[derive(Debug, Clone, PartialEq)]
pub enum SmpAction {
    DeleteSubmissionInit(EntityId),
    /// Carries the ID of the deleted submission.
    DeleteSubmissionDone(Result<EntityId, ActionError>),
}

impl SmpAction {
    pub fn kind(&self) -> &'static str {
        match self {
            SmpAction::DeleteSubmissionInit(_) => "SMP/DELETE_SUBMISSION_INIT",
            SmpAction::DeleteSubmissionDone(_) => "SMP/DELETE_SUBMISSION_DONE",
        }
    }
}
