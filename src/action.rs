//! The closed set of actions the challenge store understands.

use crate::challenge::ChallengeAction;
use crate::smp::SmpAction;
use crate::store::Action;

/// Every action the challenge reducer folds, grouped by namespace.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Challenge(ChallengeAction),
    Smp(SmpAction),
}

impl Action for AppAction {
    fn kind(&self) -> &'static str {
        match self {
            AppAction::Challenge(action) => action.kind(),
            AppAction::Smp(action) => action.kind(),
        }
    }
}

impl From<ChallengeAction> for AppAction {
    fn from(action: ChallengeAction) -> Self {
        AppAction::Challenge(action)
    }
}

impl From<SmpAction> for AppAction {
    fn from(action: SmpAction) -> Self {
        AppAction::Smp(action)
    }
}
