//! Reducer factory with server-side hydration.
//!
//! Server-rendered pages hand over the raw challenge record they were
//! rendered from. The factory resolves it into the same normalized
//! state a live `GET_DETAILS_DONE` (and, for the user's own page,
//! `GET_SUBMISSIONS_DONE`) would produce, before the reducer is used.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use super::action::ChallengeAction;
use super::actions::{fetch_details, fetch_submissions};
use super::model::EntityId;
use super::reducer::ChallengeReducer;
use super::state::ChallengeState;
use crate::action::AppAction;
use crate::config::AuthTokens;
use crate::services::ChallengeApi;
use crate::store::{Reducer, Store};

/// Initial props a server-rendered page passes to the factory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HydrationOptions {
    #[serde(default)]
    pub auth: Option<AuthTokens>,
    #[serde(default)]
    pub challenge: Option<ChallengeSnapshot>,
    /// Requested page; carried by pages that render no challenge.
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSnapshot {
    /// Raw, non-normalized record; `mySubmission: true` asks for the
    /// user's submissions as well.
    #[serde(default)]
    pub challenge_details: Option<Value>,
}

impl HydrationOptions {
    /// Auth and raw record, when both are present.
    fn server_rendered(self) -> Option<(AuthTokens, Value)> {
        let auth = self.auth?;
        let details = self.challenge?.challenge_details?;
        Some((auth, details))
    }
}

/// A reducer bound to its initial state.
#[derive(Debug, Clone)]
pub struct HydratedReducer {
    initial: ChallengeState,
}

impl HydratedReducer {
    pub fn initial_state(&self) -> ChallengeState {
        self.initial.clone()
    }

    /// Reduce `action`; a missing state starts from the initial one.
    pub fn reduce(&self, state: Option<ChallengeState>, action: AppAction) -> ChallengeState {
        let state = state.unwrap_or_else(|| self.initial_state());
        ChallengeReducer::reduce(state, action)
    }

    pub fn into_store(self) -> Store<ChallengeReducer> {
        Store::new(self.initial)
    }
}

/// Build the challenge reducer, hydrating it from `options` when they
/// describe a server-rendered challenge page.
///
/// Remote failures during hydration are folded into the state the same
/// way live DONE failures are.
pub async fn factory(
    options: Option<HydrationOptions>,
    api: Arc<dyn ChallengeApi>,
) -> HydratedReducer {
    let Some((auth, raw)) = options.and_then(HydrationOptions::server_rendered) else {
        tracing::info!("no server-rendered challenge; using default state");
        return HydratedReducer {
            initial: ChallengeState::default(),
        };
    };

    let Some(challenge_id) = raw.get("id").and_then(EntityId::from_value) else {
        tracing::warn!("server-rendered challenge has no id; using default state");
        return HydratedReducer {
            initial: ChallengeState::default(),
        };
    };

    tracing::info!(challenge_id = %challenge_id, "hydrating challenge state");

    let details = fetch_details(api.as_ref(), &challenge_id, &auth).await;
    let mut state = ChallengeReducer::reduce(
        ChallengeState::default(),
        ChallengeAction::GetDetailsDone(details).into(),
    );

    if raw.get("mySubmission").and_then(Value::as_bool) == Some(true) {
        let submissions = fetch_submissions(api.as_ref(), challenge_id, &auth).await;
        state = ChallengeReducer::reduce(
            state,
            ChallengeAction::GetSubmissionsDone(submissions).into(),
        );
    }

    HydratedReducer { initial: state }
}
