//! The challenge entity family.
//!
//! Actions, state and reducer for challenge details, the user's
//! submissions, registration, checkpoints, results and updates.

mod action;
pub mod actions;
mod error;
mod factory;
mod model;
mod reducer;
mod state;

pub use action::ChallengeAction;
pub use error::ActionError;
pub use factory::{factory, ChallengeSnapshot, HydratedReducer, HydrationOptions};
pub use model::{
    ChallengeDetails, ChallengeUpdated, CheckpointResult, Checkpoints, CheckpointsLoaded,
    EntityId, ResultsLoaded, Submission, SubmissionsLoaded,
};
pub use reducer::ChallengeReducer;
pub use state::{ChallengeState, MySubmissions, SubmissionsManagement};
