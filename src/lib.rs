//! State container for challenge pages.
//!
//! Action creators wrap each remote operation in an INIT/DONE pair,
//! the [`dispatch::Dispatcher`] settles deferred DONE payloads, and
//! [`challenge::ChallengeReducer`] folds the resulting actions into a
//! serializable [`challenge::ChallengeState`].

pub mod action;
pub mod challenge;
pub mod config;
pub mod dispatch;
pub mod logging;
pub mod services;
pub mod smp;
pub mod store;

pub use action::AppAction;
