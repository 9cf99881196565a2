//! Remote API clients used by the action layer.
//!
//! Action creators only see the [`ChallengeApi`] trait; the production
//! implementation is [`HttpChallengeApi`], tests inject fakes.

mod api;
mod error;
mod http;

pub use api::ChallengeApi;
pub use error::ServiceError;
pub use http::HttpChallengeApi;
