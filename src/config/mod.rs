mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{bearer_header, AuthHeader};
pub use credentials::{AuthTokens, SecureString, TokenKind};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, Defaults};
