//! Authentication header building for API requests.

use super::credentials::SecureString;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the `Authorization: Bearer` header for a token.
pub fn bearer_header(token: &SecureString) -> AuthHeader {
    (
        "Authorization".to_string(),
        format!("Bearer {}", token.expose()),
    )
}
