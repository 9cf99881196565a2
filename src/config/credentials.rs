//! Auth token handling.
//!
//! Tokens are supplied by the caller (CLI flags, environment, or a
//! hydration snapshot) and are never written to logs.

use serde::Deserialize;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Which API generation a token authenticates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    V2,
    V3,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::V2 => write!(f, "v2"),
            TokenKind::V3 => write!(f, "v3"),
        }
    }
}

/// The `auth` segment handed to action creators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    #[serde(default)]
    pub token_v2: Option<SecureString>,
    #[serde(default)]
    pub token_v3: Option<SecureString>,
}

impl AuthTokens {
    pub fn new(token_v2: Option<String>, token_v3: Option<String>) -> Self {
        Self {
            token_v2: token_v2.map(SecureString::new),
            token_v3: token_v3.map(SecureString::new),
        }
    }

    /// Token for `kind`, ignoring empty values.
    pub fn token(&self, kind: TokenKind) -> Option<&SecureString> {
        let token = match kind {
            TokenKind::V2 => self.token_v2.as_ref(),
            TokenKind::V3 => self.token_v3.as_ref(),
        };
        token.filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_string_redacts_debug_and_display() {
        let secret = SecureString::new("super-secret");
        assert!(!format!("{:?}", secret).contains("super-secret"));
        assert!(!format!("{}", secret).contains("super-secret"));
        assert_eq!(secret.expose(), "super-secret");
    }

    #[test]
    fn token_kind_displays_api_generation() {
        assert_eq!(TokenKind::V2.to_string(), "v2");
        assert_eq!(TokenKind::V3.to_string(), "v3");
    }

    #[test]
    fn empty_tokens_are_treated_as_missing() {
        let auth = AuthTokens::new(Some(String::new()), Some("v3".to_string()));
        assert!(auth.token(TokenKind::V2).is_none());
        assert_eq!(auth.token(TokenKind::V3).map(|t| t.expose()), Some("v3"));
    }

    #[test]
    fn deserializes_camel_case_auth_segment() {
        let auth: AuthTokens =
            serde_json::from_str(r#"{"tokenV2":"a","tokenV3":"b"}"#).expect("valid auth json");
        assert_eq!(auth.token(TokenKind::V2).map(|t| t.expose()), Some("a"));
        assert_eq!(auth.token(TokenKind::V3).map(|t| t.expose()), Some("b"));
    }
}
