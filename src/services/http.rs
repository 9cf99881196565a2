use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::ChallengeApi;
use super::error::ServiceError;
use crate::challenge::{ChallengeDetails, Checkpoints, EntityId, Submission};
use crate::config::{bearer_header, AuthTokens, Config, TokenKind};

/// reqwest-backed implementation of [`ChallengeApi`].
///
/// v2 endpoints are authenticated with the v2 token, v3 endpoints with
/// the v3 token. A missing token sends the request anonymously and
/// leaves the verdict to the server.
pub struct HttpChallengeApi {
    client: Client,
    v2_base_url: Url,
    v3_base_url: Url,
    timeout: Duration,
}

impl HttpChallengeApi {
    pub fn new(config: &Config) -> Result<Self, ServiceError> {
        let timeout = Duration::from_secs(u64::from(config.defaults.timeout_seconds));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(
                config.defaults.connect_timeout_seconds,
            )))
            .timeout(timeout)
            .build()
            .map_err(ServiceError::Client)?;

        Ok(Self {
            client,
            v2_base_url: base_url(&config.api.v2_base_url)?,
            v3_base_url: base_url(&config.api.v3_base_url)?,
            timeout,
        })
    }

    /// Base URL of `api` extended by `segments`, each percent-encoded as
    /// a single path segment. Base URLs are checked by [`base_url`].
    fn url(&self, api: TokenKind, segments: &[&str]) -> Url {
        let mut url = match api {
            TokenKind::V2 => self.v2_base_url.clone(),
            TokenKind::V3 => self.v3_base_url.clone(),
        };
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        api: TokenKind,
        segments: &[&str],
        body: Option<&Value>,
        auth: &AuthTokens,
    ) -> Result<(String, Response), ServiceError> {
        let url = self.url(api, segments);
        tracing::debug!(method = %method, api = %api, url = %url, "sending request");

        let mut builder = self.client.request(method, url.clone());
        let url = url.to_string();
        if let Some(token) = auth.token(api) {
            let (name, value) = bearer_header(token);
            builder = builder.header(name, value);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ServiceError::Timeout {
                    duration: self.timeout.as_secs(),
                }
            } else {
                ServiceError::Connection {
                    url: url.clone(),
                    source: e,
                }
            }
        })?;

        Ok((url, response))
    }

    /// Send and require a 2xx answer.
    async fn send_ok(
        &self,
        method: Method,
        api: TokenKind,
        segments: &[&str],
        body: Option<&Value>,
        auth: &AuthTokens,
    ) -> Result<(String, Response), ServiceError> {
        let (url, response) = self.send(method, api, segments, body, auth).await?;
        if !response.status().is_success() {
            return Err(ServiceError::Status {
                status: response.status().as_u16(),
                url,
            });
        }
        Ok((url, response))
    }

    async fn get_json(
        &self,
        api: TokenKind,
        segments: &[&str],
        auth: &AuthTokens,
    ) -> Result<(String, Value), ServiceError> {
        let (url, response) = self.send_ok(Method::GET, api, segments, None, auth).await?;
        let body = read_json(&url, response).await?;
        Ok((url, body))
    }
}

fn base_url(raw: &str) -> Result<Url, ServiceError> {
    let url = Url::parse(raw).map_err(|e| ServiceError::InvalidBaseUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ServiceError::InvalidBaseUrl {
            url: raw.to_string(),
            message: "cannot be a base".to_string(),
        });
    }
    Ok(url)
}

async fn read_json(url: &str, response: Response) -> Result<Value, ServiceError> {
    response.json::<Value>().await.map_err(|e| ServiceError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Pull `field` out of a v2 response body and decode it.
fn field<T: DeserializeOwned>(url: &str, mut body: Value, name: &str) -> Result<T, ServiceError> {
    let value = body
        .get_mut(name)
        .map(Value::take)
        .ok_or_else(|| ServiceError::Decode {
            url: url.to_string(),
            message: format!("missing '{}' field", name),
        })?;
    decode(url, value)
}

fn decode<T: DeserializeOwned>(url: &str, value: Value) -> Result<T, ServiceError> {
    serde_json::from_value(value).map_err(|e| ServiceError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// v3 responses wrap their data as `{"result": {"content": ...}}`.
fn v3_content(mut body: Value) -> Value {
    match body.pointer_mut("/result/content") {
        Some(content) => content.take(),
        None => body,
    }
}

#[async_trait]
impl ChallengeApi for HttpChallengeApi {
    async fn challenge_details(
        &self,
        challenge_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<ChallengeDetails, ServiceError> {
        let (url, body) = self
            .get_json(TokenKind::V3, &["challenges", challenge_id.as_str()], auth)
            .await?;
        decode(&url, v3_content(body))
    }

    async fn register(
        &self,
        challenge_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<(), ServiceError> {
        let segments = ["challenges", challenge_id.as_str(), "register"];
        self.send_ok(Method::POST, TokenKind::V3, &segments, None, auth)
            .await?;
        Ok(())
    }

    async fn unregister(
        &self,
        challenge_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<(), ServiceError> {
        let segments = ["challenges", challenge_id.as_str(), "unregister"];
        self.send_ok(Method::POST, TokenKind::V3, &segments, None, auth)
            .await?;
        Ok(())
    }

    async fn update_challenge(
        &self,
        challenge: &Value,
        auth: &AuthTokens,
    ) -> Result<Value, ServiceError> {
        let id = challenge
            .get("id")
            .and_then(EntityId::from_value)
            .ok_or_else(|| ServiceError::InvalidRequest("challenge has no id".to_string()))?;
        let body = serde_json::json!({ "param": challenge });
        let (url, response) = self
            .send_ok(
                Method::PUT,
                TokenKind::V3,
                &["challenges", id.as_str()],
                Some(&body),
                auth,
            )
            .await?;
        Ok(v3_content(read_json(&url, response).await?))
    }

    async fn my_submissions(
        &self,
        challenge_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<Vec<Submission>, ServiceError> {
        let segments = ["challenges", "submissions", challenge_id.as_str(), "mySubmissions"];
        let (url, body) = self.get_json(TokenKind::V2, &segments, auth).await?;
        field(&url, body, "submissions")
    }

    async fn checkpoints(
        &self,
        challenge_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<Checkpoints, ServiceError> {
        let segments = ["design", "challenges", "checkpoint", challenge_id.as_str()];
        let (url, response) = self
            .send(Method::GET, TokenKind::V2, &segments, None, auth)
            .await?;
        if response.status().as_u16() != 200 {
            return Err(ServiceError::Status {
                status: response.status().as_u16(),
                url,
            });
        }
        let body = read_json(&url, response).await?;
        decode(&url, body)
    }

    async fn results(
        &self,
        challenge_id: &EntityId,
        challenge_type: &str,
        auth: &AuthTokens,
    ) -> Result<Vec<Value>, ServiceError> {
        let segments = [challenge_type, "challenges", "result", challenge_id.as_str()];
        let (url, body) = self.get_json(TokenKind::V2, &segments, auth).await?;
        field(&url, body, "results")
    }

    async fn delete_submission(
        &self,
        submission_id: &EntityId,
        auth: &AuthTokens,
    ) -> Result<(), ServiceError> {
        self.send_ok(
            Method::DELETE,
            TokenKind::V3,
            &["submissions", submission_id.as_str()],
            None,
            auth,
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn v3_content_unwraps_envelope() {
        let body = json!({"result": {"success": true, "content": {"id": 1}}});
        assert_eq!(v3_content(body), json!({"id": 1}));
    }

    #[test]
    fn v3_content_passes_through_bare_bodies() {
        assert_eq!(v3_content(json!({"id": 2})), json!({"id": 2}));
    }

    #[test]
    fn field_reports_missing_key() {
        let result: Result<Vec<Value>, _> = field("http://x/y", json!({"other": []}), "results");
        match result {
            Err(ServiceError::Decode { message, .. }) => assert!(message.contains("results")),
            other => panic!("expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn base_urls_lose_trailing_slash() {
        let mut config = Config::default();
        config.api.v2_base_url = "http://127.0.0.1:9/v2/".to_string();
        let api = HttpChallengeApi::new(&config).expect("client builds");
        let url = api.url(TokenKind::V2, &["design", "challenges", "checkpoint", "1"]);
        assert_eq!(url.as_str(), "http://127.0.0.1:9/v2/design/challenges/checkpoint/1");
    }

    #[test]
    fn segments_cannot_escape_their_position() {
        let api = HttpChallengeApi::new(&Config::default()).expect("client builds");
        let url = api.url(TokenKind::V3, &["challenges", "1/../../admin?x=1#y"]);
        assert_eq!(
            url.as_str(),
            "https://api.topcoder.com/v3/challenges/1%2F..%2F..%2Fadmin%3Fx=1%23y"
        );
        assert_eq!(url.query(), None);
    }

    #[test]
    fn rejects_non_base_urls() {
        let mut config = Config::default();
        config.api.v3_base_url = "mailto:someone@example.com".to_string();
        match HttpChallengeApi::new(&config) {
            Err(err) => assert_eq!(err.error_type(), "invalid_base_url"),
            Ok(_) => panic!("mailto: is not a usable base URL"),
        }
    }
}
