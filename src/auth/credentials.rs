//! Credential types and the payloads they inject into request headers.

use super::strategy::AuthStrategy;
use crate::error::Result;
use base64::Engine;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// `complexType` tag of the portal login token payload.
pub const PORTAL_LOGIN_TOKEN: &str = "PortalLoginToken";

/// Value of `headers.authenticate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Authenticate {
    /// Session token issued by a prior portal login.
    Token(PortalLoginToken),
    /// Username paired with a static API key.
    Key(ApiKeyPayload),
}

/// Wire shape: `{complexType, userId, authToken}`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalLoginToken {
    #[serde(deserialize_with = "portal_login_token_tag")]
    complex_type: String,
    pub user_id: i64,
    pub auth_token: String,
}

impl PortalLoginToken {
    pub fn new(user_id: i64, auth_token: impl Into<String>) -> Self {
        Self {
            complex_type: PORTAL_LOGIN_TOKEN.to_string(),
            user_id,
            auth_token: auth_token.into(),
        }
    }

    pub fn complex_type(&self) -> &str {
        &self.complex_type
    }
}

/// Only `"PortalLoginToken"` is accepted as `complexType`.
fn portal_login_token_tag<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = String::deserialize(deserializer)?;
    if tag == PORTAL_LOGIN_TOKEN {
        Ok(tag)
    } else {
        Err(de::Error::invalid_value(
            Unexpected::Str(&tag),
            &PORTAL_LOGIN_TOKEN,
        ))
    }
}

/// Wire shape: `{username, apiKey}`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyPayload {
    pub username: String,
    pub api_key: String,
}

impl fmt::Debug for PortalLoginToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortalLoginToken")
            .field("complex_type", &self.complex_type)
            .field("user_id", &self.user_id)
            .field("auth_token", &"***")
            .finish()
    }
}

impl fmt::Debug for ApiKeyPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyPayload")
            .field("username", &self.username)
            .field("api_key", &"***")
            .finish()
    }
}

/// Token-based credentials: a user id and a previously issued portal login
/// token. Fields are stored verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenCredential {
    user_id: i64,
    auth_token: String,
}

impl TokenCredential {
    pub fn new(user_id: i64, auth_token: impl Into<String>) -> Self {
        Self {
            user_id,
            auth_token: auth_token.into(),
        }
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }
}

impl AuthStrategy for TokenCredential {
    fn name(&self) -> &'static str {
        "token"
    }

    fn authenticate(&self) -> Result<Authenticate> {
        Ok(Authenticate::Token(PortalLoginToken::new(
            self.user_id,
            self.auth_token.clone(),
        )))
    }
}

impl fmt::Debug for TokenCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCredential")
            .field("user_id", &self.user_id)
            .field("auth_token", &"***")
            .finish()
    }
}

impl fmt::Display for TokenCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<TokenCredential: {}>", self.user_id)
    }
}

/// Key-based credentials: a username and a static API key.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyCredential {
    username: String,
    api_key: String,
}

impl KeyCredential {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl AuthStrategy for KeyCredential {
    fn name(&self) -> &'static str {
        "api_key"
    }

    fn authenticate(&self) -> Result<Authenticate> {
        Ok(Authenticate::Key(ApiKeyPayload {
            username: self.username.clone(),
            api_key: self.api_key.clone(),
        }))
    }

    /// HTTP Basic Authentication (username:api_key encoded in base64).
    fn http_authorization(&self) -> Option<String> {
        let combined = format!("{}:{}", self.username, self.api_key);
        let encoded = base64::engine::general_purpose::STANDARD.encode(&combined);
        Some(format!("Basic {}", encoded))
    }
}

impl fmt::Debug for KeyCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyCredential")
            .field("username", &self.username)
            .field("api_key", &"***")
            .finish()
    }
}

impl fmt::Display for KeyCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<KeyCredential: {}>", self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::RequestOptions;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_token_apply() {
        let creds = TokenCredential::new(12345, "abcDEF");
        let options = creds.apply(RequestOptions::new()).unwrap();
        assert_eq!(
            options.into_value(),
            json!({
                "headers": {
                    "authenticate": {
                        "complexType": "PortalLoginToken",
                        "userId": 12345,
                        "authToken": "abcDEF"
                    }
                }
            })
        );
    }

    #[test]
    fn test_key_apply() {
        let creds = KeyCredential::new("alice", "s3cr3t");
        let options = creds.apply(RequestOptions::new()).unwrap();
        assert_eq!(
            options.into_value(),
            json!({"headers": {"authenticate": {"username": "alice", "apiKey": "s3cr3t"}}})
        );
    }

    #[test]
    fn test_unrelated_keys_survive() {
        let options = RequestOptions::try_from(json!({"headers": {}, "timeout": 30})).unwrap();
        let options = KeyCredential::new("alice", "s3cr3t").apply(options).unwrap();
        assert_eq!(
            options.into_value(),
            json!({
                "headers": {"authenticate": {"username": "alice", "apiKey": "s3cr3t"}},
                "timeout": 30
            })
        );
    }

    #[test]
    fn test_token_touches_only_authenticate() {
        let options = RequestOptions::try_from(json!({
            "headers": {"X-Request-Id": "req-1"},
            "timeout": 30
        }))
        .unwrap();
        let options = TokenCredential::new(12345, "abcDEF").apply(options).unwrap();
        assert_eq!(
            options.into_value(),
            json!({
                "headers": {
                    "X-Request-Id": "req-1",
                    "authenticate": {
                        "complexType": "PortalLoginToken",
                        "userId": 12345,
                        "authToken": "abcDEF"
                    }
                },
                "timeout": 30
            })
        );
    }

    #[test]
    fn test_apply_is_idempotent() {
        let creds = TokenCredential::new(7, "tok");
        let once = creds.apply(RequestOptions::new()).unwrap();
        let twice = creds.apply(once.clone()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_overwrites_previous_strategy() {
        let options = TokenCredential::new(1, "tok")
            .apply(RequestOptions::new())
            .unwrap();
        let options = KeyCredential::new("bob", "key").apply(options).unwrap();
        assert_eq!(
            options.authenticate(),
            Some(&json!({"username": "bob", "apiKey": "key"}))
        );
    }

    #[test]
    fn test_missing_headers() {
        let options = RequestOptions::try_from(json!({"timeout": 30})).unwrap();
        let result = TokenCredential::new(1, "tok").apply(options);
        assert!(matches!(
            result,
            Err(crate::error::AuthError::MissingHeaders)
        ));
    }

    #[test]
    fn test_empty_fields_accepted() {
        let options = KeyCredential::new("", "")
            .apply(RequestOptions::new())
            .unwrap();
        assert_eq!(
            options.authenticate(),
            Some(&json!({"username": "", "apiKey": ""}))
        );
    }

    #[test]
    fn test_payload_deserializes_to_variant() {
        let token: Authenticate = serde_json::from_value(json!({
            "complexType": "PortalLoginToken",
            "userId": 9,
            "authToken": "t"
        }))
        .unwrap();
        assert!(matches!(token, Authenticate::Token(ref t) if t.user_id == 9));

        let key: Authenticate =
            serde_json::from_value(json!({"username": "u", "apiKey": "k"})).unwrap();
        assert!(matches!(key, Authenticate::Key(ref k) if k.username == "u"));
    }

    #[test]
    fn test_payload_rejects_foreign_complex_type() {
        let result = serde_json::from_value::<Authenticate>(json!({
            "complexType": "SomethingElse",
            "userId": 9,
            "authToken": "t"
        }));
        assert!(result.is_err());

        let token = PortalLoginToken::new(9, "t");
        assert_eq!(token.complex_type(), PORTAL_LOGIN_TOKEN);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let token = TokenCredential::new(12345, "abcDEF");
        let key = KeyCredential::new("alice", "s3cr3t");

        let token_debug = format!("{:?}", token);
        assert!(token_debug.contains("12345"));
        assert!(!token_debug.contains("abcDEF"));

        let key_debug = format!("{:?}", key);
        assert!(key_debug.contains("alice"));
        assert!(!key_debug.contains("s3cr3t"));

        let payload_debug = format!("{:?}", token.authenticate().unwrap());
        assert!(!payload_debug.contains("abcDEF"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TokenCredential::new(12345, "abcDEF").to_string(),
            "<TokenCredential: 12345>"
        );
        assert_eq!(
            KeyCredential::new("alice", "s3cr3t").to_string(),
            "<KeyCredential: alice>"
        );
    }

    #[test]
    fn test_key_http_authorization() {
        let creds = KeyCredential::new("user", "pass");
        assert_eq!(
            creds.http_authorization().as_deref(),
            Some("Basic dXNlcjpwYXNz")
        );
    }

    #[test]
    fn test_token_has_no_http_authorization() {
        assert!(TokenCredential::new(1, "tok").http_authorization().is_none());
    }

    #[test]
    fn test_shared_across_threads() {
        let strategy: Arc<dyn AuthStrategy> = Arc::new(TokenCredential::new(42, "shared"));

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let strategy = Arc::clone(&strategy);
                    s.spawn(move || {
                        let mut options = RequestOptions::new();
                        options.insert("request", i);
                        strategy.apply(options).unwrap()
                    })
                })
                .collect();

            for (i, handle) in handles.into_iter().enumerate() {
                let options = handle.join().unwrap();
                assert_eq!(options.get("request"), Some(&json!(i)));
                assert_eq!(options.authenticate().unwrap()["userId"], json!(42));
            }
        });
    }
}
