//! Strategy selection and environment names used by the CLI.

use crate::auth::{AuthStrategy, KeyCredential, TokenCredential};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

pub const ENV_USER_ID: &str = "SL_USER_ID";
pub const ENV_AUTH_TOKEN: &str = "SL_AUTH_TOKEN";
pub const ENV_USERNAME: &str = "SL_USERNAME";
pub const ENV_API_KEY: &str = "SL_API_KEY";

/// Request options used when the caller supplies none.
pub const DEFAULT_OPTIONS: &str = r#"{"headers":{}}"#;

/// Which credential mechanism a deployment uses.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AuthConfig {
    /// Portal login token obtained out-of-band
    Token { user_id: i64, auth_token: String },
    /// Username and static API key
    Key { username: String, api_key: String },
}

impl AuthConfig {
    /// Parse a JSON config document.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading auth config from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Build the strategy this config selects.
    pub fn into_strategy(self) -> Box<dyn AuthStrategy> {
        match self {
            AuthConfig::Token {
                user_id,
                auth_token,
            } => Box::new(TokenCredential::new(user_id, auth_token)),
            AuthConfig::Key { username, api_key } => {
                Box::new(KeyCredential::new(username, api_key))
            }
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthConfig::Token { user_id, .. } => f
                .debug_struct("Token")
                .field("user_id", user_id)
                .field("auth_token", &"***")
                .finish(),
            AuthConfig::Key { username, .. } => f
                .debug_struct("Key")
                .field("username", username)
                .field("api_key", &"***")
                .finish(),
        }
    }
}
