//! Clap config
use clap::{Parser, Subcommand};
use sl_auth::AuthConfig;
use sl_auth::config::{DEFAULT_OPTIONS, ENV_API_KEY, ENV_AUTH_TOKEN, ENV_USER_ID, ENV_USERNAME};
use std::fmt;
use std::path::PathBuf;

/// sl-auth - decorate request options with API credentials.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Request options as JSON; must contain a "headers" mapping
    #[arg(long, default_value = DEFAULT_OPTIONS)]
    pub options: String,

    /// JSON config file selecting the credential mode
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the HTTP Authorization header value instead of the options
    #[arg(long)]
    pub authorization: bool,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Subcommand)]
pub enum Mode {
    /// Portal login token authentication
    Token {
        #[arg(long, env = ENV_USER_ID)]
        user_id: i64,

        #[arg(long, env = ENV_AUTH_TOKEN, hide_env_values = true)]
        auth_token: String,
    },
    /// Username and API key authentication
    Key {
        #[arg(long, env = ENV_USERNAME)]
        username: String,

        #[arg(long, env = ENV_API_KEY, hide_env_values = true)]
        api_key: String,
    },
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Token { user_id, .. } => f
                .debug_struct("Token")
                .field("user_id", user_id)
                .field("auth_token", &"***")
                .finish(),
            Mode::Key { username, .. } => f
                .debug_struct("Key")
                .field("username", username)
                .field("api_key", &"***")
                .finish(),
        }
    }
}

impl From<Mode> for AuthConfig {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Token {
                user_id,
                auth_token,
            } => AuthConfig::Token {
                user_id,
                auth_token,
            },
            Mode::Key { username, api_key } => AuthConfig::Key { username, api_key },
        }
    }
}
