//! sl-auth - pluggable authentication strategies for a remote API client.
//!
//! ```
//! use sl_auth::{AuthStrategy, RequestOptions, TokenCredential};
//!
//! let strategy = TokenCredential::new(12345, "abcDEF");
//! let options = strategy.apply(RequestOptions::new()).unwrap();
//! assert_eq!(options.authenticate().unwrap()["complexType"], "PortalLoginToken");
//! ```

pub mod auth;
pub mod config;
pub mod error;

pub use auth::{AuthStrategy, Authenticate, KeyCredential, RequestOptions, TokenCredential};
pub use config::AuthConfig;
pub use error::{AuthError, Result};
