//! Authentication strategies for remote API requests.
//!
//! A strategy injects a credential payload into `headers.authenticate` of
//! the per-request options. Two mechanisms are supported: portal login
//! tokens (user id + session token) and username/API key pairs.

pub mod credentials;
pub mod options;
pub mod strategy;

pub use credentials::{
    ApiKeyPayload, Authenticate, KeyCredential, PORTAL_LOGIN_TOKEN, PortalLoginToken,
    TokenCredential,
};
pub use options::RequestOptions;
pub use strategy::AuthStrategy;
