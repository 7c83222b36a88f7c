//! Authentication strategy trait.

use super::credentials::Authenticate;
use super::options::RequestOptions;
use crate::error::{AuthError, Result};
use std::fmt::Debug;
use tracing::debug;

/// Authentication strategy interface.
///
/// Implementors provide the `authenticate` payload; `apply` injects it into
/// `headers.authenticate` of the request options. A strategy that does not
/// override [`AuthStrategy::authenticate`] is the abstract form and fails
/// with [`AuthError::NotImplemented`].
pub trait AuthStrategy: Send + Sync + Debug {
    /// Returns the strategy name for logging/debugging.
    fn name(&self) -> &'static str;

    /// Builds the credential payload for `headers.authenticate`.
    fn authenticate(&self) -> Result<Authenticate> {
        Err(AuthError::NotImplemented(self.name()))
    }

    /// Returns an HTTP `Authorization` header value, for transports that
    /// authenticate at the HTTP layer instead of inside the request headers
    /// mapping.
    fn http_authorization(&self) -> Option<String> {
        None
    }

    /// Populates `headers.authenticate` and hands the same options back.
    ///
    /// # Errors
    /// Returns [`AuthError::NotImplemented`] for the abstract form and
    /// [`AuthError::MissingHeaders`] if `options` has no `headers` mapping.
    fn apply(&self, mut options: RequestOptions) -> Result<RequestOptions> {
        self.apply_in_place(&mut options)?;
        Ok(options)
    }

    /// Same as [`AuthStrategy::apply`] on borrowed options.
    fn apply_in_place(&self, options: &mut RequestOptions) -> Result<()> {
        let payload = serde_json::to_value(self.authenticate()?)?;
        options.set_authenticate(payload)?;
        debug!("Applied {} authentication to request options", self.name());
        Ok(())
    }
}
